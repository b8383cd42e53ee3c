use super::*;

#[test]
fn empty_file_gives_defaults() {
    let settings = parse_settings("").unwrap();
    assert_eq!(settings, Settings::default());
    assert!(!settings.keep_work_dir);
}

#[test]
fn parses_every_key() {
    let settings = parse_settings(
        r#"
output_dir = "/srv/pchtxts"
work_dir = "/tmp/work"
keep_work_dir = true

[sources.stevensnd]
url = "https://mirror.example/port-mods.zip"
"#,
    )
    .unwrap();
    assert_eq!(settings.output_dir, Some(PathBuf::from("/srv/pchtxts")));
    assert_eq!(settings.work_dir, Some(PathBuf::from("/tmp/work")));
    assert!(settings.keep_work_dir);
    assert_eq!(
        settings.source_url(Source::StevensNd),
        "https://mirror.example/port-mods.zip"
    );
    assert_eq!(
        settings.source_url(Source::KeatonTheBot),
        Source::KeatonTheBot.archive_url()
    );
}

#[test]
fn wrong_type_is_an_error() {
    let err = parse_settings("keep_work_dir = \"yes\"").unwrap_err();
    assert!(matches!(err, SortError::Toml(_)));
}

#[test]
fn output_dir_priority_chain() {
    let mut settings = Settings::default();
    assert_eq!(
        settings.output_dir_for(Source::StevensNd, None),
        PathBuf::from("pchtxts").join("StevensND")
    );

    settings.output_dir = Some(PathBuf::from("/from/settings"));
    assert_eq!(
        settings.output_dir_for(Source::Fl4sh9174, None),
        PathBuf::from("/from/settings/Fl4sh9174")
    );
    assert_eq!(
        settings.output_dir_for(Source::Fl4sh9174, Some(Path::new("/from/cli"))),
        PathBuf::from("/from/cli/Fl4sh9174")
    );
}

#[test]
fn work_dir_priority_chain() {
    let mut settings = Settings::default();
    assert!(settings.work_dir(None).ends_with("pchtxt-sort"));

    settings.work_dir = Some(PathBuf::from("/from/settings"));
    assert_eq!(settings.work_dir(None), PathBuf::from("/from/settings"));
    assert_eq!(
        settings.work_dir(Some(Path::new("/from/cli"))),
        PathBuf::from("/from/cli")
    );
}

#[test]
fn keep_work_dir_flag_or_setting() {
    let mut settings = Settings::default();
    assert!(!settings.keep_work_dir(false));
    assert!(settings.keep_work_dir(true));
    settings.keep_work_dir = true;
    assert!(settings.keep_work_dir(false));
}

#[test]
fn blank_url_override_is_ignored() {
    let settings = parse_settings("[sources.theboy181]\nurl = \"  \"\n").unwrap();
    assert_eq!(
        settings.source_url(Source::Theboy181),
        Source::Theboy181.archive_url()
    );
}

#[test]
fn save_then_load_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.toml");

    let mut settings = Settings {
        keep_work_dir: true,
        output_dir: Some(PathBuf::from("/out")),
        ..Default::default()
    };
    settings.sources.insert(
        "cucholix".to_string(),
        SourceSettings {
            url: Some("https://mirror.example/cucholix.zip".to_string()),
        },
    );
    save_settings_to(&path, &settings).unwrap();

    assert_eq!(load_settings_from(&path), settings);
    assert!(!path.with_extension("toml.tmp").exists());
}

#[test]
fn missing_or_broken_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    assert_eq!(load_settings_from(&path), Settings::default());

    std::fs::write(&path, "output_dir = [").unwrap();
    assert_eq!(load_settings_from(&path), Settings::default());
}
