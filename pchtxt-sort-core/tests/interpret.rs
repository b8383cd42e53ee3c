use std::path::Path;

use pchtxt_sort_core::{PathSegments, Source, clean_title, derive_names, sanitize, title_case};

#[test]
fn shallow_paths_never_produce_empty_names() {
    for &source in Source::all() {
        for path in ["", "Game", "Game [0100000000010000]"] {
            let pair = source
                .interpreter()
                .derive_from_segments(&PathSegments::from_relative(path));
            assert!(!pair.game.is_empty(), "{source}: empty game for {path:?}");
            assert!(!pair.mod_name.is_empty(), "{source}: empty mod for {path:?}");
        }
    }
}

#[test]
fn shallow_paths_use_the_source_fallback() {
    let sources = [
        Source::Fl4sh9174,
        Source::KeatonTheBot,
        Source::StevensNd,
        Source::Theboy181,
    ];
    for source in sources {
        let pair = source
            .interpreter()
            .derive_from_segments(&PathSegments::from_relative("Game"));
        assert_eq!(pair.mod_name, source.default_mod_name());
    }
}

#[test]
fn content_directly_under_root_is_unknown_game() {
    let root = Path::new("/archive");
    let pair = derive_names(Source::KeatonTheBot, root, root);
    assert_eq!(pair.game, "Unknown Game");
    assert_eq!(pair.mod_name, "Mods");
}

#[test]
fn aspect_ratio_beats_version_suffix_everywhere() {
    let path = "Game/Aspect Ratio/21'9 v2";
    for &source in &[Source::KeatonTheBot, Source::StevensNd, Source::Theboy181] {
        let pair = source
            .interpreter()
            .derive_from_segments(&PathSegments::from_relative(path));
        assert!(
            pair.mod_name.starts_with("Aspect Ratio"),
            "{source}: got {:?}",
            pair.mod_name
        );
    }
}

#[test]
fn derive_names_uses_paths_relative_to_root() {
    let root = Path::new("/tmp/switch-pchtxt-mods-main");
    let dir = root
        .join("Legend of Zelda - Tears of the Kingdom, The [0100F2C0115B6000]")
        .join("Disable DOF");
    let pair = derive_names(Source::KeatonTheBot, &dir.join("1.2.1"), root);
    assert_eq!(pair.game, "The Legend of Zelda Tears of the Kingdom");
    assert_eq!(pair.mod_name, "Disable DOF");
    assert_eq!(
        pair.dir_name(),
        "The Legend of Zelda Tears of the Kingdom - Disable DOF"
    );
}

#[test]
fn documented_label_examples() {
    assert_eq!(title_case("the dof settings"), "The DOF Settings");
    assert_eq!(title_case("final fantasy ix remastered"), "Final Fantasy IX Remastered");
    assert_eq!(title_case("lord of the rings"), "Lord of the Rings");
    assert_eq!(title_case("of mice and men"), "Of Mice and Men");
    assert_eq!(title_case("game: a new hope"), "Game: A New Hope");
    assert_eq!(sanitize("Pokémon: Let's Go!"), "Pokemon: Lets Go!");
    assert_eq!(sanitize("Mario Bros.  Deluxe"), "Mario Bros Deluxe");
}

#[test]
fn cleaned_labels_are_stable() {
    for raw in [
        "Super Mario Bros. Wonder",
        "Xenoblade Chronicles 3 - Future Redeemed",
        "Pokémon Legends: Arceus",
        "Kingdom Hearts I&II",
    ] {
        let once = clean_title(raw);
        assert_eq!(clean_title(&once), once, "unstable for {raw:?}");
    }
}
