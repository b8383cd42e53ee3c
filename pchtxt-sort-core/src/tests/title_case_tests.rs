use super::*;

#[test]
fn acronyms_are_uppercased_anywhere() {
    assert_eq!(title_case("the dof settings"), "The DOF Settings");
    assert_eq!(title_case("disable dof"), "Disable DOF");
    assert_eq!(title_case("8k textures"), "8K Textures");
    assert_eq!(title_case("hd rumble fix"), "HD Rumble Fix");
}

#[test]
fn roman_numerals_are_uppercased() {
    assert_eq!(
        title_case("final fantasy ix remastered"),
        "Final Fantasy IX Remastered"
    );
    assert_eq!(title_case("dragon quest xi s"), "Dragon Quest XI S");
    assert_eq!(title_case("ii"), "II");
}

#[test]
fn joined_roman_numerals_are_uppercased() {
    assert_eq!(title_case("kingdom hearts i&ii"), "Kingdom Hearts I&II");
    assert_eq!(title_case("mega man x iv+v collection"), "Mega Man X IV+V Collection");
}

#[test]
fn exception_words_stay_lowercase_mid_title() {
    assert_eq!(title_case("lord of the rings"), "Lord of the Rings");
    assert_eq!(title_case("a link to the past"), "A Link to the Past");
    assert_eq!(title_case("hd remaster of the year"), "HD Remaster of the Year");
}

#[test]
fn exception_words_are_capitalized_at_edges() {
    assert_eq!(title_case("of mice and men"), "Of Mice and Men");
    assert_eq!(title_case("what are you looking at"), "What Are You Looking At");
    assert_eq!(title_case("the"), "The");
}

#[test]
fn word_after_separator_is_forced() {
    assert_eq!(title_case("game: a new hope"), "Game: A New Hope");
    assert_eq!(title_case("metroid ~ the return"), "Metroid ~ The Return");
}

#[test]
fn hyphenated_words_capitalize_each_side() {
    assert_eq!(title_case("yooka-laylee"), "Yooka-Laylee");
    assert_eq!(title_case("part-iv"), "Part-IV");
    assert_eq!(title_case("x-MEN legends"), "X-Men Legends");
}

#[test]
fn forcing_carries_past_a_separator_word() {
    // The word after a separator-bearing word is forced even though the
    // separator sat inside a hyphenated compound.
    assert_eq!(title_case("spider-man and friends"), "Spider-Man And Friends");
    // The first/last-word fix-up splits only on `-`, so the text after the
    // en dash is lowercased again while the forced `Of` survives.
    assert_eq!(
        title_case("zelda\u{2013}breath of the wild"),
        "Zelda\u{2013}breath Of the Wild"
    );
}

#[test]
fn mixed_case_input_is_normalized() {
    assert_eq!(title_case("HELLO WORLD"), "Hello World");
    assert_eq!(title_case("bayonetta 2 ~ 60fps"), "Bayonetta 2 ~ 60fps");
}

#[test]
fn empty_label_stays_empty() {
    assert_eq!(title_case(""), "");
    assert_eq!(title_case("   "), "");
}

#[test]
fn output_is_single_spaced() {
    assert_eq!(title_case("  super   mario  odyssey "), "Super Mario Odyssey");
}

#[test]
fn title_case_is_idempotent() {
    let inputs = [
        "the dof settings",
        "final fantasy ix remastered",
        "lord of the rings",
        "of mice and men",
        "game: a new hope",
        "spider-man and friends",
        "zelda\u{2013}breath of the wild",
        "kingdom hearts i&ii",
        "part-iv",
        "bayonetta 2 ~ 60fps",
        "xenoblade chronicles 3 - 60 fps",
    ];
    for input in inputs {
        let once = title_case(input);
        assert_eq!(title_case(&once), once, "not idempotent for {input:?}");
    }
}

#[test]
fn cap_special_prefers_fixed_forms() {
    assert_eq!(cap_special("dof"), "DOF");
    assert_eq!(cap_special("xiv"), "XIV");
    assert_eq!(cap_special("iv+v"), "IV+V");
    assert_eq!(cap_special("rock&roll"), "Rock&roll");
    assert_eq!(cap_special("blue-ray"), "Blue-Ray");
    assert_eq!(cap_special(""), "");
}

#[test]
fn roman_numeral_requires_non_empty_match() {
    assert!(is_roman_numeral("mmxxiv"));
    assert!(is_roman_numeral("IX"));
    assert!(!is_roman_numeral(""));
    assert!(!is_roman_numeral("IIII"));
    assert!(!is_roman_numeral("game"));
}

#[test]
fn split_pieces_keeps_separators() {
    assert_eq!(
        split_pieces("a:b"),
        vec![Piece::Text("a"), Piece::Separator(':'), Piece::Text("b")]
    );
    assert_eq!(
        split_pieces("::"),
        vec![Piece::Separator(':'), Piece::Separator(':')]
    );
    assert_eq!(split_pieces("plain"), vec![Piece::Text("plain")]);
}
