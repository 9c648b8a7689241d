use super::*;

fn replacements(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

#[test]
fn font_case_variants() {
    assert_eq!(apply_font_case("The Pilot", FontCase::Upper), "THE PILOT");
    assert_eq!(apply_font_case("The Pilot", FontCase::Lower), "the pilot");
    assert_eq!(apply_font_case("the PILOT's end", FontCase::Title), "The Pilot's End");
    assert_eq!(apply_font_case("The Pilot", FontCase::Source), "The Pilot");
    assert_eq!(apply_font_case("The Pilot", FontCase::Blank), "");
}

#[test]
fn bracket_swaps_are_simultaneous() {
    let r = replacements(&[("[", "("), ("]", ")"), ("(", "["), (")", "]"), ("…", "...")]);
    assert_eq!(apply_replacements("A (B) [C]…", &r), "A [B] (C)...");
}

#[test]
fn longer_keys_take_precedence() {
    let r = replacements(&[("a", "1"), ("ab", "2")]);
    assert_eq!(apply_replacements("abac", &r), "21c");
    assert_eq!(apply_replacements("Ōmen", &replacements(&[("Ō", "O")])), "Omen");
}

#[test]
fn short_titles_are_untouched() {
    let c = SplitCharacteristics::new(32, 3, SplitStyle::Bottom);
    assert_eq!(split_title("  Pilot ", c), "Pilot");
    assert_eq!(split_title("Already\nSplit Over The Maximum Width", c), "Already\nSplit Over The Maximum Width");
}

#[test]
fn bottom_style_loads_lower_lines() {
    let c = SplitCharacteristics::new(10, 3, SplitStyle::Bottom);
    assert_eq!(split_title("The Long Title Here", c), "The Long\nTitle Here");
}

#[test]
fn top_style_loads_upper_lines() {
    let c = SplitCharacteristics::new(10, 3, SplitStyle::Top);
    assert_eq!(split_title("The Long Title Here", c), "The Long\nTitle Here");

    let c = SplitCharacteristics::new(15, 4, SplitStyle::Top);
    assert_eq!(
        split_title("One Two Three Four Five Six Seven", c),
        "One Two Three\nFour Five Six\nSeven"
    );
}

#[test]
fn line_count_is_capped() {
    let c = SplitCharacteristics::new(5, 2, SplitStyle::Top);
    let out = split_title("aaaa bbbb cccc dddd", c);
    assert_eq!(out.lines().count(), 2);
    assert_eq!(out, "aaaa\nbbbb cccc dddd");

    let c = SplitCharacteristics::new(5, 2, SplitStyle::Bottom);
    assert_eq!(split_title("aaaa bbbb cccc dddd", c), "aaaa bbbb cccc\ndddd");
}

#[test]
fn single_long_word_is_not_split() {
    let c = SplitCharacteristics::new(5, 3, SplitStyle::Bottom);
    assert_eq!(split_title("Supercalifragilistic", c), "Supercalifragilistic");
}

#[test]
fn even_style_balances() {
    let c = SplitCharacteristics::new(20, 3, SplitStyle::Even);
    assert_eq!(
        split_title("Alpha Beta Gamma Delta Epsilon", c),
        "Alpha Beta\nGamma Delta Epsilon"
    );
}
