use super::*;
use proptest::prelude::*;
use rstest::rstest;

const WELL_FORMED: &str = "\
[Description] - A lighthouse at dusk, painted in loose strokes.
[Originality] - [Advanced] - A fresh take on a familiar coastal scene.
[Composition] - [Intermediate] - The horizon cuts the canvas in half.
[Color] - [Professional/Expert] - Warm and cool tones balance beautifully.
[Technique] - [Advanced] - Confident brushwork in the water.
[Overall] - [Advanced] - Memorable and calm.";

#[test]
fn parses_the_requested_format() {
    let fields = parse(WELL_FORMED);
    assert_eq!(
        fields.get(CanonicalField::Description),
        "A lighthouse at dusk, painted in loose strokes."
    );
    assert_eq!(
        fields.get(CanonicalField::Originality),
        "A fresh take on a familiar coastal scene."
    );
    assert_eq!(
        fields.get(CanonicalField::Composition),
        "The horizon cuts the canvas in half."
    );
    assert_eq!(
        fields.get(CanonicalField::Color),
        "Warm and cool tones balance beautifully."
    );
    assert_eq!(
        fields.get(CanonicalField::Technique),
        "Confident brushwork in the water."
    );
    assert_eq!(fields.get(CanonicalField::Overall), "Memorable and calm.");

    assert_eq!(
        fields.skill_level(CanonicalField::Color),
        Some(SkillLevel::ProfessionalExpert)
    );
    assert_eq!(
        fields.skill_level(CanonicalField::Composition),
        Some(SkillLevel::Intermediate)
    );
    assert_eq!(fields.skill_level(CanonicalField::Description), None);
}

#[rstest]
#[case("Originality - Advanced - great use of color", CanonicalField::Originality, "great use of color")]
#[case("[Color] - Beginner - flat tones", CanonicalField::Color, "flat tones")]
#[case("COLOR - beginner - flat tones", CanonicalField::Color, "flat tones")]
#[case("Color and Tone: Advanced: moody blues", CanonicalField::Color, "moody blues")]
#[case("Technical Proficiency - Advanced - precise anatomy", CanonicalField::Technique, "precise anatomy")]
#[case("Overall Impression — Intermediate — pleasant", CanonicalField::Overall, "pleasant")]
#[case("- Composition - Beginner - crowded", CanonicalField::Composition, "crowded")]
#[case("* **Originality**: **Advanced** - bold", CanonicalField::Originality, "bold")]
#[case("Composition: - * strong diagonals", CanonicalField::Composition, "strong diagonals")]
#[case("Description: Advanced techniques on display", CanonicalField::Description, "Advanced techniques on display")]
#[case("Originality - Advanced techniques, little novelty", CanonicalField::Originality, "Advanced techniques, little novelty")]
#[case("Technique - Advanced", CanonicalField::Technique, "Advanced")]
fn single_line_values(#[case] line: &str, #[case] field: CanonicalField, #[case] expected: &str) {
    let fields = parse(line);
    assert_eq!(fields.get(field), expected);
}

#[test]
fn bare_level_is_recorded() {
    let fields = parse("Technique - [Professional / Expert]");
    assert_eq!(fields.get(CanonicalField::Technique), "[Professional / Expert]");
    assert_eq!(
        fields.skill_level(CanonicalField::Technique),
        Some(SkillLevel::ProfessionalExpert)
    );
}

#[test]
fn missing_fields_default_to_empty() {
    let fields = parse("Originality - Advanced - great use of color");
    for field in CanonicalField::ALL {
        if field != CanonicalField::Originality {
            assert_eq!(fields.get(field), "", "{field}");
        }
    }
    let map = fields.to_map();
    assert_eq!(map.len(), 6);
    assert_eq!(map["Description"], "");
}

#[test]
fn empty_and_unrelated_input_yields_empty_fields() {
    for text in ["", "\n\n   \n", "No description found.", "Score: 7.5"] {
        let fields = parse(text);
        assert!(fields.iter().all(|(_, value)| value.is_empty()), "{text:?}");
    }
}

#[test]
fn first_occurrence_wins() {
    let text = "Color - Beginner - muddy\nColor - Advanced - luminous";
    let fields = parse(text);
    assert_eq!(fields.get(CanonicalField::Color), "muddy");
    assert_eq!(
        fields.skill_level(CanonicalField::Color),
        Some(SkillLevel::Beginner)
    );
}

#[test]
fn empty_header_line_does_not_claim_the_field() {
    let text = "Originality:\nOriginality - Intermediate - derivative palette";
    assert_eq!(
        parse(text).get(CanonicalField::Originality),
        "derivative palette"
    );
}

#[test]
fn table_order_decides_ambiguous_keys() {
    // The key names two fields; Color comes before Technique.
    let fields = parse("[Technique/Color] - vivid reds");
    assert_eq!(fields.get(CanonicalField::Color), "vivid reds");
    assert_eq!(fields.get(CanonicalField::Technique), "");
}

#[test]
fn multi_word_prose_key_splits_at_first_word() {
    let text = "\
Overall composition - Advanced - unified design
Composition - Beginner - crowded corners
Overall - Advanced - striking";
    let fields = parse(text);
    assert_eq!(
        fields.get(CanonicalField::Overall),
        "composition - Advanced - unified design"
    );
    assert_eq!(fields.get(CanonicalField::Composition), "crowded corners");
    assert_eq!(
        fields.skill_level(CanonicalField::Composition),
        Some(SkillLevel::Beginner)
    );
}

#[test]
fn combined_label_goes_to_its_first_word() {
    let fields = parse("Technique and color: Advanced - confident strokes");
    assert_eq!(
        fields.get(CanonicalField::Technique),
        "and color: Advanced - confident strokes"
    );
    assert_eq!(fields.get(CanonicalField::Color), "");
}

#[test]
fn prose_with_a_dash_does_not_claim_a_field() {
    let fields = parse("The composition is - busy\nComposition - Advanced - balanced");
    assert_eq!(fields.get(CanonicalField::Composition), "balanced");
    assert_eq!(
        fields.skill_level(CanonicalField::Composition),
        Some(SkillLevel::Advanced)
    );
}

#[rstest]
#[case("Color and Tone - Beginner - muddy", CanonicalField::Color)]
#[case("**Colour and Tone**: Beginner: muddy", CanonicalField::Color)]
#[case("[Technical  Proficiency] - Beginner - muddy", CanonicalField::Technique)]
#[case("Overall Impression: Beginner - muddy", CanonicalField::Overall)]
fn criterion_phrases_are_kept_whole(#[case] line: &str, #[case] field: CanonicalField) {
    let fields = parse(line);
    assert_eq!(fields.get(field), "muddy");
    assert_eq!(fields.skill_level(field), Some(SkillLevel::Beginner));
}

#[test]
fn handles_crlf_line_endings() {
    let fields = parse("Composition - Advanced - balanced\r\nOverall - Beginner - rough\r\n");
    assert_eq!(fields.get(CanonicalField::Composition), "balanced");
    assert_eq!(fields.get(CanonicalField::Overall), "rough");
}

#[rstest]
#[case("blah blah Score: 7.8 more text", Some(7.8))]
#[case("no score here", None)]
#[case("Score: 10.0", Some(10.0))]
#[case("Score:42", Some(42.0))]
#[case("Score: -3", Some(-3.0))]
#[case("Score: 7.", Some(7.0))]
#[case("Score: .5", Some(0.5))]
#[case("score: 7.8", None)]
#[case("Score: N/A, revised Score: 6.4", Some(6.4))]
#[case("Score: 5.5\nScore: 9.1", Some(5.5))]
#[case("No score found.", None)]
fn extracts_score(#[case] text: &str, #[case] expected: Option<f64>) {
    assert_eq!(extract_score(text), expected);
}

#[rstest]
#[case(1.0, Some(SkillLevel::Beginner))]
#[case(2.5, Some(SkillLevel::Beginner))]
#[case(2.55, None)]
#[case(5.0, Some(SkillLevel::Intermediate))]
#[case(7.5, Some(SkillLevel::Advanced))]
#[case(10.0, Some(SkillLevel::ProfessionalExpert))]
#[case(11.0, None)]
fn score_bands(#[case] score: f64, #[case] expected: Option<SkillLevel>) {
    assert_eq!(SkillLevel::for_score(score), expected);
}

proptest! {
    #[test]
    fn parse_is_deterministic(text in "(?s).{0,400}") {
        prop_assert_eq!(parse(&text), parse(&text));
    }

    #[test]
    fn parse_always_reports_six_fields(lines in prop::collection::vec(".{0,60}", 0..12)) {
        let text = lines.join("\n");
        let fields = parse(&text);
        prop_assert_eq!(fields.iter().count(), 6);
        prop_assert_eq!(fields.to_map().len(), 6);
    }

    #[test]
    fn score_passes_through_unclamped(whole in -1000i32..1000, frac in 0u32..100) {
        let written = format!("{whole}.{frac:02}");
        let expected: f64 = written.parse().unwrap();
        let found = extract_score(&format!("The verdict. Score: {written} points"));
        prop_assert_eq!(found, Some(expected));
    }
}
