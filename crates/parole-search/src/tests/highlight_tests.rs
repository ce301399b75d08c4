use parole_lang_french::FrenchMorphology;
use parole_types::Segment;

use crate::highlight::highlight_text;

fn joined(segments: &[Segment]) -> String {
    segments.iter().map(Segment::text).collect()
}

#[test]
fn marks_generated_variation() {
    let segments = highlight_text(&FrenchMorphology::new(), "Il mange une pomme", "manger");
    assert_eq!(
        segments,
        vec![
            Segment::Plain("Il ".to_string()),
            Segment::Matched("mange".to_string()),
            Segment::Plain(" une pomme".to_string()),
        ]
    );
}

#[test]
fn prefers_longest_variation() {
    let segments = highlight_text(&FrenchMorphology::new(), "Ils mangent", "manger");
    assert_eq!(segments[1], Segment::Matched("mangent".to_string()));
}

#[test]
fn case_insensitive_but_keeps_original_text() {
    let text = "MANGER et Manger";
    let segments = highlight_text(&FrenchMorphology::new(), text, "manger");
    assert_eq!(joined(&segments), text);
    assert_eq!(segments.iter().filter(|s| s.is_matched()).count(), 2);
    assert_eq!(segments[0], Segment::Matched("MANGER".to_string()));
}

#[test]
fn empty_inputs_give_one_plain_segment() {
    let morphology = FrenchMorphology::new();
    assert_eq!(
        highlight_text(&morphology, "Il mange", ""),
        vec![Segment::Plain("Il mange".to_string())]
    );
    assert_eq!(
        highlight_text(&morphology, "", "manger"),
        vec![Segment::Plain(String::new())]
    );
}

#[test]
fn no_occurrence_is_single_plain_segment() {
    let segments = highlight_text(&FrenchMorphology::new(), "Nous allons au marché", "pomme");
    assert_eq!(segments, vec![Segment::Plain("Nous allons au marché".to_string())]);
}

#[test]
fn every_token_of_the_term_is_expanded() {
    let text = "Le chaton dort dans la maison";
    let segments = highlight_text(&FrenchMorphology::new(), text, "chat maison");

    let matched: Vec<&str> = segments
        .iter()
        .filter(|s| s.is_matched())
        .map(Segment::text)
        .collect();
    assert_eq!(matched, vec!["chaton", "maison"]);
    assert_eq!(joined(&segments), text);
}

#[test]
fn regex_metacharacters_are_literal() {
    let text = "a.b (c) d+e";
    let segments = highlight_text(&FrenchMorphology::new(), text, "c) d+");
    assert_eq!(joined(&segments), text);
}
