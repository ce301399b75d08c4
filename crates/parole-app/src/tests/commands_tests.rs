use parole_types::Segment;

use crate::commands::render_segments;

#[test]
fn matched_segments_are_bracketed() {
    let rendered = render_segments(&[
        Segment::Plain("Ils ".to_string()),
        Segment::Matched("mangent".to_string()),
        Segment::Plain(".".to_string()),
    ]);
    assert_eq!(rendered, "Ils [[mangent]].");
}
