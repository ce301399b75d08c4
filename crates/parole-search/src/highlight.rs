use parole_core::{Morphology, normalize};
use parole_types::{Segment, VariationSet};
use regex::RegexBuilder;

/// Split `text` into plain and matched segments for `search_term`.
///
/// Each whitespace-separated token of the search term is expanded into its
/// variations; occurrences of any variation (case-insensitive) become
/// candidate matches, and a candidate is marked matched when its normalized
/// form is one of the variations. Joining the segments gives back `text`.
pub fn highlight_text<M>(morphology: &M, text: &str, search_term: &str) -> Vec<Segment>
where
    M: Morphology + ?Sized,
{
    if text.is_empty() || search_term.trim().is_empty() {
        return vec![Segment::Plain(text.to_string())];
    }

    let mut variations = VariationSet::default();
    for token in search_term.to_lowercase().split_whitespace() {
        variations.union(morphology.variations(token));
    }

    let mut alternatives: Vec<&String> = variations.iter().filter(|v| !v.is_empty()).collect();
    if alternatives.is_empty() {
        return vec![Segment::Plain(text.to_string())];
    }

    // Longest first so "mangent" is not cut short by "mange"
    alternatives.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    let pattern = alternatives
        .iter()
        .map(|v| regex::escape(v))
        .collect::<Vec<_>>()
        .join("|");

    let regex = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(regex) => regex,
        Err(e) => {
            tracing::warn!("Cannot build highlight pattern for '{}': {}", search_term, e);
            return vec![Segment::Plain(text.to_string())];
        }
    };

    let mut segments = Vec::new();
    let mut last = 0;

    for found in regex.find_iter(text) {
        if found.start() > last {
            push_plain(&mut segments, &text[last..found.start()]);
        }

        let part = found.as_str();
        if variations.contains(&normalize(part)) {
            segments.push(Segment::Matched(part.to_string()));
        } else {
            push_plain(&mut segments, part);
        }
        last = found.end();
    }

    if last < text.len() {
        push_plain(&mut segments, &text[last..]);
    }

    segments
}

/// Append plain text, merging with a preceding plain segment
fn push_plain(segments: &mut Vec<Segment>, text: &str) {
    if let Some(Segment::Plain(previous)) = segments.last_mut() {
        previous.push_str(text);
    } else {
        segments.push(Segment::Plain(text.to_string()));
    }
}
