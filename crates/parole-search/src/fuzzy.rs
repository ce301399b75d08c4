use std::collections::HashMap;

use parole_config::search::SearchConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("Empty pattern")]
    EmptyPattern,

    #[error("Pattern too long: {len} characters (max {max})")]
    PatternTooLong { len: usize, max: usize },
}

/// Validated query ready for matching
#[derive(Debug, Clone)]
pub struct Pattern {
    chars: Vec<char>,
    max_errors: usize,
    /// Per-character position masks, present when the pattern fits in a `u64`
    masks: Option<HashMap<char, u64>>,
}

impl Pattern {
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Edit budget allowed by the threshold
    pub fn max_errors(&self) -> usize {
        self.max_errors
    }
}

/// Best approximate occurrence of a pattern inside a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMatch {
    /// `errors / pattern length`, 0.0 is an exact occurrence
    pub score: f64,
    pub errors: usize,
    /// Longest run of exactly matching characters in the alignment
    pub longest_run: usize,
}

/// Approximate substring matcher.
///
/// Finds the window of the field with the smallest edit distance to the
/// pattern, wherever it sits in the field. A window counts as a match when
/// its distance stays within `threshold * pattern length` and it contains at
/// least `min_match_char_length` consecutive exact characters.
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    threshold: f64,
    min_match_char_length: usize,
    max_pattern_length: usize,
}

impl FuzzyMatcher {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            threshold: config.threshold.clamp(0.0, 1.0),
            min_match_char_length: config.min_match_char_length.max(1),
            max_pattern_length: config.max_pattern_length,
        }
    }

    pub fn pattern(&self, query: &str) -> Result<Pattern, MatchError> {
        let chars: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();

        if chars.is_empty() {
            return Err(MatchError::EmptyPattern);
        }
        if chars.len() > self.max_pattern_length {
            return Err(MatchError::PatternTooLong {
                len: chars.len(),
                max: self.max_pattern_length,
            });
        }

        let max_errors = (self.threshold * chars.len() as f64 + 1e-9).floor() as usize;
        let masks = (chars.len() <= u64::BITS as usize).then(|| char_masks(&chars));
        Ok(Pattern {
            chars,
            max_errors,
            masks,
        })
    }

    pub fn match_field(&self, pattern: &Pattern, field: &str) -> Option<FieldMatch> {
        let m = pattern.chars.len();
        if m < self.min_match_char_length || field.is_empty() {
            return None;
        }

        let text: Vec<char> = field.chars().flat_map(char::to_lowercase).collect();
        if text.len() + pattern.max_errors < m {
            return None;
        }

        let (errors, end) = match &pattern.masks {
            Some(masks) => best_window_bits(masks, m, &text),
            None => best_window(&pattern.chars, &text),
        }?;
        if errors > pattern.max_errors {
            return None;
        }

        // An alignment with `errors` edits spans at most `m + errors` characters
        let start = end.saturating_sub(m + errors);
        let longest_run = longest_exact_run(&pattern.chars, &text[start..end]);
        if longest_run < self.min_match_char_length {
            return None;
        }

        Some(FieldMatch {
            score: errors as f64 / m as f64,
            errors,
            longest_run,
        })
    }
}

fn char_masks(chars: &[char]) -> HashMap<char, u64> {
    let mut masks = HashMap::new();
    for (i, &c) in chars.iter().enumerate() {
        *masks.entry(c).or_insert(0) |= 1u64 << i;
    }
    masks
}

/// Same result as [`best_window`], computed one text character per step
/// with the bit-parallel recurrence (Myers, Hyyrö). Patterns of 1 to 64 chars.
fn best_window_bits(masks: &HashMap<char, u64>, m: usize, text: &[char]) -> Option<(usize, usize)> {
    let last = 1u64 << (m - 1);
    let mut pv = !0u64;
    let mut mv = 0u64;
    let mut score = m;
    let mut best: Option<(usize, usize)> = None;

    for (j, c) in text.iter().enumerate() {
        let eq = masks.get(c).copied().unwrap_or(0);
        let xv = eq | mv;
        let xh = ((eq & pv).wrapping_add(pv) ^ pv) | eq;
        let ph = mv | !(xh | pv);
        let mh = pv & xh;

        if ph & last != 0 {
            score += 1;
        } else if mh & last != 0 {
            score -= 1;
        }

        // Row 0 stays zero: a window may start anywhere
        let ph = ph << 1;
        let mh = mh << 1;
        pv = mh | !(xv | ph);
        mv = ph & xv;

        if best.is_none_or(|(errors, _)| score < errors) {
            best = Some((score, j + 1));
        }
    }

    best
}

/// Smallest edit distance between `pattern` and any window of `text`,
/// with the leftmost end position reaching it
fn best_window(pattern: &[char], text: &[char]) -> Option<(usize, usize)> {
    let m = pattern.len();
    // Row 0 is all zeros: a window may start anywhere
    let mut prev: Vec<usize> = vec![0; text.len() + 1];
    let mut curr: Vec<usize> = vec![0; text.len() + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=text.len() {
            let cost = usize::from(pattern[i - 1] != text[j - 1]);
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev.iter()
        .enumerate()
        .skip(1)
        .min_by_key(|&(j, &distance)| (distance, j))
        .map(|(j, &distance)| (distance, j))
}

/// Rebuild the best alignment ending at the end of `text` and measure its
/// longest exact run
fn longest_exact_run(pattern: &[char], text: &[char]) -> usize {
    let m = pattern.len();
    let n = text.len();
    let width = n + 1;
    let mut d = vec![0usize; (m + 1) * width];

    for i in 1..=m {
        d[i * width] = i;
        for j in 1..=n {
            let cost = usize::from(pattern[i - 1] != text[j - 1]);
            d[i * width + j] = (d[(i - 1) * width + j] + 1)
                .min(d[i * width + j - 1] + 1)
                .min(d[(i - 1) * width + j - 1] + cost);
        }
    }

    let (mut i, mut j) = (m, n);
    let mut run = 0;
    let mut longest = 0;

    while i > 0 {
        let here = d[i * width + j];
        if j > 0 {
            let same = pattern[i - 1] == text[j - 1];
            if here == d[(i - 1) * width + j - 1] + usize::from(!same) {
                if same {
                    run += 1;
                    longest = longest.max(run);
                } else {
                    run = 0;
                }
                i -= 1;
                j -= 1;
                continue;
            }
        }

        run = 0;
        if here == d[(i - 1) * width + j] + 1 {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    longest
}
