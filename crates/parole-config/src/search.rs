use serde::{Deserialize, Serialize};

fn default_threshold() -> f64 {
    0.2
}

fn default_min_match_char_length() -> usize {
    3
}

fn default_max_pattern_length() -> usize {
    64
}

fn default_max_related_words() -> usize {
    50
}

fn default_related_depth() -> usize {
    1
}

fn default_cache_capacity() -> usize {
    256
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Highest accepted `errors / pattern length` ratio for a fuzzy match
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Shortest run of exactly matching characters a fuzzy match must contain
    #[serde(default = "default_min_match_char_length")]
    pub min_match_char_length: usize,
    /// Queries longer than this (in characters) skip fuzzy ranking
    #[serde(default = "default_max_pattern_length")]
    pub max_pattern_length: usize,
    #[serde(default = "default_max_related_words")]
    pub max_related_words: usize,
    /// How many times related words are themselves expanded
    #[serde(default = "default_related_depth")]
    pub related_depth: usize,
    /// Zero disables the related-words cache
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            min_match_char_length: default_min_match_char_length(),
            max_pattern_length: default_max_pattern_length(),
            max_related_words: default_max_related_words(),
            related_depth: default_related_depth(),
            cache_capacity: default_cache_capacity(),
        }
    }
}
