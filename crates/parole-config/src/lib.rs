use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::log::LogConfig;
use self::search::SearchConfig;
use self::vocabulary::VocabularyConfig;

pub mod log;
pub mod search;
pub mod vocabulary;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub vocabulary: VocabularyConfig,
    pub log: LogConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Load a JSON config file, then apply environment overrides
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&data)?;
        config.apply_env();
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Some(threshold) = env_parse("PAROLE_FUZZY_THRESHOLD") {
            self.search.threshold = threshold;
        }
        if let Some(len) = env_parse("PAROLE_MIN_MATCH_LEN") {
            self.search.min_match_char_length = len;
        }
        if let Some(len) = env_parse("PAROLE_MAX_PATTERN_LEN") {
            self.search.max_pattern_length = len;
        }
        if let Some(max) = env_parse("PAROLE_MAX_RELATED") {
            self.search.max_related_words = max;
        }
        if let Some(depth) = env_parse("PAROLE_RELATED_DEPTH") {
            self.search.related_depth = depth;
        }
        if let Some(capacity) = env_parse("PAROLE_CACHE_CAPACITY") {
            self.search.cache_capacity = capacity;
        }
        if let Ok(path) = env::var("PAROLE_VOCAB_PATH") {
            self.vocabulary.path = path;
        }
        if let Ok(filter) = env::var("PAROLE_LOG") {
            self.log.filter = filter;
        }
        if let Some(json) = env_parse("PAROLE_LOG_JSON") {
            self.log.json = json;
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
