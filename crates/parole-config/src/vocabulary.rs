use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "vocabulary.json".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// JSON file holding star ratings
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
