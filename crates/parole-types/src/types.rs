use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Exam section a question belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QuestionType {
    /// Compréhension écrite
    CE,
    /// Compréhension orale
    CO,
    /// Expression écrite
    EE,
    /// Expression orale
    EO,
}

impl QuestionType {
    pub const ALL: [QuestionType; 4] = [
        QuestionType::CE,
        QuestionType::CO,
        QuestionType::EE,
        QuestionType::EO,
    ];

    /// Parse type from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "CE" => Some(QuestionType::CE),
            "CO" => Some(QuestionType::CO),
            "EE" => Some(QuestionType::EE),
            "EO" => Some(QuestionType::EO),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::CE => "CE",
            QuestionType::CO => "CO",
            QuestionType::EE => "EE",
            QuestionType::EO => "EO",
        }
    }
}

/// CEFR level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl Level {
    pub const ALL: [Level; 6] = [Level::A1, Level::A2, Level::B1, Level::B2, Level::C1, Level::C2];

    /// Parse level from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "A1" => Some(Level::A1),
            "A2" => Some(Level::A2),
            "B1" => Some(Level::B1),
            "B2" => Some(Level::B2),
            "C1" => Some(Level::C1),
            "C2" => Some(Level::C2),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::A1 => "A1",
            Level::A2 => "A2",
            Level::B1 => "B1",
            Level::B2 => "B2",
            Level::C1 => "C1",
            Level::C2 => "C2",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Level::A1 => "A1 (Breakthrough)",
            Level::A2 => "A2 (Waystage)",
            Level::B1 => "B1 (Threshold)",
            Level::B2 => "B2 (Vantage)",
            Level::C1 => "C1 (Effective Operational Proficiency)",
            Level::C2 => "C2 (Mastery)",
        }
    }
}

/// A single exam question.
///
/// `normalized_content` is computed once at ingestion time from
/// `content + " " + choices` and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub level: Level,
    pub content: String,
    #[serde(default)]
    pub choices: Option<String>,
    #[serde(default)]
    pub test_num: String,
    #[serde(default)]
    pub question_num: String,
    pub normalized_content: String,
}

impl QuestionRecord {
    /// `choices` or an empty string
    pub fn choices_text(&self) -> &str {
        self.choices.as_deref().unwrap_or_default()
    }
}

/// Every normalized surface form considered equivalent to a query.
///
/// Always contains the normalized query it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationSet {
    forms: BTreeSet<String>,
}

impl VariationSet {
    pub fn new(normalized_query: impl Into<String>) -> Self {
        let mut forms = BTreeSet::new();
        forms.insert(normalized_query.into());
        Self { forms }
    }

    /// Returns true if the form was not already present
    pub fn insert(&mut self, form: impl Into<String>) -> bool {
        self.forms.insert(form.into())
    }

    pub fn extend<I, S>(&mut self, forms: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forms.extend(forms.into_iter().map(Into::into));
    }

    pub fn contains(&self, form: &str) -> bool {
        self.forms.contains(form)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.forms.iter()
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn union(&mut self, other: VariationSet) {
        self.forms.extend(other.forms);
    }
}

impl IntoIterator for VariationSet {
    type Item = String;
    type IntoIter = std::collections::btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.forms.into_iter()
    }
}

/// Piece of highlighted text. Concatenating all segments yields the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Segment {
    Plain(String),
    Matched(String),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(text) | Segment::Matched(text) => text,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Segment::Matched(_))
    }
}
