use std::collections::BTreeMap;
use std::path::Path;

use parole_core::{Preprocessor, normalize};
use parole_types::{Level, QuestionRecord, QuestionType};
use serde_json::Value;

/// Sheet name → rows of cells. The first row of every sheet is a header.
pub type Workbook = BTreeMap<String, Vec<Vec<Value>>>;

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("Failed to read corpus: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed corpus: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Cells of one row, before cleanup
#[derive(Debug)]
struct RawQuestion {
    content: String,
    choices: Option<String>,
    level: String,
    test_num: String,
    question_num: String,
}

pub async fn load_corpus<P: Preprocessor>(
    path: &Path,
    preprocessor: &P,
) -> Result<Vec<QuestionRecord>, CorpusError> {
    tracing::info!("Loading corpus from {}", path.display());
    let data = tokio::fs::read_to_string(path).await?;
    let workbook: Workbook = serde_json::from_str(&data)?;

    let records = records_from_workbook(&workbook, preprocessor);
    tracing::info!("Loaded {} questions", records.len());
    Ok(records)
}

/// Turn every sheet row into a record. Rows without content are skipped.
pub fn records_from_workbook<P: Preprocessor>(
    workbook: &Workbook,
    preprocessor: &P,
) -> Vec<QuestionRecord> {
    let mut records = Vec::new();

    for (sheet, rows) in workbook {
        let Some(question_type) = QuestionType::from_str(sheet) else {
            tracing::warn!("Skipping unknown sheet '{}'", sheet);
            continue;
        };
        tracing::debug!("Processing sheet {} ({} rows)", sheet, rows.len());

        for (idx, row) in rows.iter().enumerate().skip(1) {
            if row.is_empty() {
                continue;
            }

            let raw = read_row(question_type, row);
            if let Some(record) = build_record(format!("{sheet}-{idx}"), question_type, raw, preprocessor)
            {
                records.push(record);
            }
        }
    }

    records
}

fn read_row(question_type: QuestionType, row: &[Value]) -> RawQuestion {
    match question_type {
        QuestionType::CE => RawQuestion {
            content: cell(row, 2),
            choices: Some(cell(row, 3)),
            level: cell_or(row, 4, "B1"),
            test_num: cell(row, 0)
                .split('_')
                .nth(1)
                .map(|name| name.replacen(".docx", "", 1))
                .unwrap_or_default(),
            question_num: cell(row, 1),
        },
        QuestionType::CO => RawQuestion {
            content: cell(row, 7),
            choices: None,
            level: cell_or(row, 5, "B1"),
            test_num: cell(row, 1),
            question_num: cell(row, 3),
        },
        QuestionType::EE => RawQuestion {
            content: cell(row, 6),
            choices: None,
            level: "B2".to_string(),
            test_num: format!("{}-{}", cell(row, 1), cell(row, 2)),
            question_num: cell(row, 5),
        },
        QuestionType::EO => RawQuestion {
            content: cell(row, 5),
            choices: None,
            level: "B2".to_string(),
            test_num: cell(row, 1),
            question_num: cell(row, 2),
        },
    }
}

fn build_record<P: Preprocessor>(
    id: String,
    question_type: QuestionType,
    raw: RawQuestion,
    preprocessor: &P,
) -> Option<QuestionRecord> {
    let content = preprocessor.process(&raw.content);
    if content.is_empty() {
        return None;
    }

    let Some(level) = Level::from_str(&raw.level) else {
        tracing::warn!("Skipping {}: unknown level '{}'", id, raw.level);
        return None;
    };

    let choices = raw
        .choices
        .map(|choices| preprocessor.process(&choices))
        .filter(|choices| !choices.is_empty());

    let normalized_content = normalize(&format!(
        "{} {}",
        content,
        choices.as_deref().unwrap_or_default()
    ));

    Some(QuestionRecord {
        id,
        question_type,
        level,
        content,
        choices,
        test_num: raw.test_num,
        question_num: raw.question_num,
        normalized_content,
    })
}

/// Cell text; blanks, `false` and `0` read as empty like spreadsheet exports do
fn cell(row: &[Value], idx: usize) -> String {
    match row.get(idx) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    }
}

fn cell_or(row: &[Value], idx: usize, fallback: &str) -> String {
    let value = cell(row, idx);
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}
