use parole_core::normalize;
use parole_types::{Level, QuestionRecord, QuestionType};

use crate::stats::CorpusStats;

fn record(question_type: QuestionType, level: Level) -> QuestionRecord {
    QuestionRecord {
        id: format!("{}-{}", question_type.as_str(), level.as_str()),
        question_type,
        level,
        content: "Question".to_string(),
        choices: None,
        test_num: String::new(),
        question_num: String::new(),
        normalized_content: normalize("Question "),
    }
}

#[test]
fn cross_tab_counts_and_totals() {
    let records = vec![
        record(QuestionType::CE, Level::B1),
        record(QuestionType::CE, Level::B1),
        record(QuestionType::CE, Level::A2),
        record(QuestionType::EO, Level::B2),
    ];

    let stats = CorpusStats::from_records(&records);

    assert_eq!(stats.count(QuestionType::CE, Level::B1), 2);
    assert_eq!(stats.count(QuestionType::CO, Level::B1), 0);
    assert_eq!(stats.type_total(QuestionType::CE), 3);
    assert_eq!(stats.level_total(Level::B2), 1);
    assert_eq!(stats.total(), 4);
}

#[test]
fn empty_corpus_has_zero_totals() {
    let records: Vec<QuestionRecord> = Vec::new();
    let stats = CorpusStats::from_records(&records);
    assert_eq!(stats.total(), 0);
    assert_eq!(stats, CorpusStats::default());
}

#[test]
fn table_has_a_row_per_type_and_a_totals_row() {
    let records = vec![record(QuestionType::CO, Level::C1)];
    let table = CorpusStats::from_records(&records).to_string();
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("Type/Level"));
    assert!(lines[2].starts_with("CO"));
    assert!(lines[2].trim_end().ends_with('1'));
    assert!(lines[5].starts_with("Total"));
}
