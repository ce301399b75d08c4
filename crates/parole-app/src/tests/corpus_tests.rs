use std::io::Write;

use parole_core::DefaultPreprocessor;
use parole_lang_french::FrenchPreprocessor;
use parole_types::{Level, QuestionType};
use serde_json::json;

use crate::corpus::{CorpusError, Workbook, load_corpus, records_from_workbook};

fn workbook(value: serde_json::Value) -> Workbook {
    serde_json::from_value(value).unwrap()
}

#[test]
fn sheets_use_their_own_columns() {
    let book = workbook(json!({
        "CE": [
            ["file", "num", "content", "choices", "level"],
            ["serie_12.docx", 4, "Il mange une pomme", "A) oui B) non", "A2"]
        ],
        "CO": [
            ["", "test", "", "num", "", "level", "", "content"],
            [null, "7", null, 2, null, null, null, "Écoutez le message"]
        ],
        "EE": [
            ["", "a", "b", "", "", "num", "content"],
            [null, "3", "1", null, null, "9", "Écrivez une lettre"]
        ],
        "EO": [
            ["", "test", "num", "", "", "content"],
            [null, "5", "1", null, null, "Parlez de vous"]
        ]
    }));

    let records = records_from_workbook(&book, &DefaultPreprocessor);
    assert_eq!(records.len(), 4);

    let ce = &records[0];
    assert_eq!(ce.id, "CE-1");
    assert_eq!(ce.question_type, QuestionType::CE);
    assert_eq!(ce.level, Level::A2);
    assert_eq!(ce.test_num, "12");
    assert_eq!(ce.question_num, "4");
    assert_eq!(ce.choices.as_deref(), Some("A) oui B) non"));
    assert_eq!(ce.normalized_content, "il mange une pomme a) oui b) non");

    let co = &records[1];
    assert_eq!(co.id, "CO-1");
    assert_eq!(co.level, Level::B1);
    assert_eq!(co.test_num, "7");
    assert_eq!(co.question_num, "2");
    assert_eq!(co.choices, None);
    assert_eq!(co.normalized_content, "ecoutez le message ");

    let ee = &records[2];
    assert_eq!(ee.level, Level::B2);
    assert_eq!(ee.test_num, "3-1");
    assert_eq!(ee.question_num, "9");

    let eo = &records[3];
    assert_eq!(eo.level, Level::B2);
    assert_eq!(eo.content, "Parlez de vous");
}

#[test]
fn rows_without_content_are_skipped() {
    let book = workbook(json!({
        "EO": [
            ["header"],
            [],
            [null, "1", "1", null, null, "   "],
            [null, "1", "2", null, null, "Présentez-vous"]
        ]
    }));

    let records = records_from_workbook(&book, &DefaultPreprocessor);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "EO-3");
}

#[test]
fn unknown_sheets_and_levels_are_skipped() {
    let book = workbook(json!({
        "Notes": [["header"], ["anything", "at", "all"]],
        "CE": [
            ["header"],
            ["x_1.docx", 1, "Question valide", "", "B2"],
            ["x_1.docx", 2, "Niveau inconnu", "", "Z9"]
        ]
    }));

    let records = records_from_workbook(&book, &DefaultPreprocessor);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, Level::B2);
    // Blank choices are dropped
    assert_eq!(records[0].choices, None);
}

#[test]
fn french_preprocessor_repairs_mojibake() {
    let book = workbook(json!({
        "EO": [
            ["header"],
            [null, "1", "1", null, null, "  Ã‰tudiez Ã\u{a0} la maison  "]
        ]
    }));

    let records = records_from_workbook(&book, &FrenchPreprocessor);
    assert_eq!(records[0].content, "Étudiez à la maison");
    assert_eq!(records[0].normalized_content, "etudiez a la maison ");
}

#[tokio::test]
async fn loads_corpus_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "{}",
        json!({ "EO": [["header"], [null, "2", "1", null, null, "Décrivez votre ville"]] })
    )
    .unwrap();

    let records = load_corpus(file.path(), &FrenchPreprocessor).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].test_num, "2");
}

#[tokio::test]
async fn malformed_corpus_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[1, 2, 3]").unwrap();

    let err = load_corpus(file.path(), &FrenchPreprocessor).await.unwrap_err();
    assert!(matches!(err, CorpusError::Parse(_)));
}
