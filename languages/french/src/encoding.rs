use parole_core::Preprocessor;

/// UTF-8 text that went through a Latin-1 decode, and what it should read
const MOJIBAKE: &[(&str, &str)] = &[
    ("Ã©", "é"),
    ("Ã¨", "è"),
    ("Ãª", "ê"),
    ("Ã«", "ë"),
    ("Ã®", "î"),
    ("Ã¯", "ï"),
    ("Ã´", "ô"),
    ("Ã¹", "ù"),
    ("Ã»", "û"),
    ("Ã¼", "ü"),
    ("Ã§", "ç"),
    ("Ã¢", "â"),
    ("Ã\u{a0}", "à"),
    ("Ã‰", "É"),
    ("Ã¦", "æ"),
    ("Å“", "œ"),
    ("Å\"", "œ"),
    ("â€™", "’"),
];

/// Repair the fixed set of garbled sequences in [`MOJIBAKE`].
///
/// Literal substring substitution only; text without any of those
/// sequences comes back unchanged.
pub fn fix_encoding(text: &str) -> String {
    if !text.contains(['Ã', 'Å', 'â']) {
        return text.to_string();
    }

    MOJIBAKE
        .iter()
        .fold(text.to_string(), |acc, (garbled, fixed)| {
            if acc.contains(garbled) {
                acc.replace(garbled, fixed)
            } else {
                acc
            }
        })
}

/// Ingestion cleanup for French spreadsheet cells
pub struct FrenchPreprocessor;

impl Preprocessor for FrenchPreprocessor {
    fn repair(&self, text: &str) -> String {
        fix_encoding(text)
    }
}
