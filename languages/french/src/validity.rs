const MIN_WORD_CHARS: usize = 2;
const MAX_WORD_CHARS: usize = 30;

const SYMBOLS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '=', '[', ']', '{', '}', ';',
    ':', '"', '\\', '|', ',', '<', '>', '/', '?',
];

const PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '\'', '"', '(', ')', '[', ']', '{', '}', '<', '>',
];

/// Bare function words and URL fragments that never count as vocabulary
const STOPLIST: &[&str] = &[
    "www", "http", "https", "com", "fr", "org", // url pieces
    "le", "la", "les", "un", "une", "des", // articles
    "et", "ou", "ni", // conjunctions
    "de", "du", "au", "aux", // prepositions
];

/// Gate applied before a token is indexed or looked up.
///
/// Accepts 2 to 30 characters drawn from a-z, the French accented
/// vowels, ç, æ, œ, apostrophe and hyphen (any case). Rejects digits,
/// symbols, more than one period, more than two hyphens and bare
/// stoplisted function words. Apostrophes, hyphens and a single period
/// are not rejected as symbols, so "aujourd'hui" and "peut-être" pass.
pub fn is_valid_french_word(word: &str) -> bool {
    let word = word.trim();

    let len = word.chars().count();
    if !(MIN_WORD_CHARS..=MAX_WORD_CHARS).contains(&len) {
        return false;
    }

    if word
        .chars()
        .any(|c| c.is_ascii_digit() || SYMBOLS.contains(&c))
    {
        return false;
    }

    if word.matches('.').count() > 1 || word.matches('-').count() > 2 {
        return false;
    }

    let lower = word.to_lowercase();
    if STOPLIST.contains(&lower.as_str()) {
        return false;
    }

    if word.chars().all(|c| PUNCTUATION.contains(&c)) {
        return false;
    }

    lower.chars().all(is_french_letter)
}

fn is_french_letter(c: char) -> bool {
    matches!(
        c,
        'a'..='z'
            | 'à' | 'â' | 'ä' | 'ç' | 'é' | 'è' | 'ê' | 'ë' | 'î' | 'ï' | 'ô' | 'ö' | 'ù' | 'û' | 'ü'
            | 'æ' | 'œ'
            | '\''
            | '-'
    )
}
