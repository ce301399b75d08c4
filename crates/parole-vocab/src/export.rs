use chrono::SecondsFormat;

use crate::store::Ratings;

pub const CSV_HEADER: &str = "Word,Stars,Occurrences,Last Updated";

/// One line per word, alphabetical, timestamps in RFC 3339 (UTC, milliseconds)
pub fn to_csv(ratings: &Ratings) -> String {
    let mut lines = Vec::with_capacity(ratings.len() + 1);
    lines.push(CSV_HEADER.to_string());

    for (word, rating) in ratings {
        lines.push(format!(
            "{},{},{},{}",
            csv_field(word),
            rating.stars,
            rating.occurrences,
            rating.last_updated.to_rfc3339_opts(SecondsFormat::Millis, true)
        ));
    }

    lines.join("\n")
}

pub fn to_json(ratings: &Ratings) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(ratings)
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
