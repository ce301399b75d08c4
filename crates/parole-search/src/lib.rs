pub mod cache;
pub mod fuzzy;
pub mod highlight;
pub mod ranker;

pub use cache::RelatedWordsCache;
pub use fuzzy::{FieldMatch, FuzzyMatcher, MatchError, Pattern};
pub use highlight::highlight_text;
pub use ranker::{SearchRanker, filter_by_type_and_level};

#[cfg(test)]
mod tests;
