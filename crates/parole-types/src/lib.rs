pub mod types;

pub use types::{Level, QuestionRecord, QuestionType, Segment, VariationSet};
