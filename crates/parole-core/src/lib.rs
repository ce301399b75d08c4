pub mod language;
pub mod preprocess;

pub use language::{LanguageProcessor, Morphology, Token};
pub use preprocess::{DefaultPreprocessor, Preprocessor, normalize};
