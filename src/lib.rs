pub mod buffer;
pub mod config;
pub mod error;
pub mod fraction;
pub mod nouns;
pub mod scanner;
pub mod transform;
pub mod wordify;

// Re-export core types for convenient access
pub use buffer::TextBuffer;
pub use error::{Result, TextError};
pub use fraction::{Fraction, MixedNumber};
pub use nouns::NounRegistry;
pub use scanner::{Comparison, Pattern, WordSpan};
pub use wordify::{number_to_words, to_words, DigitSequence};

// Re-export config types used by the CLI and embedders
pub use config::{ConfigReport, NounConfig, QuantityOptions};
