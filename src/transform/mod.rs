// WHY: Caller-side transforms built on the buffer, scanner, wordifier and approximator
// Each wraps its input in a TextBuffer, locates the span to edit, and rewrites it in place

pub mod case;
pub mod inflect;
pub mod ordinal;
pub mod quantity;
pub mod truncate;

pub use case::{capitalize, to_lower_case, to_sentence_case, to_title_case, to_upper_case};
pub use inflect::{pluralize, singularize};
pub use ordinal::{ordinal_suffix, ordinal_words, ordinalize};
pub use quantity::{quantity_to_mixed, quantity_to_words};
pub use truncate::{truncate, truncate_words, DEFAULT_MARKER};
