//! USFM token stream: marker vocabulary and tokenizer.

mod marker;
mod tokenizer;

pub use marker::{InlineStyle, MarkerKind, Token};
pub use tokenizer::tokenize;
