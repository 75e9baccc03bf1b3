// Public exports.
pub use token::{Token, TokenInfo};
pub use tokenizer::{TokenizeError, TokenizeErrorKind, Tokenizer};

// Public mods.
#[cfg(feature = "cli")]
pub mod cli_helper;
pub mod token;

// Private mods.
mod tokenizer;
