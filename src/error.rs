//! Error types for selah operations.

use thiserror::Error;

/// Errors that can occur during tokenizing or rendering.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed markup: {0}")]
    Markup(String),

    #[error("Unknown book code: {0}")]
    UnknownBook(String),
}

pub type Result<T> = std::result::Result<T, Error>;
