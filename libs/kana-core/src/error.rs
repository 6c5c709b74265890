//! Error types for kana-core.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors that can occur while building a table or running a quiz session.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("symbol table is empty")]
    EmptyTable,

    #[error("empty symbol at position {position}")]
    EmptySymbol { position: usize },

    #[error("symbol {symbol} has an empty transliteration")]
    EmptyTransliteration { symbol: String },

    #[error("duplicate symbol {symbol}")]
    DuplicateSymbol { symbol: String },

    #[error("unknown symbol {0}")]
    UnknownSymbol(String),

    #[error("transliteration {0} is not in the symbol table")]
    UnknownTransliteration(String),

    #[error("not enough distractors: need {required}, table offers {available}")]
    InsufficientDistractorPool { required: usize, available: usize },

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
