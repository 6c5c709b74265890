//! Core library for the kana drill.
//!
//! Provides:
//! - Built-in kana → romaji table, grouped by category
//! - Multiple choice option generation with distractors
//! - Mastery scoring with retirement at a threshold
//! - The quiz loop and its console rendering

pub mod distractor;
pub mod error;
pub mod kana;
pub mod prompt;
pub mod scoring;
pub mod session;
pub mod table;
pub mod types;

pub use distractor::generate_options;
pub use error::{QuizError, Result};
pub use scoring::{MasteryScore, ScoreUpdate};
pub use session::{parse_choice, Outcome, Question, QuizSession, SessionState, SessionSummary};
pub use table::SymbolTable;
pub use types::{
    DistractorPolicy, KanaCategory, QuizSettings, SessionStats, DEFAULT_MASTERY_THRESHOLD,
    DEFAULT_OPTION_COUNT,
};
