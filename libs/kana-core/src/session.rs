//! Quiz loop: select, present, grade, retire.

use std::io::{BufRead, Write};

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::distractor::generate_options;
use crate::error::{QuizError, Result};
use crate::prompt;
use crate::scoring::{MasteryScore, ScoreUpdate};
use crate::table::SymbolTable;
use crate::types::{QuizSettings, SessionStats};

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Running,
    Complete,
}

/// One multiple choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub symbol: String,
    pub correct: String,
    pub options: Vec<String>,
}

/// Result of answering a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Correct { update: ScoreUpdate },
    Incorrect { correct: String, update: ScoreUpdate },
    /// Input was not a number in range. Scores are untouched.
    Invalid,
}

impl Outcome {
    pub fn update(&self) -> Option<&ScoreUpdate> {
        match self {
            Self::Correct { update } | Self::Incorrect { update, .. } => Some(update),
            Self::Invalid => None,
        }
    }
}

/// Final report handed back once the loop stops.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub stats: SessionStats,
    pub finished_at: DateTime<Utc>,
    /// Every symbol was mastered, as opposed to input running out.
    pub completed: bool,
    pub remaining: usize,
}

/// Parse a 1-based option label into a 0-based index.
///
/// Anything that is not an integer in `1..=option_count` is rejected.
pub fn parse_choice(input: &str, option_count: usize) -> Option<usize> {
    let choice: usize = input.trim().parse().ok()?;
    if (1..=option_count).contains(&choice) {
        Some(choice - 1)
    } else {
        None
    }
}

/// A quiz over a borrowed table with owned scores and random source.
pub struct QuizSession<'t, R> {
    table: &'t SymbolTable,
    scores: MasteryScore,
    settings: QuizSettings,
    rng: R,
    stats: SessionStats,
}

impl<'t, R: Rng> QuizSession<'t, R> {
    /// Create a session, failing fast when the table cannot fill a question.
    pub fn new(table: &'t SymbolTable, settings: QuizSettings, rng: R) -> Result<Self> {
        settings.validate()?;

        let distinct = table.distinct_transliterations();
        if distinct < settings.option_count {
            return Err(QuizError::InsufficientDistractorPool {
                required: settings.option_count - 1,
                available: distinct.saturating_sub(1),
            });
        }

        let scores = MasteryScore::new(table, settings.mastery_threshold);
        info!(
            symbols = table.len(),
            threshold = settings.mastery_threshold,
            options = settings.option_count,
            "Quiz session created"
        );

        Ok(Self {
            table,
            scores,
            settings,
            rng,
            stats: SessionStats::new(Utc::now()),
        })
    }

    pub fn state(&self) -> SessionState {
        if self.scores.is_empty() {
            SessionState::Complete
        } else {
            SessionState::Running
        }
    }

    pub fn scores(&self) -> &MasteryScore {
        &self.scores
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    /// Draw the next question, or `None` once every symbol is mastered.
    pub fn next_question(&mut self) -> Result<Option<Question>> {
        let symbol = match self.scores.pick(&mut self.rng) {
            Some(symbol) => symbol.to_string(),
            None => return Ok(None),
        };
        let correct = self
            .table
            .transliteration_of(&symbol)
            .ok_or_else(|| QuizError::UnknownSymbol(symbol.clone()))?
            .to_string();

        let options = generate_options(
            self.table,
            &correct,
            self.settings.option_count,
            self.settings.distractor_policy,
            &mut self.rng,
        )?;

        debug!(symbol = %symbol, ?options, "Question drawn");

        Ok(Some(Question {
            symbol,
            correct,
            options,
        }))
    }

    /// Grade raw user input against a question.
    pub fn answer(&mut self, question: &Question, input: &str) -> Result<Outcome> {
        self.stats.questions += 1;
        let Some(idx) = parse_choice(input, question.options.len()) else {
            self.stats.invalid += 1;
            debug!(input = input.trim(), "Invalid selection");
            return Ok(Outcome::Invalid);
        };

        let outcome = if question.options[idx] == question.correct {
            self.stats.correct += 1;
            Outcome::Correct {
                update: self.scores.record_correct(&question.symbol)?,
            }
        } else {
            self.stats.incorrect += 1;
            Outcome::Incorrect {
                correct: question.correct.clone(),
                update: self.scores.record_incorrect(&question.symbol)?,
            }
        };

        if let Some(update) = outcome.update() {
            debug!(
                symbol = %update.symbol,
                before = update.before,
                after = update.after,
                "Score updated"
            );
            if update.retired {
                self.stats.retired += 1;
                info!(
                    symbol = %update.symbol,
                    remaining = self.scores.remaining(),
                    "Symbol mastered"
                );
            }
        }

        Ok(outcome)
    }

    /// Drive the loop over a line-oriented console until every symbol is
    /// mastered or input runs out.
    pub fn run<B: BufRead, W: Write>(&mut self, mut input: B, mut out: W) -> Result<SessionSummary> {
        let mut line = Vec::new();
        let mut completed = true;

        while let Some(question) = self.next_question()? {
            prompt::write_question(&mut out, &question)?;

            line.clear();
            // Raw bytes, so input that is not UTF-8 grades as an invalid selection.
            if input.read_until(b'\n', &mut line)? == 0 {
                info!(remaining = self.scores.remaining(), "Input closed before completion");
                writeln!(out)?;
                completed = false;
                break;
            }

            let outcome = self.answer(&question, &String::from_utf8_lossy(&line))?;
            prompt::write_outcome(&mut out, &question, &outcome)?;
        }

        if completed {
            prompt::write_completion(&mut out)?;
        }
        out.flush()?;

        let summary = SessionSummary {
            stats: self.stats.clone(),
            finished_at: Utc::now(),
            completed,
            remaining: self.scores.remaining(),
        };
        info!(
            completed,
            questions = summary.stats.questions,
            correct = summary.stats.correct,
            "Quiz session finished"
        );
        Ok(summary)
    }
}
