//! Console rendering for the quiz.

use std::io::{self, Write};

use crate::session::{Outcome, Question, SessionSummary};

pub fn write_banner<W: Write>(out: &mut W, symbols: usize, threshold: u32) -> io::Result<()> {
    writeln!(out, "Kana drill: {symbols} symbols to master.")?;
    writeln!(
        out,
        "Answer each symbol correctly {threshold} times (net of mistakes) to retire it."
    )?;
    writeln!(out)
}

/// Render the question and leave the cursor after the input prompt.
pub fn write_question<W: Write>(out: &mut W, question: &Question) -> io::Result<()> {
    writeln!(
        out,
        "Please choose the correct transliteration for [{}]:",
        question.symbol
    )?;
    for (i, option) in question.options.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, option)?;
    }
    write!(out, "Enter option number: ")?;
    out.flush()
}

pub fn write_outcome<W: Write>(out: &mut W, question: &Question, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::Invalid => {
            return writeln!(
                out,
                "Invalid selection, please enter a number between 1 and {}.",
                question.options.len()
            );
        }
        Outcome::Correct { .. } => writeln!(out, "Correct!")?,
        Outcome::Incorrect { correct, .. } => {
            writeln!(out, "Wrong! The correct answer is: {correct}")?
        }
    }

    if outcome.update().is_some_and(|u| u.retired) {
        writeln!(
            out,
            "[{}] mastered, it will not appear again!",
            question.symbol
        )?;
    }
    writeln!(out)
}

pub fn write_completion<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Congratulations, every symbol has been mastered!")
}

pub fn write_summary<W: Write>(out: &mut W, summary: &SessionSummary) -> io::Result<()> {
    let stats = &summary.stats;
    let elapsed = summary.finished_at - stats.started_at;
    let secs = elapsed.num_seconds().max(0);

    writeln!(out)?;
    if !summary.completed {
        writeln!(
            out,
            "Session ended early, {} symbols still to master.",
            summary.remaining
        )?;
    }
    writeln!(
        out,
        "Questions: {}  Correct: {}  Wrong: {}  Invalid: {}  Mastered: {}",
        stats.questions, stats.correct, stats.incorrect, stats.invalid, stats.retired
    )?;
    writeln!(
        out,
        "Accuracy: {:.1}%  Time: {}m {:02}s",
        stats.accuracy() * 100.0,
        secs / 60,
        secs % 60
    )
}
