//! Console front end for the kana drill.

pub mod config;

use std::io::{self, BufRead, Write};

use chrono::Utc;
use kana_core::{prompt, QuizSession, QuizSettings, SessionSummary, SymbolTable};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so the quiz transcript on stdout stays readable.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let settings = config::from_env()?;
    tracing::debug!(?settings, "Configuration loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = drill(&settings, stdin.lock(), stdout.lock())?;

    if !summary.completed {
        tracing::info!(remaining = summary.remaining, "Exited before mastering every symbol");
    }
    Ok(())
}

/// Build the table, seed the generator and play one session to the end.
pub fn drill<B: BufRead, W: Write>(
    settings: &QuizSettings,
    input: B,
    mut out: W,
) -> anyhow::Result<SessionSummary> {
    let table = SymbolTable::builtin(&settings.categories)?;
    let seed = settings.seed.unwrap_or_else(clock_seed);
    tracing::info!(seed, symbols = table.len(), "Starting session");

    let mut session = QuizSession::new(&table, settings.clone(), StdRng::seed_from_u64(seed))?;

    prompt::write_banner(&mut out, table.len(), settings.mastery_threshold)?;
    let summary = session.run(input, &mut out)?;
    prompt::write_summary(&mut out, &summary)?;
    out.flush()?;

    Ok(summary)
}

/// Seed taken from the wall clock, as nanoseconds since the epoch.
fn clock_seed() -> u64 {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .map(|nanos| nanos as u64)
        .unwrap_or_else(|| now.timestamp_micros() as u64)
}
