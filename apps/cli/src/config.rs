//! Environment-driven configuration.

use kana_core::{DistractorPolicy, KanaCategory, QuizSettings};
use thiserror::Error;

pub const MASTERY_THRESHOLD_VAR: &str = "KANA_MASTERY_THRESHOLD";
pub const OPTION_COUNT_VAR: &str = "KANA_OPTION_COUNT";
pub const CATEGORIES_VAR: &str = "KANA_CATEGORIES";
pub const DISTRACTORS_VAR: &str = "KANA_DISTRACTORS";
pub const SEED_VAR: &str = "KANA_SEED";

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got {value:?}")]
    NotANumber { key: &'static str, value: String },

    #[error("unknown kana category {0:?}")]
    UnknownCategory(String),

    #[error("unknown distractor policy {0:?}, expected keep_duplicates or distinct")]
    UnknownPolicy(String),

    #[error("KANA_CATEGORIES is set but names no categories")]
    NoCategories,
}

/// Read settings from the process environment.
pub fn from_env() -> Result<QuizSettings, ConfigError> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Build settings from a key lookup. Unset or blank keys keep their defaults.
pub fn from_lookup<F>(lookup: F) -> Result<QuizSettings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| {
        lookup(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };
    let mut settings = QuizSettings::default();

    if let Some(value) = get(MASTERY_THRESHOLD_VAR) {
        settings.mastery_threshold = parse_number(MASTERY_THRESHOLD_VAR, value)?;
    }
    if let Some(value) = get(OPTION_COUNT_VAR) {
        settings.option_count = parse_number(OPTION_COUNT_VAR, value)?;
    }
    if let Some(value) = get(CATEGORIES_VAR) {
        settings.categories = parse_categories(&value)?;
    }
    if let Some(value) = get(DISTRACTORS_VAR) {
        settings.distractor_policy = DistractorPolicy::from_str(&value.to_lowercase())
            .ok_or(ConfigError::UnknownPolicy(value))?;
    }
    if let Some(value) = get(SEED_VAR) {
        settings.seed = Some(parse_number(SEED_VAR, value)?);
    }

    Ok(settings)
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::NotANumber { key, value })
}

/// Parse a comma separated category list, e.g. `hiragana, katakana`.
fn parse_categories(value: &str) -> Result<Vec<KanaCategory>, ConfigError> {
    let mut categories = Vec::new();
    for name in value.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        let category = KanaCategory::from_str(&name.to_lowercase())
            .ok_or_else(|| ConfigError::UnknownCategory(name.to_string()))?;
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    if categories.is_empty() {
        return Err(ConfigError::NoCategories);
    }
    Ok(categories)
}
