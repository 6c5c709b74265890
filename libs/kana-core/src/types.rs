//! Core types for the kana quiz.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result};

/// Correct answers (net of penalties) needed before a symbol is retired.
pub const DEFAULT_MASTERY_THRESHOLD: u32 = 2;

/// Options shown per question, the correct one included.
pub const DEFAULT_OPTION_COUNT: usize = 4;

/// Group a built-in kana entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KanaCategory {
    Hiragana,
    Katakana,
    Dakuten,
    Handakuten,
    Youon,
    YouonDakuten,
    YouonHandakuten,
    Chouon,
}

impl KanaCategory {
    /// Every category, in table order.
    pub const ALL: [KanaCategory; 8] = [
        Self::Hiragana,
        Self::Katakana,
        Self::Dakuten,
        Self::Handakuten,
        Self::Youon,
        Self::YouonDakuten,
        Self::YouonHandakuten,
        Self::Chouon,
    ];

    /// Get the category name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hiragana => "hiragana",
            Self::Katakana => "katakana",
            Self::Dakuten => "dakuten",
            Self::Handakuten => "handakuten",
            Self::Youon => "youon",
            Self::YouonDakuten => "youon_dakuten",
            Self::YouonHandakuten => "youon_handakuten",
            Self::Chouon => "chouon",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

/// How the distractor pool treats transliterations shared by several symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistractorPolicy {
    /// Every other symbol contributes its value, so equal strings can repeat.
    KeepDuplicates,
    /// Candidates are deduplicated by value before drawing.
    Distinct,
}

impl Default for DistractorPolicy {
    fn default() -> Self {
        Self::KeepDuplicates
    }
}

impl DistractorPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KeepDuplicates => "keep_duplicates",
            Self::Distinct => "distinct",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "keep_duplicates" => Some(Self::KeepDuplicates),
            "distinct" => Some(Self::Distinct),
            _ => None,
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSettings {
    pub mastery_threshold: u32,
    pub option_count: usize,
    pub categories: Vec<KanaCategory>,
    pub distractor_policy: DistractorPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            mastery_threshold: DEFAULT_MASTERY_THRESHOLD,
            option_count: DEFAULT_OPTION_COUNT,
            categories: KanaCategory::ALL.to_vec(),
            distractor_policy: DistractorPolicy::default(),
            seed: None,
        }
    }
}

impl QuizSettings {
    /// Reject settings the quiz loop cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.mastery_threshold == 0 {
            return Err(QuizError::InvalidSettings(
                "mastery_threshold must be at least 1".to_string(),
            ));
        }
        if self.option_count < 2 {
            return Err(QuizError::InvalidSettings(
                "option_count must be at least 2".to_string(),
            ));
        }
        if self.categories.is_empty() {
            return Err(QuizError::InvalidSettings(
                "at least one category must be enabled".to_string(),
            ));
        }
        Ok(())
    }
}

/// Running tallies for one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    pub started_at: DateTime<Utc>,
    /// Questions answered, invalid selections included. A question left
    /// open when input closes is not counted.
    pub questions: u32,
    pub correct: u32,
    pub incorrect: u32,
    pub invalid: u32,
    pub retired: u32,
}

impl SessionStats {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            questions: 0,
            correct: 0,
            incorrect: 0,
            invalid: 0,
            retired: 0,
        }
    }

    /// Share of graded answers that were correct, 0.0 before any grading.
    pub fn accuracy(&self) -> f64 {
        let graded = self.correct + self.incorrect;
        if graded == 0 {
            return 0.0;
        }
        self.correct as f64 / graded as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names_round_trip() {
        for category in KanaCategory::ALL {
            assert_eq!(KanaCategory::from_str(category.as_str()), Some(category));
        }
        assert_eq!(KanaCategory::from_str("kanji"), None);
    }

    #[test]
    fn default_settings_are_valid() {
        let settings = QuizSettings::default();
        assert_eq!(settings.mastery_threshold, 2);
        assert_eq!(settings.option_count, 4);
        assert_eq!(settings.categories.len(), 8);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn zero_threshold_rejected() {
        let settings = QuizSettings {
            mastery_threshold: 0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(QuizError::InvalidSettings(_))
        ));
    }

    #[test]
    fn single_option_rejected() {
        let settings = QuizSettings {
            option_count: 1,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn no_categories_rejected() {
        let settings = QuizSettings {
            categories: vec![],
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn accuracy_counts_only_graded_answers() {
        let mut stats = SessionStats::new(Utc::now());
        assert_eq!(stats.accuracy(), 0.0);
        stats.correct = 3;
        stats.incorrect = 1;
        stats.invalid = 10;
        assert_eq!(stats.accuracy(), 0.75);
    }

    #[test]
    fn policy_names_round_trip() {
        assert_eq!(DistractorPolicy::from_str("distinct"), Some(DistractorPolicy::Distinct));
        assert_eq!(DistractorPolicy::KeepDuplicates.as_str(), "keep_duplicates");
        assert_eq!(DistractorPolicy::from_str("dedup"), None);
    }

    #[test]
    fn enums_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&DistractorPolicy::KeepDuplicates).unwrap(),
            "\"keep_duplicates\""
        );
        assert_eq!(
            serde_json::to_string(&KanaCategory::YouonHandakuten).unwrap(),
            "\"youon_handakuten\""
        );
        let category: KanaCategory = serde_json::from_str("\"youon_dakuten\"").unwrap();
        assert_eq!(category, KanaCategory::YouonDakuten);
    }

    #[test]
    fn settings_round_trip_through_json() {
        let settings = QuizSettings {
            categories: vec![KanaCategory::Hiragana, KanaCategory::Chouon],
            distractor_policy: DistractorPolicy::Distinct,
            ..Default::default()
        };
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["distractor_policy"], "distinct");
        assert_eq!(json["categories"][1], "chouon");
        assert!(json.get("seed").is_none());

        let back: QuizSettings = serde_json::from_value(json).unwrap();
        assert_eq!(back, settings);
    }
}
