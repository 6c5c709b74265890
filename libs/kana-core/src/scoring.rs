//! Per-symbol mastery tracking.

use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;

use crate::error::{QuizError, Result};
use crate::table::SymbolTable;

/// Change applied to a single symbol's score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreUpdate {
    pub symbol: String,
    pub before: u32,
    pub after: u32,
    /// The symbol reached the threshold and left the store.
    pub retired: bool,
}

/// Mastery counters for symbols that have not yet been retired.
///
/// A symbol is present exactly while its counter is below the threshold.
/// Retired symbols are never added back.
#[derive(Debug, Clone)]
pub struct MasteryScore {
    scores: BTreeMap<String, u32>,
    threshold: u32,
}

impl MasteryScore {
    /// Seed every symbol in the table at zero.
    pub fn new(table: &SymbolTable, threshold: u32) -> Self {
        let scores = table.symbols().map(|s| (s.to_string(), 0)).collect();
        Self { scores, threshold }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn score(&self, symbol: &str) -> Option<u32> {
        self.scores.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.scores.contains_key(symbol)
    }

    pub fn remaining(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Draw one of the remaining symbols uniformly at random.
    ///
    /// The current keys are materialized on every call since the set
    /// shrinks during the session.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        if self.scores.is_empty() {
            return None;
        }
        let keys: Vec<&str> = self.scores.keys().map(String::as_str).collect();
        let idx = rng.gen_range(0..keys.len());
        Some(keys[idx])
    }

    pub fn record_correct(&mut self, symbol: &str) -> Result<ScoreUpdate> {
        self.apply(symbol, |score| score.saturating_add(1))
    }

    /// Penalize a wrong answer; the counter is floored at zero.
    pub fn record_incorrect(&mut self, symbol: &str) -> Result<ScoreUpdate> {
        self.apply(symbol, |score| score.saturating_sub(1))
    }

    fn apply(&mut self, symbol: &str, f: impl FnOnce(u32) -> u32) -> Result<ScoreUpdate> {
        let score = self
            .scores
            .get_mut(symbol)
            .ok_or_else(|| QuizError::UnknownSymbol(symbol.to_string()))?;

        let before = *score;
        let after = f(before);
        *score = after;

        let retired = after >= self.threshold;
        if retired {
            self.scores.remove(symbol);
        }

        Ok(ScoreUpdate {
            symbol: symbol.to_string(),
            before,
            after,
            retired,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn vowels() -> SymbolTable {
        SymbolTable::from_pairs([("あ", "a"), ("い", "i"), ("う", "u"), ("え", "e"), ("お", "o")])
            .unwrap()
    }

    #[test]
    fn seeded_at_zero() {
        let scores = MasteryScore::new(&vowels(), 2);
        assert_eq!(scores.remaining(), 5);
        assert_eq!(scores.score("あ"), Some(0));
    }

    #[test]
    fn retires_on_second_correct_answer() {
        let mut scores = MasteryScore::new(&vowels(), 2);

        let first = scores.record_correct("あ").unwrap();
        assert!(!first.retired);
        assert!(scores.contains("あ"));

        let second = scores.record_correct("あ").unwrap();
        assert!(second.retired);
        assert!(!scores.contains("あ"));
        assert_eq!(scores.remaining(), 4);
    }

    #[test]
    fn correct_then_incorrect_goes_back_to_zero() {
        let mut scores = MasteryScore::new(&vowels(), 2);
        let up = scores.record_correct("い").unwrap();
        let down = scores.record_incorrect("い").unwrap();
        assert_eq!((up.before, up.after), (0, 1));
        assert_eq!((down.before, down.after), (1, 0));
    }

    #[test]
    fn counter_never_negative() {
        let mut scores = MasteryScore::new(&vowels(), 2);
        for _ in 0..3 {
            let update = scores.record_incorrect("う").unwrap();
            assert_eq!(update.after, 0);
        }
        assert_eq!(scores.score("う"), Some(0));
    }

    #[test]
    fn retired_symbol_is_unknown() {
        let mut scores = MasteryScore::new(&vowels(), 1);
        scores.record_correct("え").unwrap();
        assert!(matches!(
            scores.record_correct("え"),
            Err(QuizError::UnknownSymbol(_))
        ));
    }

    #[test]
    fn pick_only_returns_remaining_symbols() {
        let mut scores = MasteryScore::new(&vowels(), 1);
        scores.record_correct("あ").unwrap();
        scores.record_correct("い").unwrap();

        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            let symbol = scores.pick(&mut rng).unwrap();
            assert!(symbol != "あ" && symbol != "い");
        }
    }

    #[test]
    fn pick_is_roughly_uniform() {
        let scores = MasteryScore::new(&vowels(), 2);
        let mut rng = StdRng::seed_from_u64(21);
        let mut counts: HashMap<String, u32> = HashMap::new();
        for _ in 0..5000 {
            let symbol = scores.pick(&mut rng).unwrap();
            *counts.entry(symbol.to_string()).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 5);
        for count in counts.values() {
            assert!((850..=1150).contains(count), "count {count}");
        }
    }

    #[test]
    fn pick_on_empty_store() {
        let mut scores = MasteryScore::new(&vowels(), 1);
        for symbol in ["あ", "い", "う", "え", "お"] {
            scores.record_correct(symbol).unwrap();
        }
        assert!(scores.is_empty());
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(scores.pick(&mut rng), None);
    }
}
