//! Immutable symbol → transliteration table.

use std::collections::{HashMap, HashSet};

use crate::error::{QuizError, Result};
use crate::kana;
use crate::types::KanaCategory;

/// Symbol table built once at startup and never mutated.
///
/// Enumeration follows insertion order. Lookups go through an index so the
/// table can hold a few hundred entries without linear scans.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl SymbolTable {
    /// Build a table from (symbol, transliteration) pairs.
    pub fn from_pairs<I, S, T>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut entries = Vec::new();
        let mut index = HashMap::new();

        for (position, (symbol, transliteration)) in pairs.into_iter().enumerate() {
            let symbol = symbol.into();
            let transliteration = transliteration.into();

            if symbol.is_empty() {
                return Err(QuizError::EmptySymbol { position });
            }
            if transliteration.trim().is_empty() {
                return Err(QuizError::EmptyTransliteration { symbol });
            }
            if index.contains_key(&symbol) {
                return Err(QuizError::DuplicateSymbol { symbol });
            }

            index.insert(symbol.clone(), entries.len());
            entries.push((symbol, transliteration));
        }

        if entries.is_empty() {
            return Err(QuizError::EmptyTable);
        }

        Ok(Self { entries, index })
    }

    /// Build from the bundled kana data for the given categories.
    ///
    /// Categories are added in the order given; repeating one is harmless.
    pub fn builtin(categories: &[KanaCategory]) -> Result<Self> {
        let mut seen = HashSet::new();
        let pairs = categories
            .iter()
            .filter(|c| seen.insert(**c))
            .flat_map(|c| kana::entries(*c).iter().copied());
        Self::from_pairs(pairs)
    }

    pub fn transliteration_of(&self, symbol: &str) -> Option<&str> {
        self.index
            .get(symbol)
            .map(|&idx| self.entries[idx].1.as_str())
    }

    pub fn contains_transliteration(&self, transliteration: &str) -> bool {
        self.entries.iter().any(|(_, t)| t == transliteration)
    }

    /// All (symbol, transliteration) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(s, t)| (s.as_str(), t.as_str()))
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(s, _)| s.as_str())
    }

    pub fn transliterations(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(_, t)| t.as_str())
    }

    /// Number of distinct transliteration values.
    pub fn distinct_transliterations(&self) -> usize {
        self.transliterations().collect::<HashSet<_>>().len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
