//! Multiple choice option generation.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{QuizError, Result};
use crate::table::SymbolTable;
use crate::types::DistractorPolicy;

/// Build `option_count` shuffled options containing `correct` exactly once.
///
/// Distractors are every other transliteration in the table. Under
/// [`DistractorPolicy::KeepDuplicates`] a value shared by several symbols
/// enters the pool once per symbol, so two distractors may read the same.
pub fn generate_options<R: Rng + ?Sized>(
    table: &SymbolTable,
    correct: &str,
    option_count: usize,
    policy: DistractorPolicy,
    rng: &mut R,
) -> Result<Vec<String>> {
    if !table.contains_transliteration(correct) {
        return Err(QuizError::UnknownTransliteration(correct.to_string()));
    }

    let mut candidates: Vec<&str> = table
        .transliterations()
        .filter(|t| *t != correct)
        .collect();

    if policy == DistractorPolicy::Distinct {
        let mut seen = HashSet::new();
        candidates.retain(|t| seen.insert(*t));
    }

    let required = option_count.saturating_sub(1);
    if candidates.len() < required {
        return Err(QuizError::InsufficientDistractorPool {
            required,
            available: candidates.len(),
        });
    }

    candidates.shuffle(rng);
    candidates.truncate(required);

    let mut options: Vec<String> = candidates.into_iter().map(str::to_string).collect();
    options.push(correct.to_string());
    options.shuffle(rng);

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::KanaCategory;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn vowels() -> SymbolTable {
        SymbolTable::from_pairs([("あ", "a"), ("い", "i"), ("う", "u"), ("え", "e"), ("お", "o")])
            .unwrap()
    }

    #[test]
    fn always_four_options_with_correct_answer() {
        let table = SymbolTable::builtin(&KanaCategory::ALL).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for (_, romaji) in table.iter() {
            let options =
                generate_options(&table, romaji, 4, DistractorPolicy::KeepDuplicates, &mut rng)
                    .unwrap();
            assert_eq!(options.len(), 4);
            assert_eq!(options.iter().filter(|o| *o == romaji).count(), 1);
        }
    }

    #[test]
    fn correct_position_is_roughly_uniform() {
        let table = vowels();
        let mut rng = StdRng::seed_from_u64(42);
        let mut slots = [0u32; 4];
        let trials = 8000;
        for _ in 0..trials {
            let options =
                generate_options(&table, "a", 4, DistractorPolicy::KeepDuplicates, &mut rng)
                    .unwrap();
            let pos = options.iter().position(|o| o == "a").unwrap();
            slots[pos] += 1;
        }
        for count in slots {
            // Expected 2000 per slot; allow a wide margin.
            assert!((1700..=2300).contains(&count), "slot count {count}");
        }
    }

    #[test]
    fn exactly_four_distinct_values_is_enough() {
        let table = SymbolTable::from_pairs([("あ", "a"), ("い", "i"), ("う", "u"), ("え", "e")])
            .unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut options =
            generate_options(&table, "e", 4, DistractorPolicy::KeepDuplicates, &mut rng).unwrap();
        options.sort();
        assert_eq!(options, vec!["a", "e", "i", "u"]);
    }

    #[test]
    fn too_few_candidates_fails() {
        let table = SymbolTable::from_pairs([("あ", "a"), ("い", "i"), ("う", "u")]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let result = generate_options(&table, "a", 4, DistractorPolicy::KeepDuplicates, &mut rng);
        assert!(matches!(
            result,
            Err(QuizError::InsufficientDistractorPool {
                required: 3,
                available: 2,
            })
        ));
    }

    #[test]
    fn duplicate_values_count_toward_pool_unless_distinct() {
        let table = SymbolTable::from_pairs([
            ("あ", "a"),
            ("じ", "ji"),
            ("ぢ", "ji"),
            ("ず", "zu"),
        ])
        .unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let options =
            generate_options(&table, "a", 4, DistractorPolicy::KeepDuplicates, &mut rng).unwrap();
        assert_eq!(options.iter().filter(|o| *o == "ji").count(), 2);

        let result = generate_options(&table, "a", 4, DistractorPolicy::Distinct, &mut rng);
        assert!(matches!(
            result,
            Err(QuizError::InsufficientDistractorPool { available: 2, .. })
        ));
    }

    #[test]
    fn distinct_policy_never_repeats_a_value() {
        let table = SymbolTable::builtin(&KanaCategory::ALL).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let options =
                generate_options(&table, "ji", 4, DistractorPolicy::Distinct, &mut rng).unwrap();
            let unique: HashSet<_> = options.iter().collect();
            assert_eq!(unique.len(), 4);
        }
    }

    #[test]
    fn unknown_answer_rejected() {
        let table = vowels();
        let mut rng = StdRng::seed_from_u64(1);
        let result = generate_options(&table, "ka", 4, DistractorPolicy::KeepDuplicates, &mut rng);
        assert!(matches!(result, Err(QuizError::UnknownTransliteration(_))));
    }

    #[test]
    fn honours_option_count() {
        let table = vowels();
        let mut rng = StdRng::seed_from_u64(5);
        let options =
            generate_options(&table, "o", 2, DistractorPolicy::KeepDuplicates, &mut rng).unwrap();
        assert_eq!(options.len(), 2);
        assert!(options.contains(&"o".to_string()));
    }
}
