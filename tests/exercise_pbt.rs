//! Property-based tests for exercise generation.
//!
//! Invariants under arbitrary vocabularies:
//! - one question per item, ids follow input order
//! - the correct answer is always among the options
//! - options never leave the lesson's own translations
//! - option count is bounded by the distractor pool

use std::collections::HashSet;

use proptest::prelude::*;

use awal_backend::services::exercise::generate_exercise;
use awal_backend::services::lesson::VocabularyItem;

fn arb_vocabulary() -> impl Strategy<Value = Vec<VocabularyItem>> {
    prop::collection::vec(("[a-z]{1,8}", "[a-z]{1,10}"), 1..12).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(word, translation)| VocabularyItem {
                word,
                translation,
                pronunciation: String::new(),
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn one_question_per_item_in_order(vocabulary in arb_vocabulary()) {
        let exercise = generate_exercise("Kabyle", &vocabulary).unwrap();

        prop_assert_eq!(exercise.questions.len(), vocabulary.len());
        for (index, (question, item)) in exercise.questions.iter().zip(&vocabulary).enumerate() {
            prop_assert_eq!(question.id as usize, index + 1);
            prop_assert_eq!(&question.word, &item.word);
            prop_assert_eq!(&question.correct_answer, &item.translation);
        }
    }

    #[test]
    fn options_contain_the_answer_and_stay_on_topic(vocabulary in arb_vocabulary()) {
        let translations: HashSet<&str> =
            vocabulary.iter().map(|v| v.translation.as_str()).collect();
        let exercise = generate_exercise("Tarifit", &vocabulary).unwrap();

        for question in &exercise.questions {
            prop_assert!(question.options.contains(&question.correct_answer));
            prop_assert!(question.options.len() <= 4);
            for option in &question.options {
                prop_assert!(translations.contains(option.as_str()));
            }
        }
    }

    #[test]
    fn distinct_translations_bound_the_option_count(vocabulary in arb_vocabulary()) {
        let distinct: HashSet<&str> =
            vocabulary.iter().map(|v| v.translation.as_str()).collect();
        let exercise = generate_exercise("Kabyle", &vocabulary).unwrap();

        for question in &exercise.questions {
            // At most three distractors, and no more than the pool can offer.
            let pool = vocabulary
                .iter()
                .filter(|v| v.translation != question.correct_answer)
                .count();
            prop_assert_eq!(question.options.len(), pool.min(3) + 1);
            let unique: HashSet<&str> = question.options.iter().map(String::as_str).collect();
            prop_assert!(unique.len() <= distinct.len());
        }
    }

    #[test]
    fn structure_is_stable_across_runs(vocabulary in arb_vocabulary()) {
        let first = generate_exercise("Kabyle", &vocabulary).unwrap();
        let second = generate_exercise("Kabyle", &vocabulary).unwrap();

        let pairs = |exercise: &awal_backend::services::exercise::Exercise| {
            exercise
                .questions
                .iter()
                .map(|q| (q.word.clone(), q.correct_answer.clone()))
                .collect::<Vec<_>>()
        };
        prop_assert_eq!(pairs(&first), pairs(&second));
    }
}
