//! Builds a matching quiz from a lesson's vocabulary.
//!
//! Wrong options are drawn from the same lesson only. Distractors invented
//! by an upstream model can drift away from what the learner was actually
//! shown; sampling from the lesson vocabulary keeps every option on topic
//! and guarantees the correct answer was taught.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::services::lesson::VocabularyItem;

/// Distractors per question; the correct answer makes a fourth option.
const MAX_WRONG_OPTIONS: usize = 3;

#[derive(Debug, Error)]
pub enum ExerciseError {
    #[error("No vocabulary provided for exercise generation")]
    EmptyVocabulary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseQuestion {
    pub id: u32,
    pub word: String,
    pub pronunciation: String,
    pub correct_answer: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub exercise_type: String,
    pub instructions: String,
    pub questions: Vec<ExerciseQuestion>,
}

pub fn generate_exercise(
    language: &str,
    vocabulary: &[VocabularyItem],
) -> Result<Exercise, ExerciseError> {
    generate_exercise_with_rng(language, vocabulary, &mut rand::rng())
}

/// Same as [`generate_exercise`] but with a caller-supplied RNG so tests can
/// pin the shuffle and the distractor draw.
pub fn generate_exercise_with_rng<R: Rng + ?Sized>(
    language: &str,
    vocabulary: &[VocabularyItem],
    rng: &mut R,
) -> Result<Exercise, ExerciseError> {
    if vocabulary.is_empty() {
        return Err(ExerciseError::EmptyVocabulary);
    }

    let questions = vocabulary
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let correct = item.translation.as_str();

            // Every translation that differs from the correct one is a
            // candidate distractor; lessons that repeat a translation keep
            // the duplicates for the other items.
            let pool: Vec<&str> = vocabulary
                .iter()
                .map(|v| v.translation.as_str())
                .filter(|translation| *translation != correct)
                .collect();

            let mut options: Vec<String> = pool
                .choose_multiple(rng, MAX_WRONG_OPTIONS)
                .map(|translation| translation.to_string())
                .collect();
            options.push(correct.to_string());
            options.shuffle(rng);

            ExerciseQuestion {
                id: (index + 1) as u32,
                word: item.word.clone(),
                pronunciation: item.pronunciation.clone(),
                correct_answer: correct.to_string(),
                options,
            }
        })
        .collect();

    Ok(Exercise {
        exercise_type: "matching".to_string(),
        instructions: format!(
            "Match each {language} word with its correct English translation from the lesson"
        ),
        questions,
    })
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn item(word: &str, translation: &str) -> VocabularyItem {
        VocabularyItem {
            word: word.to_string(),
            translation: translation.to_string(),
            pronunciation: String::new(),
        }
    }

    fn greetings_vocabulary() -> Vec<VocabularyItem> {
        vec![
            item("azul", "hello"),
            item("tanemmirt", "thank you"),
            item("ih", "yes"),
            item("uhu", "no"),
        ]
    }

    #[test]
    fn empty_vocabulary_is_an_error() {
        let result = generate_exercise("Kabyle", &[]);
        assert!(matches!(result, Err(ExerciseError::EmptyVocabulary)));
    }

    #[test]
    fn one_question_per_item_in_input_order() {
        let vocabulary = greetings_vocabulary();
        let exercise = generate_exercise("Kabyle", &vocabulary).unwrap();

        assert_eq!(exercise.exercise_type, "matching");
        assert_eq!(exercise.questions.len(), 4);
        for (index, (question, source)) in exercise.questions.iter().zip(&vocabulary).enumerate() {
            assert_eq!(question.id as usize, index + 1);
            assert_eq!(question.word, source.word);
            assert_eq!(question.correct_answer, source.translation);
        }
    }

    #[test]
    fn four_word_lesson_yields_four_options_each() {
        let exercise = generate_exercise("Kabyle", &greetings_vocabulary()).unwrap();

        let azul = &exercise.questions[0];
        assert_eq!(azul.correct_answer, "hello");
        assert_eq!(azul.options.len(), 4);
        assert_eq!(
            azul.options.iter().filter(|o| *o == "hello").count(),
            1,
            "correct answer must appear exactly once"
        );
        for option in &azul.options {
            assert!(["hello", "thank you", "yes", "no"].contains(&option.as_str()));
        }
    }

    #[test]
    fn options_never_leave_the_lesson_vocabulary() {
        let vocabulary = greetings_vocabulary();
        let translations: Vec<&str> = vocabulary.iter().map(|v| v.translation.as_str()).collect();
        let exercise = generate_exercise("Tarifit", &vocabulary).unwrap();

        for question in &exercise.questions {
            for option in &question.options {
                assert!(translations.contains(&option.as_str()), "off-topic option {option}");
            }
        }
    }

    #[test]
    fn short_lessons_produce_short_option_lists() {
        let exercise =
            generate_exercise("Kabyle", &[item("azul", "hello"), item("ih", "yes")]).unwrap();
        for question in &exercise.questions {
            assert_eq!(question.options.len(), 2);
        }

        let solo = generate_exercise("Kabyle", &[item("azul", "hello")]).unwrap();
        assert_eq!(solo.questions[0].options, vec!["hello".to_string()]);
    }

    #[test]
    fn duplicate_translations_are_never_their_own_distractor() {
        let vocabulary = vec![item("yan", "one"), item("yiwen", "one"), item("sin", "two")];
        let exercise = generate_exercise("Central Atlas Tamazight", &vocabulary).unwrap();

        // Both spellings of "one" only ever see "two" as a distractor.
        for question in exercise.questions.iter().take(2) {
            assert_eq!(question.correct_answer, "one");
            assert_eq!(question.options.iter().filter(|o| *o == "one").count(), 1);
            assert!(question.options.iter().all(|o| o == "one" || o == "two"));
        }
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let vocabulary = greetings_vocabulary();
        let first =
            generate_exercise_with_rng("Kabyle", &vocabulary, &mut StdRng::seed_from_u64(7))
                .unwrap();
        let second =
            generate_exercise_with_rng("Kabyle", &vocabulary, &mut StdRng::seed_from_u64(7))
                .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn instructions_name_the_language() {
        let exercise = generate_exercise("Tamasheq", &greetings_vocabulary()).unwrap();
        assert_eq!(
            exercise.instructions,
            "Match each Tamasheq word with its correct English translation from the lesson"
        );
    }
}
