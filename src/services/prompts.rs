//! Prompt templates for lesson generation.
//!
//! Templates use `{language}` / `{topic}` placeholders substituted at call
//! time, so the literal JSON braces in the base template stay untouched.

const LESSON_PROMPT_BASE: &str = r#"
You are a Tamazight language teacher, specifically for the {language} language.

{specific_instructions}

IMPORTANT: You must respond in valid JSON format with the following structure:
{
  "lesson_text": "The full lesson content as a string with newlines for formatting",
  "vocabulary": [
    {"word": "word in {language}", "translation": "English translation", "pronunciation": "phonetic pronunciation guide"},
    ...
  ]
}

The vocabulary array should contain all the words from the lesson with their translations and pronunciation guides.

Respond ONLY with the JSON, no additional text.
"#;

const GREETINGS_PROMPT: &str = r#"
Create a beginner lesson about greetings and basic expressions in {language}.

Include these 5 essential greetings:
1. Hello / Hi (informal greeting)
2. Good morning
3. Good evening
4. How are you?
5. Goodbye

For each greeting, provide:
- The word/phrase in {language}
- English translation
- A phonetic pronunciation guide

Also include 1-2 simple example dialogues using these greetings.
"#;

const NUMBERS_PROMPT: &str = r#"
Create a beginner lesson about numbers in {language}.

Include ALL numbers from 1 to 10:
1. One (1)
2. Two (2)
3. Three (3)
4. Four (4)
5. Five (5)
6. Six (6)
7. Seven (7)
8. Eight (8)
9. Nine (9)
10. Ten (10)

For each number, provide:
- The number word in {language}
- English translation (the number)
- A phonetic pronunciation guide

Also include 1-2 simple example sentences using numbers (e.g., "I have three books").
"#;

const FAMILY_PROMPT: &str = r#"
Create a beginner lesson about family members in {language}.

Include these 6 essential family terms:
1. Mother
2. Father
3. Brother
4. Sister
5. Grandmother
6. Grandfather

For each family member, provide:
- The word in {language}
- English translation
- A phonetic pronunciation guide

Also include 1-2 simple example sentences about family (e.g., "This is my mother").
"#;

const FOOD_PROMPT: &str = r#"
Create a beginner lesson about common foods in {language}.

Include these 5-6 common food items:
1. Bread
2. Water
3. Meat
4. Vegetables / Fruits
5. Tea or Coffee
6. Couscous (traditional dish)

For each food item, provide:
- The word in {language}
- English translation
- A phonetic pronunciation guide

Also include 1-2 simple phrases for ordering or asking for food (e.g., "I would like water please", "Is this good?").
"#;

const SIMPLE_SENTENCES_PROMPT: &str = r#"
Create a beginner lesson about constructing simple sentences in {language}.

Include these 5-6 useful basic phrases:
1. Yes
2. No
3. Please
4. Thank you
5. I don't understand
6. What is this?

For each phrase, provide:
- The phrase in {language}
- English translation
- A phonetic pronunciation guide

Also include 2-3 example sentences showing basic sentence structure (subject + verb + object).
"#;

const DEFAULT_LESSON_PROMPT: &str = r#"
Create a short beginner lesson about "{topic}" for {language}.

Include:
- 5-6 basic words related to {topic}
- 1-2 simple sentences using those words
- English translation for each word and sentence

For each word, provide a phonetic pronunciation guide.
"#;

const TOPIC_PROMPTS: &[(&str, &str)] = &[
    ("Greetings", GREETINGS_PROMPT),
    ("Numbers", NUMBERS_PROMPT),
    ("Family", FAMILY_PROMPT),
    ("Food", FOOD_PROMPT),
    ("Simple Sentences", SIMPLE_SENTENCES_PROMPT),
];

/// Builds the full lesson prompt for a language/topic pair. Recognized topics
/// get their dedicated template; anything else falls back to the generic
/// template parameterized by the free-form topic string.
pub fn lesson_prompt(language: &str, topic: &str) -> String {
    let specific = match TOPIC_PROMPTS.iter().find(|(name, _)| *name == topic) {
        Some((_, template)) => template.replace("{language}", language),
        None => DEFAULT_LESSON_PROMPT
            .replace("{language}", language)
            .replace("{topic}", topic),
    };

    LESSON_PROMPT_BASE
        .replace("{specific_instructions}", &specific)
        .replace("{language}", language)
}
