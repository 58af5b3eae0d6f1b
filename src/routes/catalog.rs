//! Fixed catalog data backing the language picker and the lesson list.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct LanguageOption {
    label: &'static str,
    value: &'static str,
}

#[derive(Serialize)]
pub struct LanguagesResponse {
    languages: Vec<LanguageOption>,
    button_text: &'static str,
    instructions: &'static str,
}

#[derive(Serialize)]
pub struct LessonTopic {
    id: u32,
    title: &'static str,
    description: &'static str,
}

#[derive(Serialize)]
pub struct LessonListResponse {
    lessons: Vec<LessonTopic>,
}

pub async fn languages() -> Json<LanguagesResponse> {
    let languages = ["Kabyle", "Central Atlas Tamazight", "Tarifit"]
        .into_iter()
        .map(|name| LanguageOption {
            label: name,
            value: name,
        })
        .collect();

    Json(LanguagesResponse {
        languages,
        button_text: "Start",
        instructions: "Select a language and press Start to continue.",
    })
}

pub async fn lesson_list() -> Json<LessonListResponse> {
    let topics = [
        ("Greetings", "Learn how to greet in Central Atlas Tamazight."),
        ("Numbers", "Counting from 1 to 10 in Central Atlas Tamazight."),
        ("Family", "Basic family member vocabulary in Central Atlas Tamazight."),
        ("Food", "Common foods and phrases in Central Atlas Tamazight."),
        ("Simple Sentences", "Constructing basic sentences in Central Atlas Tamazight."),
    ];

    let lessons = topics
        .into_iter()
        .enumerate()
        .map(|(index, (title, description))| LessonTopic {
            id: (index + 1) as u32,
            title,
            description,
        })
        .collect();

    Json(LessonListResponse { lessons })
}
