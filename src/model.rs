use serde::{Deserialize, Serialize};

use crate::locale::Locale;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Frontmatter {
    pub title: Option<String>,
    #[serde(default)]
    pub locale: Option<Locale>,
}

#[derive(Debug, Clone)]
pub struct QuestionBank {
    pub title: Option<String>,
    pub locale: Option<Locale>,
    pub questions: Vec<Question>,
    pub bank_file: String,
    pub bank_hash: String,
}

impl QuestionBank {
    /// Bank title, falling back to the locale's own title.
    pub fn display_title(&self, locale: Locale) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| locale.strings().title.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct Question {
    pub number: u32,
    pub prompt: String,
    pub detail: Vec<String>,
    pub choices: Vec<Choice>,
}

impl Question {
    pub fn correct_count(&self) -> usize {
        self.choices.iter().filter(|c| c.correct).count()
    }
}

#[derive(Debug, Clone)]
pub struct Choice {
    pub text: String,
    pub correct: bool,
}

impl Choice {
    pub fn new(text: impl Into<String>, correct: bool) -> Self {
        Self {
            text: text.into(),
            correct,
        }
    }
}

/// Letter shown next to a choice: `A`, `B`, ...
pub fn choice_letter(idx: usize) -> char {
    (b'A' + (idx % 26) as u8) as char
}
