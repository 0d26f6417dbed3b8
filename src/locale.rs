use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

/// UI strings for one locale.
#[derive(Debug)]
pub struct Strings {
    pub title: &'static str,
    pub start: &'static str,
    pub time: &'static str,
    pub score: &'static str,
    pub next: &'static str,
    pub end: &'static str,
    pub restart: &'static str,
    pub confirm: &'static str,
    pub language: &'static str,
    pub question: &'static str,
}

const ES: Strings = Strings {
    title: "Concurso de Preguntas",
    start: "Comenzar",
    time: "Tiempo",
    score: "Puntuación",
    next: "Siguiente",
    end: "¡Has completado el test!",
    restart: "Reiniciar",
    confirm: "Confirmar",
    language: "Español",
    question: "Pregunta",
};

const EN: Strings = Strings {
    title: "Quiz Game",
    start: "Start",
    time: "Time",
    score: "Score",
    next: "Next",
    end: "You have completed the quiz!",
    restart: "Restart",
    confirm: "Confirm",
    language: "English",
    question: "Question",
};

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Es, Locale::En];

    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::Es => &ES,
            Locale::En => &EN,
        }
    }

    /// Default bank file name for this locale.
    pub fn bank_file_name(self) -> &'static str {
        match self {
            Locale::Es => "askES.md",
            Locale::En => "askEN.md",
        }
    }

    pub fn toggle(self) -> Locale {
        match self {
            Locale::Es => Locale::En,
            Locale::En => Locale::Es,
        }
    }

    pub fn final_score(self, score: u32) -> String {
        match self {
            Locale::Es => format!("Tu puntuación es: {}", score),
            Locale::En => format!("Your score is: {}", score),
        }
    }
}
