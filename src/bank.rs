use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use sha2::{Digest, Sha256};

use crate::error::BankError;
use crate::locale::Locale;
use crate::model::*;

/// Where question banks are read from.
#[derive(Debug, Clone)]
pub struct BankSource {
    pub data_dir: PathBuf,
    pub bank_override: Option<PathBuf>,
}

impl BankSource {
    pub fn new(data_dir: PathBuf, bank_override: Option<PathBuf>) -> Self {
        Self {
            data_dir,
            bank_override,
        }
    }

    /// `--bank` wins over the locale's file in the data directory.
    pub fn path_for(&self, locale: Locale) -> PathBuf {
        match &self.bank_override {
            Some(path) => path.clone(),
            None => self.data_dir.join(locale.bank_file_name()),
        }
    }

    pub fn load(&self, locale: Locale) -> Result<QuestionBank, BankError> {
        let bank = load_bank(&self.path_for(locale))?;
        if let Some(declared) = bank.locale {
            if declared != locale {
                log::warn!(
                    "{} declares locale {:?} but {:?} was selected",
                    bank.bank_file,
                    declared,
                    locale
                );
            }
        }
        Ok(bank)
    }
}

fn has_any_bank(dir: &Path) -> bool {
    Locale::ALL
        .iter()
        .any(|l| dir.join(l.bank_file_name()).is_file())
}

/// Pick the data directory: explicit argument, then the working directory
/// if it holds a bank, then the platform data directory.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf, BankError> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }

    if let Ok(cwd) = std::env::current_dir() {
        if has_any_bank(&cwd) {
            return Ok(cwd);
        }
    }

    ProjectDirs::from("", "", "quizgame")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(BankError::NotFound)
}

pub fn load_bank(path: &Path) -> Result<QuestionBank, BankError> {
    let content = fs::read_to_string(path).map_err(|source| BankError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let bank_file = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    let bank = parse_bank(&content, &bank_file)?;
    log::info!(
        "loaded {} ({} questions, {})",
        path.display(),
        bank.questions.len(),
        bank.bank_hash
    );
    Ok(bank)
}

pub fn parse_bank(content: &str, bank_file: &str) -> Result<QuestionBank, BankError> {
    let (frontmatter, body) = split_frontmatter(content)?;
    let fm: Frontmatter = match frontmatter {
        Some(text) if !text.is_empty() => serde_yaml::from_str(text)?,
        _ => Frontmatter::default(),
    };

    let (h1_title, questions) = parse_body(body)?;

    for q in &questions {
        if q.correct_count() == 0 {
            log::warn!(
                "{}: question {} has no choice marked correct",
                bank_file,
                q.number
            );
        }
    }

    Ok(QuestionBank {
        title: fm.title.or(h1_title),
        locale: fm.locale,
        questions,
        bank_file: bank_file.to_string(),
        bank_hash: fingerprint(content.as_bytes()),
    })
}

fn split_frontmatter(content: &str) -> Result<(Option<&str>, &str), BankError> {
    let trimmed = content.trim_start();
    let Some(after_first) = trimmed.strip_prefix("---") else {
        return Ok((None, content));
    };

    let end_pos = after_first
        .find("\n---")
        .ok_or(BankError::UnterminatedFrontmatter)?;

    let fm = after_first[..end_pos].trim();
    let body = &after_first[end_pos + 4..];

    Ok((Some(fm), body))
}

#[derive(Default)]
struct PendingQuestion {
    prompt: String,
    detail: Vec<String>,
    choices: Vec<Choice>,
}

fn parse_body(body: &str) -> Result<(Option<String>, Vec<Question>), BankError> {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TASKLISTS);
    opts.insert(Options::ENABLE_STRIKETHROUGH);

    let mut title: Option<String> = None;
    let mut questions: Vec<Question> = Vec::new();
    let mut current: Option<PendingQuestion> = None;

    let mut in_h1 = false;
    let mut in_h2 = false;
    let mut h1_text = String::new();
    let mut in_list_item = false;
    let mut item_text = String::new();
    let mut item_source = String::new();
    let mut task_checked: Option<bool> = None;

    for (event, range) in Parser::new_ext(body, opts).into_offset_iter() {
        match event {
            Event::Start(Tag::Heading { level, .. }) => match level {
                HeadingLevel::H1 => {
                    in_h1 = true;
                    h1_text.clear();
                }
                HeadingLevel::H2 => {
                    if let Some(pending) = current.take() {
                        finalize_question(pending, &mut questions)?;
                    }
                    current = Some(PendingQuestion::default());
                    in_h2 = true;
                }
                _ => {}
            },
            Event::End(TagEnd::Heading(level)) => match level {
                HeadingLevel::H1 => {
                    in_h1 = false;
                    if title.is_none() && !h1_text.trim().is_empty() {
                        title = Some(h1_text.trim().to_string());
                    }
                }
                HeadingLevel::H2 => in_h2 = false,
                _ => {}
            },
            Event::Start(Tag::Item) => {
                in_list_item = true;
                item_text.clear();
                item_source = body[range].trim().to_string();
                task_checked = None;
            }
            Event::End(TagEnd::Item) => {
                in_list_item = false;
                if let Some(q) = current.as_mut() {
                    match task_checked {
                        Some(checked) => {
                            q.choices.push(Choice::new(item_text.trim(), checked));
                        }
                        None if !item_text.trim().is_empty() => {
                            q.detail.push(item_source.clone());
                        }
                        None => {}
                    }
                }
                task_checked = None;
            }
            Event::TaskListMarker(checked) => {
                task_checked = Some(checked);
            }
            Event::Start(Tag::Paragraph) | Event::Start(Tag::CodeBlock(_)) => {
                if in_list_item {
                    continue;
                }
                if let Some(q) = current.as_mut() {
                    let source = body[range].trim_end();
                    if !source.trim().is_empty() {
                        q.detail.push(source.to_string());
                    }
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if in_h1 {
                    h1_text.push_str(&text);
                } else if in_h2 {
                    if let Some(q) = current.as_mut() {
                        q.prompt.push_str(&text);
                    }
                } else if in_list_item {
                    item_text.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if in_list_item {
                    item_text.push(' ');
                }
            }
            _ => {}
        }
    }

    if let Some(pending) = current.take() {
        finalize_question(pending, &mut questions)?;
    }

    Ok((title, questions))
}

fn finalize_question(
    pending: PendingQuestion,
    questions: &mut Vec<Question>,
) -> Result<(), BankError> {
    let number = questions.len() as u32 + 1;
    let prompt = strip_numbering(pending.prompt.trim()).to_string();

    if pending.choices.is_empty() {
        return Err(BankError::NoChoices { number, prompt });
    }

    questions.push(Question {
        number,
        prompt,
        detail: pending.detail,
        choices: pending.choices,
    });
    Ok(())
}

/// "3. Which ..." -> "Which ...". Headings without a number are left alone.
fn strip_numbering(text: &str) -> &str {
    let digits = text.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return text;
    }
    match text[digits..].strip_prefix('.') {
        Some(rest) if rest.starts_with(' ') => rest.trim_start(),
        _ => text,
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

pub fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let result = hasher.finalize();
    format!("sha256:{}", hex_encode(&result))
}

/// Loads every bank the source can reach and prints a summary line for each.
pub fn print_check(source: &BankSource) -> Result<(), BankError> {
    let locales: Vec<Locale> = if source.bank_override.is_some() {
        vec![Locale::default()]
    } else {
        Locale::ALL.to_vec()
    };

    for locale in locales {
        let path = source.path_for(locale);
        let bank = source.load(locale)?;
        let unmarked = bank
            .questions
            .iter()
            .filter(|q| q.correct_count() == 0)
            .count();
        println!("{}", path.display());
        println!("  Title: {}", bank.display_title(locale));
        println!("  Questions: {}", bank.questions.len());
        if unmarked > 0 {
            println!("  Without a correct choice: {}", unmarked);
        }
        println!("  Fingerprint: {}", bank.bank_hash);
    }
    Ok(())
}
