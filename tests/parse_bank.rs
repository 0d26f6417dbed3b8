use std::fs;
use std::path::{Path, PathBuf};

use quizgame::bank::{self, BankSource};
use quizgame::error::BankError;
use quizgame::locale::Locale;

#[test]
fn test_parse_fixture_bank() {
    let content = fs::read_to_string("fixtures/askEN.md").expect("Cannot read fixture");
    let bank = bank::parse_bank(&content, "askEN.md").unwrap();

    assert_eq!(bank.title.as_deref(), Some("Fixture Quiz"));
    assert_eq!(bank.locale, Some(Locale::En));
    assert_eq!(bank.bank_file, "askEN.md");
    assert_eq!(bank.questions.len(), 3);

    // Question 1: numbering stripped, detail kept as markdown
    let q1 = &bank.questions[0];
    assert_eq!(q1.number, 1);
    assert_eq!(q1.prompt, "Which number is even?");
    assert_eq!(q1.detail, vec!["Pick **one**.".to_string()]);
    assert_eq!(q1.choices.len(), 3);
    assert_eq!(q1.choices[1].text, "4");
    assert!(q1.choices[1].correct);
    assert!(!q1.choices[0].correct);

    // Question 2: first choice correct
    let q2 = &bank.questions[1];
    assert_eq!(q2.number, 2);
    assert!(q2.choices[0].correct);
    assert_eq!(q2.correct_count(), 1);

    // Question 3: inline code in the prompt, plain bullet becomes detail
    let q3 = &bank.questions[2];
    assert_eq!(q3.prompt, "Which language has the cargo tool?");
    assert_eq!(q3.choices.len(), 2);
    assert_eq!(q3.choices[1].text, "Rust");
    assert!(q3.choices[1].correct);
    assert!(q3.detail.iter().any(|d| d.contains("plain bullets")));
}

#[test]
fn test_heading_title_without_frontmatter() {
    let content = fs::read_to_string("fixtures/askES.md").expect("Cannot read fixture");
    let bank = bank::parse_bank(&content, "askES.md").unwrap();

    assert_eq!(bank.title.as_deref(), Some("Prueba"));
    assert_eq!(bank.locale, None);
    assert_eq!(bank.questions.len(), 1);
    assert_eq!(bank.questions[0].prompt, "¿Cuánto es dos más dos?");
    assert_eq!(bank.display_title(Locale::Es), "Prueba");
}

#[test]
fn test_missing_title_falls_back_to_locale() {
    let bank = bank::parse_bank("## Q\n\n- [x] A\n", "inline.md").unwrap();
    assert_eq!(bank.title, None);
    assert_eq!(bank.display_title(Locale::En), "Quiz Game");
    assert_eq!(bank.display_title(Locale::Es), "Concurso de Preguntas");
}

#[test]
fn test_question_without_choices_is_rejected() {
    let content = fs::read_to_string("fixtures/no_choices.md").expect("Cannot read fixture");
    match bank::parse_bank(&content, "no_choices.md") {
        Err(BankError::NoChoices { number, prompt }) => {
            assert_eq!(number, 2);
            assert_eq!(prompt, "A question without choices");
        }
        other => panic!("Expected NoChoices, got {:?}", other.map(|b| b.questions.len())),
    }
}

#[test]
fn test_invalid_frontmatter() {
    let content = fs::read_to_string("fixtures/bad_frontmatter.md").expect("Cannot read fixture");
    let err = bank::parse_bank(&content, "bad_frontmatter.md").unwrap_err();
    assert!(matches!(err, BankError::Frontmatter(_)));
    assert!(err.to_string().starts_with("invalid frontmatter"));
}

#[test]
fn test_unterminated_frontmatter() {
    let err = bank::parse_bank("---\ntitle: x\n\n## Q\n- [x] A\n", "open.md").unwrap_err();
    assert!(matches!(err, BankError::UnterminatedFrontmatter));
}

#[test]
fn test_empty_bank_is_allowed() {
    let bank = bank::parse_bank("---\ntitle: Empty\n---\n", "empty.md").unwrap();
    assert!(bank.questions.is_empty());
}

#[test]
fn test_duplicate_text_choices_keep_positions() {
    let content = fs::read_to_string("fixtures/duplicate_text.md").expect("Cannot read fixture");
    let bank = bank::parse_bank(&content, "duplicate_text.md").unwrap();

    let q1 = &bank.questions[0];
    assert_eq!(q1.choices[0].text, q1.choices[1].text);
    assert!(!q1.choices[0].correct);
    assert!(q1.choices[1].correct);

    // Kept even though nothing is marked correct
    assert_eq!(bank.questions[1].correct_count(), 0);
}

#[test]
fn test_fingerprint_tracks_content() {
    let a = bank::parse_bank("## Q\n\n- [x] A\n", "a.md").unwrap();
    let b = bank::parse_bank("## Q\n\n- [x] B\n", "b.md").unwrap();
    assert!(a.bank_hash.starts_with("sha256:"));
    assert_eq!(a.bank_hash.len(), "sha256:".len() + 64);
    assert_ne!(a.bank_hash, b.bank_hash);
    assert_eq!(a.bank_hash, bank::fingerprint(b"## Q\n\n- [x] A\n"));
}

#[test]
fn test_source_paths() {
    let source = BankSource::new(PathBuf::from("fixtures"), None);
    assert_eq!(source.path_for(Locale::Es), Path::new("fixtures/askES.md"));
    assert_eq!(source.path_for(Locale::En), Path::new("fixtures/askEN.md"));

    let overridden = BankSource::new(
        PathBuf::from("fixtures"),
        Some(PathBuf::from("fixtures/duplicate_text.md")),
    );
    assert_eq!(
        overridden.path_for(Locale::Es),
        overridden.path_for(Locale::En)
    );
}

#[test]
fn test_load_from_source() {
    let source = BankSource::new(PathBuf::from("fixtures"), None);
    let en = source.load(Locale::En).unwrap();
    let es = source.load(Locale::Es).unwrap();
    assert_eq!(en.questions.len(), 3);
    assert_eq!(es.questions.len(), 1);
}

#[test]
fn test_missing_bank_reports_path() {
    let source = BankSource::new(PathBuf::from("fixtures/does-not-exist"), None);
    let err = source.load(Locale::En).unwrap_err();
    match &err {
        BankError::Io { path, .. } => assert!(path.ends_with("askEN.md")),
        other => panic!("Expected Io, got {:?}", other),
    }
    assert!(err.to_string().contains("askEN.md"));
}

#[test]
fn test_explicit_data_dir_wins() {
    let dir = bank::resolve_data_dir(Some(Path::new("fixtures"))).unwrap();
    assert_eq!(dir, PathBuf::from("fixtures"));
}

#[test]
fn test_bundled_banks_parse() {
    for locale in Locale::ALL {
        let path = Path::new("data").join(locale.bank_file_name());
        let bank = bank::load_bank(&path).unwrap();
        assert_eq!(bank.locale, Some(locale));
        assert!(!bank.questions.is_empty());
        for q in &bank.questions {
            assert_eq!(q.correct_count(), 1, "{} question {}", path.display(), q.number);
        }
    }
}
