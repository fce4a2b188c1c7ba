use pretty_assertions::assert_eq;
use proptest::prelude::*;
use responder_types::{
    Answer, AnswerId, NewAnswer, NewQuestion, Question, QuestionId, ValidationError,
};

// ── Validation ───────────────────────────────────────────────────

#[test]
fn valid_question_input() {
    let (author, summary) = NewQuestion::new("Jack London", "What is my name?")
        .validate()
        .unwrap();
    assert_eq!(author, "Jack London");
    assert_eq!(summary, "What is my name?");
}

#[test]
fn missing_author_is_rejected() {
    let input = NewQuestion {
        author: None,
        summary: Some("Dummy text...".into()),
    };
    assert_eq!(input.validate(), Err(ValidationError::MissingAuthor));
}

#[test]
fn empty_author_is_rejected() {
    let input = NewQuestion::new("", "Dummy text...");
    assert_eq!(input.validate(), Err(ValidationError::MissingAuthor));
}

#[test]
fn missing_summary_is_rejected() {
    let input = NewQuestion {
        author: Some("Dummy author".into()),
        summary: None,
    };
    assert_eq!(input.validate(), Err(ValidationError::MissingSummary));
}

#[test]
fn empty_summary_is_rejected() {
    let input = NewAnswer::new("Dummy author", "");
    assert_eq!(input.validate(), Err(ValidationError::MissingSummary));
}

#[test]
fn both_missing_reports_author_first() {
    assert_eq!(
        NewAnswer::default().validate(),
        Err(ValidationError::MissingAuthor)
    );
}

#[test]
fn validation_error_display() {
    assert!(ValidationError::MissingAuthor.to_string().contains("author"));
    assert!(ValidationError::MissingSummary.to_string().contains("summary"));
}

proptest! {
    #[test]
    fn non_empty_fields_always_validate(author in ".+", summary in ".+") {
        let result = NewQuestion::new(author.clone(), summary.clone()).validate();
        prop_assert_eq!(result, Ok((author, summary)));
    }

    #[test]
    fn empty_author_never_validates(summary in ".*") {
        let result = NewAnswer::new("", summary).validate();
        prop_assert_eq!(result, Err(ValidationError::MissingAuthor));
    }
}

// ── Wire format ──────────────────────────────────────────────────

#[test]
fn input_ignores_unknown_fields() {
    let input: NewQuestion =
        serde_json::from_str(r#"{"author":"A","summary":"S","extra":1}"#).unwrap();
    assert_eq!(input, NewQuestion::new("A", "S"));
}

#[test]
fn input_with_missing_fields_deserializes() {
    let input: NewQuestion = serde_json::from_str(r#"{"summary":"S"}"#).unwrap();
    assert_eq!(input.author, None);
    assert_eq!(input.summary.as_deref(), Some("S"));
}

#[test]
fn question_field_names() {
    let mut q = Question::new(QuestionId::new("q1"), "Jack".into(), "S1".into());
    q.answers.push(Answer::new(AnswerId::new("a1"), "Bob".into(), "X".into()));

    let value = serde_json::to_value(&q).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "id": "q1",
            "author": "Jack",
            "summary": "S1",
            "answers": [{"id": "a1", "author": "Bob", "summary": "X"}]
        })
    );
}

#[test]
fn question_without_answers_field_reads_empty() {
    let q: Question =
        serde_json::from_str(r#"{"id":"q1","author":"A","summary":"S"}"#).unwrap();
    assert!(q.answers.is_empty());
}

#[test]
fn answer_lookup() {
    let mut q = Question::new(QuestionId::new("q1"), "A".into(), "S".into());
    q.answers.push(Answer::new(AnswerId::new("a1"), "B".into(), "X".into()));

    assert_eq!(q.answer(&AnswerId::new("a1")).unwrap().author, "B");
    assert!(q.answer(&AnswerId::new("a2")).is_none());
}
