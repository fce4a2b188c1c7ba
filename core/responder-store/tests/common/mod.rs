//! Shared fixtures for store tests.

#![allow(dead_code)]

use responder_store::QuestionStore;
use std::path::PathBuf;
use tempfile::TempDir;

pub const FIRST_QUESTION_ID: &str = "50f9e662-fa0e-4ec7-b53b-7845e8f821c3";
pub const SECOND_QUESTION_ID: &str = "00f3dd43-ae53-4430-8da1-b722e034c73d";
pub const FIRST_ANSWER_ID: &str = "ce7bddfb-0544-4b14-92d8-188b03c41ee4";
pub const SECOND_ANSWER_ID: &str = "d498c0a3-5be2-4354-a3bc-78673aca0f31";

/// Two questions: the first without answers, the second with two.
pub fn sample_document() -> String {
    format!(
        r#"[
  {{"id":"{FIRST_QUESTION_ID}","summary":"What is my name?","author":"Jack London","answers":[]}},
  {{"id":"{SECOND_QUESTION_ID}","summary":"Who are you?","author":"Tim Doods","answers":[
    {{"id":"{FIRST_ANSWER_ID}","author":"Brian McKenzie","summary":"The Earth is flat."}},
    {{"id":"{SECOND_ANSWER_ID}","author":"Dr Strange","summary":"It is egg-shaped."}}
  ]}}
]"#
    )
}

/// A store over a fresh file in its own temporary directory.
///
/// Keep the returned `TempDir` alive for the duration of the test.
pub fn store_with(contents: &str) -> (TempDir, PathBuf, QuestionStore) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.json");
    std::fs::write(&path, contents).unwrap();
    let store = QuestionStore::open(&path);
    (dir, path, store)
}

pub fn sample_store() -> (TempDir, PathBuf, QuestionStore) {
    store_with(&sample_document())
}
