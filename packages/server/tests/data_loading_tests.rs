//! Startup dataset loading from files on disk.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use responder_core::common::ResponderError;
use responder_core::kernel::{MockGenerator, ServerDeps};
use responder_core::Config;
use tempfile::TempDir;

const INTENTS: &str = r#"{
  "intents": [
    {"tag": "greeting", "patterns": ["hello", "hi there"], "responses": ["Hello!"]},
    {"tag": "fracture", "patterns": ["I think my arm is broken"], "responses": ["Keep the arm still."]}
  ]
}"#;

const NUMBERS: &str = r#"[
  {"service": "Women Helpline", "number": "1091"},
  {"service": "Disaster Management", "number": 1078}
]"#;

const HOSPITALS: &str = "State,District,Hospital_Name,Emergency_Num
Maharashtra,Pune,Sassoon General Hospital,02026128000
Delhi,New Delhi,AIIMS,01126588500
";

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn config_for(dir: &Path) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        intents_path: dir.join("intents.json"),
        emergency_numbers_path: dir.join("numbers.json"),
        hospitals_path: dir.join("hospitals.csv"),
        llm_base_url: "http://127.0.0.1:9".to_string(),
        llm_api_key: None,
        llm_model: "test-model".to_string(),
        llm_max_tokens: 100,
        generation_timeout: Duration::from_secs(7),
    }
}

fn dataset_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "intents.json", INTENTS);
    write(dir.path(), "numbers.json", NUMBERS);
    write(dir.path(), "hospitals.csv", HOSPITALS);
    dir
}

fn load(dir: &Path) -> Result<ServerDeps, ResponderError> {
    ServerDeps::load(&config_for(dir), Arc::new(MockGenerator::new()))
}

#[test]
fn loads_all_datasets() {
    let dir = dataset_dir();

    let deps = load(dir.path()).unwrap();

    assert_eq!(deps.responses.len(), 2);
    assert_eq!(deps.classifier.index().len(), 3);
    assert_eq!(deps.matcher.len(), 2);
    assert_eq!(deps.hospitals.len(), 2);
    assert_eq!(deps.generation_timeout, Duration::from_secs(7));
}

#[test]
fn integer_numbers_are_rendered_as_text() {
    let dir = dataset_dir();

    let deps = load(dir.path()).unwrap();

    assert_eq!(
        deps.matcher.find_emergency_number("disaster nearby"),
        Some("Disaster Management: 1078".to_string())
    );
}

#[test]
fn missing_file_fails() {
    let dir = dataset_dir();
    fs::remove_file(dir.path().join("hospitals.csv")).unwrap();

    let err = load(dir.path()).err().unwrap();

    match err {
        ResponderError::DataLoad { path, .. } => assert!(path.ends_with("hospitals.csv")),
        other => panic!("expected DataLoad, got {other:?}"),
    }
}

#[test]
fn malformed_intents_fail() {
    let dir = dataset_dir();
    write(dir.path(), "intents.json", r#"{"intents": [ {"tag": "#);

    let err = load(dir.path()).err().unwrap();

    assert!(matches!(err, ResponderError::DataLoad { .. }));
}

#[test]
fn malformed_numbers_fail() {
    let dir = dataset_dir();
    write(dir.path(), "numbers.json", r#"{"service": "not a list"}"#);

    let err = load(dir.path()).err().unwrap();

    assert!(matches!(err, ResponderError::DataLoad { .. }));
}

#[test]
fn hospital_rows_missing_columns_fail() {
    let dir = dataset_dir();
    write(
        dir.path(),
        "hospitals.csv",
        "State,District,Hospital_Name\nDelhi,New Delhi,AIIMS\n",
    );

    let err = load(dir.path()).err().unwrap();

    assert!(matches!(err, ResponderError::DataLoad { .. }));
}

#[test]
fn intent_without_responses_fails() {
    let dir = dataset_dir();
    write(
        dir.path(),
        "intents.json",
        r#"{"intents": [{"tag": "silent", "patterns": ["hello"], "responses": []}]}"#,
    );

    let err = load(dir.path()).err().unwrap();

    assert!(matches!(err, ResponderError::InvalidData(_)));
}

#[test]
fn intent_without_patterns_key_fails() {
    let dir = dataset_dir();
    write(
        dir.path(),
        "intents.json",
        r#"{"intents": [
            {"tag": "orphan", "responses": ["never matched"]},
            {"tag": "greeting", "patterns": ["hello"], "responses": ["Hello!"]}
        ]}"#,
    );

    let err = load(dir.path()).err().unwrap();

    match err {
        ResponderError::DataLoad { path, .. } => assert!(path.ends_with("intents.json")),
        other => panic!("expected DataLoad, got {other:?}"),
    }
}

#[test]
fn intent_without_responses_key_fails() {
    let dir = dataset_dir();
    write(
        dir.path(),
        "intents.json",
        r#"{"intents": [{"tag": "greeting", "patterns": ["hello"]}]}"#,
    );

    let err = load(dir.path()).err().unwrap();

    assert!(matches!(err, ResponderError::DataLoad { .. }));
}

#[test]
fn bundled_datasets_load() {
    let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let mut config = config_for(&data);
    config.intents_path = data.join("intents.json");
    config.emergency_numbers_path = data.join("emergency_numbers_india.json");
    config.hospitals_path = data.join("hospitals.csv");

    let deps = ServerDeps::load(&config, Arc::new(MockGenerator::new())).unwrap();

    assert!(!deps.responses.is_empty());
    assert!(!deps.matcher.is_empty());
    assert!(!deps.hospitals.is_empty());
}
