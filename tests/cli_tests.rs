use glyphbreak::cipher::transcript::PRESUMED_ANSWER;
use glyphbreak::cipher::Ciphertext;
use glyphbreak::history::History;
use glyphbreak::key::Key;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    _dir: TempDir,
    history_path: PathBuf,
    dictionary_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let history_path = dir.path().join("checked_keys.json");
        let dictionary_path = dir.path().join("words");
        fs::write(&dictionary_path, "the\nof\na\nand\nto\n").unwrap();

        Self {
            _dir: dir,
            history_path,
            dictionary_path,
        }
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_glyphbreak"))
            .args(args)
            .arg("--history")
            .arg(&self.history_path)
            .output()
            .expect("Failed to execute binary")
    }

    fn dictionary(&self) -> &str {
        self.dictionary_path.to_str().unwrap()
    }
}

#[test]
fn test_cli_stats() {
    let ctx = TestContext::new();
    let output = ctx.run(&["stats", "--basis", "raw", "--words", "3"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("860"));
    assert!(stdout.contains("Symbol frequencies (raw)"));
    assert!(stdout.contains("1 12 4"));
}

#[test]
fn test_cli_show_given_key() {
    let ctx = TestContext::new();
    let output = ctx.run(&[
        "show",
        "--key",
        "((2, 'a'), (1, 't'), (12, 'h'), (4, 'e'), (8, 'o'), (11, 'f'))",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("the ???a??o? of a???a??e"), "{}", stdout);
}

#[test]
fn test_cli_show_without_history_fails() {
    let ctx = TestContext::new();
    let output = ctx.run(&["show"]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_search_then_rank() {
    let ctx = TestContext::new();
    let output = ctx.run(&[
        "search",
        "--dictionary",
        ctx.dictionary(),
        "--length",
        "8",
        "--count",
        "25",
        "--seed",
        "7",
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let saved = fs::read_to_string(&ctx.history_path).unwrap();
    let parsed: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&saved).unwrap();
    assert_eq!(parsed.len(), 25);

    let output = ctx.run(&["rank", "-n", "3"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Top 3 of 25 checked keys"), "{}", stdout);
}

#[test]
fn test_cli_polish_with_config_file() {
    let ctx = TestContext::new();
    let config_path = ctx.history_path.with_file_name("config.json");
    fs::write(
        &config_path,
        format!(
            r#"{{ "search": {{ "depth": 2, "breadth": 5 }}, "lexicon": {{ "dictionary": "{}" }} }}"#,
            ctx.dictionary()
        ),
    )
    .unwrap();

    let output = ctx.run(&[
        "polish",
        "--config",
        config_path.to_str().unwrap(),
        "--breadth",
        "4",
        "--key",
        "((2, 'a'), (1, 't'), (12, 'h'), (4, 'e'), (8, 'o'), (11, 'f'))",
        "--seed",
        "3",
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let saved = fs::read_to_string(&ctx.history_path).unwrap();
    let parsed: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&saved).unwrap();
    // 2 rounds from the file, 4 keys per round from the command line.
    assert_eq!(parsed.len(), 8);
}

#[test]
fn test_cli_search_uses_configured_key_length() {
    let ctx = TestContext::new();
    let output = ctx.run(&[
        "search",
        "--dictionary",
        ctx.dictionary(),
        "--key-length",
        "3",
        "--count",
        "10",
        "--seed",
        "5",
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let saved = fs::read_to_string(&ctx.history_path).unwrap();
    let parsed: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&saved).unwrap();
    assert_eq!(parsed.len(), 10);
    for text in parsed.keys() {
        let key: Key = text.parse().unwrap();
        assert_eq!(key.len(), 3, "{}", text);
    }
}

#[test]
fn test_cli_show_finds_score_for_reordered_key() {
    let ctx = TestContext::new();
    let cipher = Ciphertext::transcript().unwrap();
    let mut history = History::new();
    history.record(&cipher.key(PRESUMED_ANSWER).unwrap(), 0.42);
    history.save_to_file(&ctx.history_path).unwrap();

    let mut reversed = PRESUMED_ANSWER.to_vec();
    reversed.reverse();
    let typed = Key::new(reversed).unwrap().to_string();

    let output = ctx.run(&["show", "--key", &typed]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("score: 0.4200"), "{}", stdout);
}

#[test]
fn test_cli_show_rejects_search_options() {
    let ctx = TestContext::new();
    let output = ctx.run(&["show", "--depth", "5", "--key", "((1, 't'),)"]);
    assert!(!output.status.success());
}
