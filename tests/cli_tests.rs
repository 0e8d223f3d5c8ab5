use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mastermind_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mastermind"));
    cmd.env_remove("MASTERMIND_CONFIG");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Secret drawn for a seed, as color names
fn secret_for_seed(seed: u64) -> Vec<String> {
    let output = mastermind_cmd()
        .args(["generate", "--json", "--seed", &seed.to_string()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    json["secret"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c.as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    mastermind_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("color code"));
}

#[test]
fn test_version() {
    mastermind_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mastermind"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp_dir = TempDir::new().unwrap();

    mastermind_cmd()
        .args(["--config", "nope.toml", "generate"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

// =============================================================================
// Score
// =============================================================================

#[test]
fn test_score_partial_match() {
    mastermind_cmd()
        .args(["score", "red red blue green", "red blue red yellow"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 correct, 2 wrong position"));
}

#[test]
fn test_score_exact_match_is_solved() {
    mastermind_cmd()
        .args(["score", "r,b,g,y", "red,blue,green,yellow"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 correct, 0 wrong position"))
        .stdout(predicate::str::contains("Solved"));
}

#[test]
fn test_score_json() {
    let output = mastermind_cmd()
        .args([
            "score",
            "red blue green yellow",
            "yellow green blue red",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["correct"], 0);
    assert_eq!(json["wrong_position"], 4);
    assert_eq!(json["solved"], false);
    assert_eq!(
        json["feedback"],
        serde_json::json!([
            "wrong-position",
            "wrong-position",
            "wrong-position",
            "wrong-position"
        ])
    );
}

#[test]
fn test_score_positional_json() {
    let output = mastermind_cmd()
        .args([
            "score",
            "red blue green yellow",
            "red green orange yellow",
            "--positional",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json["feedback"],
        serde_json::json!(["correct", "wrong-position", "incorrect", "correct"])
    );
}

#[test]
fn test_score_length_mismatch_fails() {
    mastermind_cmd()
        .args(["score", "red blue green yellow", "red blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid guess"))
        .stderr(predicate::str::contains("expected 4 colors, got 2"));
}

#[test]
fn test_score_unknown_color_fails() {
    mastermind_cmd()
        .args(["score", "red blue green teal", "red blue green yellow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid secret"));
}

#[test]
fn test_score_color_outside_palette_fails() {
    // brown exists but is not one of the six game colors
    mastermind_cmd()
        .args(["score", "red blue green yellow", "brown blue green yellow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in the palette"));
}

// =============================================================================
// Generate
// =============================================================================

#[test]
fn test_generate_is_seeded() {
    let first = secret_for_seed(7);
    let second = secret_for_seed(7);
    assert_eq!(first, second);
    assert_eq!(first.len(), 4);
}

#[test]
fn test_generate_text() {
    mastermind_cmd()
        .args(["generate", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// =============================================================================
// Play
// =============================================================================

#[test]
fn test_play_win_with_known_secret() {
    let secret = secret_for_seed(11).join(" ");

    mastermind_cmd()
        .args(["play", "--seed", "11"])
        .write_stdin(format!("{}\nquit\n", secret))
        .assert()
        .success()
        .stdout(predicate::str::contains("You won!"))
        .stdout(predicate::str::contains("in 1 attempt!"))
        .stdout(predicate::str::contains("Games won: 1  lost: 0"));
}

#[test]
fn test_play_lose_after_ten_guesses() {
    let secret = secret_for_seed(5);
    let miss = ["red", "blue", "green", "yellow", "purple", "orange"]
        .into_iter()
        .find(|c| !secret.iter().any(|s| s == c))
        .unwrap();
    let guess = format!("{miss} {miss} {miss} {miss}\n");

    mastermind_cmd()
        .args(["play", "--seed", "5"])
        .write_stdin(guess.repeat(10))
        .assert()
        .success()
        .stdout(predicate::str::contains("Game over."))
        .stdout(predicate::str::contains("The secret code was:"))
        .stdout(predicate::str::contains(secret.join(" ")))
        .stdout(predicate::str::contains("Games won: 0  lost: 1"));
}

#[test]
fn test_play_reports_invalid_input() {
    mastermind_cmd()
        .args(["play", "--seed", "1"])
        .write_stdin("red blue\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid guess:"))
        .stdout(predicate::str::contains("[1/10] >"));
}

// =============================================================================
// Config
// =============================================================================

#[test]
fn test_config_defaults_without_file() {
    let temp_dir = TempDir::new().unwrap();

    mastermind_cmd()
        .arg("config")
        .current_dir(temp_dir.path())
        .env("HOME", temp_dir.path())
        .env("XDG_CONFIG_HOME", temp_dir.path().join(".config"))
        .assert()
        .success()
        .stdout(predicate::str::contains("using defaults"))
        .stdout(predicate::str::contains("confetti = true"));
}

#[test]
fn test_config_reads_working_directory_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("mastermind.toml"),
        "[tui]\ndark_mode = true\n",
    )
    .unwrap();

    mastermind_cmd()
        .arg("config")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded from"))
        .stdout(predicate::str::contains("dark_mode = true"));
}

#[test]
fn test_config_init_refuses_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("conf").join("mastermind.toml");

    mastermind_cmd()
        .args(["config", "--init", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(path.exists());

    mastermind_cmd()
        .args(["config", "--init", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("mastermind.toml"), "[tui\n").unwrap();

    mastermind_cmd()
        .arg("config")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
