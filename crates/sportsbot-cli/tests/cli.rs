use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `sportsbot` command isolated from the caller's config and env.
fn sportsbot(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sportsbot").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("SPORTS_AGENT_PROVIDER")
        .env_remove("OPENAI_API_KEY")
        .env_remove("GOOGLE_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_query_flag() {
    let home = TempDir::new().unwrap();
    sportsbot(&home)
        .args(["-q", "What are the rules of cricket?"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Cricket basics\n"));
}

#[test]
fn test_query_from_stdin() {
    let home = TempDir::new().unwrap();
    sportsbot(&home)
        .write_stdin("  compare player stats for LeBron and Jordan\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Basketball stats guide"));
}

#[test]
fn test_empty_query_exits_non_zero() {
    let home = TempDir::new().unwrap();
    sportsbot(&home)
        .args(["-q", "   "])
        .assert()
        .code(1)
        .stdout("No query provided.\n");

    sportsbot(&home)
        .write_stdin("")
        .assert()
        .code(1)
        .stdout("No query provided.\n");
}

#[cfg(feature = "gemini")]
#[test]
fn test_missing_key_is_reported() {
    let home = TempDir::new().unwrap();
    sportsbot(&home)
        .args(["-p", "gemini", "-q", "Who will win Wimbledon?"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("GOOGLE_API_KEY"));
}

#[cfg(not(feature = "gemini"))]
#[test]
fn test_compiled_out_provider_is_reported() {
    let home = TempDir::new().unwrap();
    sportsbot(&home)
        .env("GOOGLE_API_KEY", "g")
        .args(["-p", "gemini", "-q", "Who will win Wimbledon?"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Provider 'gemini' is not available in this build"));
}

#[test]
fn test_unknown_provider_rejected_by_parser() {
    let home = TempDir::new().unwrap();
    sportsbot(&home)
        .args(["-p", "espn", "-q", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown provider 'espn'"));
}

#[test]
fn test_env_provider_default() {
    let home = TempDir::new().unwrap();
    sportsbot(&home)
        .env("SPORTS_AGENT_PROVIDER", "rule")
        .args(["-q", "tell me a joke"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Which sport are you asking about?"));
}

#[test]
fn test_onboard_writes_config_once() {
    let home = TempDir::new().unwrap();
    sportsbot(&home)
        .arg("onboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));
    assert!(home.path().join(".sportsbot/config.json").exists());

    sportsbot(&home)
        .arg("onboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    // The fresh template selects the rule provider and needs no key.
    sportsbot(&home)
        .args(["-q", "Man United vs Liverpool"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Match summary template (football)"));
}
