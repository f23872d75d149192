use std::fs;

use assert_cmd::Command;
use goofspiel_core::game::serialization::GameSummary;
use goofspiel_core::model::player::Seat;
use predicates::prelude::*;
use tempfile::tempdir;

fn goofspiel() -> Command {
    Command::cargo_bin("goofspiel").expect("binary built")
}

#[test]
fn plays_a_full_game_from_stdin() {
    goofspiel()
        .args(["--seed", "4242"])
        .write_stdin("Ada\n1\n2\n3\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter your name: "))
        .stdout(predicate::str::contains("Here's your hand, Ada: [1, 2, 3, 4]"))
        .stdout(predicate::str::contains("GAME OVER!"))
        .stdout(predicate::str::contains("Final score:"));
}

#[test]
fn reprompts_on_bad_bids() {
    goofspiel()
        .args(["--seed", "1", "--name", "Ada", "--high", "2"])
        .write_stdin("two\n7\n1\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bid must be an integer"))
        .stdout(predicate::str::contains("You don't have that card to bid!"))
        .stdout(predicate::str::contains("Enter your name").not())
        .stdout(predicate::str::contains("GAME OVER!"));
}

#[test]
fn closed_stdin_fails_without_hanging() {
    goofspiel()
        .args(["--seed", "1"])
        .write_stdin("Ada\n3\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input closed"));
}

#[test]
fn seeded_summary_is_reproducible() {
    let dir = tempdir().expect("temp dir");
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");

    for path in [&first, &second] {
        goofspiel()
            .args(["--seed", "77", "--name", "Ada", "--summary-json"])
            .arg(path)
            .write_stdin("4\n3\n2\n1\n")
            .assert()
            .success();
    }

    let a = GameSummary::from_json(&fs::read_to_string(&first).unwrap()).unwrap();
    let b = GameSummary::from_json(&fs::read_to_string(&second).unwrap()).unwrap();
    assert_eq!(a, b);
    assert!(a.finished);
    assert_eq!(a.rounds.len(), 4);
    assert_eq!(a.human.name, "Ada");
    assert_eq!(
        a.human.score + a.ai.score + a.unclaimed,
        1 + 2 + 3 + 4,
        "every prize is either won or left unclaimed"
    );
    assert_eq!(a.human.score, a.points_won(Seat::Human));
}

#[test]
fn config_file_sets_deck_and_names() {
    let dir = tempdir().expect("temp dir");
    let config_path = dir.path().join("game.yaml");
    let log_path = dir.path().join("logs").join("game.jsonl");
    fs::write(
        &config_path,
        format!(
            r#"
deck:
  low: 1
  high: 3
player_name: "Grace"
ai_name: "Bot"
seed: 5
logging:
  enable_structured: true
  tracing_level: "debug"
  path: "{}"
"#,
            log_path.display()
        ),
    )
    .unwrap();

    goofspiel()
        .arg("--config")
        .arg(&config_path)
        .write_stdin("1\n2\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Here's your hand, Grace: [1, 2, 3]"))
        .stdout(predicate::str::contains("Bot: "));

    let logs = fs::read_to_string(&log_path).unwrap();
    assert!(logs.contains("game over"));
}

#[test]
fn validate_only_checks_settings() {
    goofspiel()
        .args(["--validate-only", "--high", "13"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deck 1..=13"));

    goofspiel()
        .args(["--validate-only", "--high", "14"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("deck"));
}

#[test]
fn broken_config_reports_its_path() {
    let dir = tempdir().expect("temp dir");
    let config_path = dir.path().join("broken.yaml");
    fs::write(&config_path, "deck: [not, a, map]\n").unwrap();

    goofspiel()
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.yaml"));
}
