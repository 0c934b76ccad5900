//! End-to-end tests for the `almanac` binary.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;

fn almanac() -> Command {
    let mut cmd = Command::cargo_bin("almanac").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

/// A temp dir with a session file containing the given snapshot.
fn session(snapshot: Value) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, serde_json::to_string_pretty(&snapshot).unwrap()).unwrap();
    (dir, path)
}

fn game_time(path: &Path) -> Value {
    let text = fs::read_to_string(path).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();
    value["gameTime"].clone()
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

// ---------------------------------------------------------------------------
// init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_session_at_epoch() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("campaign.json");

    almanac()
        .args(["init", path_arg(&path)])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Created session")
                .and(predicate::str::contains("08:00:00 AM"))
                .and(predicate::str::contains("Dragon's Rise • Day 1 • Year 124")),
        );

    assert_eq!(
        game_time(&path),
        json!({"seconds": 0, "minutes": 0, "hours": 8, "days": 0, "months": 0, "years": 124})
    );
}

#[test]
fn init_custom_epoch() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("campaign.json");

    almanac()
        .args(["init", path_arg(&path), "--year", "300", "--hour", "20"])
        .assert()
        .success();

    let gt = game_time(&path);
    assert_eq!(gt["hours"], 20);
    assert_eq!(gt["years"], 300);
}

#[test]
fn init_rejects_bad_hour() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("campaign.json");

    almanac()
        .args(["init", path_arg(&path), "--hour", "24"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hours = 24"));
    assert!(!path.exists());
}

#[test]
fn init_refuses_to_overwrite() {
    let (_dir, path) = session(json!({"notes": "precious"}));

    almanac()
        .args(["init", path_arg(&path)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    almanac()
        .args(["init", path_arg(&path), "--force"])
        .assert()
        .success();
    assert_eq!(game_time(&path)["hours"], 8);
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

#[test]
fn show_displays_clock_and_weather() {
    let (_dir, path) = session(json!({
        "gameTime": {
            "seconds": 30, "minutes": 15, "hours": 20, "days": 4, "months": 9,
            "years": 124, "weather": "Snow", "weatherRoll": 8
        }
    }));

    almanac()
        .args(["show", path_arg(&path)])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("08:15:30 PM")
                .and(predicate::str::contains("Sleeping Tiger • Day 5 • Year 124"))
                .and(predicate::str::contains("Winter"))
                .and(predicate::str::contains("Snow"))
                .and(predicate::str::contains("(roll 8)")),
        );
}

#[test]
fn show_before_first_roll_uses_fallbacks() {
    let (_dir, path) = session(json!({
        "gameTime": {"seconds": 0, "minutes": 0, "hours": 8, "days": 0, "months": 0, "years": 124}
    }));

    almanac()
        .args(["show", path_arg(&path)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Calm Skies").and(predicate::str::contains("(roll --)")));
}

#[test]
fn show_rejects_out_of_range_session() {
    let (_dir, path) = session(json!({
        "gameTime": {"seconds": 0, "minutes": 0, "hours": 8, "days": 31, "months": 0, "years": 124}
    }));

    almanac()
        .args(["show", path_arg(&path)])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("invalid session format")
                .and(predicate::str::contains("days = 31")),
        );
}

#[test]
fn show_rejects_non_object_game_time() {
    let (_dir, path) = session(json!({"gameTime": "noon"}));

    almanac()
        .args(["show", path_arg(&path)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be an object"));
}

#[test]
fn show_without_game_time() {
    let (_dir, path) = session(json!({"characters": []}));

    almanac()
        .args(["show", path_arg(&path)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no gameTime"));
}

#[test]
fn show_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");

    almanac()
        .args(["show", path_arg(&path)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot load"));
}

// ---------------------------------------------------------------------------
// advance
// ---------------------------------------------------------------------------

#[test]
fn advance_rest_within_day_keeps_weather() {
    let (_dir, path) = session(json!({
        "gameTime": {
            "seconds": 0, "minutes": 0, "hours": 8, "days": 0, "months": 0,
            "years": 124, "weather": "Overcast", "weatherRoll": 6
        }
    }));

    almanac()
        .args(["advance", "rest", path_arg(&path)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Advanced 8h").and(predicate::str::contains("04:00:00 PM")));

    let gt = game_time(&path);
    assert_eq!(gt["hours"], 16);
    assert_eq!(gt["days"], 0);
    assert_eq!(gt["weather"], "Overcast");
    assert_eq!(gt["weatherRoll"], 6);
}

#[test]
fn advance_rest_across_midnight_rolls_weather() {
    let (_dir, path) = session(json!({
        "gameTime": {"seconds": 0, "minutes": 0, "hours": 20, "days": 0, "months": 0, "years": 124}
    }));

    almanac()
        .args(["advance", "8h", path_arg(&path), "--seed", "3"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Day 2 of Dragon's Rise dawns")
                .and(predicate::str::contains("Weather turns to")),
        );

    let gt = game_time(&path);
    assert_eq!(gt["hours"], 4);
    assert_eq!(gt["days"], 1);
    assert!(gt["weather"].is_string());
    let roll = gt["weatherRoll"].as_u64().unwrap();
    assert!((1..=20).contains(&roll));
}

#[test]
fn advance_triple_carry_into_new_year() {
    let (_dir, path) = session(json!({
        "gameTime": {
            "seconds": 0, "minutes": 0, "hours": 23, "days": 29, "months": 11,
            "years": 124, "weather": "Clear Skies", "weatherRoll": 10
        }
    }));

    almanac()
        .args(["advance", "3600", path_arg(&path)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Year 125 begins"));

    let gt = game_time(&path);
    assert_eq!(
        (&gt["seconds"], &gt["minutes"], &gt["hours"], &gt["days"], &gt["months"], &gt["years"]),
        (&json!(0), &json!(0), &json!(0), &json!(0), &json!(0), &json!(125))
    );
}

#[test]
fn advance_zero_is_a_no_op() {
    let snapshot = json!({
        "gameTime": {
            "seconds": 30, "minutes": 15, "hours": 8, "days": 5, "months": 2,
            "years": 124, "weather": "Rain", "weatherRoll": 3
        }
    });
    let (_dir, path) = session(snapshot.clone());

    almanac()
        .args(["advance", "0", path_arg(&path)])
        .assert()
        .success();

    assert_eq!(game_time(&path), snapshot["gameTime"]);
}

#[test]
fn advance_rejects_negative_delta() {
    let snapshot = json!({
        "gameTime": {"seconds": 0, "minutes": 0, "hours": 8, "days": 0, "months": 0, "years": 124}
    });
    let (_dir, path) = session(snapshot.clone());

    almanac()
        .args(["advance", "-60", path_arg(&path)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("time cannot run backwards"));

    assert_eq!(game_time(&path), snapshot["gameTime"]);
}

#[test]
fn advance_rejects_garbage_delta() {
    let (_dir, path) = session(json!({
        "gameTime": {"seconds": 0, "minutes": 0, "hours": 8, "days": 0, "months": 0, "years": 124}
    }));

    almanac()
        .args(["advance", "a fortnight", path_arg(&path)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid delta"));
}

#[test]
fn advance_preserves_sibling_fields() {
    let (_dir, path) = session(json!({
        "characters": [{"name": "Shan' Zhou", "level": 3}],
        "pinnedEntries": [{"title": "Omen"}],
        "gameTime": {"seconds": 0, "minutes": 0, "hours": 8, "days": 0, "months": 0, "years": 124}
    }));

    almanac()
        .args(["advance", "treat-wounds", path_arg(&path)])
        .assert()
        .success();

    let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["characters"][0]["name"], "Shan' Zhou");
    assert_eq!(value["pinnedEntries"][0]["title"], "Omen");
    assert_eq!(value["gameTime"]["minutes"], 10);
}

#[test]
fn advance_adds_game_time_when_missing() {
    let (_dir, path) = session(json!({"characters": []}));

    almanac()
        .args(["advance", "minute", path_arg(&path)])
        .assert()
        .success();

    let gt = game_time(&path);
    assert_eq!(gt["hours"], 8);
    assert_eq!(gt["minutes"], 1);
}

#[test]
fn advance_with_seed_is_reproducible() {
    let start = json!({
        "gameTime": {"seconds": 0, "minutes": 0, "hours": 12, "days": 3, "months": 5, "years": 124}
    });
    let (_a_dir, a) = session(start.clone());
    let (_b_dir, b) = session(start);

    for path in [&a, &b] {
        almanac()
            .args(["advance", "2d", path_arg(path), "--seed", "7"])
            .assert()
            .success();
    }

    assert_eq!(game_time(&a), game_time(&b));
    assert_eq!(game_time(&a)["days"], 5);
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

#[test]
fn run_ticks_then_saves() {
    let (_dir, path) = session(json!({
        "gameTime": {"seconds": 0, "minutes": 0, "hours": 8, "days": 0, "months": 0, "years": 124}
    }));

    almanac()
        .args(["run", path_arg(&path), "--ticks", "3", "--period-ms", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Halted").and(predicate::str::contains("08:00:03 AM")));

    assert_eq!(game_time(&path)["seconds"], 3);
}

#[test]
fn run_with_larger_step() {
    let (_dir, path) = session(json!({
        "gameTime": {"seconds": 0, "minutes": 0, "hours": 8, "days": 0, "months": 0, "years": 124}
    }));

    almanac()
        .args([
            "run",
            path_arg(&path),
            "--ticks",
            "2",
            "--period-ms",
            "5",
            "--step",
            "60",
        ])
        .assert()
        .success();

    assert_eq!(game_time(&path)["minutes"], 2);
}

// ---------------------------------------------------------------------------
// weather
// ---------------------------------------------------------------------------

#[test]
fn weather_prints_all_tables() {
    almanac()
        .arg("weather")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Spring")
                .and(predicate::str::contains("Winter"))
                .and(predicate::str::contains("Sleet/Blizzard"))
                .and(predicate::str::contains("Scorching Hot")),
        );
}

#[test]
fn weather_single_season_bands() {
    almanac()
        .args(["weather", "--season", "spring"])
        .assert()
        .success()
        .stdout(predicate::str::contains("12-18").and(predicate::str::contains("Clear Skies")));
}

#[test]
fn weather_lookup() {
    almanac()
        .args(["weather", "--season", "spring", "--roll", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spring, roll 12: Warm"));
}

#[test]
fn weather_rejects_bad_input() {
    almanac()
        .args(["weather", "--roll", "25"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 20"));

    almanac()
        .args(["weather", "--season", "monsoon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown season"));
}
