use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pace(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pace").unwrap();
    cmd.env("BUDGET_PACE_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn show_uses_defaults_when_nothing_stored() {
    let dir = TempDir::new().unwrap();

    pace(&dir)
        .args(["show", "--date", "2024-02-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You have spent £0 so far"))
        .stdout(predicate::str::contains("You can spend £34 a day"))
        .stdout(predicate::str::contains("You are 14 days into your budget period"));
}

#[test]
fn stored_inputs_drive_the_summary() {
    let dir = TempDir::new().unwrap();

    pace(&dir).args(["budget", "1000"]).assert().success();
    pace(&dir).args(["spend", "350"]).assert().success();
    pace(&dir).args(["exclude", "50"]).assert().success();

    pace(&dir)
        .args(["show", "--date", "2024-02-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You are £182 ahead of budget"))
        .stdout(predicate::str::contains("You have £700 left in your budget"))
        .stdout(predicate::str::contains("You can now spend £46 a day"));
}

#[test]
fn json_output_carries_summary() {
    let dir = TempDir::new().unwrap();
    pace(&dir).args(["spend", "300"]).assert().success();

    let output = pace(&dir)
        .args(["show", "--date", "2024-02-15", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["summary"]["delta"], 182.0);
    assert_eq!(report["summary"]["status"], "ahead");
    assert_eq!(report["summary"]["window"]["start_date"], "2024-02-01");
    assert_eq!(report["advice"]["kind"], "can_spend_more");
}

#[test]
fn zero_budget_asks_for_a_budget() {
    let dir = TempDir::new().unwrap();
    pace(&dir).args(["budget", "0"]).assert().success();

    pace(&dir)
        .args(["show", "--date", "2024-02-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set a budget to see projections"));

    let output = pace(&dir)
        .args(["show", "--date", "2024-02-15", "--json"])
        .output()
        .unwrap();
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(report["summary"].is_null());
}

#[test]
fn custom_period_rejects_day_after_28() {
    let dir = TempDir::new().unwrap();

    pace(&dir)
        .args(["period", "custom", "--day", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("anchor day must be between 1 and 28"));
}

#[test]
fn custom_period_changes_window() {
    let dir = TempDir::new().unwrap();
    pace(&dir)
        .args(["period", "custom", "--day", "28"])
        .assert()
        .success();

    pace(&dir)
        .args(["show", "--date", "2024-03-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Period: 2024-02-28 to 2024-03-27"))
        .stdout(predicate::str::contains("You are 11 days into your budget period"));
}

#[test]
fn negative_spend_is_accepted() {
    let dir = TempDir::new().unwrap();

    pace(&dir).args(["spend", "-20"]).assert().success();
    pace(&dir)
        .args(["show", "--date", "2024-02-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You have spent -£20 so far"));
}

#[test]
fn forget_and_reset_restore_defaults() {
    let dir = TempDir::new().unwrap();
    pace(&dir).args(["budget", "2900"]).assert().success();

    pace(&dir)
        .args(["forget", "budget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Forgot budget"));

    pace(&dir).args(["spend", "10"]).assert().success();
    pace(&dir).arg("reset").assert().success();

    pace(&dir)
        .args(["show", "--date", "2024-02-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You have spent £0 so far"));
}

#[test]
fn invalid_date_fails() {
    let dir = TempDir::new().unwrap();

    pace(&dir)
        .args(["show", "--date", "15/02/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected YYYY-MM-DD"));
}

#[test]
fn config_lists_paths() {
    let dir = TempDir::new().unwrap();

    pace(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("state.json"));
}

#[test]
fn reset_recovers_from_corrupt_state() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("state.json"), "{ truncated").unwrap();

    pace(&dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("All stored inputs cleared"));

    assert!(dir.path().join("state.json.corrupt").exists());
    let raw = std::fs::read_to_string(dir.path().join("state.json")).unwrap();
    let state: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(state, serde_json::json!({}));
}

#[test]
fn forget_works_with_corrupt_state() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("state.json"), "[1, 2").unwrap();

    pace(&dir)
        .args(["forget", "spend"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing stored for spend"));
}

#[test]
fn config_reports_corrupt_settings_and_init_restores_them() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ truncated").unwrap();

    pace(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings could not be loaded"))
        .stdout(predicate::str::contains("pace config --init"));

    pace(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default settings"));

    let raw = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    let settings: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(settings["currency_symbol"], "£");

    pace(&dir)
        .args(["show", "--date", "2024-02-15"])
        .assert()
        .success();
}
