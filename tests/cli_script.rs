use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn script(home: &TempDir, input: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("solo_finance_cli")
        .unwrap()
        .env("SOLO_FINANCE_CLI_SCRIPT", "1")
        .env("SOLO_FINANCE_HOME", home.path())
        .env_remove("RUST_LOG")
        .write_stdin(input.to_string())
        .assert()
}

#[test]
fn script_mode_records_and_scores() {
    let home = TempDir::new().unwrap();
    script(
        &home,
        "add salary 1000 Paycheck\nadd unplanned 200 \"Late night taxi\"\nstatus\nexit\n",
    )
    .success()
    .stdout(contains("Recorded Salary: Paycheck (R$ 1000.00, 10 pts)"))
    .stdout(contains("Recorded Unplanned Expense: Late night taxi (R$ 200.00, -10 pts)"))
    .stdout(contains("R$ 800.00"))
    .stdout(contains("Novice (30 pts to B-Rank Hunter)"));
}

#[test]
fn invalid_submissions_print_nothing() {
    let home = TempDir::new().unwrap();
    script(&home, "add planned 0 Coffee\nadd planned abc Coffee\nadd salary 50 \"\"\n")
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn history_lists_newest_first() {
    let home = TempDir::new().unwrap();
    let assert = script(&home, "add salary 100 alpha\nadd investment 50 omega\nhistory\n").success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let history = &stdout[stdout.find("=== History ===").unwrap()..];
    assert!(history.find("omega").unwrap() < history.find("alpha").unwrap());
}

#[test]
fn unknown_command_suggests_a_fix() {
    let home = TempDir::new().unwrap();
    script(&home, "stauts\n")
        .success()
        .stderr(contains("Did you mean `status`?"));
}

#[test]
fn form_is_refused_in_script_mode() {
    let home = TempDir::new().unwrap();
    script(&home, "form\n")
        .success()
        .stderr(contains("`form` needs an interactive terminal"));
}

#[test]
fn currency_symbol_is_configurable_and_persists() {
    let home = TempDir::new().unwrap();
    script(&home, "config set currency US$\n")
        .success()
        .stdout(contains("Set currency = US$"));
    script(&home, "add salary 12.5 Tips\n")
        .success()
        .stdout(contains("US$ 12.50"));
}
