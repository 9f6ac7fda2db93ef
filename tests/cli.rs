// CLI surface tests for the metadata subcommands and configuration errors.
// The interactive `run` path needs a TTY and is covered by the headless
// integration tests instead.

use assert_cmd::Command;

#[test]
fn list_prints_dictionary_groups() {
    let mut cmd = Command::cargo_bin("klack").unwrap();

    cmd.arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Available dictionaries:"))
        .stdout(predicates::str::contains("English"))
        .stdout(predicates::str::contains("english_advanced"));
}

#[test]
fn search_finds_matching_dictionaries() {
    let mut cmd = Command::cargo_bin("klack").unwrap();

    cmd.args(["search", "SPAN"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Dictionaries matching 'SPAN':"))
        .stdout(predicates::str::contains("- spanish"));
}

#[test]
fn search_reports_no_matches() {
    let mut cmd = Command::cargo_bin("klack").unwrap();

    cmd.args(["search", "esperanto"])
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "No dictionaries found for query: esperanto",
        ));
}

#[test]
fn run_with_unknown_dictionary_fails_before_ui() {
    let mut cmd = Command::cargo_bin("klack").unwrap();

    cmd.args(["run", "30", "klingon"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("not found"));
}

#[test]
fn run_with_zero_duration_is_rejected() {
    let mut cmd = Command::cargo_bin("klack").unwrap();

    cmd.args(["run", "0", "english"]).assert().failure();
}

#[test]
fn run_without_tty_is_rejected() {
    // stdin is a pipe under assert_cmd, so a valid configuration still has
    // to fail the tty check before any terminal state is touched
    let mut cmd = Command::cargo_bin("klack").unwrap();

    cmd.args(["run", "30", "english"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("tty"));
}
