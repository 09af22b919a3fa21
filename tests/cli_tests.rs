use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn small_utils() -> Command {
    let mut cmd = Command::cargo_bin("small-utils").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_add_prints_sum() {
    small_utils()
        .args(["add", "2", "3"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_add_accepts_negative_numbers() {
    small_utils()
        .args(["add", "-2", "-3.5"])
        .assert()
        .success()
        .stdout("-5.5\n");
}

#[test]
fn test_double_prints_twice_the_value() {
    small_utils()
        .args(["double", "3"])
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn test_non_finite_results_are_printed_as_numbers() {
    small_utils()
        .args(["double", "NaN"])
        .assert()
        .success()
        .stdout("NaN\n");

    small_utils()
        .args(["add", "1e308", "1e308"])
        .assert()
        .success()
        .stdout("inf\n");

    small_utils()
        .args(["--format", "json", "add", "1e308", "1e308"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"result\": \"inf\""));
}

#[test]
fn test_average_of_values() {
    small_utils()
        .args(["average", "1", "2", "3", "4"])
        .assert()
        .success()
        .stdout("2.5\n");
}

#[test]
fn test_average_without_values_fails_with_input_exit_code() {
    small_utils()
        .arg("average")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("empty sequence"));
}

#[test]
fn test_average_reads_csv_file() {
    let csv = temp_file("1,2\n3,4\n");
    small_utils()
        .args(["average", "--file"])
        .arg(csv.path())
        .assert()
        .success()
        .stdout("2.5\n");
}

#[test]
fn test_average_with_missing_csv_file_is_io_error() {
    small_utils()
        .args(["average", "--file", "/nonexistent/numbers.csv"])
        .assert()
        .code(3);
}

#[test]
fn test_average_with_bad_csv_field_is_input_error() {
    let csv = temp_file("1,two\n");
    small_utils()
        .args(["average", "--file"])
        .arg(csv.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("two"));
}

#[test]
fn test_check_text() {
    small_utils()
        .args(["check-text", "hello"])
        .assert()
        .success()
        .stdout("true\n");

    small_utils()
        .args(["check-text", "   "])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn test_hold_prints_last_value_or_unset() {
    small_utils()
        .args(["hold", "first", "second"])
        .assert()
        .success()
        .stdout("second\n");

    small_utils()
        .arg("hold")
        .assert()
        .success()
        .stdout("(unset)\n");
}

#[test]
fn test_hold_accepts_values_starting_with_hyphen() {
    small_utils()
        .args(["hold", "-5"])
        .assert()
        .success()
        .stdout("-5\n");
}

#[test]
fn test_json_output() {
    small_utils()
        .args(["--format", "json", "add", "2", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"operation\": \"add\""));
}

#[test]
fn test_config_file_sets_precision_and_text_rules() {
    let config = temp_file(
        r#"
[output]
precision = 2

[text]
max_length = 3
"#,
    );

    small_utils()
        .arg("--config")
        .arg(config.path())
        .args(["average", "1", "2"])
        .assert()
        .success()
        .stdout("1.50\n");

    small_utils()
        .arg("--config")
        .arg(config.path())
        .args(["check-text", "abcd"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn test_invalid_config_exits_with_config_code() {
    let config = temp_file("[csv]\ndelimiter = \"::\"\n");
    small_utils()
        .arg("--config")
        .arg(config.path())
        .args(["double", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("csv.delimiter"));
}

#[test]
fn test_unknown_subcommand_is_rejected() {
    small_utils().arg("multiply").assert().failure();
}
