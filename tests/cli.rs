//! End-to-end tests for the `nimbus` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A binary invocation isolated from the user's home and config.
fn nimbus(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("nimbus").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("NIMBUS_DATA_FILE")
        .env_remove("NIMBUS_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn interactive_session_adds_lists_and_saves() {
    let home = TempDir::new().unwrap();

    nimbus(&home)
        .write_stdin("todo read book\ndeadline return book /by 2024-01-01\nlist\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello! I'm"))
        .stdout(predicate::str::contains("1. [T][ ] read book"))
        .stdout(predicate::str::contains("2. [D][ ] return book (by: Jan 01 2024)"))
        .stdout(predicate::str::contains("Bye. Hope to see you again soon!"));

    let saved = std::fs::read_to_string(home.path().join(".nimbus").join("tasks.txt")).unwrap();
    assert_eq!(saved, "T|0|read book\nD|0|return book|2024-01-01\n");
}

#[test]
fn interactive_session_recovers_from_bad_lines() {
    let home = TempDir::new().unwrap();

    nimbus(&home)
        .write_stdin("blah\nmark one\nremove 5\nevent party /from 2024-02-01\ntodo ok\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("I don't know the command 'blah'"))
        .stdout(predicate::str::contains("'one' is not a task number"))
        .stdout(predicate::str::contains("task 5 does not exist"))
        .stdout(predicate::str::contains("missing option: /to"))
        .stdout(predicate::str::contains("1. [T][ ] ok"));
}

#[test]
fn exec_persists_across_invocations() {
    let home = TempDir::new().unwrap();
    let data = home.path().join("list.txt");

    nimbus(&home)
        .arg("-f")
        .arg(&data)
        .args(["exec", "todo", "read", "book"])
        .assert()
        .success();
    nimbus(&home)
        .arg("-f")
        .arg(&data)
        .args(["exec", "todo", "buy", "milk"])
        .assert()
        .success();
    nimbus(&home)
        .arg("-f")
        .arg(&data)
        .args(["exec", "remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("read book"));

    nimbus(&home)
        .arg("-f")
        .arg(&data)
        .args(["exec", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [T][ ] buy milk"))
        .stdout(predicate::str::contains("read book").not());
}

#[test]
fn exec_failure_exits_non_zero_and_keeps_file() {
    let home = TempDir::new().unwrap();
    let data = home.path().join("list.txt");
    std::fs::write(&data, "T|0|read book\n").unwrap();

    nimbus(&home)
        .arg("-f")
        .arg(&data)
        .args(["exec", "mark", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("task 2 does not exist"));

    assert_eq!(std::fs::read_to_string(&data).unwrap(), "T|0|read book\n");
}

#[test]
fn exec_find_as_json() {
    let home = TempDir::new().unwrap();
    let data = home.path().join("list.txt");
    std::fs::write(&data, "T|0|read book\nT|1|buy milk\n").unwrap();

    let output = nimbus(&home)
        .arg("-f")
        .arg(&data)
        .args(["-o", "json", "exec", "find", "book"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["action"], "found");
    assert_eq!(value["matches"].as_array().unwrap().len(), 1);
    assert_eq!(value["matches"][0]["task"]["description"], "read book");
}

#[test]
fn corrupt_task_file_is_fatal_and_untouched() {
    let home = TempDir::new().unwrap();
    let data = home.path().join("list.txt");
    std::fs::write(&data, "T|0|fine\nZ|9|broken\n").unwrap();

    nimbus(&home)
        .arg("-f")
        .arg(&data)
        .write_stdin("todo more\nbye\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("task file line 2"));

    assert_eq!(
        std::fs::read_to_string(&data).unwrap(),
        "T|0|fine\nZ|9|broken\n"
    );
}

#[test]
fn config_sets_output_format_and_data_file() {
    let home = TempDir::new().unwrap();
    let data = home.path().join("configured.txt");
    let config = home.path().join("config.yaml");
    std::fs::write(
        &config,
        format!(
            "general:\n  default_output: json\nstorage:\n  data_file: {}\n",
            data.display()
        ),
    )
    .unwrap();

    nimbus(&home)
        .arg("--config")
        .arg(&config)
        .args(["exec", "todo", "read", "book"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"action\":\"added\""));

    assert!(data.exists());
}

#[test]
fn completions_are_generated() {
    let home = TempDir::new().unwrap();

    nimbus(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nimbus"));
}
