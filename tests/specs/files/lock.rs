//! Runtime lock specs

use crate::prelude::*;

#[test]
fn runs_command_and_cleans_up() {
    let temp = Project::empty();
    temp.knack()
        .args(["lock", "--name", "job", "--", "sh", "-c", "cat job.lock"])
        .passes()
        .stdout_matches(r"^ +\d+\n$");
    assert!(!temp.path().join("job.lock").exists());
}

#[test]
fn exit_code_is_passed_through() {
    let temp = Project::empty();
    temp.knack()
        .args(["lock", "--", "sh", "-c", "exit 3"])
        .exits(3);
    assert!(!temp.path().join("sh.lock").exists());
}

#[test]
fn name_defaults_to_command() {
    let temp = Project::empty();
    temp.knack()
        .args(["lock", "--", "sh", "-c", "ls"])
        .passes()
        .stdout_has("sh.lock");
}

#[test]
fn second_holder_is_refused() {
    let temp = Project::empty();
    let knack = assert_cmd::cargo::cargo_bin("knack");
    let knack = knack.to_str().unwrap();
    temp.knack()
        .args(["lock", "--name", "job", "--", knack, "lock", "--name", "job", "--", "true"])
        .exits(1)
        .stderr_has("already locked");
}

#[test]
fn missing_command_fails() {
    let temp = Project::empty();
    temp.knack()
        .args(["lock", "--", "knack-no-such-program"])
        .fails()
        .stderr_has("failed to run");
    assert!(!temp.path().join("knack-no-such-program.lock").exists());
}
