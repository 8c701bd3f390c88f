//! Help and completion specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    let temp = Project::empty();
    let run = temp.knack().args(["--help"]).passes();
    for command in ["cron", "ewma", "numfmt", "werder", "smwrand", "lock", "write", "completions"] {
        assert!(run.stdout().contains(command), "missing {command}");
    }
}

#[test]
fn version_flag() {
    let temp = Project::empty();
    temp.knack()
        .args(["--version"])
        .passes()
        .stdout_has(env!("CARGO_PKG_VERSION"));
}

#[test]
fn bash_completions() {
    let temp = Project::empty();
    temp.knack()
        .args(["completions", "bash"])
        .passes()
        .stdout_has("_knack()");
}
