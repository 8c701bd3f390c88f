//! Error reporting specs

use crate::prelude::*;

#[test]
fn unknown_command_fails() {
    let temp = Project::empty();
    temp.knack().args(["frobnicate"]).fails();
}

#[test]
fn hashed_cron_without_id_fails() {
    let temp = Project::empty();
    temp.knack()
        .args(["cron", "H * * * *"])
        .fails()
        .stderr_has("hash id");
}

#[test]
fn malformed_cron_fails() {
    let temp = Project::empty();
    temp.knack()
        .args(["cron", "* * *"])
        .fails()
        .stderr_has("bad cron expression");
}

#[test]
fn unknown_month_name_fails() {
    let temp = Project::empty();
    temp.knack()
        .args(["cron", "0 0 1 foo *"])
        .fails()
        .stderr_has("unrecognized name");
}

#[test]
fn bad_number_fails() {
    let temp = Project::empty();
    temp.knack()
        .args(["numfmt"])
        .stdin("12 twelve\n")
        .fails()
        .stderr_has("invalid number");
}

#[test]
fn inverted_werder_bounds_fail() {
    let temp = Project::empty();
    temp.config("[werder]\nwerds_min = 9\nwerds_max = 1\n");
    temp.knack()
        .args(["werder"])
        .fails()
        .stderr_has("invalid werd bounds");
}
