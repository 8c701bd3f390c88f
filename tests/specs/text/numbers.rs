//! Number formatting and averaging specs

use crate::prelude::*;

#[test]
fn numfmt_default() {
    let temp = Project::empty();
    temp.knack()
        .args(["numfmt", "12345", "999", "1e6"])
        .passes()
        .stdout_eq("12.35 k\n999.00 \n1.00 M\n");
}

#[test]
fn numfmt_binary_template() {
    let temp = Project::empty();
    temp.knack()
        .args(["numfmt", "--binary", "--template", "{value:.2} {prefix}B", "12345"])
        .passes()
        .stdout_eq("12.06 KiB\n");
}

#[test]
fn numfmt_rollover_and_limit() {
    let temp = Project::empty();
    temp.knack()
        .args(["numfmt", "--rollover", "1.1", "--template", "{value:.2} {prefix}B", "1032456"])
        .passes()
        .stdout_eq("1032.46 kB\n");
    temp.knack()
        .args(["numfmt", "--limit", "2", "--template", "{value:.2} {prefix}B", "123000000000"])
        .passes()
        .stdout_eq("123000.00 MB\n");
}

#[test]
fn numfmt_reads_stdin() {
    let temp = Project::empty();
    temp.knack()
        .args(["numfmt"])
        .stdin("2000\n3000000\n")
        .passes()
        .stdout_eq("2.00 k\n3.00 M\n");
}

#[test]
fn ewma_default_weight() {
    let temp = Project::empty();
    temp.knack()
        .args(["ewma", "1", "2", "3"])
        .passes()
        .stdout_eq("1.359375\n");
}

#[test]
fn ewma_custom_weight_from_stdin() {
    let temp = Project::empty();
    temp.knack()
        .args(["ewma", "--weight", "20"])
        .stdin("1 2 3\n")
        .passes()
        .stdout_eq("1.1475\n");
}

#[test]
fn ewma_json() {
    let temp = Project::empty();
    temp.knack()
        .args(["ewma", "--format", "json", "1", "2", "3"])
        .passes()
        .stdout_has("\"average\": 1.359375")
        .stdout_has("\"count\": 3");
}

#[test]
fn ewma_rejects_zero_weight() {
    let temp = Project::empty();
    temp.knack()
        .args(["ewma", "--weight", "0", "1"])
        .fails()
        .stderr_has("weight must be positive");
}
