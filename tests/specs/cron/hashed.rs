//! Hashed cron specs
//!
//! Expansion is stable for a given hash id, and firing times follow it.

use crate::prelude::*;

fn cron(temp: &Project, args: &[&str]) -> RunAssert {
    temp.knack()
        .args(["cron", "--hash-id", "hello", "--start", "2020-01-01T00:00:00"])
        .args(args)
        .passes()
}

#[test]
fn hourly_hash() {
    let temp = Project::empty();
    cron(&temp, &["H * * * *", "-n", "3"]).stdout_eq(
        "10 * * * *\n2020-01-01 00:10:00\n2020-01-01 01:10:00\n2020-01-01 02:10:00\n",
    );
}

#[test]
fn daily_alias_includes_seconds() {
    let temp = Project::empty();
    cron(&temp, &["@daily", "-n", "2"])
        .stdout_eq("10 11 * * * 32\n2020-01-01 11:10:32\n2020-01-02 11:10:32\n");
}

#[test]
fn midnight_alias_stays_in_early_hours() {
    let temp = Project::empty();
    cron(&temp, &["@midnight", "-n", "1"]).stdout_eq("10 2 * * * 32\n2020-01-01 02:10:32\n");
}

#[test]
fn uppercase_and_lowercase_agree() {
    let temp = Project::empty();
    let upper = cron(&temp, &["H H * * *", "-n", "1"]).stdout();
    let lower = cron(&temp, &["h h * * *", "-n", "1"]).stdout();
    assert_eq!(upper, lower);
}

#[test]
fn walks_backwards() {
    let temp = Project::empty();
    cron(&temp, &["H * * * *", "-n", "2", "--prev"])
        .stdout_eq("10 * * * *\n2019-12-31 23:10:00\n2019-12-31 22:10:00\n");
}

#[test]
fn plain_expression_needs_no_hash_id() {
    let temp = Project::empty();
    temp.knack()
        .args(["cron", "30 4 * * 1", "--start", "2020-01-01", "-n", "1"])
        .passes()
        .stdout_eq("30 4 * * 1\n2020-01-06 04:30:00\n");
}

#[test]
fn json_output() {
    let temp = Project::empty();
    cron(&temp, &["H * * * *", "-n", "1", "--format", "json"])
        .stdout_has("\"expression\": \"H * * * *\"")
        .stdout_has("\"expanded\": \"10 * * * *\"")
        .stdout_has("\"2020-01-01T00:10:00\"");
}

#[test]
fn random_fields_stay_in_range() {
    let temp = Project::empty();
    temp.knack()
        .args(["cron", "R(10-20) * * * *", "-n", "0"])
        .passes()
        .stdout_matches(r"^(1\d|20) \* \* \* \*\n$");
}
