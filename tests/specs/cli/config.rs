//! Config file specs

use crate::prelude::*;

#[test]
fn numfmt_section_sets_defaults() {
    let temp = Project::empty();
    temp.config("[numfmt]\nbinary = true\n");
    temp.knack()
        .args(["numfmt", "2048"])
        .passes()
        .stdout_eq("2.00 Ki\n");
}

#[test]
fn flags_override_config() {
    let temp = Project::empty();
    temp.config("[numfmt]\ntemplate = \"{value:.0}{prefix}\"\n");
    temp.knack()
        .args(["numfmt", "--template", "{value:.1} {prefix}B", "1500"])
        .passes()
        .stdout_eq("1.5 kB\n");
}

#[test]
fn cron_section_supplies_hash_id() {
    let temp = Project::empty();
    temp.config("[cron]\nhash_id = \"hello\"\n");
    temp.knack()
        .args(["cron", "H * * * *", "--start", "2020-01-01T00:00:00", "-n", "1"])
        .passes()
        .stdout_eq("10 * * * *\n2020-01-01 00:10:00\n");
}

#[test]
fn byte_array_hash_id() {
    let temp = Project::empty();
    temp.config("[cron]\nhash_id = [1, 2, 3, 4]\n");
    temp.knack()
        .args(["cron", "H H * * *", "--start", "2020-01-01T00:00:00", "-n", "1"])
        .passes()
        .stdout_eq("53 14 * * *\n2020-01-01 14:53:00\n");
}

#[test]
fn malformed_config_fails() {
    let temp = Project::empty();
    temp.config("[numfmt\n");
    temp.knack()
        .args(["numfmt", "1"])
        .fails()
        .stderr_has("failed to parse");
}

#[test]
fn missing_config_is_fine() {
    let temp = Project::empty();
    temp.knack()
        .args(["numfmt", "12345"])
        .passes()
        .stdout_eq("12.35 k\n");
}
