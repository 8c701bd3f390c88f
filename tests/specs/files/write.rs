//! Safe write specs

use crate::prelude::*;
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use std::os::unix::fs::PermissionsExt;
use std::process::{Command as StdCommand, Stdio};
use std::time::{Duration, Instant};

fn temp_files(temp: &Project) -> Vec<String> {
    std::fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with('~'))
        .collect()
}

#[test]
fn writes_stdin_to_file() {
    let temp = Project::empty();
    temp.knack()
        .args(["write", "out.txt"])
        .stdin("hello\nworld\n")
        .passes();
    similar_asserts::assert_eq!(temp.read("out.txt"), "hello\nworld\n");
}

#[test]
fn replaces_existing_file() {
    let temp = Project::empty();
    temp.file("data.txt", "b\na\n");
    temp.knack()
        .args(["write", "data.txt", "--chunk-size", "2"])
        .stdin("a\nb\nc\n")
        .passes();
    assert_eq!(temp.read("data.txt"), "a\nb\nc\n");
}

#[test]
fn large_input_spans_chunks() {
    let temp = Project::empty();
    let input = "0123456789".repeat(1000);
    temp.knack()
        .args(["write", "big.txt"])
        .stdin(input.clone())
        .passes();
    assert_eq!(temp.read("big.txt"), input);
}

#[test]
fn keeps_permissions() {
    let temp = Project::empty();
    let path = temp.file("run.sh", "#!/bin/sh\n");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o700)).unwrap();

    temp.knack()
        .args(["write", "run.sh"])
        .stdin("#!/bin/sh\ntrue\n")
        .passes();
    let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o700);
}

#[test]
fn no_temp_files_left_behind() {
    let temp = Project::empty();
    temp.knack().args(["write", "out.txt"]).stdin("x").passes();
    let leftovers = temp_files(&temp);
    assert!(leftovers.is_empty(), "{leftovers:?}");
}

#[test]
fn missing_directory_fails() {
    let temp = Project::empty();
    temp.knack()
        .args(["write", "nope/out.txt"])
        .stdin("x")
        .fails()
        .stderr_has("failed to create");
}

#[test]
fn ctrl_c_while_reading_discards_temp_file() {
    let temp = Project::empty();
    temp.file("out.txt", "keep me");

    let mut child = StdCommand::new(assert_cmd::cargo::cargo_bin("knack"))
        .current_dir(temp.path())
        .env("KNACK_CONFIG", temp.path().join("config.toml"))
        .args(["write", "out.txt"])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    // Hold stdin open so the read blocks
    let stdin = child.stdin.take().unwrap();

    let deadline = Instant::now() + Duration::from_secs(10);
    while temp_files(&temp).is_empty() {
        assert!(Instant::now() < deadline, "temp file never appeared");
        std::thread::sleep(Duration::from_millis(20));
    }
    // Give the handler time to be installed after the temp file exists
    std::thread::sleep(Duration::from_millis(200));

    kill(Pid::from_raw(child.id() as i32), Signal::SIGINT).unwrap();

    let deadline = Instant::now() + Duration::from_secs(10);
    let status = loop {
        if let Some(status) = child.try_wait().unwrap() {
            break status;
        }
        if Instant::now() > deadline {
            child.kill().unwrap();
            panic!("write still running after SIGINT");
        }
        std::thread::sleep(Duration::from_millis(20));
    };
    drop(stdin);

    assert_eq!(status.code(), Some(130));
    assert_eq!(temp.read("out.txt"), "keep me");
    let leftovers = temp_files(&temp);
    assert!(leftovers.is_empty(), "{leftovers:?}");
}
