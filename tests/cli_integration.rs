mod common;

use common::{create_temp_file, text_input, text_line};
use std::ffi::OsStr;
use std::process::{Command, Output};

fn ssdeep(args: &[&OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ssdeep"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("run ssdeep")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn single_path_prints_hash_and_path() {
    let file = create_temp_file(&text_input(200));
    let out = ssdeep(&[file.path().as_os_str()]);
    assert!(out.status.success());
    let expected = format!(
        "24:FC9oJsU2mum8FuoNHe9jzXShl0Rq6x2dxX6cDJukSccyVGLg3JtIUb6UrNUSWojw:FkasU5ugoYX0lxXtPScnMMnIyhU/ {}\n",
        file.path().display()
    );
    assert_eq!(stdout(&out), expected);
}

#[test]
fn two_paths_report_match() {
    let a = create_temp_file(&text_input(200));
    let b = create_temp_file(&text_input(150));
    let out = ssdeep(&[a.path().as_os_str(), b.path().as_os_str()]);
    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        format!("{} matches {} (87)\n", a.path().display(), b.path().display())
    );
}

#[test]
fn two_paths_without_match() {
    let a = create_temp_file(&text_input(200));
    let b = create_temp_file(&text_input(400));
    let out = ssdeep(&[a.path().as_os_str(), b.path().as_os_str()]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "The files don't match\n");
}

#[test]
fn small_file_fails_without_force() {
    let small = create_temp_file(text_line(0).as_bytes());
    let out = ssdeep(&[small.path().as_os_str()]);
    assert!(!out.status.success());
    assert!(stdout(&out).starts_with("Input too small"));
}

#[test]
fn small_file_with_force_prints_hash_and_warning() {
    let small = create_temp_file(b"hello world");
    let out = ssdeep(&[OsStr::new("--force"), small.path().as_os_str()]);
    assert!(out.status.success());
    let text = stdout(&out);
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some(format!("3:iKFSMPn:rJPn {}", small.path().display()).as_str())
    );
    assert!(lines.next().is_some_and(|l| l.starts_with("Input too small")));
}

#[test]
fn missing_file_with_force_still_reports() {
    let a = create_temp_file(&text_input(200));
    let out = ssdeep(&[
        OsStr::new("--force"),
        a.path().as_os_str(),
        OsStr::new("does/not/exist"),
    ]);
    assert!(out.status.success());
    assert!(stdout(&out).starts_with("I/O error"));
}

#[test]
fn missing_file_without_force_fails() {
    let out = ssdeep(&[OsStr::new("does/not/exist")]);
    assert!(!out.status.success());
}

#[test]
fn json_report() {
    let a = create_temp_file(&text_input(200));
    let b = create_temp_file(&text_input(150));
    let out = ssdeep(&[OsStr::new("--json"), a.path().as_os_str(), b.path().as_os_str()]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["score"], 87);
    assert_eq!(
        v["first"]["hash"],
        "24:FC9oJsU2mum8FuoNHe9jzXShl0Rq6x2dxX6cDJukSccyVGLg3JtIUb6UrNUSWojw:FkasU5ugoYX0lxXtPScnMMnIyhU/"
    );
    assert!(v["second"]["error"].is_null());
}

#[test]
fn config_file_can_disable_strictness() {
    let cfg = create_temp_file(br#"{"strict": false}"#);
    let small = create_temp_file(b"hello world");
    let out = ssdeep(&[
        OsStr::new("--config"),
        cfg.path().as_os_str(),
        small.path().as_os_str(),
    ]);
    assert!(out.status.success());
    assert!(stdout(&out).starts_with("3:iKFSMPn:rJPn "));
}
