// e2e/cli_integration.rs: the `lz77` binary as a black box.
//
// Covers output naming, stdin/stdout piping, exit codes, test and list
// modes, overwrite protection and the `unlz77` / `lz77cat` aliases.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn lz77_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lz77"))
}

/// A command with stdin closed, so overwrite prompts never block.
fn lz77(dir: &Path) -> Command {
    let mut cmd = Command::new(lz77_bin());
    cmd.current_dir(dir).stdin(Stdio::null());
    cmd
}

fn make_input(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, "Sliding windows all the way down.\n".repeat(200)).unwrap();
    path
}

fn run_with_stdin(mut cmd: Command, input: &[u8]) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn lz77");
    let mut stdin = child.stdin.take().unwrap();
    let data = input.to_vec();
    let feeder = std::thread::spawn(move || stdin.write_all(&data));
    let output = child.wait_with_output().unwrap();
    feeder.join().unwrap().unwrap();
    output
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ── Round trips ──────────────────────────────────────────────────────────────

#[test]
fn test_cli_explicit_names_round_trip() {
    let dir = TempDir::new().unwrap();
    let input = make_input(dir.path(), "input.txt");
    let status = lz77(dir.path()).args(["-f", "input.txt", "packed.lz77"]).status().unwrap();
    assert!(status.success());
    let status = lz77(dir.path()).args(["-d", "-f", "packed.lz77", "unpacked.txt"]).status().unwrap();
    assert!(status.success());
    assert_eq!(fs::read(&input).unwrap(), fs::read(dir.path().join("unpacked.txt")).unwrap());
}

#[test]
fn test_cli_automatic_names() {
    let dir = TempDir::new().unwrap();
    let input = make_input(dir.path(), "notes.txt");
    let original = fs::read(&input).unwrap();

    assert!(lz77(dir.path()).arg("notes.txt").status().unwrap().success());
    assert!(dir.path().join("notes.txt.lz77").exists());
    fs::remove_file(&input).unwrap();

    // The extension alone selects decompression.
    assert!(lz77(dir.path()).arg("notes.txt.lz77").status().unwrap().success());
    assert_eq!(fs::read(&input).unwrap(), original);
}

#[test]
fn test_cli_pipe_round_trip() {
    let dir = TempDir::new().unwrap();
    let data: Vec<u8> = (0..50_000u32).map(|i| (i % 97) as u8).collect();

    let packed = run_with_stdin(lz77(dir.path()), &data);
    assert!(packed.status.success(), "{}", stderr_of(&packed));
    assert_eq!(packed.stdout.len() % 3, 0);

    let mut cmd = lz77(dir.path());
    cmd.arg("-d");
    let unpacked = run_with_stdin(cmd, &packed.stdout);
    assert!(unpacked.status.success(), "{}", stderr_of(&unpacked));
    assert_eq!(unpacked.stdout, data);
}

#[test]
fn test_cli_dash_is_stdin_and_stdout() {
    let dir = TempDir::new().unwrap();
    let mut cmd = lz77(dir.path());
    cmd.args(["-z", "-", "-"]);
    let out = run_with_stdin(cmd, b"abcabcabc");
    assert!(out.status.success());
    assert_eq!(out.stdout, [0, 0, b'a', 0, 0, b'b', 0, 0, b'c', 3, 0, 6]);
}

#[test]
fn test_cli_window_flag_and_env() {
    let dir = TempDir::new().unwrap();
    make_input(dir.path(), "w.txt");
    assert!(lz77(dir.path()).args(["-W", "1K", "-f", "w.txt", "w.lz77"]).status().unwrap().success());
    let status = lz77(dir.path())
        .env("LZ77_WINDOW", "1024")
        .args(["-d", "-f", "w.lz77", "w.out"])
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(fs::read(dir.path().join("w.txt")).unwrap(), fs::read(dir.path().join("w.out")).unwrap());
}

// ── Informational flags ──────────────────────────────────────────────────────

#[test]
fn test_cli_version() {
    let out = Command::new(lz77_bin()).arg("--version").output().unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains(lz77::LZ77_VERSION_STRING));
}

#[test]
fn test_cli_help() {
    let out = Command::new(lz77_bin()).arg("--help").output().unwrap();
    assert!(out.status.success());
    let text = String::from_utf8_lossy(&out.stdout);
    assert!(text.to_lowercase().contains("usage"));
    assert!(text.contains("--window"));
    assert!(text.contains("Which values can [output] have"));
}

#[test]
fn test_cli_list_mode() {
    let dir = TempDir::new().unwrap();
    make_input(dir.path(), "l.txt");
    assert!(lz77(dir.path()).arg("l.txt").status().unwrap().success());
    let out = lz77(dir.path()).args(["-l", "l.txt.lz77"]).output().unwrap();
    assert!(out.status.success());
    let text = String::from_utf8_lossy(&out.stdout);
    assert!(text.contains("Tokens"));
    assert!(text.contains("l.txt.lz77"));
}

// ── Test mode ────────────────────────────────────────────────────────────────

#[test]
fn test_cli_test_mode() {
    let dir = TempDir::new().unwrap();
    make_input(dir.path(), "t.txt");
    assert!(lz77(dir.path()).arg("t.txt").status().unwrap().success());
    assert!(lz77(dir.path()).args(["-t", "t.txt.lz77"]).status().unwrap().success());

    fs::write(dir.path().join("bad.lz77"), [0u8, 0, b'x', 9, 0, 4]).unwrap();
    let out = lz77(dir.path()).args(["-t", "bad.lz77"]).output().unwrap();
    assert!(!out.status.success());
    assert!(!dir.path().join("bad").exists());
}

// ── Failures ─────────────────────────────────────────────────────────────────

#[test]
fn test_cli_missing_input() {
    let dir = TempDir::new().unwrap();
    let out = lz77(dir.path()).args(["-f", "absent.txt", "absent.lz77"]).output().unwrap();
    assert!(!out.status.success());
    assert!(!dir.path().join("absent.lz77").exists());
}

#[test]
fn test_cli_refuses_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    make_input(dir.path(), "o.txt");
    fs::write(dir.path().join("o.txt.lz77"), b"precious").unwrap();
    let out = lz77(dir.path()).arg("o.txt").output().unwrap();
    assert!(!out.status.success());
    assert!(stderr_of(&out).contains("already exists"));
    assert_eq!(fs::read(dir.path().join("o.txt.lz77")).unwrap(), b"precious");

    assert!(lz77(dir.path()).args(["-f", "o.txt"]).status().unwrap().success());
    assert_ne!(fs::read(dir.path().join("o.txt.lz77")).unwrap(), b"precious");
}

#[test]
fn test_cli_decompress_needs_extension_or_output() {
    let dir = TempDir::new().unwrap();
    make_input(dir.path(), "plain.bin");
    let out = lz77(dir.path()).args(["-d", "plain.bin"]).output().unwrap();
    assert!(!out.status.success());
    assert!(stderr_of(&out).contains("Cannot determine an output filename"));
}

#[test]
fn test_cli_bad_usage() {
    let dir = TempDir::new().unwrap();
    for args in [&["-W", "0", "x"][..], &["--no-such-flag"][..], &["-z", "-d", "x"][..]] {
        let out = lz77(dir.path()).args(args).output().unwrap();
        assert_eq!(out.status.code(), Some(1), "{:?}", args);
        assert!(stderr_of(&out).contains("bad usage"), "{:?}", args);
    }
}

#[test]
fn test_cli_corrupt_input_exit_code() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("cut.lz77"), [0u8, 0, b'a', 0]).unwrap();
    let out = lz77(dir.path()).args(["-d", "-f", "cut.lz77", "cut.out"]).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
}

// ── Source removal and batches ───────────────────────────────────────────────

#[test]
fn test_cli_rm_and_keep() {
    let dir = TempDir::new().unwrap();
    let input = make_input(dir.path(), "r.txt");
    assert!(lz77(dir.path()).args(["-k", "r.txt"]).status().unwrap().success());
    assert!(input.exists());
    assert!(lz77(dir.path()).args(["-f", "--rm", "r.txt"]).status().unwrap().success());
    assert!(!input.exists());
    assert!(dir.path().join("r.txt.lz77").exists());
}

#[test]
fn test_cli_multiple_inputs() {
    let dir = TempDir::new().unwrap();
    for name in ["a.txt", "b.txt", "c.txt"] {
        make_input(dir.path(), name);
    }
    assert!(lz77(dir.path()).args(["-m", "a.txt", "b.txt", "c.txt"]).status().unwrap().success());
    for name in ["a.txt.lz77", "b.txt.lz77", "c.txt.lz77"] {
        assert!(dir.path().join(name).exists(), "{}", name);
    }
    let out = lz77(dir.path()).args(["-m", "a.txt", "missing.txt"]).output().unwrap();
    assert!(!out.status.success());
}

#[test]
fn test_cli_recursive() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("tree/sub")).unwrap();
    make_input(&dir.path().join("tree"), "one.txt");
    make_input(&dir.path().join("tree/sub"), "two.txt");
    assert!(lz77(dir.path()).args(["-r", "-T", "2", "tree"]).status().unwrap().success());
    assert!(dir.path().join("tree/one.txt.lz77").exists());
    assert!(dir.path().join("tree/sub/two.txt.lz77").exists());
}

// ── Aliases ──────────────────────────────────────────────────────────────────

#[cfg(unix)]
#[test]
fn test_cli_unlz77_alias() {
    let dir = TempDir::new().unwrap();
    let input = make_input(dir.path(), "u.txt");
    let original = fs::read(&input).unwrap();
    assert!(lz77(dir.path()).args(["--rm", "u.txt"]).status().unwrap().success());

    let alias = dir.path().join("unlz77");
    std::os::unix::fs::symlink(lz77_bin(), &alias).unwrap();
    let status = Command::new(&alias).current_dir(dir.path()).stdin(Stdio::null()).arg("u.txt.lz77").status().unwrap();
    assert!(status.success());
    assert_eq!(fs::read(&input).unwrap(), original);
}

#[cfg(unix)]
#[test]
fn test_cli_lz77cat_alias_concatenates() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("p1"), b"first part, ").unwrap();
    fs::write(dir.path().join("p2"), b"second part").unwrap();
    assert!(lz77(dir.path()).args(["-m", "p1", "p2"]).status().unwrap().success());

    let alias = dir.path().join("lz77cat");
    std::os::unix::fs::symlink(lz77_bin(), &alias).unwrap();
    let out = Command::new(&alias)
        .current_dir(dir.path())
        .stdin(Stdio::null())
        .args(["p1.lz77", "p2.lz77"])
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", stderr_of(&out));
    assert_eq!(out.stdout, b"first part, second part");
}
