/*!
 * Command-line tests for repodump
 */

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use repodump::filter::should_ignore_path;
use tempfile::TempDir;

// Every entry is filtered by its full path, so the temp dir itself must be clean
fn clean_tempdir() -> TempDir {
    for _ in 0..64 {
        let dir = tempfile::Builder::new()
            .prefix("repodump")
            .tempdir()
            .unwrap();
        if !should_ignore_path(dir.path()) {
            return dir;
        }
    }
    panic!("temp dir location matches an ignore pattern");
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn repodump() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("repodump"))
}

#[test]
fn writes_dump_into_working_directory() {
    let temp = clean_tempdir();
    let repo = temp.path().join("demo");
    write_file(&repo.join("src/lib.rs"), "pub fn answer() -> u32 { 42 }\n");
    write_file(&repo.join("README.md"), "# demo\n");

    repodump()
        .current_dir(temp.path())
        .arg(&repo)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Repository content has been written to demo_repository_content.txt",
        ));

    let output = fs::read_to_string(temp.path().join("demo_repository_content.txt")).unwrap();
    assert!(output.starts_with("Repository Structure:\n\nsrc\n  └── lib.rs\nREADME.md\n"));
    assert!(output.contains("File: README.md\n"));
    assert!(output.contains("pub fn answer() -> u32 { 42 }\n"));
}

#[test]
fn missing_path_fails_without_output() {
    let temp = clean_tempdir();

    repodump()
        .current_dir(temp.path())
        .arg(temp.path().join("nowhere"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));

    let leftovers: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
    assert!(leftovers.is_empty());
}

#[test]
fn prompts_for_path_when_not_given() {
    let temp = clean_tempdir();
    let repo = temp.path().join("prompted");
    write_file(&repo.join("main.rs"), "fn main() {}\n");

    repodump()
        .current_dir(temp.path())
        .write_stdin(format!("{}\n", repo.display()))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Enter the path to your git repository: ",
        ));

    assert!(temp.path().join("prompted_repository_content.txt").exists());
}

#[test]
fn unreadable_files_warn_and_continue() {
    let temp = clean_tempdir();
    let repo = temp.path().join("mixed");
    fs::create_dir_all(&repo).unwrap();
    fs::write(repo.join("blob.dat"), [0xff, 0xfe, 0xfd]).unwrap();
    write_file(&repo.join("text.md"), "ok\n");

    repodump()
        .current_dir(temp.path())
        .arg(&repo)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicate::str::contains("Could not read"))
        .stderr(predicate::str::contains("blob.dat"));

    let output = fs::read_to_string(temp.path().join("mixed_repository_content.txt")).unwrap();
    assert!(output.contains("File: text.md"));
    assert!(!output.contains("File: blob.dat"));
}

#[test]
fn quiet_run_prints_nothing() {
    let temp = clean_tempdir();
    let repo = temp.path().join("silent");
    write_file(&repo.join("a.txt"), "a\n");

    repodump()
        .current_dir(temp.path())
        .args(["-q"])
        .arg(&repo)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("silent_repository_content.txt").exists());
}
