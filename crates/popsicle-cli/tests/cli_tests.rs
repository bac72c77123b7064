//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const ROSTER_CSV: &str = "\
id,nickname,firstName,lastName
1,,Ada,Lovelace
2,Amazing Grace,Grace,Hopper
3,,Alan,Turing
4,,Alan,Kay
";

/// A `popsicle` command isolated in `dir`: no user config, no env override.
fn popsicle(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("popsicle").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("POPSICLE_DB")
        .env_remove("RUST_LOG");
    cmd
}

fn read_db(dir: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(dir.join("db.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn no_subcommand_exits_1() {
    let dir = TempDir::new().unwrap();
    popsicle(dir.path()).assert().code(1);
}

#[test]
fn invalid_subcommand_exits_1() {
    let dir = TempDir::new().unwrap();
    popsicle(dir.path())
        .arg("juggle")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("juggle"));
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();
    popsicle(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Balanced random student picker"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();
    popsicle(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("popsicle"));
}

#[test]
fn add_creates_database() {
    let dir = TempDir::new().unwrap();
    popsicle(dir.path())
        .args(["add", "Alan Turing", "Ada Lovelace", "Grace Hopper"])
        .assert()
        .success();

    let db = read_db(dir.path());
    assert_eq!(db["students"]["Alan Turing"], 0);
    assert_eq!(db["students"]["Ada Lovelace"], 0);
    assert_eq!(db["students"]["Grace Hopper"], 0);
    assert_eq!(db["last student"], "");
}

#[test]
fn add_blank_name_is_ignored() {
    let dir = TempDir::new().unwrap();
    popsicle(dir.path())
        .args(["add", "  ", "Ada"])
        .assert()
        .success()
        .stderr(predicate::str::contains("ignoring blank student name"))
        .stderr(predicate::str::contains("already on the roster").not());

    let db = read_db(dir.path());
    assert_eq!(db["students"].as_object().unwrap().len(), 1);
    assert_eq!(db["students"]["Ada"], 0);
}

#[test]
fn add_without_names_prompts() {
    let dir = TempDir::new().unwrap();
    popsicle(dir.path())
        .arg("add")
        .write_stdin("Barbara Liskov\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Student Name =>"));

    assert_eq!(read_db(dir.path())["students"]["Barbara Liskov"], 0);
}

#[test]
fn create_reads_names_until_blank_line() {
    let dir = TempDir::new().unwrap();
    popsicle(dir.path())
        .arg("create")
        .write_stdin("Ada\nGrace\n\n")
        .assert()
        .success();

    let db = read_db(dir.path());
    assert_eq!(db["students"].as_object().unwrap().len(), 2);
}

#[test]
fn pull_prints_a_student() {
    let dir = TempDir::new().unwrap();
    popsicle(dir.path()).args(["add", "Ada"]).assert().success();

    popsicle(dir.path())
        .arg("pull")
        .assert()
        .success()
        .stdout("Ada\n");

    let db = read_db(dir.path());
    assert_eq!(db["students"]["Ada"], 1);
    assert_eq!(db["last student"], "Ada");
}

#[test]
fn pull_on_empty_roster_fails() {
    let dir = TempDir::new().unwrap();
    popsicle(dir.path())
        .arg("pull")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("roster is empty"));
}

#[test]
fn consecutive_pulls_differ() {
    let dir = TempDir::new().unwrap();
    popsicle(dir.path())
        .args(["add", "A", "B", "C"])
        .assert()
        .success();

    let mut previous = String::new();
    for _ in 0..9 {
        let out = popsicle(dir.path()).arg("pull").output().unwrap();
        assert!(out.status.success());
        let name = String::from_utf8(out.stdout).unwrap().trim().to_string();
        assert_ne!(name, previous);
        previous = name;
    }

    let db = read_db(dir.path());
    let counts: Vec<u64> = db["students"]
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_u64().unwrap())
        .collect();
    assert_eq!(counts.iter().sum::<u64>(), 9);
}

#[test]
fn remove_and_reset() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("db.json"),
        r#"{"students": {"Ada": 3, "Grace": 2, "Alan": 2}, "last student": "Ada"}"#,
    )
    .unwrap();

    popsicle(dir.path())
        .args(["remove", "Alan", "Nobody"])
        .assert()
        .success();
    popsicle(dir.path())
        .args(["reset", "Grace"])
        .assert()
        .success();

    let db = read_db(dir.path());
    assert!(db["students"].get("Alan").is_none());
    assert_eq!(db["students"]["Grace"], 0);
    assert_eq!(db["students"]["Ada"], 3);
    assert_eq!(db["last student"], "Ada");

    popsicle(dir.path())
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reset all 2 students"));

    let db = read_db(dir.path());
    assert_eq!(db["students"]["Ada"], 0);
    assert_eq!(db["last student"], "");
}

#[test]
fn destroy_empties_roster() {
    let dir = TempDir::new().unwrap();
    popsicle(dir.path())
        .args(["add", "Ada", "Grace"])
        .assert()
        .success();
    popsicle(dir.path()).arg("destroy").assert().success();

    let db = read_db(dir.path());
    assert!(db["students"].as_object().unwrap().is_empty());
}

#[test]
fn edit_renames_and_keeps_count() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("db.json"),
        r#"{"students": {"Alan": 4}, "last student": "Alan"}"#,
    )
    .unwrap();

    popsicle(dir.path())
        .args(["edit", "Alan", "Alan Turing"])
        .assert()
        .success();

    let db = read_db(dir.path());
    assert_eq!(db["students"]["Alan Turing"], 4);
    assert!(db["students"].get("Alan").is_none());
    assert_eq!(db["last student"], "Alan Turing");
}

#[test]
fn edit_unknown_student_fails_without_saving() {
    let dir = TempDir::new().unwrap();
    let original = r#"{"students": {"Ada": 1}, "last student": ""}"#;
    std::fs::write(dir.path().join("db.json"), original).unwrap();

    popsicle(dir.path())
        .args(["edit", "Grace", "Grace Hopper"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("student not found: Grace"));

    assert_eq!(
        std::fs::read_to_string(dir.path().join("db.json")).unwrap(),
        original
    );
}

#[test]
fn edit_unknown_student_onto_existing_name_is_not_found() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("db.json"),
        r#"{"students": {"Ada": 1}, "last student": ""}"#,
    )
    .unwrap();

    popsicle(dir.path())
        .args(["edit", "Ghost", "Ada"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("student not found: Ghost"));
}

#[test]
fn edit_to_blank_name_fails() {
    let dir = TempDir::new().unwrap();
    let original = r#"{"students": {"Ada": 1}, "last student": ""}"#;
    std::fs::write(dir.path().join("db.json"), original).unwrap();

    popsicle(dir.path())
        .args(["edit", "Ada", " "])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("blank"));

    assert_eq!(
        std::fs::read_to_string(dir.path().join("db.json")).unwrap(),
        original
    );
}

#[test]
fn names_with_padding_match_existing_students() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("db.json"),
        r#"{"students": {"Ada": 3, "Grace": 2}, "last student": ""}"#,
    )
    .unwrap();

    popsicle(dir.path())
        .args(["remove", " Ada "])
        .assert()
        .success();
    popsicle(dir.path())
        .args(["reset", "Grace "])
        .assert()
        .success();

    let db = read_db(dir.path());
    assert!(db["students"].get("Ada").is_none());
    assert_eq!(db["students"]["Grace"], 0);
}

#[test]
fn load_csv_into_empty_roster() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("class.csv"), ROSTER_CSV).unwrap();

    popsicle(dir.path())
        .args(["load", "class.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 4 students"));

    let db = read_db(dir.path());
    let students = db["students"].as_object().unwrap();
    let mut names: Vec<&str> = students.keys().map(String::as_str).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Ada", "Alan Kay", "Alan Turing", "Amazing Grace"]);
}

#[test]
fn load_skips_non_empty_roster() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("class.csv"), ROSTER_CSV).unwrap();
    popsicle(dir.path()).args(["add", "Ada"]).assert().success();

    popsicle(dir.path())
        .args(["load", "class.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already has 1 students"));

    assert_eq!(read_db(dir.path())["students"].as_object().unwrap().len(), 1);
}

#[test]
fn load_discovers_roster_export() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("2024-ABC-NY-CYB-FT.csv"), ROSTER_CSV).unwrap();

    popsicle(dir.path())
        .arg("load")
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-ABC-NY-CYB-FT.csv"));

    assert_eq!(read_db(dir.path())["students"].as_object().unwrap().len(), 4);
}

#[test]
fn load_without_roster_file_leaves_store_alone() {
    let dir = TempDir::new().unwrap();
    popsicle(dir.path())
        .arg("load")
        .assert()
        .success()
        .stdout(predicate::str::contains("No csv file presented"));

    assert!(read_db(dir.path())["students"].as_object().unwrap().is_empty());
}

#[test]
fn load_malformed_csv_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("bad.csv"), "name,email\nAda,a@example.com\n").unwrap();

    popsicle(dir.path())
        .args(["load", "bad.csv"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("CSV error"));
}

#[test]
fn list_shows_counts() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("db.json"),
        r#"{"students": {"Ada": 2, "Grace": 1}, "last student": "Ada"}"#,
    )
    .unwrap();

    popsicle(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada"))
        .stdout(predicate::str::contains("Grace"))
        .stdout(predicate::str::contains("last"));
}

#[test]
fn db_flag_and_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("popsicle.toml"),
        r#"db_path = "period-3.json""#,
    )
    .unwrap();

    popsicle(dir.path()).args(["add", "Ada"]).assert().success();
    assert!(dir.path().join("period-3.json").exists());
    assert!(!dir.path().join("db.json").exists());

    popsicle(dir.path())
        .args(["--db", "other.json", "add", "Grace"])
        .assert()
        .success();
    assert!(dir.path().join("other.json").exists());
}

#[test]
fn env_var_overrides_config() {
    let dir = TempDir::new().unwrap();
    popsicle(dir.path())
        .env("POPSICLE_DB", "from-env.json")
        .args(["add", "Ada"])
        .assert()
        .success();
    assert!(dir.path().join("from-env.json").exists());
}

#[test]
fn missing_config_file_fails() {
    let dir = TempDir::new().unwrap();
    popsicle(dir.path())
        .args(["--config", "nope.toml", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error"));
}
