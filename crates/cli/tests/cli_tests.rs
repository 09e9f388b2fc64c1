use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("linkbio").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Link-in-bio page with Discord presence"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("linkbio").unwrap();
    cmd.arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_cli_views_counts_in_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("views.json");

    let run = |args: &[&str]| {
        Command::cargo_bin("linkbio")
            .unwrap()
            .env("LINKBIO_VIEWS_BACKEND", "file")
            .env("LINKBIO_VIEWS_PATH", &path)
            .env_remove("LINKBIO_PROFILE")
            .args(args)
            .assert()
            .success()
    };

    run(&["views"]).stdout(predicate::str::contains(r#"{"views":0}"#));
    run(&["views", "--increment"]).stdout(predicate::str::contains(r#"{"views":1}"#));
    run(&["views", "-i"]).stdout(predicate::str::contains(r#"{"views":2}"#));
    run(&["views"]).stdout(predicate::str::contains(r#"{"views":2}"#));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"{"views":2}"#);
}

#[test]
fn test_cli_bad_profile_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("linkbio")
        .unwrap()
        .env("LINKBIO_PROFILE", dir.path().join("missing.json"))
        .arg("views")
        .assert()
        .failure();
}
