//! CLI integration tests for jsonapi-doc binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("jsonapi-doc"))
}

// Helper to create a temp document file
fn write_temp_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

mod member_name_command {
    use super::*;

    #[test]
    fn valid_names() {
        cmd()
            .args(["member-name", "a-b", "ü", "first name"])
            .assert()
            .success()
            .stdout(predicate::str::contains("valid\ta-b"))
            .stdout(predicate::str::contains("valid\tü"))
            .stdout(predicate::str::contains("invalid").not());
    }

    #[test]
    fn invalid_name_fails() {
        cmd()
            .args(["member-name", "--", "a-b", "-ab", "ab-"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("valid\ta-b"))
            .stdout(predicate::str::contains("invalid\t-ab"))
            .stdout(predicate::str::contains("invalid\tab-"));
    }

    #[test]
    fn empty_name_is_invalid() {
        cmd()
            .args(["member-name", ""])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("invalid\t"));
    }

    #[test]
    fn requires_a_name() {
        cmd().arg("member-name").assert().failure();
    }
}

mod lint_command {
    use super::*;

    #[test]
    fn valid_document() {
        cmd()
            .args(["lint", "tests/fixtures/dwarves.json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("1 files checked, all passed"));
    }

    #[test]
    fn fixture_directory() {
        cmd()
            .args(["lint", "tests/fixtures"])
            .assert()
            .success()
            .stdout(predicate::str::contains("dwarves.json"))
            .stdout(predicate::str::contains("home.json"))
            .stdout(predicate::str::contains("2 files checked, all passed"));
    }

    #[test]
    fn data_and_errors_together() {
        let dir = TempDir::new().unwrap();
        let doc = write_temp_file(&dir, "doc.json", r#"{"data": null, "errors": [{}]}"#);

        cmd()
            .args(["lint", doc.to_str().unwrap()])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("E003"));
    }

    #[test]
    fn illegal_member_name() {
        let dir = TempDir::new().unwrap();
        let doc = write_temp_file(&dir, "doc.json", r#"{"data": null, "meta": {"-x": 1}}"#);

        cmd()
            .args(["lint", doc.to_str().unwrap()])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("E002"))
            .stdout(predicate::str::contains("/meta/-x"));
    }

    #[test]
    fn document_without_primary_members() {
        let dir = TempDir::new().unwrap();
        let doc = write_temp_file(&dir, "doc.json", r#"{"links": {"self": "/x"}}"#);

        cmd()
            .args(["lint", doc.to_str().unwrap()])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("E010"));
    }

    #[test]
    fn syntax_error() {
        let dir = TempDir::new().unwrap();
        let doc = write_temp_file(&dir, "broken.json", "{ not json");

        cmd()
            .args(["lint", doc.to_str().unwrap()])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("E001"));
    }

    #[test]
    fn warnings_pass_without_strict() {
        let dir = TempDir::new().unwrap();
        let doc = write_temp_file(&dir, "doc.json", r#"{"data": [], "links": {}}"#);

        cmd()
            .args(["lint", doc.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("W001"));
    }

    #[test]
    fn warnings_fail_with_strict() {
        let dir = TempDir::new().unwrap();
        let doc = write_temp_file(&dir, "doc.json", r#"{"data": [], "links": {}}"#);

        cmd()
            .args(["lint", doc.to_str().unwrap(), "--strict"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("1 failed"));
    }

    #[test]
    fn json_output() {
        let dir = TempDir::new().unwrap();
        write_temp_file(&dir, "ok.json", r#"{"data": null}"#);
        write_temp_file(&dir, "bad.json", r#"{"errors": []}"#);

        cmd()
            .args(["lint", dir.path().to_str().unwrap(), "--format", "json"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains(r#""files_checked": 2"#))
            .stdout(predicate::str::contains(r#""failed": 1"#))
            .stdout(predicate::str::contains(r#""code": "E004""#));
    }

    #[test]
    fn quiet_hides_passing_files() {
        let dir = TempDir::new().unwrap();
        write_temp_file(&dir, "ok.json", r#"{"data": null}"#);
        write_temp_file(&dir, "bad.json", r#"{"included": []}"#);

        cmd()
            .args(["lint", dir.path().to_str().unwrap(), "--quiet"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Linting").not())
            .stdout(predicate::str::contains("ok.json").not())
            .stdout(predicate::str::contains("bad.json"))
            .stdout(predicate::str::contains("E007"));
    }

    #[test]
    fn missing_path() {
        cmd()
            .args(["lint", "/nonexistent/docs"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("path not found"));
    }
}

mod error_command {
    use super::*;

    #[test]
    fn empty_error_object() {
        cmd()
            .arg("error")
            .assert()
            .success()
            .stdout(predicate::str::contains(r#"{"errors":[{}]}"#));
    }

    #[test]
    fn members_in_order() {
        cmd()
            .args([
                "error",
                "--detail",
                "No dwarf named balin",
                "--title",
                "Not Found",
                "--status",
                "404",
                "--id",
                "e1",
                "--about",
                "https://errors.example.com/e1",
                "--pointer",
                "/data/id",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains(concat!(
                r#"{"errors":[{"id":"e1","links":{"about":"https://errors.example.com/e1"},"#,
                r#""status":"404","title":"Not Found","detail":"No dwarf named balin","#,
                r#""source":{"pointer":"/data/id"}}]}"#
            )));
    }

    #[test]
    fn parameter_source() {
        cmd()
            .args(["error", "--code", "bad-filter", "--parameter", "filter"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                r#"{"errors":[{"code":"bad-filter","source":{"parameter":"filter"}}]}"#,
            ));
    }

    #[test]
    fn jsonapi_version() {
        cmd()
            .args(["error", "--status", "500", "--jsonapi-version", "1.1"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                r#"{"errors":[{"status":"500"}],"jsonapi":{"version":"1.1"}}"#,
            ));
    }

    #[test]
    fn blank_jsonapi_version_is_omitted() {
        cmd()
            .args(["error", "--jsonapi-version", " "])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""jsonapi":{}"#));
    }

    #[test]
    fn pretty_output() {
        cmd()
            .args(["error", "--title", "Oops", "--pretty"])
            .assert()
            .success()
            .stdout(predicate::str::contains("{\n"))
            .stdout(predicate::str::contains(r#""title": "Oops""#));
    }

    #[test]
    fn status_must_be_numeric() {
        cmd()
            .args(["error", "--status", "teapot"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--status"));
    }
}

mod help_and_version {
    use super::*;

    #[test]
    fn help_flag() {
        cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Assemble and lint JSON:API documents"));
    }

    #[test]
    fn version_flag() {
        cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("jsonapi-doc"));
    }

    #[test]
    fn lint_help() {
        cmd()
            .args(["lint", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--strict"))
            .stdout(predicate::str::contains("--format"));
    }

    #[test]
    fn error_help() {
        cmd()
            .args(["error", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--pointer"))
            .stdout(predicate::str::contains("--jsonapi-version"));
    }
}
