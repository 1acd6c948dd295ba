//! CLI integration tests for openapi-normalize binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("openapi-normalize"))
}

// Helper to create a temp input file
fn write_temp_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const LIST_SPEC: &str = r##"{
    "openapi": "3.0.1",
    "info": { "title": "Country Service", "version": "1.0.0" },
    "servers": [{ "url": "http://localhost:8080" }],
    "paths": {
        "/countries": {
            "get": {
                "tags": ["country-controller"],
                "responses": {
                    "404": { "description": "Not Found" },
                    "200": {
                        "description": "OK.",
                        "content": {
                            "*/*": {
                                "schema": {
                                    "type": "array",
                                    "items": { "$ref": "#/components/schemas/Country" }
                                }
                            }
                        }
                    }
                }
            }
        }
    },
    "components": {
        "schemas": {
            "Country": {
                "type": "object",
                "required": ["name", "code"],
                "properties": { "name": { "type": "string" }, "code": { "type": "string" } }
            }
        }
    }
}"##;

mod normalize_command {
    use super::*;

    #[test]
    fn writes_normalized_output() {
        let dir = TempDir::new().unwrap();
        let input = write_temp_file(&dir, "openapi.json", LIST_SPEC);
        let output = dir.path().join("normalized.json");

        cmd()
            .args([input.to_str().unwrap(), output.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains(r#""title": "COMPARED""#));
        assert!(content.contains(r#""application/json""#));
        assert!(content.contains(r#""CountryController""#));
        assert!(!content.contains("$ref"));
        assert!(!content.contains("servers"));
        assert!(!content.contains(r#""404""#));
    }

    #[test]
    fn output_is_sorted_and_indented() {
        let dir = TempDir::new().unwrap();
        let input = write_temp_file(&dir, "openapi.json", r#"{"paths":{},"openapi":"3.0.1"}"#);
        let output = dir.path().join("normalized.json");

        cmd()
            .args([input.to_str().unwrap(), output.to_str().unwrap()])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content, "{\n  \"openapi\": \"3.0.1\",\n  \"paths\": {}\n}");
    }

    #[test]
    fn equivalent_inputs_produce_identical_files() {
        let dir = TempDir::new().unwrap();
        let first = write_temp_file(&dir, "first.json", LIST_SPEC);
        let variant = LIST_SPEC
            .replace(r#""*/*""#, r#""application/json""#)
            .replace(r#""OK.""#, r#""OK""#)
            .replace(r#""1.0.0""#, r#""2.0.0""#);
        let second = write_temp_file(&dir, "second.json", &variant);
        let first_out = dir.path().join("first.out.json");
        let second_out = dir.path().join("second.out.json");

        cmd()
            .args([first.to_str().unwrap(), first_out.to_str().unwrap()])
            .assert()
            .success();
        cmd()
            .args([second.to_str().unwrap(), second_out.to_str().unwrap()])
            .assert()
            .success();

        assert_eq!(
            fs::read_to_string(&first_out).unwrap(),
            fs::read_to_string(&second_out).unwrap()
        );
    }

    #[test]
    fn custom_sentinel() {
        let dir = TempDir::new().unwrap();
        let input = write_temp_file(&dir, "openapi.json", LIST_SPEC);
        let output = dir.path().join("normalized.json");

        cmd()
            .args([
                input.to_str().unwrap(),
                output.to_str().unwrap(),
                "--sentinel",
                "IGNORED",
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains(r#""version": "IGNORED""#));
    }

    #[test]
    fn keep_list_not_found() {
        let dir = TempDir::new().unwrap();
        let input = write_temp_file(&dir, "openapi.json", LIST_SPEC);
        let output = dir.path().join("normalized.json");

        cmd()
            .args([
                input.to_str().unwrap(),
                output.to_str().unwrap(),
                "--keep-list-not-found",
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains(r#""404""#));
    }
}

mod error_handling {
    use super::*;

    #[test]
    fn file_not_found() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("normalized.json");

        cmd()
            .args(["/nonexistent/openapi.json", output.to_str().unwrap()])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("not found"));

        assert!(!output.exists());
    }

    #[test]
    fn invalid_json() {
        let dir = TempDir::new().unwrap();
        let input = write_temp_file(&dir, "bad.json", r#"{ not valid json"#);
        let output = dir.path().join("normalized.json");

        cmd()
            .args([input.to_str().unwrap(), output.to_str().unwrap()])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("invalid JSON"));

        assert!(!output.exists());
    }

    #[test]
    fn unwritable_output() {
        let dir = TempDir::new().unwrap();
        let input = write_temp_file(&dir, "openapi.json", LIST_SPEC);
        let output = dir.path().join("missing-dir").join("normalized.json");

        cmd()
            .args([input.to_str().unwrap(), output.to_str().unwrap()])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("cannot write"));
    }
}

mod required_args {
    use super::*;

    #[test]
    fn missing_output_path() {
        cmd()
            .arg("openapi.json")
            .assert()
            .failure()
            .stderr(predicate::str::contains("OUTPUT"));
    }

    #[test]
    fn missing_all_arguments() {
        cmd().assert().failure();
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
            .stdout(predicate::str::contains("Normalize OpenAPI specifications"));
    }

    #[test]
    fn version_flag() {
        cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("openapi-normalize"));
    }
}
