//! End-to-end CLI tests for nutri

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command pointing to the nutri binary, run inside `dir`
fn nutri(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("nutri");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        let dir = TempDir::new().unwrap();
        nutri(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("nutri"))
            .stdout(predicate::str::contains("--format"));
    }

    #[test]
    fn shows_version() {
        let dir = TempDir::new().unwrap();
        nutri(&dir)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

// ============================================
// Rendering
// ============================================

mod rendering {
    use super::*;

    #[test]
    fn writes_html_to_stdout() {
        let dir = TempDir::new().unwrap();
        nutri(&dir)
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("110kcal"))
            .stdout(predicate::str::contains("230mg"))
            .stdout(predicate::str::contains("Who Should Avoid This Bread"));
    }

    #[test]
    fn writes_html_to_file() {
        let dir = TempDir::new().unwrap();
        nutri(&dir)
            .args(["--output", "page.html", "--title", "Slice"])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let html = std::fs::read_to_string(dir.path().join("page.html")).unwrap();
        assert!(html.contains("<title>Slice</title>"));
        assert!(html.contains("Good Impact"));
    }

    #[test]
    fn writes_json_data() {
        let dir = TempDir::new().unwrap();
        let output = nutri(&dir).args(["--format", "json"]).output().unwrap();
        assert!(output.status.success());

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value["facts"].as_array().unwrap().len(), 6);
        assert_eq!(value["groups"][1]["impact"], "good");
        assert_eq!(value["warnings"]["items"].as_array().unwrap().len(), 4);
    }
}

// ============================================
// Config
// ============================================

mod config {
    use super::*;

    #[test]
    fn config_file_sets_title_css_and_output() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join(".nutri");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join("config.toml"),
            "[render]\ntitle = \"Configured\"\nextra_css = \"brand.css\"\noutput = \"out.html\"\n",
        )
        .unwrap();
        std::fs::write(config_dir.join("brand.css"), ".page { color: navy; }").unwrap();

        nutri(&dir).assert().success();

        let html = std::fs::read_to_string(dir.path().join("out.html")).unwrap();
        assert!(html.contains("<title>Configured</title>"));
        assert!(html.contains("color: navy"));
    }

    #[test]
    fn missing_explicit_config_fails() {
        let dir = TempDir::new().unwrap();
        nutri(&dir)
            .args(["--config", "absent.toml"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("config file not found"));
    }

    #[test]
    fn unwritable_output_fails() {
        let dir = TempDir::new().unwrap();
        nutri(&dir)
            .args(["--output", "no/such/dir/page.html"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to write"));
    }
}
