//! End-to-end CLI tests for redes-cr

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command pointing at the binary, run inside `dir` so no stray
/// `site.toml` is picked up.
fn redes_cr(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("redes-cr");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        let temp = TempDir::new().expect("temp dir");
        redes_cr(&temp)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("build"))
            .stdout(predicate::str::contains("cards"))
            .stdout(predicate::str::contains("check"));
    }

    #[test]
    fn shows_version() {
        let temp = TempDir::new().expect("temp dir");
        redes_cr(&temp)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn rejects_unknown_subcommand() {
        let temp = TempDir::new().expect("temp dir");
        redes_cr(&temp).arg("serve").assert().failure();
    }
}

mod content {
    use super::*;

    #[test]
    fn check_succeeds_with_title_warnings() {
        let temp = TempDir::new().expect("temp dir");
        redes_cr(&temp)
            .args(["check", "--color", "never"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[OK] 5 legal references"))
            .stdout(predicate::str::contains("[WARN]"));
    }

    #[test]
    fn cards_json_lists_five_cards() {
        let temp = TempDir::new().expect("temp dir");
        let output = redes_cr(&temp)
            .args(["cards", "--json"])
            .output()
            .expect("run cards");
        assert!(output.status.success());

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
        let cards = value.as_array().expect("array");
        let delays: Vec<u64> = cards.iter().filter_map(|c| c["delay"].as_u64()).collect();
        assert_eq!(delays, vec![100, 200, 300, 500, 600]);
    }
}

mod build {
    use super::*;

    #[test]
    fn builds_into_default_dist() {
        let temp = TempDir::new().expect("temp dir");
        redes_cr(&temp)
            .args(["build", "--color", "never"])
            .assert()
            .success()
            .stdout(predicate::str::contains("index.html"));

        let html = std::fs::read_to_string(temp.path().join("dist/index.html")).expect("index");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("bootstrap-icons"));
        assert!(!html.contains("id=\"footer\""));
    }

    #[test]
    fn honors_config_file() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join("site.toml"),
            r#"
[site]
title = "Prueba"

[layout]
sections = ["services", "footer"]

[output]
dir = "public"
cards_json = true
"#,
        )
        .expect("write config");

        redes_cr(&temp).arg("build").assert().success();

        let html = std::fs::read_to_string(temp.path().join("public/index.html")).expect("index");
        assert!(html.contains("<title>Prueba</title>"));
        assert!(html.contains("id=\"footer\""));
        assert!(!html.contains("id=\"hero\""));
        assert!(temp.path().join("public/cards.json").exists());
    }

    #[test]
    fn explicit_config_path_and_out_flag() {
        let temp = TempDir::new().expect("temp dir");
        let config = temp.path().join("custom.toml");
        std::fs::write(&config, "[assets]\nicons_css = \"\"\n").expect("write config");

        redes_cr(&temp)
            .args(["--config", "custom.toml", "build", "--out", "site-out"])
            .assert()
            .success();

        let html = std::fs::read_to_string(temp.path().join("site-out/index.html")).expect("index");
        assert!(!html.contains("bootstrap-icons"));
    }

    #[test]
    fn invalid_config_warns_and_uses_defaults() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join("site.toml"), "[layout\nbroken").expect("write config");

        redes_cr(&temp)
            .arg("build")
            .assert()
            .success()
            .stderr(predicate::str::contains("failed to parse"));

        assert!(temp.path().join("dist/index.html").exists());
    }
}
