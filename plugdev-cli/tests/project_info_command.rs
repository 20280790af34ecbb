//! Integration tests for `plugdev project-info`.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_valid_project_human_output() {
    let env = TestEnv::new();
    let root = env.create_project(
        "demo",
        "type = app\napp_id = com.example.demo;note\n",
        &["src/app/pages"],
    );

    env.command()
        .arg("project-info")
        .arg(root.join("src/app/pages/index.js"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Type: app"))
        .stdout(predicate::str::contains("App ID: com.example.demo"))
        .stdout(predicate::str::contains("Status: valid"));
}

#[test]
fn test_valid_project_json_output() {
    let env = TestEnv::new();
    let root = env.create_project("demo", "type = widget\n", &["src/widget"]);

    let output = env
        .command()
        .arg("project-info")
        .arg("--json")
        .arg(root.join("src/widget"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "valid");
    assert_eq!(json["type"], "widget");
    assert_eq!(json["project"], root.to_string_lossy().as_ref());
    assert_eq!(
        json["config_file"],
        root.join("plugin.properties").to_string_lossy().as_ref()
    );
}

#[test]
fn test_invalid_layout_exits_one() {
    let env = TestEnv::new();
    let root = env.create_project("broken", "type = plugin\n", &[]);

    env.command()
        .arg("project-info")
        .arg(root.join("index.js"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Status: invalid_layout"))
        .stderr(predicate::str::contains("layout"));
}

#[test]
fn test_invalid_layout_json_still_reports_info() {
    let env = TestEnv::new();
    let root = env.create_project("broken", "type = plugin\n", &[]);

    let output = env
        .command()
        .arg("project-info")
        .arg("--json")
        .arg(&root)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "invalid_layout");
    assert_eq!(json["type"], "plugin");
}

#[test]
fn test_vue_frame_is_valid_without_layout() {
    let env = TestEnv::new();
    let root = env.create_project("spa", "type = spa\nframe = vue\n", &[]);

    env.command()
        .arg("project-info")
        .arg(root.join("main.js"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Frame: vue"));
}

#[test]
fn test_malformed_properties_is_library_error() {
    let env = TestEnv::new();
    let root = env.create_project("bad", "type = app\nthis line has no equals\n", &["src/app"]);

    env.command()
        .arg("project-info")
        .arg(&root)
        .assert()
        .code(6)
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_configured_layout_is_honored() {
    let env = TestEnv::new();
    env.write_config("project_structure:\n  app: source/app\n");
    let root = env.create_project("custom", "type = app\n", &["source/app"]);

    env.command()
        .arg("project-info")
        .arg(&root)
        .assert()
        .success();
}

#[test]
fn test_bad_config_exits_seven() {
    let env = TestEnv::new();
    env.write_config("ports: [not, a, mapping\n");
    let root = env.create_project("demo", "type = app\n", &["src/app"]);

    env.command()
        .arg("project-info")
        .arg(&root)
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_no_project_exits_one() {
    let env = TestEnv::new();
    let loose = env.create_dir("not/a/project");

    env.command()
        .arg("project-info")
        .arg(loose.join("file.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No plugin project found"));
}

#[test]
fn test_json_keys_are_not_shadowed_by_properties() {
    let env = TestEnv::new();
    let root = env.create_project(
        "demo",
        "type = app\nproject = /elsewhere\nstatus = broken\n",
        &["src/app"],
    );

    let output = env
        .command()
        .arg("project-info")
        .arg("--json")
        .arg(&root)
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    assert_eq!(text.matches("\"project\"").count(), 1);
    assert_eq!(text.matches("\"status\"").count(), 1);
    assert!(!text.contains("/elsewhere"));

    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["project"], root.to_string_lossy().as_ref());
    assert_eq!(json["status"], "valid");
}
