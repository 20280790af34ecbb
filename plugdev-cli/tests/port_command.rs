//! Integration tests for `plugdev port`.

mod common;

use common::{free_port, parse_port, TestEnv};
use predicates::prelude::*;
use std::net::TcpListener;

#[test]
fn test_port_is_remembered() {
    let env = TestEnv::new();

    let first = env.allocate(&["--min", "20000", "--max", "60000"]);
    assert!((20000..=60000).contains(&first));
    assert_eq!(
        std::fs::read_to_string(env.cached_port_file()).unwrap(),
        first.to_string()
    );

    let second = env.allocate(&["--min", "20000", "--max", "60000"]);
    assert_eq!(first, second);
}

#[test]
fn test_single_port_range() {
    let env = TestEnv::new();
    let port = free_port();
    let bound = port.to_string();

    assert_eq!(env.allocate(&["--min", &bound, "--max", &bound]), port);
}

#[test]
fn test_fractional_bounds_round_inward() {
    let env = TestEnv::new();
    let port = free_port();
    let min = format!("{}.3", port - 1);
    let max = format!("{port}.7");

    assert_eq!(env.allocate(&["--min", &min, "--max", &max]), port);
}

#[test]
fn test_occupied_cached_port_is_replaced() {
    let env = TestEnv::new();
    let listener = TcpListener::bind(("0.0.0.0", 0)).unwrap();
    let occupied = listener.local_addr().unwrap().port();

    std::fs::create_dir_all(env.cached_port_file().parent().unwrap()).unwrap();
    std::fs::write(env.cached_port_file(), occupied.to_string()).unwrap();

    let allocated = env.allocate(&["--min", "20000", "--max", "60000"]);
    assert_ne!(allocated, occupied);
    assert_eq!(
        std::fs::read_to_string(env.cached_port_file()).unwrap(),
        allocated.to_string()
    );
}

#[test]
fn test_range_from_config_file() {
    let env = TestEnv::new();
    let port = free_port();
    env.write_config(&format!("ports:\n  min: {port}\n  max: {port}\n"));

    assert_eq!(env.allocate(&[]), port);
}

#[test]
fn test_range_from_env() {
    let env = TestEnv::new();
    let port = free_port();

    let output = env
        .command()
        .env("PLUGDEV_PORT_MIN", port.to_string())
        .env("PLUGDEV_PORT_MAX", port.to_string())
        .arg("port")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(parse_port(&String::from_utf8(output.stdout).unwrap()), port);
}

#[test]
fn test_storage_dir_from_config() {
    let env = TestEnv::new();
    let storage = env.path().join("elsewhere");
    env.write_file(
        ".plugdev/config.yaml",
        &format!("storage_dir: {}\n", storage.display()),
    );

    let output = env
        .command_bare()
        .env("HOME", env.path())
        .arg("port")
        .arg("--min")
        .arg("20000")
        .arg("--max")
        .arg("60000")
        .output()
        .unwrap();
    assert!(output.status.success());

    let allocated = parse_port(&String::from_utf8(output.stdout).unwrap());
    assert_eq!(
        std::fs::read_to_string(storage.join("server-port")).unwrap(),
        allocated.to_string()
    );
}

#[test]
fn test_data_dir_beats_storage_dir() {
    let env = TestEnv::new();
    let storage = env.path().join("elsewhere");

    let output = env
        .command()
        .env("PLUGDEV_STORAGE_DIR", &storage)
        .arg("port")
        .arg("--min")
        .arg("20000")
        .arg("--max")
        .arg("60000")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(env.cached_port_file().exists());
    assert!(!storage.join("server-port").exists());
}

#[test]
fn test_empty_range_is_invalid_argument() {
    let env = TestEnv::new();
    env.command()
        .arg("port")
        .arg("--min")
        .arg("10.5")
        .arg("--max")
        .arg("10.6")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Invalid arguments"));
}

#[test]
fn test_out_of_range_bound_is_invalid_argument() {
    let env = TestEnv::new();
    env.command()
        .arg("port")
        .arg("--min")
        .arg("60000")
        .arg("--max")
        .arg("70000")
        .assert()
        .code(4);
}

#[test]
fn test_zero_max_attempts_rejected() {
    let env = TestEnv::new();
    env.command()
        .arg("port")
        .arg("--max-attempts")
        .arg("0")
        .assert()
        .code(4);
}

#[test]
fn test_exhausted_attempts_fail() {
    let env = TestEnv::new();
    let listener = TcpListener::bind(("0.0.0.0", 0)).unwrap();
    let occupied = listener.local_addr().unwrap().port().to_string();

    env.command()
        .arg("port")
        .arg("--min")
        .arg(&occupied)
        .arg("--max")
        .arg(&occupied)
        .arg("--max-attempts")
        .arg("3")
        .assert()
        .code(6)
        .stderr(predicate::str::contains("exhausted"));
}
