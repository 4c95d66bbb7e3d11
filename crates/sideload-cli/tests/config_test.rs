use assert_cmd::cargo::cargo_bin_cmd;
use sideload_testing::{TestWorld, assertions};

#[test]
fn test_config_display_preference() {
    let world = TestWorld::new()
        .with_sample("widgets_collection.json")
        .with_config("display_preference = [\"title\", \"name\"]\n");

    let result = world
        .run(&["--format", "json", "list", "widgets_collection.json"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assertions::assert_row_relationship(&json, 0, "owner", &["Engineer"]).unwrap();
}

#[test]
fn test_config_format_and_flag_override() {
    let world = TestWorld::new()
        .with_sample("widgets_collection.json")
        .with_config("format = \"json\"\n");

    let result = world.run(&["inspect", "widgets_collection.json"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.json().is_ok());

    let result = world
        .run(&["--format", "plain", "inspect", "widgets_collection.json"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.json().is_err());
}

#[test]
fn test_config_from_environment() {
    let world = TestWorld::new().with_sample("widgets_collection.json");
    let env_config = world.temp_dir().join("env-config.toml");
    std::fs::write(&env_config, "truncate_width = 5\n").unwrap();

    let mut cmd = cargo_bin_cmd!("sideload");
    cmd.current_dir(world.temp_dir())
        .env("SIDELOAD_CONFIG", &env_config)
        .args(["list", "widgets_collection.json"]);
    let output = cmd.output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Sp..."));
}

#[test]
fn test_malformed_config_fails() {
    let world = TestWorld::new()
        .with_sample("widgets_collection.json")
        .with_config("truncate_width = \"wide\"\n");

    let result = world.run(&["inspect", "widgets_collection.json"]).unwrap();
    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().starts_with("Error: Failed to parse config"));
}
