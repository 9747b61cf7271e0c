//! End-to-end tests for the `turbo-cart` binary.

use std::path::Path;
use std::process::{Command, Output};

const STORE: &str = r#"
threshold = 500

[gift]
id = "gift"
name = "Wireless Mouse"

[[products]]
id = "chair"
name = "Chair"
price = 300

[[products]]
id = "lamp"
name = "Lamp"
price = 200
"#;

fn turbo_cart(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_turbo-cart"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(dir.join("cart.toml"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn store_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cart.toml"), STORE).unwrap();
    dir
}

#[test]
fn test_run_json_reports_gift() {
    let dir = store_dir();
    std::fs::write(
        dir.path().join("session.txt"),
        "adjust chair +1\nadd chair\nadjust lamp 1\nadd lamp\nremove gift\n",
    )
    .unwrap();

    let output = turbo_cart(dir.path(), &["--json", "run", "session.txt"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["cart"]["pricing"]["subtotal"], 500);
    assert_eq!(report["cart"]["items"].as_array().unwrap().len(), 3);
    assert_eq!(
        report["cart"]["gift_message"],
        "Congratulations! You've earned a free Wireless Mouse!"
    );
    assert_eq!(report["steps"][4]["op"], "remove");
    assert_eq!(report["steps"][4]["result"]["change"]["skipped"], "gift_protected");
}

#[test]
fn test_run_rejects_bad_script() {
    let dir = store_dir();
    std::fs::write(dir.path().join("session.txt"), "add chair\nbuy lamp\n").unwrap();

    let output = turbo_cart(dir.path(), &["run", "session.txt"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2: unknown operation 'buy'"));
}

#[test]
fn test_validate_rejects_gift_in_catalog() {
    let dir = store_dir();
    let broken = format!("{}\n[[products]]\nid = \"gift\"\nname = \"Mouse\"\nprice = 10\n", STORE);
    std::fs::write(dir.path().join("cart.toml"), broken).unwrap();

    let output = turbo_cart(dir.path(), &["config", "validate"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must not appear in the purchasable catalog"));
}

#[test]
fn test_config_init_writes_demo_store() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_turbo-cart"))
        .current_dir(dir.path())
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let written = std::fs::read_to_string(dir.path().join("cart.toml")).unwrap();
    assert!(written.contains("wireless-mouse"));

    let again = Command::new(env!("CARGO_BIN_EXE_turbo-cart"))
        .current_dir(dir.path())
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");
    assert_eq!(again.status.code(), Some(1));
}

#[test]
fn test_config_init_force_replaces_broken_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cart.toml"), "threshold = \"lots\"\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_turbo-cart"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .args(["config", "init", "--force"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Ignoring unreadable store config"));

    let written = std::fs::read_to_string(dir.path().join("cart.toml")).unwrap();
    assert!(written.contains("wireless-mouse"));
}

#[test]
fn test_explicit_broken_config_stays_fatal() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cart.toml"), "threshold = \"lots\"\n").unwrap();

    let output = turbo_cart(dir.path(), &["config", "init", "--force"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load store config"));
    assert!(stderr.contains("Invalid TOML store config"));
}
