use std::process::{Command, Output};

const BIN: &str = env!("CARGO_BIN_EXE_contractloader");
const ADDRESS: &str = "0xdAC17F958D2ee523a2206206994597C13D831ec7";

/// Runs the binary with a clean environment so local credentials and
/// CONTRACTLOADER_* settings do not leak into the assertions.
fn contractloader(args: &[&str]) -> Output {
    let mut command = Command::new(BIN);
    command.args(args).env_remove("ETHERSCAN_API_KEY");
    for (key, _) in std::env::vars() {
        if key.starts_with("CONTRACTLOADER_") {
            command.env_remove(key);
        }
    }
    command.output().expect("Failed to run contractloader")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn invalid_chain_fails_before_any_request() {
    let dir = tempfile::tempdir().unwrap();
    let output = contractloader(&[
        "--address",
        ADDRESS,
        "--chainid",
        "notachain",
        "--apikey",
        "KEY",
        "--output",
        dir.path().to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid chain: \"notachain\""));
    assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn missing_api_key_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let output = contractloader(&[
        "-a",
        ADDRESS,
        "-c",
        "base",
        "-o",
        dir.path().to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("No Etherscan API key configured"));
}

#[test]
fn missing_address_exits_with_one() {
    let output = contractloader(&["--chainid", "1"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("--address"));
}

#[test]
fn chains_lists_aliases() {
    let output = contractloader(&["chains"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.lines().any(|line| line.starts_with("base ") && line.ends_with(" 8453")));
    assert!(stdout.lines().any(|line| line.starts_with("sepolia ") && line.ends_with(" 11155111")));
}

#[test]
fn verbose_flag_works_with_subcommands() {
    for args in [&["--verbose", "chains"][..], &["chains", "--verbose"][..]] {
        let output = contractloader(args);
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert!(output.status.success(), "{args:?}: {}", stderr(&output));
        assert!(stdout.lines().any(|line| line.starts_with("ethereum ")));
    }
}

#[test]
fn autocomplete_generates_bash_script() {
    let output = contractloader(&["autocomplete", "generate", "--shell", "bash"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("contractloader"));
}

#[test]
fn help_succeeds() {
    let output = contractloader(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("--chainid"));
    assert!(stdout.contains("--confine-paths"));
}
