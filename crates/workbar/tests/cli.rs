use std::process::Command;

#[test]
fn help_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_workbar"));
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute workbar");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("follows the Windows taskbar"));
}

#[test]
fn version_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_workbar"));
    cmd.arg("--version");

    // Act
    let output = cmd.output().expect("failed to execute workbar");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("workbar"));
}

#[test]
fn help_lists_every_command() {
    // Act
    let output = Command::new(env!("CARGO_BIN_EXE_workbar"))
        .arg("--help")
        .output()
        .expect("failed to execute workbar");

    // Assert
    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["init", "run", "start", "stop", "status", "probe", "events"] {
        assert!(stdout.contains(command), "missing {command} in help");
    }
}

#[test]
fn probe_accepts_json_flag() {
    // Act
    let output = Command::new(env!("CARGO_BIN_EXE_workbar"))
        .args(["probe", "--help"])
        .output()
        .expect("failed to execute workbar");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--json"));
}

#[test]
fn unknown_command_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_workbar"))
        .arg("frobnicate")
        .output()
        .expect("failed to execute workbar");

    assert!(!output.status.success());
}
