use std::os::windows::process::CommandExt;
use std::process::{Command, Stdio};

/// `CREATE_NO_WINDOW` (0x08000000) | `CREATE_NEW_PROCESS_GROUP` (0x200):
/// no console for the widget, and Ctrl+C in this terminal does not reach it.
const DETACH_FLAGS: u32 = 0x0800_0000 | 0x0000_0200;

pub fn execute() {
    if workbar_windows::overlay::find_running().is_some() {
        println!("Workbar is already running.");
        return;
    }

    let exe = match std::env::current_exe() {
        Ok(exe) => exe,
        Err(e) => {
            eprintln!("Error: could not locate the workbar executable: {e}");
            std::process::exit(1);
        }
    };

    // Re-run ourselves with `run`, fully detached.
    let spawned = Command::new(exe)
        .arg("run")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .creation_flags(DETACH_FLAGS)
        .spawn();

    match spawned {
        Ok(mut child) => {
            let _ = child.try_wait();
            println!("Workbar started (PID: {}).", child.id());
        }
        Err(e) => {
            eprintln!("Error: failed to start workbar: {e}");
            std::process::exit(1);
        }
    }
}
