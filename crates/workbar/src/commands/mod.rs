pub mod init;

#[cfg(windows)]
pub mod events;
#[cfg(windows)]
pub mod probe;
#[cfg(windows)]
pub mod run;
#[cfg(windows)]
pub mod start;
#[cfg(windows)]
pub mod status;
#[cfg(windows)]
pub mod stop;

/// Everything except `init` talks to the Windows shell.
#[cfg(not(windows))]
pub fn unsupported() {
    eprintln!("Error: this command requires Windows.");
    std::process::exit(1);
}
