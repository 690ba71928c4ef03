//! Ctrl+C signal handler using `SetConsoleCtrlHandler`.

use std::sync::OnceLock;

use windows::Win32::System::Console::{CTRL_C_EVENT, SetConsoleCtrlHandler};
use workbar_core::WindowResult;

type Callback = Box<dyn Fn() + Send + Sync>;

/// Written once by `set_handler`, read by the console callback.
static CALLBACK: OnceLock<Callback> = OnceLock::new();

/// Registers a Ctrl+C handler that runs `on_ctrl_c`.
///
/// Only one handler can be installed per process.
pub fn set_handler(on_ctrl_c: impl Fn() + Send + Sync + 'static) -> WindowResult<()> {
    CALLBACK
        .set(Box::new(on_ctrl_c))
        .map_err(|_| "Ctrl+C handler already registered")?;
    unsafe { SetConsoleCtrlHandler(Some(handler), true)? };
    Ok(())
}

unsafe extern "system" fn handler(ctrl_type: u32) -> windows::core::BOOL {
    if ctrl_type == CTRL_C_EVENT
        && let Some(callback) = CALLBACK.get()
    {
        callback();
    }
    windows::core::BOOL(1)
}
