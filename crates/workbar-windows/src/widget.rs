use windows::Win32::UI::HiDpi::{
    DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, SetProcessDpiAwarenessContext,
};

use workbar_core::WindowResult;

#[path = "widget_handlers.rs"]
mod widget_handlers;
#[path = "widget_loop.rs"]
mod widget_loop;
#[path = "widget_threads.rs"]
mod widget_threads;
#[path = "widget_types.rs"]
mod widget_types;

/// Runs the widget until the overlay is closed or Ctrl+C is pressed.
///
/// The Win32 event loop (overlay input and the taskbar hook) runs on
/// its own thread. The calling thread becomes the UI loop and owns all
/// positioning and rendering.
pub fn run() -> WindowResult<()> {
    enable_dpi_awareness();
    eprintln!("Workbar started.");

    let result = widget_loop::widget_loop();

    eprintln!("Workbar stopped.");
    result
}

/// Declares the process per-monitor DPI aware (V2).
///
/// The app-bar and window rectangles are then raw pixels, matching the
/// coordinates `SetWindowPos` expects. Must run before any window exists.
fn enable_dpi_awareness() {
    // Fails when a manifest already set the awareness; that is fine.
    unsafe {
        let _ = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);
    }
}
