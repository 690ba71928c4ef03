use std::sync::mpsc::{self, SyncSender};
use std::thread;

use windows::Win32::Foundation::{HWND, LPARAM, WPARAM};
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::WindowsAndMessaging::{
    DestroyWindow, DispatchMessageW, GetMessageW, MSG, PM_NOREMOVE, PeekMessageW,
    PostThreadMessageW, TranslateMessage, WM_APP, WM_QUIT, WM_USER,
};

use workbar_core::config::OverlayConfig;
use workbar_core::hook::HookHandle;
use workbar_core::{WidgetEvent, WindowResult};

use crate::hook::{self, TaskbarHook, WinEventHook};
use crate::overlay;
use crate::style::Win32Style;

/// Thread message asking the loop to register the taskbar hook.
const WM_HOOK_TASKBAR: u32 = WM_APP + 1;

/// What the event loop thread reports once it is running.
struct Ready {
    thread_id: u32,
    overlay: usize,
}

/// Starts the Win32 event loop on a new thread.
///
/// With an overlay config, the thread creates the overlay window and
/// marks it as a tool window before reporting back. Overlay input and
/// taskbar notifications go to `event_tx`. The taskbar hook is only
/// registered once [`EventLoopHandle::hook_taskbar`] is called.
pub fn start(
    event_tx: SyncSender<WidgetEvent>,
    overlay_config: Option<OverlayConfig>,
) -> WindowResult<EventLoopHandle> {
    let (ready_tx, ready_rx) = mpsc::channel::<Result<Ready, String>>();

    let handle = thread::spawn(move || {
        hook::install_sender(event_tx);

        let thread_id = unsafe { GetCurrentThreadId() };

        let window = match overlay_config.as_ref().map(overlay::create).transpose() {
            Ok(window) => window,
            Err(e) => {
                let _ = ready_tx.send(Err(format!("failed to create overlay window: {e}")));
                return;
            }
        };
        if let Some(hwnd) = window {
            workbar_core::style::enforce_tool_window(&Win32Style, hwnd.0 as usize);
        }

        // Thread messages posted before the queue exists are dropped, so
        // create it before anyone learns our thread id.
        let mut msg = MSG::default();
        unsafe {
            let _ = PeekMessageW(&mut msg, None, WM_USER, WM_USER, PM_NOREMOVE);
        }

        let _ = ready_tx.send(Ok(Ready {
            thread_id,
            overlay: window.map_or(0, |hwnd| hwnd.0 as usize),
        }));

        let mut hook = None;
        run_message_pump(&mut hook);

        // Unhook before the window goes away so no callback sees a
        // half-destroyed overlay.
        if let Some(mut hook) = hook {
            hook.release();
        }
        if let Some(hwnd) = window {
            destroy(hwnd);
        }
    });

    let ready = ready_rx
        .recv()
        .map_err(|_| -> Box<dyn std::error::Error> {
            "event loop thread exited unexpectedly".into()
        })?
        .map_err(|e| -> Box<dyn std::error::Error> { e.into() })?;

    Ok(EventLoopHandle {
        thread_id: ready.thread_id,
        overlay: ready.overlay,
        handle,
    })
}

/// Handle for controlling the event loop from the UI loop.
pub struct EventLoopHandle {
    thread_id: u32,
    overlay: usize,
    handle: thread::JoinHandle<()>,
}

impl EventLoopHandle {
    /// Raw handle of the overlay window, 0 when started without one.
    pub fn overlay(&self) -> usize {
        self.overlay
    }

    /// Asks the loop to register the taskbar location hook.
    ///
    /// Returns `false` when the request could not be delivered.
    /// Registration failure is logged by the loop and leaves the widget
    /// on periodic polling.
    pub fn hook_taskbar(&self) -> bool {
        let result =
            unsafe { PostThreadMessageW(self.thread_id, WM_HOOK_TASKBAR, WPARAM(0), LPARAM(0)) };
        if let Err(e) = &result {
            workbar_core::log_warn!("could not request taskbar hook: {e}");
        }
        result.is_ok()
    }

    /// Signals the event loop to stop and waits for the thread to finish.
    pub fn stop(self) {
        unsafe {
            let _ = PostThreadMessageW(self.thread_id, WM_QUIT, WPARAM(0), LPARAM(0));
        }
        let _ = self.handle.join();
    }
}

/// Blocks until `WM_QUIT`, registering the hook on request.
fn run_message_pump(hook: &mut Option<TaskbarHook>) {
    let mut msg = MSG::default();

    while unsafe { GetMessageW(&mut msg, None, 0, 0).as_bool() } {
        if msg.message == WM_HOOK_TASKBAR {
            if hook.is_none() {
                *hook = register_hook();
            }
            continue;
        }

        unsafe {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}

fn register_hook() -> Option<TaskbarHook> {
    let hook = HookHandle::register(WinEventHook);
    match &hook {
        Some(h) => workbar_core::log_info!("taskbar hook registered (0x{:X})", h.raw()),
        None => workbar_core::log_warn!("taskbar hook unavailable, relying on polling"),
    }
    hook
}

/// Destroys the overlay if it still exists.
///
/// When the window was closed by the user it is already gone and the
/// call fails harmlessly.
fn destroy(hwnd: HWND) {
    unsafe {
        let _ = DestroyWindow(hwnd);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hook_request_is_delivered_right_after_start_without_overlay() {
        // Arrange
        let (tx, _rx) = mpsc::sync_channel(32);
        let event_loop = start(tx, None).unwrap();

        // Act
        let delivered = event_loop.hook_taskbar();

        // Assert
        assert!(delivered);
        assert_eq!(event_loop.overlay(), 0);
        event_loop.stop();
    }
}
