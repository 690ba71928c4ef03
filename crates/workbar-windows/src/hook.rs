//! WinEvent hook for taskbar location changes.
//!
//! The hook is out-of-context, so its callback runs on the thread that
//! registered it while that thread pumps messages. Callbacks reach the
//! UI loop through a thread-local bounded sender.

use std::cell::RefCell;
use std::sync::mpsc::{SyncSender, TrySendError};

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Accessibility::{HWINEVENTHOOK, SetWinEventHook, UnhookWinEvent};
use windows::Win32::UI::WindowsAndMessaging::{
    EVENT_OBJECT_LOCATIONCHANGE, WINEVENT_OUTOFCONTEXT, WINEVENT_SKIPOWNPROCESS,
};

use workbar_core::WidgetEvent;
use workbar_core::hook::{HookApi, HookHandle};

use crate::taskbar::find_taskbar;

/// Object ID for the window itself (not a child object).
const OBJID_WINDOW: i32 = 0;

thread_local! {
    static EVENT_SENDER: RefCell<Option<SyncSender<WidgetEvent>>> = const { RefCell::new(None) };
}

/// Installs the sender used by the hook callback and the overlay
/// window procedure on the current thread.
pub(crate) fn install_sender(tx: SyncSender<WidgetEvent>) {
    EVENT_SENDER.with(|cell| *cell.borrow_mut() = Some(tx));
}

/// Pushes an event to the UI loop without blocking the message pump.
///
/// A full channel drops the event. Location changes are coalesced by
/// the next re-snap and the periodic placement pass.
pub(crate) fn send(event: WidgetEvent) {
    EVENT_SENDER.with(|cell| {
        let cell = cell.borrow();
        let Some(sender) = cell.as_ref() else {
            return;
        };
        match sender.try_send(event) {
            Ok(()) | Err(TrySendError::Disconnected(_)) => {}
            Err(TrySendError::Full(dropped)) => {
                workbar_core::log_debug!("event channel full, dropped {dropped}");
            }
        }
    });
}

/// `SetWinEventHook` registration for `EVENT_OBJECT_LOCATIONCHANGE`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WinEventHook;

/// A registered location-change hook, released exactly once.
pub type TaskbarHook = HookHandle<WinEventHook>;

impl HookApi for WinEventHook {
    fn register(&self) -> usize {
        // SAFETY: out-of-context hooks call back into this process on
        // the registering thread; the callback has the required ABI.
        let hook = unsafe {
            SetWinEventHook(
                EVENT_OBJECT_LOCATIONCHANGE,
                EVENT_OBJECT_LOCATIONCHANGE,
                None,
                Some(win_event_proc),
                0,
                0,
                WINEVENT_OUTOFCONTEXT | WINEVENT_SKIPOWNPROCESS,
            )
        };
        hook.0 as usize
    }

    fn unregister(&self, raw: usize) -> bool {
        // SAFETY: `raw` came from a successful `register`.
        unsafe { UnhookWinEvent(HWINEVENTHOOK(raw as *mut _)).as_bool() }
    }
}

/// Filters raw notifications down to whole-window moves of the taskbar.
///
/// Location changes fire for carets, cursors, and every child object of
/// every window. Only `OBJID_WINDOW` changes on `Shell_TrayWnd` matter.
fn translate(event: u32, hwnd: HWND, id_object: i32) -> Option<WidgetEvent> {
    if event != EVENT_OBJECT_LOCATIONCHANGE || id_object != OBJID_WINDOW || hwnd.is_invalid() {
        return None;
    }
    let taskbar = find_taskbar()?;
    (taskbar == hwnd).then_some(WidgetEvent::LocationChanged {
        hwnd: hwnd.0 as usize,
    })
}

unsafe extern "system" fn win_event_proc(
    _hook: HWINEVENTHOOK,
    event: u32,
    hwnd: HWND,
    id_object: i32,
    _id_child: i32,
    _event_thread: u32,
    _event_time: u32,
) {
    if let Some(event) = translate(event, hwnd, id_object) {
        send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_window_objects_are_ignored() {
        // OBJID_CARET = -8
        assert_eq!(
            translate(EVENT_OBJECT_LOCATIONCHANGE, HWND(0x1234 as *mut _), -8),
            None
        );
    }

    #[test]
    fn other_event_codes_are_ignored() {
        // EVENT_SYSTEM_FOREGROUND
        assert_eq!(translate(0x0003, HWND(0x1234 as *mut _), OBJID_WINDOW), None);
    }

    #[test]
    fn null_window_is_ignored() {
        assert_eq!(
            translate(EVENT_OBJECT_LOCATIONCHANGE, HWND::default(), OBJID_WINDOW),
            None
        );
    }
}
