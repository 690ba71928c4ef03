use std::mem;

use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::UI::Shell::{APPBARDATA, SHAppBarMessage};
use windows::Win32::UI::WindowsAndMessaging::{
    FindWindowW, GetSystemMetrics, GetWindowRect, SM_CXSCREEN, SM_CYSCREEN,
};
use windows::core::{PCWSTR, w};

use workbar_core::{Edge, Rect, Size, TaskbarGeometry, TaskbarProvider, TaskbarWindow};

/// `ABM_GETSTATE`: returns the taskbar's auto-hide/always-on-top state.
const ABM_GETSTATE: u32 = 0x0000_0004;

/// `ABM_GETTASKBARPOS`: fills `uEdge` and `rc` with the taskbar position.
const ABM_GETTASKBARPOS: u32 = 0x0000_0005;

/// `ABS_AUTOHIDE` bit in the `ABM_GETSTATE` result.
const ABS_AUTOHIDE: usize = 0x0000_0001;

/// Taskbar queries against the Windows shell.
///
/// Stateless: every call asks the shell again.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellTaskbar;

impl ShellTaskbar {
    /// Sends an app-bar message about the taskbar and returns the raw
    /// result together with the filled-in data.
    fn appbar(message: u32) -> (usize, APPBARDATA) {
        let mut data = APPBARDATA {
            cbSize: mem::size_of::<APPBARDATA>() as u32,
            ..Default::default()
        };
        // SAFETY: `data` is a properly sized APPBARDATA; the shell only
        // writes into it for the duration of the call.
        let result = unsafe { SHAppBarMessage(message, &mut data) };
        (result, data)
    }
}

impl TaskbarProvider for ShellTaskbar {
    fn query_geometry(&self) -> TaskbarGeometry {
        let (result, data) = Self::appbar(ABM_GETTASKBARPOS);
        if result == 0 {
            return TaskbarGeometry::unknown();
        }
        let edge = Edge::from_appbar(data.uEdge);
        if edge == Edge::Unknown {
            return TaskbarGeometry::unknown();
        }
        let rc = data.rc;
        TaskbarGeometry {
            edge,
            bounds: Rect::from_ltrb(rc.left, rc.top, rc.right, rc.bottom),
            auto_hide: self.query_auto_hide(),
        }
    }

    fn query_auto_hide(&self) -> bool {
        let (state, _) = Self::appbar(ABM_GETSTATE);
        state & ABS_AUTOHIDE == ABS_AUTOHIDE
    }

    fn locate(&self) -> Option<TaskbarWindow> {
        let hwnd = find_taskbar()?;
        let mut rc = RECT::default();
        // SAFETY: GetWindowRect only writes the window's screen rect.
        unsafe { GetWindowRect(hwnd, &mut rc) }.ok()?;
        Some(TaskbarWindow {
            handle: hwnd.0 as usize,
            rect: Rect::from_ltrb(rc.left, rc.top, rc.right, rc.bottom),
        })
    }

    fn screen_size(&self) -> Size {
        // SAFETY: GetSystemMetrics is a pure query.
        unsafe { Size::new(GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN)) }
    }
}

/// Finds the primary taskbar window (`Shell_TrayWnd`).
///
/// Returns `None` while Explorer is not running.
pub fn find_taskbar() -> Option<HWND> {
    // SAFETY: FindWindowW reads the class name; no window is modified.
    let hwnd = unsafe { FindWindowW(w!("Shell_TrayWnd"), PCWSTR::null()) }.ok()?;
    (!hwnd.is_invalid()).then_some(hwnd)
}
