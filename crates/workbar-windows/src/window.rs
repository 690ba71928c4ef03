use workbar_core::{Rect, WindowResult};

use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::UI::WindowsAndMessaging::{
    GetForegroundWindow, GetWindowRect, GetWindowTextLengthW, GetWindowTextW,
};

/// A window on the Windows platform, wrapping a Win32 `HWND`.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    /// Creates a `Window` from a raw pointer-sized handle value.
    pub fn from_raw(handle: usize) -> Self {
        Self {
            hwnd: HWND(handle as *mut _),
        }
    }

    /// Returns the window the user is currently working in, if any.
    pub fn foreground() -> Option<Self> {
        // SAFETY: GetForegroundWindow is a pure query.
        let hwnd = unsafe { GetForegroundWindow() };
        (!hwnd.is_invalid()).then_some(Self { hwnd })
    }
}

impl workbar_core::Window for Window {
    fn title(&self) -> WindowResult<String> {
        // SAFETY: both calls only read the window text.
        unsafe {
            let length = GetWindowTextLengthW(self.hwnd);
            if length == 0 {
                return Ok(String::new());
            }

            // +1 for the null terminator
            let mut buffer = vec![0u16; (length + 1) as usize];
            let copied = GetWindowTextW(self.hwnd, &mut buffer);
            Ok(String::from_utf16_lossy(&buffer[..copied as usize]))
        }
    }

    fn rect(&self) -> WindowResult<Rect> {
        let mut rc = RECT::default();
        // SAFETY: GetWindowRect only writes into `rc`.
        unsafe { GetWindowRect(self.hwnd, &mut rc)? };
        Ok(Rect::from_ltrb(rc.left, rc.top, rc.right, rc.bottom))
    }
}
