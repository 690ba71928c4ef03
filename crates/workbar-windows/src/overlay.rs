//! The overlay window.
//!
//! Creation and the window procedure live on the event loop thread.
//! [`OverlayWindow`] is the UI loop's side: it moves and repaints the
//! window by handle, which Win32 allows from any thread.

use std::cell::Cell;
use std::mem;
use std::sync::Once;

use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::Input::KeyboardAndMouse::{TME_LEAVE, TRACKMOUSEEVENT, TrackMouseEvent};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, FindWindowW, HWND_TOPMOST, IDC_ARROW, LoadCursorW,
    PostMessageW, PostQuitMessage, RegisterClassW, SW_SHOWNOACTIVATE, SWP_NOACTIVATE, SWP_NOSIZE,
    SetWindowPos, ShowWindow, WM_CLOSE, WM_DESTROY, WM_LBUTTONUP, WM_MOUSEMOVE, WM_MOUSEWHEEL,
    WNDCLASSW, WS_EX_LAYERED, WS_EX_NOACTIVATE, WS_EX_TOPMOST, WS_POPUP,
};
use windows::core::{PCWSTR, w};

use workbar_core::config::OverlayConfig;
use workbar_core::overlay::OverlayView;
use workbar_core::{OverlaySurface, Placement, WidgetEvent, WindowResult};

use crate::hook;
use crate::render::render_overlay;

/// Window class of the overlay, also used to find a running instance.
const CLASS_NAME: PCWSTR = w!("WorkbarOverlay");

/// Not exported by every `windows` feature set.
const WM_MOUSELEAVE: u32 = 0x02A3;

static REGISTER_CLASS: Once = Once::new();

thread_local! {
    /// Whether a `TME_LEAVE` request is outstanding.
    static TRACKING_LEAVE: Cell<bool> = const { Cell::new(false) };
}

fn ensure_class_registered() {
    REGISTER_CLASS.call_once(|| {
        let wc = WNDCLASSW {
            lpfnWndProc: Some(overlay_wnd_proc),
            lpszClassName: CLASS_NAME,
            hCursor: unsafe { LoadCursorW(None, IDC_ARROW) }.unwrap_or_default(),
            ..Default::default()
        };
        unsafe {
            RegisterClassW(&wc);
        }
    });
}

/// Creates the hidden overlay window on the calling thread.
///
/// That thread must pump messages for input to arrive.
pub(crate) fn create(config: &OverlayConfig) -> WindowResult<HWND> {
    ensure_class_registered();

    // No WS_EX_TOOLWINDOW yet: the style is enforced once the handle exists.
    let ex = WS_EX_LAYERED | WS_EX_TOPMOST | WS_EX_NOACTIVATE;
    let hwnd = unsafe {
        CreateWindowExW(
            ex,
            CLASS_NAME,
            w!("Workbar"),
            WS_POPUP,
            0,
            0,
            config.width,
            config.height,
            None,
            None,
            None,
            None,
        )?
    };
    Ok(hwnd)
}

/// High word of `WPARAM` as a signed wheel delta.
fn wheel_delta(wparam: WPARAM) -> i32 {
    i32::from(((wparam.0 >> 16) & 0xFFFF) as u16 as i16)
}

/// Low word of `LPARAM` as a signed client x-coordinate.
fn client_x(lparam: LPARAM) -> i32 {
    i32::from((lparam.0 & 0xFFFF) as u16 as i16)
}

fn track_leave(hwnd: HWND) {
    if TRACKING_LEAVE.get() {
        return;
    }
    let mut tme = TRACKMOUSEEVENT {
        cbSize: mem::size_of::<TRACKMOUSEEVENT>() as u32,
        dwFlags: TME_LEAVE,
        hwndTrack: hwnd,
        dwHoverTime: 0,
    };
    if unsafe { TrackMouseEvent(&mut tme) }.is_ok() {
        TRACKING_LEAVE.set(true);
        hook::send(WidgetEvent::Hover { inside: true });
    }
}

unsafe extern "system" fn overlay_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_MOUSEMOVE => track_leave(hwnd),
        WM_MOUSELEAVE => {
            TRACKING_LEAVE.set(false);
            hook::send(WidgetEvent::Hover { inside: false });
        }
        WM_MOUSEWHEEL => {
            hook::send(WidgetEvent::Wheel {
                delta: wheel_delta(wparam),
            });
            return LRESULT(0);
        }
        WM_LBUTTONUP => {
            hook::send(WidgetEvent::Clicked {
                x: client_x(lparam),
            });
        }
        WM_DESTROY => {
            hook::send(WidgetEvent::Closed);
            unsafe { PostQuitMessage(0) };
            return LRESULT(0);
        }
        _ => {}
    }
    unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) }
}

/// Finds the overlay window of a running Workbar instance.
pub fn find_running() -> Option<HWND> {
    let hwnd = unsafe { FindWindowW(CLASS_NAME, PCWSTR::null()) }.ok()?;
    (!hwnd.is_invalid()).then_some(hwnd)
}

/// Asks a running instance to close its overlay, which ends it.
pub fn request_close(hwnd: HWND) -> WindowResult<()> {
    unsafe { PostMessageW(Some(hwnd), WM_CLOSE, WPARAM(0), LPARAM(0))? };
    Ok(())
}

/// The UI loop's handle to the overlay window.
pub struct OverlayWindow {
    hwnd: usize,
    config: OverlayConfig,
    visible: bool,
}

impl OverlayWindow {
    /// Wraps a window created by the event loop thread.
    pub fn from_raw(handle: usize, config: OverlayConfig) -> Self {
        Self {
            hwnd: handle,
            config,
            visible: false,
        }
    }

    pub fn handle(&self) -> usize {
        self.hwnd
    }

    fn hwnd(&self) -> HWND {
        HWND(self.hwnd as *mut _)
    }

    /// Repaints the overlay and shows it on first use.
    pub fn render(&mut self, view: &OverlayView) {
        render_overlay(self.hwnd(), &self.config, view);
        if !self.visible {
            unsafe {
                let _ = ShowWindow(self.hwnd(), SW_SHOWNOACTIVATE);
            }
            self.visible = true;
        }
    }
}

impl OverlaySurface for OverlayWindow {
    fn move_to(&mut self, placement: Placement) -> bool {
        let (x, y) = placement.to_pixels();
        let result = unsafe {
            SetWindowPos(
                self.hwnd(),
                Some(HWND_TOPMOST),
                x,
                y,
                0,
                0,
                SWP_NOSIZE | SWP_NOACTIVATE,
            )
        };
        if let Err(e) = &result {
            workbar_core::log_warn!("failed to move overlay to ({x}, {y}): {e}");
        }
        result.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_delta_is_signed_high_word() {
        assert_eq!(wheel_delta(WPARAM(120 << 16)), 120);
        assert_eq!(wheel_delta(WPARAM(0xFF88_0000)), -120);
    }

    #[test]
    fn client_x_is_signed_low_word() {
        assert_eq!(client_x(LPARAM(0x0014_0020)), 32);
        assert_eq!(client_x(LPARAM(0x0000_FFFE)), -2);
    }
}
