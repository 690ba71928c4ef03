use windows::Win32::Foundation::{GetLastError, HWND, SetLastError, WIN32_ERROR};
use windows::Win32::UI::WindowsAndMessaging::{GWL_EXSTYLE, GetWindowLongPtrW, SetWindowLongPtrW};

use workbar_core::style::{StyleApi, WindowStyleFlags};

/// Reads and writes `GWL_EXSTYLE` through `Get/SetWindowLongPtrW`.
///
/// Both calls legitimately return 0, so failure is detected through
/// the thread's last-error value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Style;

impl StyleApi for Win32Style {
    fn ex_style(&self, handle: usize) -> Option<WindowStyleFlags> {
        let hwnd = HWND(handle as *mut _);
        // SAFETY: an invalid handle makes the call fail, it does not crash.
        unsafe {
            SetLastError(WIN32_ERROR(0));
            let value = GetWindowLongPtrW(hwnd, GWL_EXSTYLE);
            if value == 0 && GetLastError() != WIN32_ERROR(0) {
                return None;
            }
            Some(WindowStyleFlags(value as u32))
        }
    }

    fn set_ex_style(&self, handle: usize, style: WindowStyleFlags) -> bool {
        let hwnd = HWND(handle as *mut _);
        unsafe {
            SetLastError(WIN32_ERROR(0));
            let previous = SetWindowLongPtrW(hwnd, GWL_EXSTYLE, style.0 as isize);
            previous != 0 || GetLastError() == WIN32_ERROR(0)
        }
    }
}
