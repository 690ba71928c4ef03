//! Keeps the overlay out of Alt+Tab and the taskbar button list.
//!
//! Applied once, right after the overlay window is created: clear the
//! app-window bit, set the tool-window bit. There is no other writer.

/// `WS_EX_TOOLWINDOW`
pub const WS_EX_TOOLWINDOW: u32 = 0x0000_0080;

/// `WS_EX_APPWINDOW`
pub const WS_EX_APPWINDOW: u32 = 0x0004_0000;

/// Extended window style bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowStyleFlags(pub u32);

impl WindowStyleFlags {
    /// The same style reclassified as a tool window.
    pub fn as_tool_window(self) -> Self {
        Self((self.0 & !WS_EX_APPWINDOW) | WS_EX_TOOLWINDOW)
    }

    pub fn is_tool_window(self) -> bool {
        self.0 & WS_EX_TOOLWINDOW != 0 && self.0 & WS_EX_APPWINDOW == 0
    }
}

/// Get/set access to a window's extended style.
pub trait StyleApi {
    /// Reads the extended style, or `None` for an invalid handle.
    fn ex_style(&self, handle: usize) -> Option<WindowStyleFlags>;

    /// Writes the extended style. Returns `false` on failure.
    fn set_ex_style(&self, handle: usize, style: WindowStyleFlags) -> bool;
}

/// Rewrites the window's style so it is treated as a tool window.
///
/// Failure is not fatal: the overlay keeps working, it just shows up in
/// the task switcher.
pub fn enforce_tool_window(api: &impl StyleApi, handle: usize) -> bool {
    if handle == 0 {
        return false;
    }
    let Some(current) = api.ex_style(handle) else {
        crate::log_warn!("window 0x{handle:X}: could not read extended style");
        return false;
    };
    let applied = api.set_ex_style(handle, current.as_tool_window());
    if !applied {
        crate::log_warn!("window 0x{handle:X}: could not apply tool-window style");
    }
    applied
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct FakeStyle {
        valid: usize,
        style: RefCell<u32>,
        writes: RefCell<usize>,
    }

    impl FakeStyle {
        fn new(valid: usize, style: u32) -> Self {
            Self {
                valid,
                style: RefCell::new(style),
                writes: RefCell::new(0),
            }
        }
    }

    impl StyleApi for FakeStyle {
        fn ex_style(&self, handle: usize) -> Option<WindowStyleFlags> {
            (handle == self.valid).then(|| WindowStyleFlags(*self.style.borrow()))
        }

        fn set_ex_style(&self, handle: usize, style: WindowStyleFlags) -> bool {
            if handle != self.valid {
                return false;
            }
            *self.style.borrow_mut() = style.0;
            *self.writes.borrow_mut() += 1;
            true
        }
    }

    #[test]
    fn clears_app_window_and_sets_tool_window() {
        // Arrange: WS_EX_APPWINDOW | WS_EX_LAYERED | WS_EX_TOPMOST
        let api = FakeStyle::new(0x77, WS_EX_APPWINDOW | 0x0008_0000 | 0x0000_0008);

        // Act
        let applied = enforce_tool_window(&api, 0x77);

        // Assert
        assert!(applied);
        let style = *api.style.borrow();
        assert_eq!(style, WS_EX_TOOLWINDOW | 0x0008_0000 | 0x0000_0008);
        assert!(WindowStyleFlags(style).is_tool_window());
        assert_eq!(*api.writes.borrow(), 1);
    }

    #[test]
    fn null_handle_is_a_noop() {
        let api = FakeStyle::new(0x77, WS_EX_APPWINDOW);

        assert!(!enforce_tool_window(&api, 0));
        assert_eq!(*api.writes.borrow(), 0);
    }

    #[test]
    fn invalid_handle_is_a_noop() {
        let api = FakeStyle::new(0x77, WS_EX_APPWINDOW);

        assert!(!enforce_tool_window(&api, 0x99));
        assert_eq!(*api.style.borrow(), WS_EX_APPWINDOW);
    }

    #[test]
    fn already_tool_window_stays_unchanged() {
        let flags = WindowStyleFlags(WS_EX_TOOLWINDOW);
        assert_eq!(flags.as_tool_window(), flags);
    }
}
