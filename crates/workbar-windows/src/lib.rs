//! Windows implementation of Workbar.
//!
//! Everything here talks to Win32, so the crate is empty on other
//! platforms. The platform-agnostic logic lives in `workbar-core`.
#![cfg(windows)]

/// Ctrl+C handling via `SetConsoleCtrlHandler`.
pub mod ctrl_c;

/// Virtual-desktop collaborator loaded from `VirtualDesktopAccessor.dll`.
pub mod desktop;

/// Win32 event loop thread: overlay window input and the taskbar hook.
pub mod event_loop;

/// WinEvent hook for taskbar location changes.
pub mod hook;

/// The overlay window.
pub mod overlay;

mod render;

/// Extended window style access.
pub mod style;

/// App-bar and window-based taskbar probes.
pub mod taskbar;

mod text;

/// The widget's UI loop.
pub mod widget;

/// Window type wrapping a Win32 `HWND`.
pub mod window;

pub use overlay::OverlayWindow;
pub use taskbar::ShellTaskbar;
pub use window::Window;
