use workbar_core::config::OverlayConfig;
use workbar_core::overlay::OverlayView;
use workbar_core::{Synchronizer, WidgetEvent};

use crate::desktop::AccessorDll;
use crate::overlay::OverlayWindow;
use crate::taskbar::ShellTaskbar;

/// Capacity of the UI loop's message channel.
pub(super) const CHANNEL_CAPACITY: usize = 64;

/// Capacity of the channel fed by the hook callback and overlay input.
pub(super) const EVENT_CAPACITY: usize = 32;

/// Internal message type for the UI loop.
pub(super) enum WidgetMsg {
    /// Overlay input or a taskbar notification from the event loop.
    Event(WidgetEvent),
    /// One of the periodic timers fired.
    Tick(Timer),
    /// Ctrl+C.
    Shutdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Timer {
    /// Auto-hide-aware placement pass.
    Position,
    Indicator,
    Title,
}

/// Whether the UI loop keeps running after a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flow {
    Continue,
    Exit,
}

/// Everything the UI loop mutates.
pub(super) struct WidgetState {
    pub sync: Synchronizer<ShellTaskbar, OverlayWindow>,
    pub desktops: AccessorDll,
    pub view: OverlayView,
    pub config: OverlayConfig,
}
