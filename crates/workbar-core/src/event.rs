use std::fmt;

/// Something the UI loop needs to react to.
///
/// Platform crates translate raw OS notifications and overlay input
/// into these variants and push them onto the UI loop's channel.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    /// A top-level window changed location. Usually the taskbar, but
    /// the synchronizer double-checks.
    LocationChanged { hwnd: usize },

    /// Mouse wheel over the overlay. Positive is away from the user.
    Wheel { delta: i32 },

    /// Left click on the overlay at client x-coordinate `x`.
    Clicked { x: i32 },

    /// The pointer entered or left the overlay.
    Hover { inside: bool },

    /// The overlay window is closing.
    Closed,
}

impl fmt::Display for WidgetEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocationChanged { hwnd } => write!(f, "location-changed 0x{hwnd:X}"),
            Self::Wheel { delta } => write!(f, "wheel {delta}"),
            Self::Clicked { x } => write!(f, "clicked x={x}"),
            Self::Hover { inside: true } => f.write_str("hover enter"),
            Self::Hover { inside: false } => f.write_str("hover leave"),
            Self::Closed => f.write_str("closed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_handle_in_hex() {
        let event = WidgetEvent::LocationChanged { hwnd: 0x10_0A2C };
        assert_eq!(event.to_string(), "location-changed 0x100A2C");
    }
}
