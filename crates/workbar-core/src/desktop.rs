//! Virtual-desktop indicator and navigation.
//!
//! Desktop switching itself is delegated to an external library behind
//! [`VirtualDesktops`]. This module only does the index bookkeeping:
//! the collaborator speaks 0-based indices, the indicator shows 1-based
//! positions, and previous/next wrap around the desktop count.

use std::fmt;

/// Marker for the current desktop.
pub const ACTIVE_MARKER: char = '●';

/// Marker for every other desktop.
pub const INACTIVE_MARKER: char = '○';

/// The external virtual-desktop manager.
pub trait VirtualDesktops {
    /// Number of desktops, 0 when unavailable.
    fn count(&self) -> usize;

    /// 0-based index of the current desktop.
    fn current(&self) -> Option<usize>;

    /// Switches to the desktop at a 0-based index.
    fn go_to(&self, index: usize);

    /// Shows the window on every desktop.
    fn pin(&self, handle: usize) -> bool;
}

/// A request to move one desktop over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesktopStep {
    Prev,
    Next,
}

impl DesktopStep {
    /// Mouse wheel mapping: wheel up goes back, wheel down goes forward.
    pub fn from_wheel(delta: i32) -> Option<Self> {
        match delta.signum() {
            1 => Some(Self::Prev),
            -1 => Some(Self::Next),
            _ => None,
        }
    }

    /// 0-based target index, wrapping around `count`.
    ///
    /// Returns `None` when there are no desktops.
    pub fn target(self, count: usize, current: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        let current = current % count;
        Some(match self {
            Self::Prev => (current + count - 1) % count,
            Self::Next => (current + 1) % count,
        })
    }
}

/// Moves one desktop over. Returns the index switched to.
pub fn step(desktops: &impl VirtualDesktops, step: DesktopStep) -> Option<usize> {
    let count = desktops.count();
    let current = desktops.current()?;
    let target = step.target(count, current)?;
    if target != current {
        desktops.go_to(target);
    }
    Some(target)
}

/// Snapshot of desktop state for rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DesktopIndicator {
    pub count: usize,
    /// 0-based index of the current desktop.
    pub current: Option<usize>,
}

impl DesktopIndicator {
    /// Reads the collaborator's current state.
    pub fn read(desktops: &impl VirtualDesktops) -> Self {
        let count = desktops.count();
        let current = desktops.current().filter(|&i| i < count);
        Self { count, current }
    }

    /// 1-based position of the current desktop, as shown to the user.
    pub fn display_position(&self) -> Option<usize> {
        self.current.map(|i| i + 1)
    }

    /// One marker per desktop, the current one filled.
    pub fn markers(&self) -> Vec<char> {
        let active = self.display_position();
        (1..=self.count)
            .map(|n| {
                if Some(n) == active {
                    ACTIVE_MARKER
                } else {
                    INACTIVE_MARKER
                }
            })
            .collect()
    }
}

impl fmt::Display for DesktopIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, marker) in self.markers().into_iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{marker}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct FakeDesktops {
        count: usize,
        current: Cell<usize>,
        switches: Cell<usize>,
    }

    impl FakeDesktops {
        fn new(count: usize, current: usize) -> Self {
            Self {
                count,
                current: Cell::new(current),
                switches: Cell::new(0),
            }
        }
    }

    impl VirtualDesktops for FakeDesktops {
        fn count(&self) -> usize {
            self.count
        }

        fn current(&self) -> Option<usize> {
            (self.count > 0).then(|| self.current.get())
        }

        fn go_to(&self, index: usize) {
            self.current.set(index);
            self.switches.set(self.switches.get() + 1);
        }

        fn pin(&self, _handle: usize) -> bool {
            true
        }
    }

    #[test]
    fn next_from_last_desktop_wraps_to_first() {
        // Arrange
        let desktops = FakeDesktops::new(4, 3);

        // Act
        let target = step(&desktops, DesktopStep::Next);

        // Assert
        assert_eq!(target, Some(0));
        assert_eq!(desktops.current.get(), 0);
    }

    #[test]
    fn prev_from_first_desktop_wraps_to_last() {
        let desktops = FakeDesktops::new(4, 0);

        assert_eq!(step(&desktops, DesktopStep::Prev), Some(3));
        assert_eq!(desktops.current.get(), 3);
    }

    #[test]
    fn single_desktop_does_not_switch() {
        let desktops = FakeDesktops::new(1, 0);

        assert_eq!(step(&desktops, DesktopStep::Next), Some(0));
        assert_eq!(desktops.switches.get(), 0);
    }

    #[test]
    fn no_desktops_means_no_request() {
        let desktops = FakeDesktops::new(0, 0);

        assert_eq!(step(&desktops, DesktopStep::Next), None);
        assert_eq!(DesktopStep::Prev.target(0, 0), None);
        assert_eq!(desktops.switches.get(), 0);
    }

    #[test]
    fn indicator_fills_fourth_marker_for_last_of_four() {
        // Arrange
        let desktops = FakeDesktops::new(4, 3);

        // Act
        let indicator = DesktopIndicator::read(&desktops);

        // Assert
        assert_eq!(indicator.display_position(), Some(4));
        assert_eq!(indicator.to_string(), "○ ○ ○ ●");
    }

    #[test]
    fn indicator_without_desktops_is_empty() {
        let indicator = DesktopIndicator::default();
        assert_eq!(indicator.to_string(), "");
    }

    #[test]
    fn out_of_range_current_shows_no_active_marker() {
        let indicator = DesktopIndicator {
            count: 2,
            current: None,
        };
        assert_eq!(indicator.to_string(), "○ ○");
    }

    #[test]
    fn wheel_direction_maps_to_steps() {
        assert_eq!(DesktopStep::from_wheel(120), Some(DesktopStep::Prev));
        assert_eq!(DesktopStep::from_wheel(-120), Some(DesktopStep::Next));
        assert_eq!(DesktopStep::from_wheel(0), None);
    }
}
