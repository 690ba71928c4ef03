//! Taskbar geometry: where the taskbar is docked, how big it is, and
//! whether it auto-hides.
//!
//! Geometry is never cached. Every caller asks the [`TaskbarProvider`]
//! again, and a failed query yields [`TaskbarGeometry::unknown`] rather
//! than an error.

use serde::Serialize;

use crate::{Rect, Size};

/// Window class of the primary taskbar.
pub const TASKBAR_CLASS: &str = "Shell_TrayWnd";

/// Thickness assumed when the taskbar size cannot be determined.
pub const DEFAULT_THICKNESS: i32 = 40;

/// Screen border the taskbar is docked to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
    #[default]
    Unknown,
}

impl Edge {
    /// Maps the shell's app-bar edge code (`ABE_*`) to an edge.
    pub fn from_appbar(code: u32) -> Self {
        match code {
            0 => Self::Left,
            1 => Self::Top,
            2 => Self::Right,
            3 => Self::Bottom,
            _ => Self::Unknown,
        }
    }

    /// Classifies a rectangle by which half of the screen it occupies.
    ///
    /// Checked in order: bottom half, top half, left half, right half.
    /// A rectangle straddling both halves of both axes, or an empty
    /// screen, is `Unknown`.
    pub fn classify(rect: &Rect, screen: Size) -> Self {
        if screen.is_empty() {
            return Self::Unknown;
        }
        let half_w = f64::from(screen.width) / 2.0;
        let half_h = f64::from(screen.height) / 2.0;

        if f64::from(rect.y) > half_h {
            Self::Bottom
        } else if f64::from(rect.bottom()) < half_h {
            Self::Top
        } else if f64::from(rect.right()) < half_w {
            Self::Left
        } else if f64::from(rect.x) > half_w {
            Self::Right
        } else {
            Self::Unknown
        }
    }
}

/// A snapshot of the taskbar's position and state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskbarGeometry {
    pub edge: Edge,
    pub bounds: Rect,
    pub auto_hide: bool,
}

impl TaskbarGeometry {
    /// The geometry reported when the shell query fails.
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn is_known(&self) -> bool {
        self.edge != Edge::Unknown
    }

    /// Taskbar height for horizontal edges, width for vertical ones.
    ///
    /// Falls back to [`DEFAULT_THICKNESS`] when the edge is unknown or
    /// the bounds are degenerate.
    pub fn thickness(&self) -> i32 {
        let size = match self.edge {
            Edge::Top | Edge::Bottom => self.bounds.height,
            Edge::Left | Edge::Right => self.bounds.width,
            Edge::Unknown => 0,
        };
        if size > 0 { size } else { DEFAULT_THICKNESS }
    }
}

/// The taskbar's top-level window, found by class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskbarWindow {
    pub handle: usize,
    pub rect: Rect,
}

impl TaskbarWindow {
    /// Geometry derived from the window rectangle alone.
    ///
    /// The window probe cannot see the auto-hide flag, so it is
    /// reported as `false`.
    pub fn geometry(&self, screen: Size) -> TaskbarGeometry {
        TaskbarGeometry {
            edge: Edge::classify(&self.rect, screen),
            bounds: self.rect,
            auto_hide: false,
        }
    }
}

/// Stateless queries against the OS shell.
///
/// The platform crate implements this with the app-bar API and a
/// by-class window lookup. Tests use a fake.
pub trait TaskbarProvider {
    /// Queries the app-bar edge and bounds, including the auto-hide flag.
    fn query_geometry(&self) -> TaskbarGeometry;

    /// Queries only the auto-hide flag.
    fn query_auto_hide(&self) -> bool;

    /// Locates the taskbar window and reads its rectangle.
    fn locate(&self) -> Option<TaskbarWindow>;

    /// Size of the primary screen.
    fn screen_size(&self) -> Size;
}
