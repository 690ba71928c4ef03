//! Overlay placement relative to the taskbar.
//!
//! Two placement modes exist because the OS reports taskbar changes
//! unreliably. [`Mode::Snap`] follows location-change events and puts
//! the overlay flush against whichever edge the taskbar is docked to.
//! [`Mode::AutoHideAware`] runs on a timer and catches auto-hide
//! transitions that never fire a location change. Both go through
//! [`reconcile`].

use serde::Serialize;

use crate::taskbar::{Edge, TaskbarGeometry};
use crate::{Rect, Size};

/// Top-left screen position of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
}

impl Placement {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Rounds to whole pixels for the window manager.
    pub fn to_pixels(self) -> (i32, i32) {
        (self.left.round() as i32, self.top.round() as i32)
    }

    fn is_finite(self) -> bool {
        self.left.is_finite() && self.top.is_finite()
    }
}

/// Which placement computation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Periodic pass: bottom of the screen, compensating for auto-hide.
    AutoHideAware,
    /// Event-driven pass: flush against the taskbar on its interior side.
    Snap,
}

/// Everything a placement pass needs to know about the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub geometry: TaskbarGeometry,
    pub screen: Size,
}

/// Places the overlay next to the taskbar, `gap` units away from it.
///
/// The overlay is centered along the taskbar's long axis. Returns
/// `None` for an unknown edge.
pub fn snap(bounds: &Rect, edge: Edge, overlay: Size, gap: f64) -> Option<Placement> {
    let (w, h) = (f64::from(overlay.width), f64::from(overlay.height));
    let center_x = f64::from(bounds.x) + (f64::from(bounds.width) - w) / 2.0;
    let center_y = f64::from(bounds.y) + (f64::from(bounds.height) - h) / 2.0;

    let placement = match edge {
        Edge::Bottom => Placement::new(center_x, f64::from(bounds.y) - h - gap),
        Edge::Top => Placement::new(center_x, f64::from(bounds.bottom()) + gap),
        Edge::Left => Placement::new(f64::from(bounds.right()) + gap, center_y),
        Edge::Right => Placement::new(f64::from(bounds.x) - w - gap, center_y),
        Edge::Unknown => return None,
    };
    Some(placement)
}

/// Places the overlay at the bottom of the screen, horizontally centered.
///
/// With auto-hide on, the taskbar is usually off-screen, so the overlay
/// sits on the screen's bottom edge. Otherwise it sits right above a
/// taskbar of height `taskbar_height`.
pub fn auto_hide_aware(
    screen: Size,
    taskbar_height: i32,
    auto_hide: bool,
    overlay: Size,
) -> Placement {
    let screen_h = f64::from(screen.height);
    let h = f64::from(overlay.height);
    let top = if auto_hide {
        screen_h - h
    } else {
        screen_h - f64::from(taskbar_height) - h
    };
    let left = (f64::from(screen.width) - f64::from(overlay.width)) / 2.0;
    Placement::new(left, top)
}

/// Computes the overlay position for one pass.
///
/// Returns `None` when nothing should move: unknown edge, empty screen
/// or overlay, or a non-finite result. The auto-hide-aware mode only
/// models a bottom taskbar; for the other edges it snaps instead.
pub fn reconcile(mode: Mode, reading: &Reading, overlay: Size, gap: f64) -> Option<Placement> {
    let geometry = &reading.geometry;
    if !geometry.is_known() || reading.screen.is_empty() || overlay.is_empty() {
        return None;
    }

    let placement = match (mode, geometry.edge) {
        (Mode::AutoHideAware, Edge::Bottom) => auto_hide_aware(
            reading.screen,
            geometry.thickness(),
            geometry.auto_hide,
            overlay,
        ),
        _ => snap(&geometry.bounds, geometry.edge, overlay, gap)?,
    };

    placement.is_finite().then_some(placement)
}

#[cfg(test)]
#[path = "placement_tests.rs"]
mod tests;
