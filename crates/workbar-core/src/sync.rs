//! Keeps the overlay anchored to the taskbar.
//!
//! The synchronizer is driven from the UI loop by three triggers: the
//! placement timer ([`Synchronizer::poll`]), taskbar location-change
//! notifications ([`Synchronizer::on_location_changed`]), and a one-off
//! snap at startup ([`Synchronizer::snap`]). Each trigger reads fresh
//! geometry, runs [`reconcile`], and writes the result straight to the
//! overlay. Triggers racing each other are harmless: the last writer
//! wins and every pass converges on the same taskbar-relative target.

use crate::Size;
use crate::placement::{Mode, Placement, Reading, reconcile};
use crate::taskbar::TaskbarProvider;

/// Something the synchronizer can move.
pub trait OverlaySurface {
    /// Moves the overlay's top-left corner to `placement`.
    ///
    /// Returns `false` when the window could not be moved.
    fn move_to(&mut self, placement: Placement) -> bool;
}

/// Owns the placement state of one overlay window.
pub struct Synchronizer<P, S> {
    provider: P,
    surface: S,
    overlay: Size,
    gap: f64,
    /// Last placement the surface accepted.
    last: Option<Placement>,
}

impl<P: TaskbarProvider, S: OverlaySurface> Synchronizer<P, S> {
    pub fn new(provider: P, surface: S, overlay: Size, gap: f64) -> Self {
        Self {
            provider,
            surface,
            overlay,
            gap,
            last: None,
        }
    }

    /// Periodic auto-hide-aware pass using the app-bar query.
    pub fn poll(&mut self) -> Option<Placement> {
        let reading = Reading {
            geometry: self.provider.query_geometry(),
            screen: self.provider.screen_size(),
        };
        self.apply(Mode::AutoHideAware, &reading)
    }

    /// Edge-aware snap using the taskbar window's own rectangle.
    pub fn snap(&mut self) -> Option<Placement> {
        let Some(taskbar) = self.provider.locate() else {
            crate::log_debug!("snap skipped: taskbar window not found");
            return None;
        };
        let screen = self.provider.screen_size();
        let reading = Reading {
            geometry: taskbar.geometry(screen),
            screen,
        };
        self.apply(Mode::Snap, &reading)
    }

    /// Handles a location-change notification for `hwnd`.
    ///
    /// Only the taskbar's own window triggers a re-snap; anything else
    /// is ignored.
    pub fn on_location_changed(&mut self, hwnd: usize) -> Option<Placement> {
        let taskbar = self.provider.locate()?;
        if hwnd == 0 || taskbar.handle != hwnd {
            return None;
        }
        let screen = self.provider.screen_size();
        let reading = Reading {
            geometry: taskbar.geometry(screen),
            screen,
        };
        self.apply(Mode::Snap, &reading)
    }

    /// The placement most recently written to the overlay.
    pub fn last(&self) -> Option<Placement> {
        self.last
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Writes the reconciled placement, skipping no-op moves.
    fn apply(&mut self, mode: Mode, reading: &Reading) -> Option<Placement> {
        let Some(placement) = reconcile(mode, reading, self.overlay, self.gap) else {
            crate::log_debug!(
                "{mode:?} pass skipped: edge={:?} screen={}x{}",
                reading.geometry.edge,
                reading.screen.width,
                reading.screen.height
            );
            return None;
        };
        if self.last != Some(placement) {
            crate::log_debug!(
                "{mode:?} pass: overlay -> ({}, {})",
                placement.left,
                placement.top
            );
            if self.surface.move_to(placement) {
                self.last = Some(placement);
            } else {
                crate::log_warn!("{mode:?} pass: overlay move failed, retrying next pass");
            }
        }
        Some(placement)
    }
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
