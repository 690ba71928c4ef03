mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::Size;
use crate::log::LogConfig;

pub use loader::{config_dir, config_path, load, try_load};

/// Top-level configuration for Workbar.
///
/// Loaded from `~/.config/workbar/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Overlay size, spacing, and appearance.
    pub overlay: OverlayConfig,
    /// Refresh intervals of the UI loop timers.
    pub timers: TimerConfig,
    /// File logging.
    pub logging: LogConfig,
}

/// Overlay window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Overlay width in pixels.
    pub width: i32,
    /// Overlay height in pixels.
    pub height: i32,
    /// Distance between the overlay and the taskbar in pixels.
    pub gap: i32,
    /// Width of the previous/next buttons at each end in pixels.
    pub button_width: i32,
    /// Opacity in percent while the pointer is over the overlay.
    pub hover_opacity: u8,
    /// Opacity in percent otherwise.
    pub idle_opacity: u8,
    /// Font family name.
    pub font: String,
    /// Font size in pixels.
    pub font_size: i32,
    /// Longest window title shown, in characters. 0 = no limit.
    pub title_max_chars: usize,
    /// Color scheme.
    pub colors: OverlayColors,
}

/// Overlay colors as hex strings (e.g. "#1e1e2e").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayColors {
    pub background: String,
    pub foreground: String,
    /// Color of the current-desktop marker.
    pub active: String,
    /// Background of the previous/next buttons.
    pub button: String,
}

/// UI loop timer intervals in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Auto-hide-aware placement pass.
    pub position_ms: u64,
    /// Virtual-desktop indicator refresh.
    pub indicator_ms: u64,
    /// Foreground window title refresh.
    pub title_ms: u64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            width: 240,
            height: 40,
            gap: 5,
            button_width: 24,
            hover_opacity: 100,
            idle_opacity: 40,
            font: "Segoe UI".into(),
            font_size: 16,
            title_max_chars: 28,
            colors: OverlayColors::default(),
        }
    }
}

impl Default for OverlayColors {
    fn default() -> Self {
        Self {
            background: "#1e1e2e".into(),
            foreground: "#cdd6f4".into(),
            active: "#89b4fa".into(),
            button: "#313244".into(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            position_ms: 800,
            indicator_ms: 500,
            title_ms: 500,
        }
    }
}

impl OverlayConfig {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Opacity in percent for the given hover state.
    pub fn opacity(&self, hovered: bool) -> u8 {
        if hovered {
            self.hover_opacity
        } else {
            self.idle_opacity
        }
    }
}

impl Config {
    /// Clamps values to safe ranges.
    ///
    /// Keeps the overlay from collapsing, buttons from overlapping, and
    /// timers from spinning.
    pub fn validate(&mut self) {
        let o = &mut self.overlay;
        o.width = o.width.clamp(40, 4000);
        o.height = o.height.clamp(16, 400);
        o.gap = o.gap.clamp(0, 200);
        o.button_width = o.button_width.clamp(0, o.width / 2);
        o.hover_opacity = o.hover_opacity.min(100);
        o.idle_opacity = o.idle_opacity.min(100);
        o.font_size = o.font_size.clamp(6, 72);

        let t = &mut self.timers;
        t.position_ms = t.position_ms.clamp(100, 60_000);
        t.indicator_ms = t.indicator_ms.clamp(100, 60_000);
        t.title_ms = t.title_ms.clamp(100, 60_000);
    }
}

#[cfg(test)]
mod tests;
