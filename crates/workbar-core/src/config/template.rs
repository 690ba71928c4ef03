/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `workbar init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# Workbar configuration
# Location: ~/.config/workbar/config.toml

[overlay]
# Overlay size in pixels.
width = 240
height = 40
# Distance between the overlay and the taskbar in pixels.
gap = 5
# Width of the previous/next desktop buttons at each end.
button_width = 24
# Opacity in percent while hovered, and otherwise.
hover_opacity = 100
idle_opacity = 40
font = "Segoe UI"
font_size = 16
# Longest foreground window title shown (0 = no limit).
title_max_chars = 28

[overlay.colors]
background = "#1e1e2e"
foreground = "#cdd6f4"
active = "#89b4fa"
button = "#313244"

[timers]
# Placement pass that catches taskbar auto-hide changes.
position_ms = 800
# Virtual-desktop indicator refresh.
indicator_ms = 500
# Foreground window title refresh.
title_ms = 500

[logging]
# Enable file logging to ~/.config/workbar/logs/workbar.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}
