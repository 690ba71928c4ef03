use super::loader::parse;
use super::*;

#[test]
fn default_config_has_expected_values() {
    let mut config = Config::default();
    config.validate();

    assert_eq!(config.overlay.size(), Size::new(240, 40));
    assert_eq!(config.overlay.gap, 5);
    assert_eq!(config.timers.position_ms, 800);
    assert_eq!(config.timers.indicator_ms, 500);
    assert_eq!(config.timers.title_ms, 500);
    assert!(!config.logging.enabled);
}

#[test]
fn partial_toml_uses_defaults_for_missing_sections() {
    // Arrange
    let toml_str = "[overlay]\nwidth = 300\n";

    // Act
    let config = parse(toml_str).unwrap();

    // Assert
    assert_eq!(config.overlay.width, 300);
    assert_eq!(config.overlay.height, 40);
    assert_eq!(config.overlay.colors.background, "#1e1e2e");
    assert_eq!(config.timers.position_ms, 800);
}

#[test]
fn validate_clamps_out_of_range_values() {
    // Arrange
    let mut config = Config::default();
    config.overlay.width = 10;
    config.overlay.gap = -3;
    config.overlay.button_width = 500;
    config.overlay.idle_opacity = 250;
    config.timers.position_ms = 0;

    // Act
    config.validate();

    // Assert
    assert_eq!(config.overlay.width, 40);
    assert_eq!(config.overlay.gap, 0);
    assert_eq!(config.overlay.button_width, 20);
    assert_eq!(config.overlay.idle_opacity, 100);
    assert_eq!(config.timers.position_ms, 100);
}

#[test]
fn opacity_follows_hover_state() {
    let overlay = OverlayConfig::default();

    assert_eq!(overlay.opacity(true), 100);
    assert_eq!(overlay.opacity(false), 40);
}

#[test]
fn invalid_toml_is_an_error() {
    assert!(parse("[overlay\nwidth = ").is_err());
}

#[test]
fn template_parses_to_defaults() {
    // Act
    let config = parse(&template::generate_config()).unwrap();

    // Assert
    let defaults = Config::default();
    assert_eq!(config.overlay.size(), defaults.overlay.size());
    assert_eq!(config.overlay.gap, defaults.overlay.gap);
    assert_eq!(config.overlay.title_max_chars, defaults.overlay.title_max_chars);
    assert_eq!(config.overlay.colors.active, defaults.overlay.colors.active);
    assert_eq!(config.timers.title_ms, defaults.timers.title_ms);
    assert_eq!(config.logging.level, defaults.logging.level);
}
