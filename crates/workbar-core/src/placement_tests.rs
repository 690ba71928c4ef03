use super::*;

const SCREEN: Size = Size {
    width: 1920,
    height: 1080,
};
const OVERLAY: Size = Size {
    width: 200,
    height: 40,
};
const GAP: f64 = 5.0;

fn reading(edge: Edge, bounds: Rect, auto_hide: bool) -> Reading {
    Reading {
        geometry: TaskbarGeometry {
            edge,
            bounds,
            auto_hide,
        },
        screen: SCREEN,
    }
}

/// Returns the overlay rectangle as (left, top, right, bottom).
fn overlay_edges(p: Placement) -> (f64, f64, f64, f64) {
    (
        p.left,
        p.top,
        p.left + f64::from(OVERLAY.width),
        p.top + f64::from(OVERLAY.height),
    )
}

// -- snap --

#[test]
fn snap_bottom_taskbar_matches_reference_scenario() {
    // Arrange
    let bounds = Rect::from_ltrb(0, 1040, 1920, 1080);

    // Act
    let placement = snap(&bounds, Edge::Bottom, OVERLAY, GAP).unwrap();

    // Assert
    assert_eq!(placement, Placement::new(860.0, 995.0));
}

#[test]
fn snap_places_overlay_outside_taskbar_on_interior_side() {
    let bottom = Rect::from_ltrb(0, 1032, 1920, 1080);
    let top = Rect::from_ltrb(0, 0, 1920, 48);
    let left = Rect::from_ltrb(0, 0, 62, 1080);
    let right = Rect::from_ltrb(1858, 0, 1920, 1080);

    // Bottom: overlay bottom edge is `gap` above the taskbar top.
    let (_, _, _, b) = overlay_edges(snap(&bottom, Edge::Bottom, OVERLAY, GAP).unwrap());
    assert_eq!(f64::from(bottom.y) - b, GAP);

    // Top: overlay top edge is `gap` below the taskbar bottom.
    let (_, t, _, _) = overlay_edges(snap(&top, Edge::Top, OVERLAY, GAP).unwrap());
    assert_eq!(t - f64::from(top.bottom()), GAP);

    // Left: overlay left edge is `gap` right of the taskbar.
    let (l, _, _, _) = overlay_edges(snap(&left, Edge::Left, OVERLAY, GAP).unwrap());
    assert_eq!(l - f64::from(left.right()), GAP);

    // Right: overlay right edge is `gap` left of the taskbar.
    let (_, _, r, _) = overlay_edges(snap(&right, Edge::Right, OVERLAY, GAP).unwrap());
    assert_eq!(f64::from(right.x) - r, GAP);
}

#[test]
fn snap_centers_along_the_taskbar_axis() {
    // Odd spans leave a half-unit remainder.
    let bottom = Rect::from_ltrb(0, 1040, 1921, 1080);
    let right = Rect::from_ltrb(1858, 0, 1920, 1081);

    let p = snap(&bottom, Edge::Bottom, OVERLAY, GAP).unwrap();
    let overlay_center = p.left + f64::from(OVERLAY.width) / 2.0;
    let taskbar_center = f64::from(bottom.x) + f64::from(bottom.width) / 2.0;
    assert!((overlay_center - taskbar_center).abs() <= 0.5);

    let p = snap(&right, Edge::Right, OVERLAY, GAP).unwrap();
    let (x, y) = p.to_pixels();
    assert_eq!(x, 1858 - 200 - 5);
    let rounded_center = f64::from(y) + f64::from(OVERLAY.height) / 2.0;
    assert!((rounded_center - 540.5).abs() <= 0.5);
}

#[test]
fn snap_centers_on_top_and_left_taskbars() {
    // Arrange
    let top = Rect::from_ltrb(0, 0, 1921, 48);
    let left = Rect::from_ltrb(0, 0, 62, 1081);

    // Act
    let above = snap(&top, Edge::Top, OVERLAY, GAP).unwrap();
    let beside = snap(&left, Edge::Left, OVERLAY, GAP).unwrap();

    // Assert
    let overlay_center = above.left + f64::from(OVERLAY.width) / 2.0;
    let taskbar_center = f64::from(top.x) + f64::from(top.width) / 2.0;
    assert!((overlay_center - taskbar_center).abs() <= 0.5);
    assert_eq!(above.top, 53.0);

    let overlay_center = beside.top + f64::from(OVERLAY.height) / 2.0;
    let taskbar_center = f64::from(left.y) + f64::from(left.height) / 2.0;
    assert!((overlay_center - taskbar_center).abs() <= 0.5);
    assert_eq!(beside.left, 67.0);
}

#[test]
fn snap_unknown_edge_yields_nothing() {
    let bounds = Rect::from_ltrb(0, 1040, 1920, 1080);
    assert_eq!(snap(&bounds, Edge::Unknown, OVERLAY, GAP), None);
}

// -- auto_hide_aware --

#[test]
fn auto_hide_on_places_overlay_on_screen_bottom() {
    // Act
    let placement = auto_hide_aware(SCREEN, 40, true, OVERLAY);

    // Assert
    assert_eq!(placement.top, 1040.0);
    assert_eq!(placement.top + f64::from(OVERLAY.height), 1080.0);
    assert_eq!(placement.left, 860.0);
}

#[test]
fn auto_hide_off_places_overlay_above_taskbar() {
    // Act
    let placement = auto_hide_aware(SCREEN, 48, false, OVERLAY);

    // Assert
    assert_eq!(placement.top, 1080.0 - 48.0 - 40.0);
    assert_eq!(placement.left, 860.0);
}

// -- reconcile --

#[test]
fn reconcile_is_idempotent() {
    let input = reading(Edge::Bottom, Rect::from_ltrb(0, 1040, 1920, 1080), false);

    for mode in [Mode::AutoHideAware, Mode::Snap] {
        let first = reconcile(mode, &input, OVERLAY, GAP);
        let second = reconcile(mode, &input, OVERLAY, GAP);
        assert!(first.is_some());
        assert_eq!(first, second);
    }
}

#[test]
fn reconcile_auto_hide_mode_uses_taskbar_thickness() {
    let input = reading(Edge::Bottom, Rect::from_ltrb(0, 1040, 1920, 1080), false);

    let placement = reconcile(Mode::AutoHideAware, &input, OVERLAY, GAP).unwrap();

    assert_eq!(placement, Placement::new(860.0, 1000.0));
}

#[test]
fn reconcile_auto_hide_mode_snaps_for_side_taskbars() {
    let input = reading(Edge::Left, Rect::from_ltrb(0, 0, 62, 1080), false);

    let placement = reconcile(Mode::AutoHideAware, &input, OVERLAY, GAP).unwrap();

    assert_eq!(placement, Placement::new(67.0, 520.0));
}

#[test]
fn reconcile_unknown_edge_skips_pass() {
    let input = Reading {
        geometry: TaskbarGeometry::unknown(),
        screen: SCREEN,
    };

    assert_eq!(reconcile(Mode::AutoHideAware, &input, OVERLAY, GAP), None);
    assert_eq!(reconcile(Mode::Snap, &input, OVERLAY, GAP), None);
}

#[test]
fn reconcile_empty_screen_or_overlay_skips_pass() {
    let mut input = reading(Edge::Bottom, Rect::from_ltrb(0, 1040, 1920, 1080), true);
    assert_eq!(
        reconcile(Mode::Snap, &input, Size::new(0, 40), GAP),
        None
    );

    input.screen = Size::default();
    assert_eq!(reconcile(Mode::AutoHideAware, &input, OVERLAY, GAP), None);
}

#[test]
fn to_pixels_rounds_half_units() {
    assert_eq!(Placement::new(859.5, 995.4).to_pixels(), (860, 995));
}
