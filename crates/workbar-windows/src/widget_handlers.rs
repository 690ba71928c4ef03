use workbar_core::desktop::{self, DesktopIndicator, DesktopStep};
use workbar_core::overlay::{hit_test, truncate_title};
use workbar_core::{WidgetEvent, Window as _};

use crate::window::Window;

use super::widget_types::{Flow, Timer, WidgetState};

/// Handles overlay input and taskbar notifications.
pub(super) fn handle_event(event: WidgetEvent, state: &mut WidgetState) -> Flow {
    workbar_core::log_debug!("event: {event}");

    match event {
        WidgetEvent::LocationChanged { hwnd } => {
            state.sync.on_location_changed(hwnd);
        }
        WidgetEvent::Wheel { delta } => {
            if let Some(step) = DesktopStep::from_wheel(delta) {
                step_desktop(state, step);
            }
        }
        WidgetEvent::Clicked { x } => {
            if let Some(step) = hit_test(x, state.config.width, state.config.button_width) {
                step_desktop(state, step);
            }
        }
        WidgetEvent::Hover { inside } => {
            if state.view.set_hovered(inside) {
                repaint(state);
            }
        }
        WidgetEvent::Closed => return Flow::Exit,
    }
    Flow::Continue
}

pub(super) fn handle_tick(timer: Timer, state: &mut WidgetState) {
    match timer {
        Timer::Position => {
            state.sync.poll();
        }
        Timer::Indicator => refresh_indicator(state),
        Timer::Title => refresh_title(state),
    }
}

/// Re-reads the desktop count and current desktop.
pub(super) fn refresh_indicator(state: &mut WidgetState) {
    if state.view.set_indicator(DesktopIndicator::read(&state.desktops)) {
        repaint(state);
    }
}

/// Shows the title of the current foreground window.
pub(super) fn refresh_title(state: &mut WidgetState) {
    let title = Window::foreground()
        .and_then(|w| w.title().ok())
        .unwrap_or_default();
    let title = truncate_title(&title, state.config.title_max_chars);
    if state.view.set_title(title) {
        repaint(state);
    }
}

pub(super) fn repaint(state: &mut WidgetState) {
    state.sync.surface_mut().render(&state.view);
}

fn step_desktop(state: &mut WidgetState, step: DesktopStep) {
    if let Some(target) = desktop::step(&state.desktops, step) {
        workbar_core::log_info!("desktop {step:?} -> {}", target + 1);
        refresh_indicator(state);
    }
}
