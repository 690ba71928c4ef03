use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::time::Duration;

use workbar_core::config;
use workbar_core::overlay::OverlayView;
use workbar_core::{Synchronizer, VirtualDesktops, WidgetEvent, WindowResult};

use crate::ctrl_c;
use crate::desktop::AccessorDll;
use crate::event_loop;
use crate::overlay::OverlayWindow;
use crate::taskbar::ShellTaskbar;

use super::widget_handlers;
use super::widget_threads;
use super::widget_types::{
    CHANNEL_CAPACITY, EVENT_CAPACITY, Flow, Timer, WidgetMsg, WidgetState,
};

/// The UI loop: startup sequence, message dispatch, and teardown.
pub(super) fn widget_loop() -> WindowResult<()> {
    let config = config::load();
    workbar_core::log::init(&config.logging);

    workbar_core::log_info!("Workbar started (PID: {})", std::process::id());
    workbar_core::log_info!(
        "Config: overlay {}x{} gap={}, timers position={}ms indicator={}ms title={}ms",
        config.overlay.width,
        config.overlay.height,
        config.overlay.gap,
        config.timers.position_ms,
        config.timers.indicator_ms,
        config.timers.title_ms
    );

    let (tx, rx) = mpsc::sync_channel::<WidgetMsg>(CHANNEL_CAPACITY);
    let (event_tx, event_rx) = mpsc::sync_channel::<WidgetEvent>(EVENT_CAPACITY);
    let event_loop = event_loop::start(event_tx, Some(config.overlay.clone()))?;

    let overlay = OverlayWindow::from_raw(event_loop.overlay(), config.overlay.clone());
    let desktops = AccessorDll::load();
    if desktops.is_available() && !desktops.pin(overlay.handle()) {
        workbar_core::log_warn!("could not pin the overlay to all desktops");
    }

    let sync = Synchronizer::new(
        ShellTaskbar,
        overlay,
        config.overlay.size(),
        f64::from(config.overlay.gap),
    );
    let mut state = WidgetState {
        sync,
        desktops,
        view: OverlayView::default(),
        config: config.overlay.clone(),
    };

    // Startup: place, paint and show, then listen for taskbar moves and
    // snap once to the taskbar window itself.
    state.sync.poll();
    widget_handlers::refresh_indicator(&mut state);
    widget_handlers::repaint(&mut state);
    event_loop.hook_taskbar();
    state.sync.snap();
    widget_handlers::refresh_title(&mut state);

    let ctrl_c_tx = tx.clone();
    if let Err(e) = ctrl_c::set_handler(move || {
        let _ = ctrl_c_tx.try_send(WidgetMsg::Shutdown);
    }) {
        workbar_core::log_warn!("Ctrl+C handler not installed: {e}");
    }

    let event_bridge = widget_threads::spawn_event_bridge(event_rx, tx.clone());

    let stop = Arc::new(AtomicBool::new(false));
    let timers = [
        (Timer::Position, config.timers.position_ms),
        (Timer::Indicator, config.timers.indicator_ms),
        (Timer::Title, config.timers.title_ms),
    ]
    .map(|(timer, ms)| {
        widget_threads::spawn_timer(tx.clone(), timer, Duration::from_millis(ms), stop.clone())
    });
    drop(tx);

    while let Ok(msg) = rx.recv() {
        match msg {
            WidgetMsg::Event(event) => {
                if widget_handlers::handle_event(event, &mut state) == Flow::Exit {
                    break;
                }
            }
            WidgetMsg::Tick(timer) => widget_handlers::handle_tick(timer, &mut state),
            WidgetMsg::Shutdown => break,
        }
    }

    workbar_core::log_info!("Workbar stopping");

    stop.store(true, Ordering::Relaxed);
    event_loop.stop();
    // Unblocks any producer waiting on a full channel.
    drop(rx);
    let _ = event_bridge.join();
    for timer in timers {
        let _ = timer.join();
    }

    Ok(())
}
