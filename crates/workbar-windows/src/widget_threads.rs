use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, SyncSender};
use std::thread;
use std::time::Duration;

use workbar_core::WidgetEvent;

use super::widget_types::{Timer, WidgetMsg};

/// Bridges event loop events into the UI loop channel.
pub(super) fn spawn_event_bridge(
    event_rx: Receiver<WidgetEvent>,
    tx: SyncSender<WidgetMsg>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        for event in event_rx {
            if tx.send(WidgetMsg::Event(event)).is_err() {
                break;
            }
        }
    })
}

/// Spawns a thread that posts `timer` ticks every `interval`.
///
/// A blocking send keeps ticks from piling up while the UI loop is busy.
pub(super) fn spawn_timer(
    tx: SyncSender<WidgetMsg>,
    timer: Timer,
    interval: Duration,
    stop: Arc<AtomicBool>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        while !stop.load(Ordering::Relaxed) {
            thread::sleep(interval);
            if stop.load(Ordering::Relaxed) || tx.send(WidgetMsg::Tick(timer)).is_err() {
                break;
            }
        }
    })
}
