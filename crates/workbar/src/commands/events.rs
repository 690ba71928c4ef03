use std::sync::mpsc;
use std::time::Duration;

use workbar_core::Window as _;
use workbar_windows::Window;

/// Watches filtered taskbar location events. Press Ctrl+C to stop.
pub fn execute() {
    println!("Watching taskbar location events (press Ctrl+C to stop)...\n");

    let (tx, rx) = mpsc::sync_channel(32);
    let event_loop = match workbar_windows::event_loop::start(tx, None) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Failed to start event loop: {e}");
            return;
        }
    };
    if !event_loop.hook_taskbar() {
        eprintln!("Warning: could not hook the taskbar, no events will be shown");
    }

    let (stop_tx, stop_rx) = mpsc::channel();
    if let Err(e) = workbar_windows::ctrl_c::set_handler(move || {
        let _ = stop_tx.send(());
    }) {
        eprintln!("Warning: {e}");
    }

    loop {
        if stop_rx.try_recv().is_ok() {
            break;
        }

        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(workbar_core::WidgetEvent::LocationChanged { hwnd }) => {
                match Window::from_raw(hwnd).rect() {
                    Ok(r) => println!(
                        "location-changed 0x{hwnd:X} -> {},{} {}x{}",
                        r.x, r.y, r.width, r.height
                    ),
                    Err(_) => println!("location-changed 0x{hwnd:X}"),
                }
            }
            Ok(event) => println!("{event}"),
            Err(mpsc::RecvTimeoutError::Timeout) => continue,
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    event_loop.stop();
}
