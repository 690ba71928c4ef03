use serde::Serialize;

use workbar_core::config;
use workbar_core::placement::{self, Mode, Reading};
use workbar_core::taskbar::TASKBAR_CLASS;
use workbar_core::{Placement, Size, TaskbarGeometry, TaskbarProvider, TaskbarWindow};
use workbar_windows::ShellTaskbar;

/// One reading of both taskbar probes, and the resulting placements.
#[derive(Serialize)]
struct ProbeReport {
    screen: Size,
    overlay: Size,
    gap: i32,
    /// What the app-bar query reports.
    appbar: TaskbarGeometry,
    /// The `Shell_TrayWnd` window, if it exists.
    window: Option<TaskbarWindow>,
    /// Where the periodic pass would put the overlay.
    poll_placement: Option<Placement>,
    /// Where a taskbar location change would put the overlay.
    snap_placement: Option<Placement>,
}

pub fn execute(json: bool) {
    let config = config::load();
    let report = probe(&ShellTaskbar, config.overlay.size(), config.overlay.gap);

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    print_report(&report);
}

fn probe(provider: &impl TaskbarProvider, overlay: Size, gap: i32) -> ProbeReport {
    let screen = provider.screen_size();
    let appbar = provider.query_geometry();
    let window = provider.locate();
    let gap_f = f64::from(gap);

    let poll = Reading {
        geometry: appbar,
        screen,
    };
    let poll_placement = placement::reconcile(Mode::AutoHideAware, &poll, overlay, gap_f);

    let snap_placement = window.and_then(|w| {
        let reading = Reading {
            geometry: w.geometry(screen),
            screen,
        };
        placement::reconcile(Mode::Snap, &reading, overlay, gap_f)
    });

    ProbeReport {
        screen,
        overlay,
        gap,
        appbar,
        window,
        poll_placement,
        snap_placement,
    }
}

fn print_report(report: &ProbeReport) {
    let ab = &report.appbar;
    println!("Screen     {}x{}", report.screen.width, report.screen.height);
    println!(
        "App bar    {:?} at {},{} {}x{} (auto-hide: {})",
        ab.edge, ab.bounds.x, ab.bounds.y, ab.bounds.width, ab.bounds.height, ab.auto_hide
    );
    match &report.window {
        Some(w) => println!(
            "Window     0x{:X} at {},{} {}x{}",
            w.handle, w.rect.x, w.rect.y, w.rect.width, w.rect.height
        ),
        None => println!("Window     {TASKBAR_CLASS} not found"),
    }
    println!(
        "Overlay    {}x{}, gap {}",
        report.overlay.width, report.overlay.height, report.gap
    );
    println!("Poll pass  {}", describe(report.poll_placement));
    println!("Snap pass  {}", describe(report.snap_placement));
}

fn describe(placement: Option<Placement>) -> String {
    match placement {
        Some(p) => {
            let (x, y) = p.to_pixels();
            format!("({x}, {y})")
        }
        None => "no placement (taskbar geometry unknown)".into(),
    }
}
