pub fn execute() {
    if workbar_windows::overlay::find_running().is_some() {
        println!("Workbar is already running.");
        return;
    }

    if let Err(e) = workbar_windows::widget::run() {
        eprintln!("Workbar error: {e}");
        std::process::exit(1);
    }
}
