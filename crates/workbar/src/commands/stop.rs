pub fn execute() {
    let Some(hwnd) = workbar_windows::overlay::find_running() else {
        println!("Workbar is not running.");
        return;
    };

    // Closing the overlay ends the widget and releases its taskbar hook.
    match workbar_windows::overlay::request_close(hwnd) {
        Ok(()) => println!("Workbar stopped."),
        Err(e) => {
            eprintln!("Error: could not close the overlay: {e}");
            std::process::exit(1);
        }
    }
}
