use workbar_core::Window as _;
use workbar_windows::Window;

pub fn execute() {
    let Some(hwnd) = workbar_windows::overlay::find_running() else {
        println!("Workbar is not running.");
        return;
    };

    match Window::new(hwnd).rect() {
        Ok(rect) => println!(
            "Workbar is running (overlay at {},{} {}x{}).",
            rect.x, rect.y, rect.width, rect.height
        ),
        Err(_) => println!("Workbar is running."),
    }
}
