pub mod config;
pub mod desktop;
pub mod event;
pub mod hook;
pub mod log;
pub mod overlay;
pub mod placement;
pub mod rect;
pub mod style;
pub mod sync;
pub mod taskbar;
pub mod window;

pub use desktop::{DesktopIndicator, DesktopStep, VirtualDesktops};
pub use event::WidgetEvent;
pub use placement::Placement;
pub use rect::{Rect, Size};
pub use sync::{OverlaySurface, Synchronizer};
pub use taskbar::{Edge, TaskbarGeometry, TaskbarProvider, TaskbarWindow};
pub use window::{Window, WindowResult};
