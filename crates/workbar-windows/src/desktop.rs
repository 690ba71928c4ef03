//! Virtual-desktop switching through `VirtualDesktopAccessor.dll`.
//!
//! The DLL is optional. It is looked up next to the executable and on
//! the usual search path; without it the widget shows no desktops and
//! the previous/next controls do nothing.

use std::mem;

use windows::Win32::Foundation::HWND;
use windows::Win32::System::LibraryLoader::{GetProcAddress, LoadLibraryW};
use windows::core::{PCSTR, s, w};

use workbar_core::VirtualDesktops;

type QueryFn = unsafe extern "C" fn() -> i32;
type GoToFn = unsafe extern "C" fn(i32) -> i32;
type PinFn = unsafe extern "C" fn(HWND) -> i32;

/// Resolved entry points of the accessor DLL.
#[derive(Clone, Copy)]
struct Exports {
    count: QueryFn,
    current: QueryFn,
    go_to: GoToFn,
    pin: PinFn,
}

/// Virtual desktops backed by `VirtualDesktopAccessor.dll`.
#[derive(Clone, Copy, Default)]
pub struct AccessorDll {
    exports: Option<Exports>,
}

impl AccessorDll {
    /// Loads the DLL and resolves its exports.
    ///
    /// The module stays loaded for the life of the process.
    pub fn load() -> Self {
        // SAFETY: LoadLibraryW runs the DLL's initializer; the accessor
        // library has no side effects at load time.
        let module = match unsafe { LoadLibraryW(w!("VirtualDesktopAccessor.dll")) } {
            Ok(module) => module,
            Err(e) => {
                workbar_core::log_warn!("VirtualDesktopAccessor.dll not loaded: {e}");
                return Self::default();
            }
        };

        let resolve = |name: PCSTR| unsafe { GetProcAddress(module, name) };
        let (Some(count), Some(current), Some(go_to), Some(pin)) = (
            resolve(s!("GetDesktopCount")),
            resolve(s!("GetCurrentDesktopNumber")),
            resolve(s!("GoToDesktopNumber")),
            resolve(s!("PinWindow")),
        ) else {
            workbar_core::log_warn!("VirtualDesktopAccessor.dll is missing expected exports");
            return Self::default();
        };

        // SAFETY: the exports have these C signatures in every published
        // build of the accessor library.
        let exports = unsafe {
            Exports {
                count: mem::transmute::<unsafe extern "system" fn() -> isize, QueryFn>(count),
                current: mem::transmute::<unsafe extern "system" fn() -> isize, QueryFn>(current),
                go_to: mem::transmute::<unsafe extern "system" fn() -> isize, GoToFn>(go_to),
                pin: mem::transmute::<unsafe extern "system" fn() -> isize, PinFn>(pin),
            }
        };
        workbar_core::log_info!("VirtualDesktopAccessor.dll loaded");
        Self {
            exports: Some(exports),
        }
    }

    pub fn is_available(&self) -> bool {
        self.exports.is_some()
    }
}

impl VirtualDesktops for AccessorDll {
    fn count(&self) -> usize {
        self.exports
            .map_or(0, |e| usize::try_from(unsafe { (e.count)() }).unwrap_or(0))
    }

    fn current(&self) -> Option<usize> {
        let e = self.exports?;
        usize::try_from(unsafe { (e.current)() }).ok()
    }

    fn go_to(&self, index: usize) {
        let (Some(e), Ok(index)) = (self.exports, i32::try_from(index)) else {
            return;
        };
        unsafe { (e.go_to)(index) };
    }

    fn pin(&self, handle: usize) -> bool {
        let Some(e) = self.exports else {
            return false;
        };
        unsafe { (e.pin)(HWND(handle as *mut _)) != -1 }
    }
}
