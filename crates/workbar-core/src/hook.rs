//! Ownership of the OS event-hook handle.
//!
//! [`HookHandle`] pairs every successful registration with exactly one
//! release. Releasing an already released handle is a no-op, and drop
//! releases whatever is still held.

/// Raw hook registration calls.
pub trait HookApi {
    /// Registers the hook and returns its raw handle, or 0 on failure.
    fn register(&self) -> usize;

    /// Releases a raw handle previously returned by `register`.
    fn unregister(&self, raw: usize) -> bool;
}

/// An owned event-hook registration.
pub struct HookHandle<A: HookApi> {
    api: A,
    raw: usize,
}

impl<A: HookApi> HookHandle<A> {
    /// Registers the hook.
    ///
    /// Returns `None` when the OS refuses the registration. Callers fall
    /// back to polling in that case.
    pub fn register(api: A) -> Option<Self> {
        let raw = api.register();
        if raw == 0 {
            return None;
        }
        Some(Self { api, raw })
    }

    /// Returns whether the hook is still registered.
    pub fn is_active(&self) -> bool {
        self.raw != 0
    }

    /// Raw handle value, 0 once released.
    pub fn raw(&self) -> usize {
        self.raw
    }

    /// Releases the hook. Returns `true` only for the call that
    /// actually unregistered it.
    pub fn release(&mut self) -> bool {
        if self.raw == 0 {
            return false;
        }
        let raw = std::mem::take(&mut self.raw);
        if !self.api.unregister(raw) {
            crate::log_warn!("unregistering hook 0x{raw:X} failed");
        }
        true
    }
}

impl<A: HookApi> Drop for HookHandle<A> {
    fn drop(&mut self) {
        self.release();
    }
}
