use std::cell::Cell;
use std::rc::Rc;

/// A listener callback handed to scroll sources. Calling it requests a recomputation pass.
pub type Wake = Rc<dyn Fn()>;

#[derive(Debug, Default)]
struct Slot {
    pending: Cell<bool>,
    suspended: Cell<bool>,
    closed: Cell<bool>,
}

/// Single-slot coalescing of recomputation requests.
///
/// Any number of requests made before the next frame tick collapse into one pending pass.
/// Clones share the same slot, so a scroll listener holding a clone arms the engine's frame.
#[derive(Clone, Debug, Default)]
pub struct FrameRequest {
    slot: Rc<Slot>,
}

impl FrameRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the slot. Returns `true` when this call armed it, `false` when a pass was already
    /// pending or requests are currently refused (suspended or closed).
    pub fn request(&self) -> bool {
        if self.slot.closed.get() || self.slot.suspended.get() {
            return false;
        }
        !self.slot.pending.replace(true)
    }

    pub fn is_pending(&self) -> bool {
        self.slot.pending.get()
    }

    pub fn is_suspended(&self) -> bool {
        self.slot.suspended.get()
    }

    pub fn is_closed(&self) -> bool {
        self.slot.closed.get()
    }

    /// Builds a listener that arms this slot.
    pub fn waker(&self) -> Wake {
        let this = self.clone();
        Rc::new(move || {
            this.request();
        })
    }

    /// Disarms the slot, returning whether a pass was pending.
    pub(crate) fn take(&self) -> bool {
        self.slot.pending.replace(false)
    }

    /// Drops any pending request and refuses new ones until [`Self::resume`].
    pub(crate) fn suspend(&self) {
        self.slot.suspended.set(true);
        self.slot.pending.set(false);
    }

    pub(crate) fn resume(&self) {
        self.slot.suspended.set(false);
    }

    /// Permanently refuses requests. Late wake-ups from stale listeners become no-ops.
    pub(crate) fn close(&self) {
        self.slot.closed.set(true);
        self.slot.pending.set(false);
    }
}
