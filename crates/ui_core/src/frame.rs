//! One-frame-at-a-time scheduling for scroll work.

/// Collapses bursts of scroll notifications into one recomputation per
/// rendered frame.
#[derive(Debug, Default)]
pub struct FrameCoalescer {
    pending: bool,
    coalesced: u32,
}

impl FrameCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the caller must schedule a frame; false when one is
    /// already pending and this notification rides along with it.
    pub fn notify(&mut self) -> bool {
        if self.pending {
            self.coalesced = self.coalesced.saturating_add(1);
            return false;
        }
        self.pending = true;
        true
    }

    /// Clears the pending flag and returns how many notifications were folded
    /// into this frame besides the one that scheduled it.
    pub fn on_frame(&mut self) -> u32 {
        self.pending = false;
        std::mem::take(&mut self.coalesced)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
