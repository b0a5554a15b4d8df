//! Input collaborator boundary

/// Key and button state sampled once per host frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Left direction held
    pub left: bool,
    /// Right direction held
    pub right: bool,
    /// Escape key held
    pub escape: bool,
    /// Controller back button held
    pub back: bool,
}

impl InputSnapshot {
    /// True when the player asked to quit this frame
    pub fn exit_requested(&self) -> bool {
        self.escape || self.back
    }
}

/// Source of per-frame input snapshots
pub trait InputSource {
    fn poll(&mut self) -> InputSnapshot;
}
