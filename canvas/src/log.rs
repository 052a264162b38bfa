//! The drawing event log: the ordered sequence of confirmed ops for a
//! room, and the single source of truth for what the canvas shows.
//!
//! Append-only except for two privileged mutations: [`DrawLog::clear`]
//! empties the sequence and [`DrawLog::undo_last`] removes the newest
//! element. Order is arrival order, which the transport guarantees
//! matches the server's broadcast order; the log neither reorders nor
//! deduplicates. Replaying the snapshot through the render primitives
//! from an empty surface always reproduces the current visible state.

#[cfg(test)]
#[path = "log_test.rs"]
mod log_test;

use crate::op::DrawingOp;

/// Ordered log of committed drawing operations.
#[derive(Debug, Clone, Default)]
pub struct DrawLog {
    ops: Vec<DrawingOp>,
}

impl DrawLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a confirmed op to the end of the log.
    pub fn append(&mut self, op: DrawingOp) {
        self.ops.push(op);
    }

    /// Remove the most recently appended op, if any. No-op on an empty
    /// log. Global undo: the newest op goes regardless of who drew it.
    pub fn undo_last(&mut self) -> Option<DrawingOp> {
        self.ops.pop()
    }

    /// Empty the log unconditionally.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Replace the full contents with an authoritative snapshot. Used on
    /// initial room join and full resync.
    pub fn replace_all(&mut self, ops: Vec<DrawingOp>) {
        self.ops = ops;
    }

    /// The current ordered sequence, for replay. Callers must treat it
    /// as read-only.
    #[must_use]
    pub fn snapshot(&self) -> &[DrawingOp] {
        &self.ops
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
