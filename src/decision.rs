//! Callback contract: the context callbacks read and the decisions they
//! return.

use std::sync::Arc;

use crate::history::History;

/// The read-only argument delivered to a callback at the instant a keyword
/// matches.
pub struct ActionContext<'a> {
    /// The matched keyword.
    pub keyword: Arc<str>,
    /// A snapshot of the internal buffer at match time (characters not yet
    /// emitted or discarded).
    pub buffer: Vec<char>,
    /// 1-based index of the last character consumed from the input.
    pub absolute_pos: usize,
    /// The history recorder for this stream (may be the no-op variant).
    pub history: &'a dyn History,
}

/// What a callback decides to do with a matched keyword.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionDecision {
    /// Keep the matched keyword in the buffer unchanged.
    Pass,
    /// Remove the matched keyword from the tail of the buffer.
    Drop,
    /// Remove the matched keyword from the tail of the buffer, then append
    /// this text.
    Replace(String),
    /// Abort the stream immediately.
    Halt,
    /// Enter persistent drop mode.
    ContinueDrop,
    /// Leave persistent drop mode.
    ContinuePass,
}

/// A callback: a function from an [`ActionContext`] to an optional
/// [`ActionDecision`]. Returning `None` is a no-op, equivalent to `Pass`.
pub type Callback = Arc<dyn Fn(&ActionContext<'_>) -> Option<ActionDecision> + Send + Sync>;

/// Keep the matched keyword in the buffer unchanged.
pub fn passthrough() -> ActionDecision {
    ActionDecision::Pass
}

/// Remove the matched keyword from the buffer.
pub fn drop() -> ActionDecision {
    ActionDecision::Drop
}

/// Remove the matched keyword from the buffer and append `text` in its
/// place.
pub fn replace(text: impl Into<String>) -> ActionDecision {
    ActionDecision::Replace(text.into())
}

/// Abort the stream immediately.
pub fn halt() -> ActionDecision {
    ActionDecision::Halt
}

/// Enter persistent drop mode.
pub fn continuous_drop() -> ActionDecision {
    ActionDecision::ContinueDrop
}

/// Leave persistent drop mode.
pub fn continuous_pass() -> ActionDecision {
    ActionDecision::ContinuePass
}
