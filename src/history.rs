//! The append-only history log callbacks may query, and its no-op twin.

use std::cell::RefCell;
use std::fmt;
use std::sync::Arc;

use crate::decision::ActionDecision;

/// Append-only log of inputs, emitted outputs, and action decisions. Exposed
/// to callbacks as `&dyn History` so a callback cannot tell, short of timing,
/// whether history recording is enabled for the stream it runs against.
pub trait History: fmt::Debug {
    /// Record a character as it is delivered to `process`.
    fn record_input(&self, ch: char);
    /// Record a character as it is returned to the caller.
    fn record_output(&self, ch: char);
    /// Record a decision returned by a callback.
    fn record_action(&self, pos: usize, keyword: Arc<str>, decision: ActionDecision);
    /// The exact sequence of characters passed to `process` so far.
    fn inputs(&self) -> Vec<char>;
    /// The exact sequence of characters returned by `process`/`flush` so far.
    fn outputs(&self) -> Vec<char>;
    /// Every decision returned by a callback so far, in order.
    fn actions(&self) -> Vec<(usize, Arc<str>, ActionDecision)>;
}

/// The real history recorder: three append-only sequences behind interior
/// mutability, since callbacks only ever see a shared reference.
#[derive(Debug, Default)]
pub struct StreamHistory {
    inputs: RefCell<Vec<char>>,
    outputs: RefCell<Vec<char>>,
    actions: RefCell<Vec<(usize, Arc<str>, ActionDecision)>>,
}

impl History for StreamHistory {
    fn record_input(&self, ch: char) {
        self.inputs.borrow_mut().push(ch);
    }

    fn record_output(&self, ch: char) {
        self.outputs.borrow_mut().push(ch);
    }

    fn record_action(&self, pos: usize, keyword: Arc<str>, decision: ActionDecision) {
        self.actions.borrow_mut().push((pos, keyword, decision));
    }

    fn inputs(&self) -> Vec<char> {
        self.inputs.borrow().clone()
    }

    fn outputs(&self) -> Vec<char> {
        self.outputs.borrow().clone()
    }

    fn actions(&self) -> Vec<(usize, Arc<str>, ActionDecision)> {
        self.actions.borrow().clone()
    }
}

/// The no-op history collector used when history recording is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHistory;

impl History for NullHistory {
    fn record_input(&self, _ch: char) {}
    fn record_output(&self, _ch: char) {}
    fn record_action(&self, _pos: usize, _keyword: Arc<str>, _decision: ActionDecision) {}
    fn inputs(&self) -> Vec<char> {
        Vec::new()
    }
    fn outputs(&self) -> Vec<char> {
        Vec::new()
    }
    fn actions(&self) -> Vec<(usize, Arc<str>, ActionDecision)> {
        Vec::new()
    }
}
