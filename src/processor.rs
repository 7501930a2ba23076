//! The per-character driver: owns the sliding buffer, the current automaton
//! node, the drop/pass mode flag, and the history recorder.

use std::collections::VecDeque;
use std::sync::Arc;

use thiserror::Error;

use crate::automaton::Automaton;
use crate::decision::{ActionContext, ActionDecision, Callback};
use crate::history::{History, NullHistory, StreamHistory};
use crate::nfa::OutputEntry;
use crate::registry::{AutomatonImpl, PatternRegistry};

/// Raised when a callback returns [`ActionDecision::Halt`].
///
/// This is control flow, not a failure: it is never logged as an error, and
/// callers are expected to catch it to end their own loop over the stream.
#[derive(Debug, Error, Clone, Copy, Default, PartialEq, Eq)]
#[error("stream halted")]
pub struct HaltSignal;

/// Processes a character stream one character at a time, dispatching
/// registered callbacks on match and emitting characters once they can no
/// longer extend into a future match.
pub struct StreamProcessor {
    automaton: Arc<AutomatonImpl>,
    max_len: usize,
    node: u32,
    buffer: VecDeque<char>,
    pos: usize,
    drop_mode: bool,
    history: Box<dyn History>,
    halted: bool,
}

impl StreamProcessor {
    /// Constructs a processor against `registry`, compiling it first if it
    /// is stale.
    pub fn new(registry: &mut PatternRegistry, record_history: bool) -> Self {
        let automaton = registry.compiled();
        let max_len = registry.max_len();
        let history: Box<dyn History> = if record_history {
            Box::new(StreamHistory::default())
        } else {
            Box::new(NullHistory)
        };
        let node = automaton.start_state();
        Self {
            automaton,
            max_len,
            node,
            buffer: VecDeque::new(),
            pos: 0,
            drop_mode: false,
            history,
            halted: false,
        }
    }

    /// Processes one character, returning the characters it causes to be
    /// emitted. Returns [`HaltSignal`] if a callback halted the stream; once
    /// that happens the processor must not be driven further.
    pub fn process(&mut self, ch: char) -> Result<Vec<char>, HaltSignal> {
        if self.halted {
            return Err(HaltSignal);
        }

        let mut out = Vec::new();
        self.history.record_input(ch);
        self.buffer.push_back(ch);
        self.pos += 1;
        self.automaton.step(&mut self.node, ch);

        if let Some(entry) = select_output(self.automaton.outputs(self.node)) {
            let keyword = entry.keyword.clone();
            let callbacks = entry.callbacks.clone();
            let keyword_len = keyword.chars().count();

            for callback in &callbacks {
                let ctx = ActionContext {
                    keyword: keyword.clone(),
                    buffer: self.buffer.iter().copied().collect(),
                    absolute_pos: self.pos,
                    history: self.history.as_ref(),
                };
                let Some(decision) = callback(&ctx) else {
                    continue;
                };
                self.history.record_action(self.pos, keyword.clone(), decision.clone());
                tracing::trace!(pos = self.pos, keyword = %keyword, ?decision, "dispatched match");

                match decision {
                    ActionDecision::Pass => {}
                    ActionDecision::Drop => self.pop_tail(keyword_len),
                    ActionDecision::Replace(text) => {
                        self.pop_tail(keyword_len);
                        self.buffer.extend(text.chars());
                    }
                    ActionDecision::Halt => {
                        self.halted = true;
                        tracing::debug!(pos = self.pos, "stream halted");
                        return Err(HaltSignal);
                    }
                    ActionDecision::ContinueDrop => self.enter_drop(keyword_len, &mut out),
                    ActionDecision::ContinuePass => self.exit_drop(keyword_len, &mut out),
                }
            }

            self.node = self.automaton.start_state();
        }

        if self.buffer.len() > self.max_len {
            let head = self.buffer.pop_front().expect("buffer just checked non-empty");
            if !self.drop_mode {
                self.history.record_output(head);
                out.push(head);
            }
        }

        Ok(out)
    }

    /// Flushes and returns all remaining buffered characters. Returns
    /// nothing, and clears the buffer without recording anything, if the
    /// stream is currently in drop mode or has already halted.
    pub fn flush(&mut self) -> Vec<char> {
        if self.halted || self.drop_mode {
            self.buffer.clear();
            return Vec::new();
        }
        let remaining: Vec<char> = self.buffer.drain(..).collect();
        for &ch in &remaining {
            self.history.record_output(ch);
        }
        remaining
    }

    fn pop_tail(&mut self, len: usize) {
        for _ in 0..len.min(self.buffer.len()) {
            self.buffer.pop_back();
        }
    }

    /// `CONTINUE_DROP`'s entry edge: flush everything before the matched
    /// keyword, discard the keyword itself, and start suppressing emission.
    fn enter_drop(&mut self, keyword_len: usize, out: &mut Vec<char>) {
        if self.drop_mode {
            return;
        }
        let all: Vec<char> = self.buffer.drain(..).collect();
        let prior_len = if keyword_len <= all.len() { all.len() - keyword_len } else { 0 };
        for &ch in &all[..prior_len] {
            self.history.record_output(ch);
            out.push(ch);
        }
        self.drop_mode = true;
    }

    /// `CONTINUE_PASS`'s exit edge: emit the matched keyword itself (the
    /// marker that ends the dropped segment) and resume passing content.
    fn exit_drop(&mut self, keyword_len: usize, out: &mut Vec<char>) {
        if !self.drop_mode {
            return;
        }
        let all: Vec<char> = self.buffer.drain(..).collect();
        let marker_start = if keyword_len <= all.len() { all.len() - keyword_len } else { 0 };
        for &ch in &all[marker_start..] {
            self.history.record_output(ch);
            out.push(ch);
        }
        self.drop_mode = false;
    }
}

/// Selects the single output entry to dispatch: longest keyword length
/// wins, with the first entry achieving that length winning ties. Because
/// failure links always point to a strictly shallower node, a node's
/// merged output list can in practice never contain two entries of equal
/// keyword length — but the tie-break is implemented anyway so the rule is
/// pinned down rather than left to whatever order entries happen to be in.
fn select_output(outputs: &[OutputEntry]) -> Option<&OutputEntry> {
    let mut best: Option<&OutputEntry> = None;
    for entry in outputs {
        let better = match best {
            None => true,
            Some(current) => entry.keyword.chars().count() > current.keyword.chars().count(),
        };
        if better {
            best = Some(entry);
        }
    }
    best
}
