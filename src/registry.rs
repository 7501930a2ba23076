//! Owns keyword → callback-list bindings and compiles them into a
//! [`crate::nfa::MatchAutomaton`] on demand.

use std::collections::HashMap;
use std::sync::Arc;

use crate::decision::{ActionContext, ActionDecision, Callback};
use crate::nfa::{self, MatchAutomaton};

/// The state identifier width used by every automaton this crate compiles.
/// `u32` comfortably covers any keyword set a stream filter would realistically
/// carry while keeping nodes compact.
pub(crate) type AutomatonImpl = MatchAutomaton<u32>;

/// Registry of keywords and their associated callbacks.
///
/// A registry may be constructed, mutated and queried at any time; mutating
/// it (`register`/`deregister`) marks the compiled automaton stale, so the
/// next `compile`, `max_len`, or `StreamProcessor::new` call rebuilds it.
pub struct PatternRegistry {
    keywords: HashMap<Arc<str>, Vec<Callback>>,
    compiled: Option<Arc<AutomatonImpl>>,
    max_len: usize,
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            keywords: HashMap::new(),
            compiled: None,
            max_len: 0,
        }
    }

    /// Registers `callback` against `keyword`, appending it to that
    /// keyword's callback list. Callbacks run in registration order; the
    /// same callback may be registered more than once, and each occurrence
    /// runs independently. Returns the stored handle so the caller can later
    /// pass it to [`PatternRegistry::deregister`].
    ///
    /// # Panics
    ///
    /// Panics if `keyword` is empty.
    pub fn register<F>(&mut self, keyword: impl Into<Arc<str>>, callback: F) -> Callback
    where
        F: Fn(&ActionContext<'_>) -> Option<ActionDecision> + Send + Sync + 'static,
    {
        let keyword = keyword.into();
        assert!(!keyword.is_empty(), "keyword must not be empty");
        let callback: Callback = Arc::new(callback);
        self.keywords.entry(keyword).or_default().push(callback.clone());
        self.compiled = None;
        callback
    }

    /// Deregisters a callback, or an entire keyword if `callback` is `None`.
    /// A missing keyword or a callback not found under it is a silent
    /// no-op.
    pub fn deregister(&mut self, keyword: &str, callback: Option<&Callback>) {
        let Some(callbacks) = self.keywords.get_mut(keyword) else {
            return;
        };
        match callback {
            None => {
                self.keywords.remove(keyword);
            }
            Some(target) => {
                if let Some(pos) = callbacks.iter().position(|cb| Arc::ptr_eq(cb, target)) {
                    callbacks.remove(pos);
                }
                if callbacks.is_empty() {
                    self.keywords.remove(keyword);
                }
            }
        }
        self.compiled = None;
    }

    /// Returns the length, in characters, of the longest registered
    /// keyword (0 if the registry is empty). Compiles the automaton first
    /// if it is stale.
    pub fn max_len(&mut self) -> usize {
        self.compiled();
        self.max_len
    }

    /// Rebuilds the automaton from the current keyword set.
    pub fn compile(&mut self) {
        let entries: Vec<(Arc<str>, Vec<Callback>)> = self
            .keywords
            .iter()
            .map(|(keyword, callbacks)| (keyword.clone(), callbacks.clone()))
            .collect();
        let max_len = entries.iter().map(|(kw, _)| kw.chars().count()).max().unwrap_or(0);
        let automaton = nfa::build::<u32>(&entries).expect("keyword set exceeds u32 state space");
        tracing::debug!(keywords = entries.len(), max_len, "compiled keyword automaton");
        self.compiled = Some(Arc::new(automaton));
        self.max_len = max_len;
    }

    /// Returns the compiled automaton, recompiling first if stale.
    pub(crate) fn compiled(&mut self) -> Arc<AutomatonImpl> {
        if self.compiled.is_none() {
            self.compile();
        }
        self.compiled.clone().expect("just compiled")
    }
}
