//! Traversal abstraction over a compiled keyword automaton.
//!
//! This mirrors the split the crate's matching engine is built around: a
//! generic trait describing how any state-id representation advances on an
//! input character and exposes the match output attached to a state, and a
//! concrete compiled structure (see [`crate::nfa`]) that owns the trie and
//! its failure links.

use crate::state_id::{fail_id, StateID};

/// A compiled multi-pattern automaton capable of single-character
/// transitions, following failure links as needed, and exposing the output
/// list attached to whatever state it currently occupies.
pub(crate) trait Automaton {
    /// The representation used for state identifiers in this automaton.
    type ID: StateID;

    /// The output attached to a match state (a keyword and its callbacks).
    type Output;

    /// Returns the identifier of this automaton's start state.
    fn start_state(&self) -> Self::ID;

    /// Returns true if and only if the given state identifier refers to a
    /// valid state.
    fn is_valid(&self, id: Self::ID) -> bool;

    /// Returns the output list attached to the given state. Empty if the
    /// state is not a match state.
    fn outputs(&self, id: Self::ID) -> &[Self::Output];

    /// Given the current state and the next input character, returns the
    /// identifier of the next state, resolving failure links internally.
    /// The returned identifier is always valid and never the fail sentinel.
    ///
    /// # Safety
    ///
    /// Callers must ensure `current` is a valid state identifier for this
    /// automaton.
    unsafe fn next_state_unchecked(&self, current: Self::ID, ch: char) -> Self::ID;

    /// Like [`Automaton::next_state_unchecked`], but debug-asserts that the
    /// underlying implementation never returns the fail sentinel.
    ///
    /// # Safety
    ///
    /// Same requirement as [`Automaton::next_state_unchecked`].
    unsafe fn next_state_unchecked_no_fail(&self, current: Self::ID, ch: char) -> Self::ID {
        let next = self.next_state_unchecked(current, ch);
        debug_assert!(
            next != fail_id(),
            "automaton should never return fail_id for next state"
        );
        next
    }

    /// Advance `state` in place by one input character.
    fn step(&self, state: &mut Self::ID, ch: char) {
        assert!(self.is_valid(*state), "invalid state id given to step");
        // SAFETY: `state` was just asserted valid, and every transition this
        // automaton ever hands back is valid by construction.
        *state = unsafe { self.next_state_unchecked_no_fail(*state, ch) };
    }
}
