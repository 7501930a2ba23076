//! A streaming text filter that intercepts a token stream — typically one
//! produced incrementally by a language-model inference endpoint — and
//! rewrites it on the fly against a set of registered keyword rules.
//!
//! # Data flow
//!
//! ```text
//! producer -> adapter splits tokens into chars -> StreamProcessor consumes
//! each char, possibly invoking callbacks -> callbacks return decisions that
//! mutate processor state and may yield output chars -> adapter regroups
//! output chars for the consumer
//! ```
//!
//! The engine is built from five pieces:
//!
//! - [`history`]: an append-only log of inputs/outputs/decisions, with a
//!   real and a no-op variant.
//! - [`PatternRegistry`]: owns keyword → callback-list bindings and compiles
//!   them into a multi-pattern automaton.
//! - [`automaton`]/[`nfa`]: the compiled trie-with-failure-links structure.
//! - [`StreamProcessor`]: the per-character driver — buffer, automaton
//!   node, drop/pass mode, and history all live here.
//! - [`adapter`]: wraps a sync or async token producer and regroups emitted
//!   characters into `char`/`token`/`chunk:N` output items.
//!
//! See `DESIGN.md` in the repository for where each piece is grounded.

mod automaton;
mod decision;
mod error;
mod history;
mod nfa;
mod processor;
mod registry;
mod state_id;

pub mod adapter;

pub use decision::{continuous_drop, continuous_pass, drop, halt, passthrough, replace, ActionContext, ActionDecision, Callback};
pub use error::ConfigurationError;
pub use history::{History, NullHistory, StreamHistory};
pub use processor::{HaltSignal, StreamProcessor};
pub use registry::PatternRegistry;

/// Convenience re-export of the pieces most callers need.
pub mod prelude {
    pub use crate::adapter::{AsyncAdapter, SyncAdapter, YieldMode};
    pub use crate::{
        continuous_drop, continuous_pass, drop, halt, passthrough, replace, ActionContext,
        ActionDecision, Callback, ConfigurationError, HaltSignal, PatternRegistry, StreamHistory,
        StreamProcessor,
    };
}
