//! Configuration-time errors raised by the integration adapter.

use thiserror::Error;

/// Raised when an adapter is configured with an unrecognized yield mode.
///
/// The Python reference this crate is modeled on also raises a `TypeError`
/// when the decorator is applied to something that isn't a generator; in
/// Rust that case has no runtime counterpart, since [`crate::adapter::SyncAdapter`]
/// and [`crate::adapter::AsyncAdapter`] are generic over the producer trait
/// they require and a mismatched type is rejected at compile time instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The yield-mode string didn't match `char`, `token`, or `chunk:<N>`
    /// for a positive integer `N`.
    #[error("invalid yield mode {0:?}, expected \"char\", \"token\", or \"chunk:<positive integer>\"")]
    InvalidYieldMode(String),
}
