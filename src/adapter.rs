//! Wraps a character- or token-producing source and funnels it through a
//! [`StreamProcessor`], regrouping the emitted characters into the
//! caller-selected yield mode.
//!
//! `SyncAdapter` wraps any `Iterator<Item = String>`; `AsyncAdapter` wraps
//! any `futures_core::Stream<Item = String>`. Both drive the same
//! synchronous core one character at a time; the async half only awaits
//! between tokens fetched from the producer, never inside a single
//! character's processing.

use std::collections::VecDeque;
use std::num::NonZeroUsize;
use std::pin::Pin;
use std::str::FromStr;
use std::task::{Context, Poll};

use futures_core::Stream;
use pin_project_lite::pin_project;

use crate::error::ConfigurationError;
use crate::processor::StreamProcessor;
use crate::registry::PatternRegistry;

/// How the adapter regroups emitted characters into output items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YieldMode {
    /// Emit each character individually.
    Char,
    /// Emit one output item per input token (accumulating that token's
    /// characters plus an in-token flush).
    Token,
    /// Emit fixed-size groups of `N` characters; the final group may be
    /// shorter.
    Chunk(NonZeroUsize),
}

impl FromStr for YieldMode {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "char" => Ok(YieldMode::Char),
            "token" => Ok(YieldMode::Token),
            _ => {
                let size = s
                    .strip_prefix("chunk:")
                    .and_then(|rest| rest.parse::<usize>().ok())
                    .and_then(NonZeroUsize::new)
                    .ok_or_else(|| ConfigurationError::InvalidYieldMode(s.to_string()))?;
                Ok(YieldMode::Chunk(size))
            }
        }
    }
}

/// Runs every character of `token` through `processor`, short-circuiting on
/// halt. On halt, any characters emitted earlier in this same token are
/// discarded along with it, matching the reference implementation: a halt
/// anywhere in a token suppresses the whole token's output.
fn drive_token(processor: &mut StreamProcessor, token: &str) -> Option<Vec<char>> {
    let mut out = Vec::new();
    for ch in token.chars() {
        match processor.process(ch) {
            Ok(emitted) => out.extend(emitted),
            Err(_halt) => return None,
        }
    }
    Some(out)
}

fn repack(chars: Vec<char>, mode: YieldMode) -> Vec<String> {
    match mode {
        YieldMode::Char => chars.into_iter().map(|c| c.to_string()).collect(),
        YieldMode::Token => vec![chars.into_iter().collect()],
        YieldMode::Chunk(size) => chars.chunks(size.get()).map(|c| c.iter().collect()).collect(),
    }
}

/// Wraps a synchronous token producer, returning an iterator of regrouped
/// output strings.
pub struct SyncAdapter<I> {
    inner: I,
    processor: StreamProcessor,
    mode: YieldMode,
    pending: VecDeque<String>,
    halted: bool,
    finished: bool,
}

impl<I: Iterator<Item = String>> SyncAdapter<I> {
    /// Wraps `inner`, constructing a fresh [`StreamProcessor`] against
    /// `registry`.
    pub fn new(inner: I, registry: &mut PatternRegistry, mode: YieldMode, record_history: bool) -> Self {
        Self {
            inner,
            processor: StreamProcessor::new(registry, record_history),
            mode,
            pending: VecDeque::new(),
            halted: false,
            finished: false,
        }
    }
}

impl<I: Iterator<Item = String>> Iterator for SyncAdapter<I> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(item) = self.pending.pop_front() {
                return Some(item);
            }
            if self.halted || self.finished {
                return None;
            }

            match self.inner.next() {
                Some(token) => match drive_token(&mut self.processor, &token) {
                    Some(mut out) if matches!(self.mode, YieldMode::Token) => {
                        out.extend(self.processor.flush());
                        self.pending.push_back(out.into_iter().collect());
                    }
                    Some(out) => self.pending.extend(repack(out, self.mode)),
                    None => self.halted = true,
                },
                None => {
                    self.finished = true;
                    if !matches!(self.mode, YieldMode::Token) {
                        let remaining = self.processor.flush();
                        if !remaining.is_empty() {
                            self.pending.extend(repack(remaining, self.mode));
                        }
                    }
                }
            }
        }
    }
}

pin_project! {
    /// Wraps an asynchronous token producer, yielding regrouped output
    /// strings as a [`futures_core::Stream`].
    pub struct AsyncAdapter<St> {
        #[pin]
        inner: St,
        processor: StreamProcessor,
        mode: YieldMode,
        pending: VecDeque<String>,
        halted: bool,
        finished: bool,
    }
}

impl<St: Stream<Item = String>> AsyncAdapter<St> {
    /// Wraps `inner`, constructing a fresh [`StreamProcessor`] against
    /// `registry`.
    pub fn new(inner: St, registry: &mut PatternRegistry, mode: YieldMode, record_history: bool) -> Self {
        Self {
            inner,
            processor: StreamProcessor::new(registry, record_history),
            mode,
            pending: VecDeque::new(),
            halted: false,
            finished: false,
        }
    }
}

impl<St: Stream<Item = String>> Stream for AsyncAdapter<St> {
    type Item = String;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<String>> {
        let mut this = self.project();
        loop {
            if let Some(item) = this.pending.pop_front() {
                return Poll::Ready(Some(item));
            }
            if *this.halted || *this.finished {
                return Poll::Ready(None);
            }

            match this.inner.as_mut().poll_next(cx) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Some(token)) => match drive_token(this.processor, &token) {
                    Some(mut out) if matches!(*this.mode, YieldMode::Token) => {
                        out.extend(this.processor.flush());
                        this.pending.push_back(out.into_iter().collect());
                    }
                    Some(out) => this.pending.extend(repack(out, *this.mode)),
                    None => *this.halted = true,
                },
                Poll::Ready(None) => {
                    *this.finished = true;
                    if !matches!(*this.mode, YieldMode::Token) {
                        let remaining = this.processor.flush();
                        if !remaining.is_empty() {
                            this.pending.extend(repack(remaining, *this.mode));
                        }
                    }
                }
            }
        }
    }
}
