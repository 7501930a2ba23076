//! Async counterpart of the sync adapter tests, exercising `AsyncAdapter`
//! against a `futures_core::Stream` producer.

use futures_util::stream::{self, StreamExt};

use streamfilter::adapter::{AsyncAdapter, YieldMode};
use streamfilter::{continuous_drop, continuous_pass, halt, replace, PatternRegistry};

fn token_stream(words: &[&str]) -> impl futures_core::Stream<Item = String> {
    stream::iter(words.iter().map(|w| w.to_string()).collect::<Vec<_>>())
}

#[tokio::test]
async fn async_char_mode_applies_segment_rules_across_a_single_token() {
    let mut registry = PatternRegistry::new();
    registry.register("[", |_ctx| Some(continuous_drop()));
    registry.register("]", |_ctx| Some(continuous_pass()));
    let adapter = AsyncAdapter::new(
        token_stream(&["1[23]4[56]7"]),
        &mut registry,
        YieldMode::Char,
        false,
    );
    let out: String = adapter.collect::<Vec<_>>().await.concat();
    assert_eq!(out, "1]4]7");
}

#[tokio::test]
async fn async_token_mode_flushes_at_every_token_boundary() {
    let mut registry = PatternRegistry::new();
    registry.register("foo", |_ctx| Some(replace("bar")));
    let adapter = AsyncAdapter::new(
        token_stream(&["foo", "d"]),
        &mut registry,
        YieldMode::Token,
        false,
    );
    let out: Vec<String> = adapter.collect().await;
    assert_eq!(out, vec!["bar", "d"]);
}

#[tokio::test]
async fn async_halt_mid_token_ends_the_stream_without_the_rest() {
    let mut registry = PatternRegistry::new();
    registry.register("stop", |_ctx| Some(halt()));
    let adapter = AsyncAdapter::new(
        token_stream(&["go ", "stop", " now"]),
        &mut registry,
        YieldMode::Token,
        false,
    );
    let out: Vec<String> = adapter.collect().await;
    assert_eq!(out, vec!["go "]);
}

#[tokio::test]
async fn async_adapter_yields_nothing_for_an_empty_producer() {
    let mut registry = PatternRegistry::new();
    let adapter = AsyncAdapter::new(token_stream(&[]), &mut registry, YieldMode::Char, false);
    let out: Vec<String> = adapter.collect().await;
    assert!(out.is_empty());
}
