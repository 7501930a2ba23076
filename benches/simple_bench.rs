use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use streamfilter::{passthrough, PatternRegistry, StreamProcessor};

fn random_text(len: usize) -> String {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz ";
    let mut state = 0x2545_f491_4f6c_dd1du64;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            ALPHABET[(state as usize) % ALPHABET.len()] as char
        })
        .collect()
}

fn registry_of(keywords: &[&str]) -> PatternRegistry {
    let mut registry = PatternRegistry::new();
    for keyword in keywords {
        registry.register(*keyword, |_ctx| Some(passthrough()));
    }
    registry
}

fn run_once(registry: &mut PatternRegistry, text: &str) -> usize {
    let mut processor = StreamProcessor::new(registry, false);
    let mut count = 0;
    for ch in text.chars() {
        count += processor.process(ch).expect("no halting keyword registered").len();
    }
    count += processor.flush().len();
    count
}

fn bench_keyword_count(c: &mut Criterion) {
    let text = random_text(50_000);
    let mut group = c.benchmark_group("keyword_count");
    for &count in &[1usize, 10, 100, 1000] {
        let keywords: Vec<String> = (0..count).map(|i| format!("kw{i}")).collect();
        let keyword_refs: Vec<&str> = keywords.iter().map(String::as_str).collect();
        group.bench_with_input(BenchmarkId::from_parameter(count), &keyword_refs, |b, keywords| {
            let mut registry = registry_of(keywords);
            // Force compilation once outside the timed loop.
            registry.max_len();
            b.iter(|| run_once(&mut registry, black_box(&text)));
        });
    }
    group.finish();
}

fn bench_haystack_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("haystack_length");
    for &len in &[1_000usize, 10_000, 100_000] {
        let text = random_text(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            let mut registry = registry_of(&["the", "quick", "brown", "fox", "jumps"]);
            registry.max_len();
            b.iter(|| run_once(&mut registry, black_box(text)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_keyword_count, bench_haystack_length);
criterion_main!(benches);
