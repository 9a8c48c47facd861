use alice_sequence::{contains_sequence, Algorithm};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn generate_words(size: usize) -> Vec<u8> {
    let words = [
        "the ", "quick ", "brown ", "fox ", "jumps ", "over ", "lazy ", "dog ",
        "alice ", "bob ", "server ", "request ", "response ", "error ", "data ",
        "cache ", "index ", "search ", "query ", "result ",
    ];
    let mut text = Vec::with_capacity(size);
    let mut i = 0;
    while text.len() < size {
        text.extend_from_slice(words[i % words.len()].as_bytes());
        i += 1;
    }
    text.truncate(size);
    text
}

/// Long runs of one symbol broken by a single different one.
/// Brute force re-reads most of every run at each alignment.
fn generate_periodic(size: usize, run: usize) -> Vec<u8> {
    (0..size)
        .map(|i| if i % run == run - 1 { b'b' } else { b'a' })
        .collect()
}

fn bench_words(c: &mut Criterion) {
    let text = generate_words(100_000);
    let mut group = c.benchmark_group("words");

    for pattern in ["fox", "the quick", "server request response", "query result zzz"] {
        for algorithm in [Algorithm::BruteForce, Algorithm::ApostolicoCrochemore] {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), pattern),
                pattern.as_bytes(),
                |b, pat| b.iter(|| contains_sequence(black_box(&text), black_box(pat), algorithm)),
            );
        }
    }
    group.finish();
}

fn bench_periodic(c: &mut Criterion) {
    let mut group = c.benchmark_group("periodic_miss");

    for run in [8, 64, 512] {
        let text = generate_periodic(100_000, run);
        // One 'a' longer than any run in the text: never matches.
        let mut pattern = vec![b'a'; run];
        pattern.push(b'b');

        for algorithm in [Algorithm::BruteForce, Algorithm::ApostolicoCrochemore] {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), run), &pattern, |b, pat| {
                b.iter(|| contains_sequence(black_box(&text), black_box(pat), algorithm))
            });
        }
    }
    group.finish();
}

fn bench_generic_elements(c: &mut Criterion) {
    let text: Vec<u32> = (0..50_000u32).map(|i| i.wrapping_mul(2_654_435_761) % 7).collect();
    let pattern: Vec<u32> = text[40_000..40_016].to_vec();

    c.bench_function("u32_brute_force", |b| {
        b.iter(|| contains_sequence(black_box(&text), black_box(&pattern), Algorithm::BruteForce))
    });

    c.bench_function("u32_apostolico_crochemore", |b| {
        b.iter(|| {
            contains_sequence(
                black_box(&text),
                black_box(&pattern),
                Algorithm::ApostolicoCrochemore,
            )
        })
    });
}

criterion_group!(benches, bench_words, bench_periodic, bench_generic_elements);
criterion_main!(benches);
