use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use string_utilities::Strings;

const SENTENCE: &str = "This, is a sentence, with - some - punctuation. ";

fn bench_normalization(c: &mut Criterion) {
    let text = SENTENCE.repeat(200);

    c.bench_function("strip_punctuation", |b| {
        b.iter(|| Strings::strip_punctuation(black_box(&text)))
    });

    c.bench_function("strip_multiple_spaces", |b| {
        b.iter(|| Strings::strip_multiple_spaces(black_box(&text)))
    });
}

fn bench_replacement(c: &mut Criterion) {
    let subject = "0".repeat(10_000);

    c.bench_function("replace_nth", |b| {
        b.iter(|| Strings::replace_nth("0", "1", black_box(&subject), 5_000))
    });

    c.bench_function("replace_all_but_first_occurrence", |b| {
        b.iter(|| Strings::replace_all_but_first_occurrence("0", "1", black_box(&subject)))
    });
}

fn bench_excerpt(c: &mut Criterion) {
    let content = format!("<article>{}</article>", SENTENCE.repeat(100));

    c.bench_function("excerpt", |b| {
        b.iter(|| Strings::excerpt(black_box(&content), 40, "..."))
    });

    c.bench_function("excerpt_characters", |b| {
        b.iter(|| Strings::excerpt_characters(black_box(&content), 100, "..."))
    });
}

fn bench_random_hex(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);

    c.bench_function("random_hex_32", |b| {
        b.iter(|| Strings::random_hex_with(&mut rng, black_box(32), false))
    });
}

criterion_group!(
    benches,
    bench_normalization,
    bench_replacement,
    bench_excerpt,
    bench_random_hex
);
criterion_main!(benches);
