use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ortho::spelling::levenshtein::{levenshtein_distance, levenshtein_distance_bounded};
use ortho::spelling::suggest::SuggestionEngine;
use ortho::spelling::vocabulary::BuiltinVocabulary;

fn bench_distances(c: &mut Criterion) {
    let pairs = [
        ("bonjou", "bonjour"),
        ("comment", "commment"),
        ("kitten", "sitting"),
        ("sil vous plait", "s'il vous plaît"),
    ];

    let mut group = c.benchmark_group("levenshtein");

    group.bench_function("full_table", |b| {
        b.iter(|| {
            for (lhs, rhs) in &pairs {
                let _ = black_box(levenshtein_distance(black_box(lhs), black_box(rhs)));
            }
        })
    });

    group.bench_function("bounded", |b| {
        b.iter(|| {
            for (lhs, rhs) in &pairs {
                let _ = black_box(levenshtein_distance_bounded(
                    black_box(lhs),
                    black_box(rhs),
                    2,
                ));
            }
        })
    });

    group.finish();
}

fn bench_suggest(c: &mut Criterion) {
    let engine = SuggestionEngine::new(BuiltinVocabulary::french());
    let tokens = ["bonjou", "merci", "alez", "xyz123"];

    c.bench_function("suggest_french", |b| {
        b.iter(|| {
            for token in &tokens {
                let _ = black_box(engine.suggest(black_box(token)));
            }
        })
    });
}

criterion_group!(benches, bench_distances, bench_suggest);
criterion_main!(benches);
