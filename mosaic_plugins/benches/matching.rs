//! Function-Matching Generation Benchmarks
//!
//! Measures full-pipeline generation cost as subtype count grows, and the
//! cost of regeneration runs, which diff-driven tooling performs on every
//! unchanged input.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mosaic_core::model::{AlgebraicType, Attribute, Subtype};
use mosaic_core::objc::TypeRef;
use mosaic_plugins::function_matching::match_method;

/// Build a synthetic type with `subtypes` variants of three attributes each.
fn synthetic(subtypes: usize) -> AlgebraicType {
    AlgebraicType::new(
        "Message",
        (0..subtypes)
            .map(|i| {
                Subtype::new(
                    format!("Variant{i}"),
                    vec![
                        Attribute::new("tag", TypeRef::scalar("NSUInteger")),
                        Attribute::new("payload", TypeRef::object("NSData")),
                        Attribute::new("timestamp", TypeRef::scalar("NSTimeInterval")),
                    ],
                )
            })
            .collect(),
    )
}

// =============================================================================
// Generation Cost by Subtype Count
// =============================================================================

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");

    for subtypes in [2usize, 8, 32] {
        let adt = synthetic(subtypes);
        group.bench_with_input(
            BenchmarkId::from_parameter(subtypes),
            &adt,
            |b, adt| b.iter(|| black_box(match_method(adt))),
        );
    }

    group.finish();
}

// =============================================================================
// Regeneration Stability
// =============================================================================

fn bench_regeneration(c: &mut Criterion) {
    let adt = synthetic(8);
    let baseline = match_method(&adt);

    let mut group = c.benchmark_group("regeneration");

    // Regeneration plus the comparison a diff-driven pipeline performs.
    group.bench_function("generate_and_compare", |b| {
        b.iter(|| {
            let regenerated = match_method(black_box(&adt));
            black_box(regenerated == baseline)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_generation, bench_regeneration);
criterion_main!(benches);
