use crate::common::{configure_criterion, mixed_eithers};
use criterion::{criterion_group, Criterion};
use either_rail::compare::{ByKey, EitherComparer, EitherEqualityComparer, EqualityComparer};
use either_rail::Either;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::hint::black_box;

pub fn bench_sorting(c: &mut Criterion) {
    let items = mixed_eithers();
    let mut group = c.benchmark_group("compare/sort");

    group.bench_function("derived_ord_1000", |b| {
        b.iter(|| {
            let mut values = items.clone();
            values.sort();
            black_box(values)
        })
    });

    group.bench_function("either_comparer_natural_1000", |b| {
        let cmp = EitherComparer::natural();
        b.iter(|| {
            let mut values = items.clone();
            cmp.sort(&mut values);
            black_box(values)
        })
    });

    group.bench_function("either_comparer_by_key_1000", |b| {
        let cmp = EitherComparer::with_right(ByKey(|x: &u32| core::cmp::Reverse(*x)));
        b.iter(|| {
            let mut values = items.clone();
            cmp.sort(&mut values);
            black_box(values)
        })
    });

    group.finish();
}

pub fn bench_hashing(c: &mut Criterion) {
    let items = mixed_eithers();
    let mut group = c.benchmark_group("compare/hash");

    group.bench_function("derived_hash_1000", |b| {
        b.iter(|| {
            let mut hasher = DefaultHasher::new();
            for item in items {
                item.hash(&mut hasher);
            }
            black_box(hasher.finish())
        })
    });

    group.bench_function("equality_comparer_hash_1000", |b| {
        let cmp = EitherEqualityComparer::natural();
        b.iter(|| {
            let mut hasher = DefaultHasher::new();
            for item in items {
                cmp.hash(item, &mut hasher);
            }
            black_box(hasher.finish())
        })
    });

    group.bench_function("equality_comparer_equals", |b| {
        let cmp = EitherEqualityComparer::natural();
        let probe = Either::<u32, u32>::right(999);
        b.iter(|| black_box(items.iter().filter(|item| cmp.equals(*item, &probe)).count()))
    });

    group.finish();
}

criterion_group! {
    name = compare_benches;
    config = configure_criterion();
    targets = bench_sorting, bench_hashing,
}
