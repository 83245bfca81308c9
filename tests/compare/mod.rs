use core::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::Hasher;

use either_rail::compare::{
    ByKey, Comparer, EitherComparer, EitherEqualityComparer, EqualityComparer, FnComparer, Natural,
};
use either_rail::Either;

fn hash_with<T, C: EqualityComparer<T>>(comparer: &C, value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    comparer.hash(value, &mut hasher);
    hasher.finish()
}

fn case_insensitive() -> ByKey<fn(&String) -> String> {
    let lower: fn(&String) -> String = |s| s.to_lowercase();
    ByKey(lower)
}

#[test]
fn natural_matches_derived_semantics() {
    let cmp = EitherEqualityComparer::natural();
    let a = Either::<i32, &str>::right("x");
    let b = Either::<i32, &str>::right("x");

    assert!(cmp.equals(&a, &b));
    assert!(!cmp.equals(&a, &Either::left(0)));
    assert_eq!(hash_with(&cmp, &a), hash_with(&Natural, &"x"));
}

#[test]
fn cross_side_values_are_never_equal_under_any_comparer() {
    let always_equal = ByKey(|_: &i32| ());
    let cmp = EitherEqualityComparer::new(always_equal, always_equal);

    assert!(cmp.equals(&Either::<i32, i32>::left(1), &Either::left(2)));
    assert!(!cmp.equals(&Either::<i32, i32>::left(1), &Either::right(1)));
}

#[test]
fn custom_right_comparer_keeps_hash_consistent() {
    let cmp = EitherEqualityComparer::with_right(case_insensitive());
    let a = Either::<i32, String>::right("Header".into());
    let b = Either::<i32, String>::right("HEADER".into());

    assert!(cmp.equals(&a, &b));
    assert_eq!(hash_with(&cmp, &a), hash_with(&cmp, &b));
    assert!(!cmp.equals(&a, &Either::right("other".into())));
}

#[test]
fn custom_left_comparer_does_not_touch_right_side() {
    let cmp = EitherEqualityComparer::with_left(case_insensitive());

    assert!(cmp.equals(&Either::<String, String>::left("A".into()), &Either::left("a".into())));
    assert!(!cmp.equals(&Either::<String, String>::right("A".into()), &Either::right("a".into())));
}

#[test]
fn comparer_orders_lefts_first() {
    let cmp = EitherComparer::natural();

    assert_eq!(cmp.compare(&Either::<i32, i32>::left(100), &Either::right(-100)), Ordering::Less);
    assert_eq!(cmp.compare(&Either::<i32, i32>::right(0), &Either::left(0)), Ordering::Greater);
    assert_eq!(cmp.compare(&Either::<i32, i32>::left(1), &Either::left(2)), Ordering::Less);
    assert_eq!(cmp.compare(&Either::<i32, i32>::right(2), &Either::right(2)), Ordering::Equal);
}

#[test]
fn comparer_agrees_with_derived_ord() {
    let values = [Either::<i32, i32>::left(3), Either::right(1), Either::left(-1), Either::right(9)];
    let cmp = EitherComparer::natural();

    for a in &values {
        for b in &values {
            assert_eq!(cmp.compare(a, b), a.cmp(b));
        }
    }
}

#[test]
fn sort_with_float_payloads() {
    let cmp = EitherComparer::with_left(FnComparer(|a: &f64, b: &f64| a.total_cmp(b)));
    let mut values = vec![
        Either::<f64, &str>::right("b"),
        Either::left(2.0),
        Either::right("a"),
        Either::left(-0.5),
    ];

    cmp.sort(&mut values);

    assert_eq!(
        values,
        vec![Either::left(-0.5), Either::left(2.0), Either::right("a"), Either::right("b")]
    );
}

#[test]
fn borrowed_comparers_delegate() {
    let inner = EitherComparer::with_right(ByKey(|s: &&str| s.len()));
    let cmp = &inner;

    assert_eq!(cmp.compare(&Either::<i32, &str>::right("zz"), &Either::right("aaa")), Ordering::Less);
    assert_eq!(inner.right_comparer().compare(&"ab", &"cd"), Ordering::Equal);
}
