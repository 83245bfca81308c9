use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use either_rail::Either;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn exactly_one_side_is_active() {
    let left = Either::<i32, &str>::left(1);
    let right = Either::<i32, &str>::right("a");

    assert!(left.is_left() && !left.is_right());
    assert!(right.is_right() && !right.is_left());
    assert_eq!(left.as_left(), Some(&1));
    assert_eq!(left.as_right(), None);
    assert_eq!(right.as_right(), Some(&"a"));
    assert_eq!(right.as_left(), None);
}

#[test]
fn opposite_sides_are_never_equal() {
    let left = Either::<i32, i32>::left(7);
    let right = Either::<i32, i32>::right(7);

    assert_ne!(left, right);
    assert_eq!(left, Either::left(7));
    assert_eq!(right, Either::right(7));
}

#[test]
fn left_orders_before_right() {
    let mut values = vec![
        Either::<i32, i32>::right(1),
        Either::left(5),
        Either::right(0),
        Either::left(-3),
    ];
    values.sort();

    assert_eq!(values, vec![Either::left(-3), Either::left(5), Either::right(0), Either::right(1)]);
    assert!(Either::<i32, i32>::left(i32::MAX) < Either::right(i32::MIN));
}

#[test]
fn hash_uses_active_payload_only() {
    assert_eq!(hash_of(&Either::<i32, i32>::left(9)), hash_of(&9));
    assert_eq!(hash_of(&Either::<i32, i32>::right(9)), hash_of(&9));

    let set: HashSet<Either<i32, i32>> =
        [Either::left(1), Either::right(1), Either::left(1)].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn flip_is_an_involution() {
    let left = Either::<i32, &str>::left(3);
    let right = Either::<i32, &str>::right("x");

    assert_eq!(left.flip(), Either::<&str, i32>::right(3));
    assert_eq!(right.flip(), Either::<&str, i32>::left("x"));
    assert_eq!(left.flip().flip(), left);
    assert_eq!(right.flip().flip(), right);
}

#[test]
fn fold_calls_exactly_one_branch() {
    let mut left_calls = 0;
    let mut right_calls = 0;

    let out = Either::<i32, i32>::left(2).fold(
        |l| {
            left_calls += 1;
            l * 10
        },
        |r| {
            right_calls += 1;
            r
        },
    );

    assert_eq!(out, 20);
    assert_eq!((left_calls, right_calls), (1, 0));
}

#[test]
fn map_right_skips_left_without_calling_projection() {
    let mut called = false;
    let e = Either::<&str, i32>::left("e").map_right(|x| {
        called = true;
        x + 1
    });

    assert_eq!(e, Either::left("e"));
    assert!(!called);
}

#[test]
fn map_left_and_map_both_touch_only_active_side() {
    let left = Either::<i32, &str>::left(4);
    assert_eq!(left.map_left(|x| x * 2), Either::left(8));
    assert_eq!(left.map_both(|x| x + 1, str::len), Either::left(5));

    let right = Either::<i32, &str>::right("four");
    assert_eq!(right.map_left(|x| x * 2), Either::right("four"));
    assert_eq!(right.map_both(|x| x + 1, str::len), Either::right(4));
}

#[test]
fn bind_right_chains_and_propagates_left() {
    let checked_half = |x: i32| {
        if x % 2 == 0 {
            Either::right(x / 2)
        } else {
            Either::left(format!("{x} is odd"))
        }
    };

    assert_eq!(Either::right(8).bind_right(checked_half).bind_right(checked_half), Either::right(2));
    assert_eq!(
        Either::right(6).bind_right(checked_half).bind_right(checked_half),
        Either::left("3 is odd".to_string())
    );
    assert_eq!(
        Either::<String, i32>::left("early".into()).bind_right(checked_half),
        Either::left("early".to_string())
    );
}

#[test]
fn accessors_with_fallbacks() {
    let left = Either::<String, i32>::left("bad".into());
    let right = Either::<String, i32>::right(3);

    assert_eq!(left.clone().right_or(0), 0);
    assert_eq!(left.clone().right_or_default(), 0);
    assert_eq!(left.clone().right_or_else(|l| l.len() as i32), 3);
    assert_eq!(left.clone().left_or_default(), "bad");
    assert_eq!(right.clone().left_or("none".into()), "none");
    assert_eq!(right.clone().left_or_else(|r| r.to_string()), "3");
    assert_eq!(right.clone().right_or(0), 3);
    assert_eq!(right.into_right(), Some(3));
    assert_eq!(left.into_right(), None);
}

#[test]
fn try_extract_and_result_conversions() {
    assert_eq!(Either::<&str, i32>::right(5).try_extract(), Ok(5));
    assert_eq!(Either::<&str, i32>::left("no").try_extract(), Err("no"));

    let from_ok: Either<&str, i32> = Ok(1).into();
    let from_err: Either<&str, i32> = Err("boom").into();
    assert_eq!(from_ok, Either::right(1));
    assert_eq!(from_err, Either::left("boom"));

    let back: Result<i32, &str> = from_err.into();
    assert_eq!(back, Err("boom"));
}

#[test]
fn as_mut_modifies_in_place() {
    let mut e = Either::<i32, String>::right("abc".into());
    if let Either::Right(s) = e.as_mut() {
        s.push('d');
    }
    assert_eq!(e, Either::right("abcd".to_string()));

    let mut l = Either::<i32, String>::left(1);
    if let Either::Left(n) = l.as_mut() {
        *n += 1;
    }
    assert_eq!(l, Either::left(2));
}

#[test]
fn with_left_and_with_right_ignore_current_payload() {
    let e = Either::<i32, &str>::right("kept type");

    let retyped: Either<String, &str> = e.with_left("new".to_string());
    assert_eq!(retyped, Either::left("new".to_string()));

    let fresh: Either<i32, u8> = e.with_right(7u8);
    assert_eq!(fresh, Either::right(7));

    let from_left = Either::<i32, &str>::left(1).with_right(2.5f64);
    assert_eq!(from_left, Either::right(2.5));
}

#[test]
fn combine_prefers_first_right() {
    let l1 = Either::<i32, &str>::left(1);
    let l2 = Either::<i32, &str>::left(2);
    let r1 = Either::<i32, &str>::right("a");
    let r2 = Either::<i32, &str>::right("b");

    assert_eq!(r1.combine(r2), r1);
    assert_eq!(r1.combine(l1), r1);
    assert_eq!(l1.combine(r2), r2);
    assert_eq!(l1.combine(l2), l2);
}

#[test]
fn symmetric_either_extracts_either_side() {
    assert_eq!(Either::<&str, &str>::left("l").into_inner(), "l");
    assert_eq!(Either::<&str, &str>::right("r").into_inner(), "r");
    assert_eq!(*Either::<i32, i32>::left(4).as_inner(), 4);
}

#[test]
fn flatten_removes_one_level() {
    let nested = Either::<&str, Either<&str, i32>>::right(Either::right(1));
    assert_eq!(nested.flatten(), Either::right(1));

    let inner_left = Either::<&str, Either<&str, i32>>::right(Either::left("inner"));
    assert_eq!(inner_left.flatten(), Either::left("inner"));

    let outer_left = Either::<&str, Either<&str, i32>>::left("outer");
    assert_eq!(outer_left.flatten(), Either::left("outer"));
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip_is_externally_tagged() {
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Reading {
        sensor: String,
        value: Either<String, f64>,
    }

    let reading = Reading { sensor: "t1".into(), value: Either::right(21.5) };
    let json = serde_json::to_string(&reading).unwrap();
    assert_eq!(json, r#"{"sensor":"t1","value":{"Right":21.5}}"#);

    let decoded: Reading = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, reading);

    let failed: Either<String, f64> = serde_json::from_str(r#"{"Left":"offline"}"#).unwrap();
    assert_eq!(failed, Either::left("offline".to_string()));
}
