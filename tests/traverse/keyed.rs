use std::cell::Cell;
use std::collections::BTreeMap;

use either_rail::prelude::*;
use either_rail::traverse_values;

use super::parse;

#[test]
fn btree_values_project_under_same_keys() {
    let source = BTreeMap::from([("a", "1"), ("b", "22"), ("c", "333")]);

    let parsed = traverse_values(&source, |v| parse(v));

    assert_eq!(parsed, Either::right(BTreeMap::from([("a", 1), ("b", 22), ("c", 333)])));
    assert_eq!(source.len(), 3);
}

#[test]
fn btree_stops_at_first_left_in_key_order() {
    let calls = Cell::new(0);
    let source = BTreeMap::from([(1, "10"), (2, "oops"), (3, "nope"), (4, "40")]);

    let parsed = source.traverse_values(|v| {
        calls.set(calls.get() + 1);
        parse(v)
    });

    assert_eq!(parsed, Either::left("Fail oops".to_string()));
    assert_eq!(calls.get(), 2);
}

#[test]
fn empty_map_yields_empty_right() {
    let source: BTreeMap<u8, &str> = BTreeMap::new();
    assert_eq!(traverse_values(source, parse), Either::right(BTreeMap::new()));
}

#[cfg(feature = "std")]
mod hash_map {
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashMap;
    use std::hash::{BuildHasher, Hash, Hasher};

    use super::*;

    /// Header name compared without regard to ASCII case.
    #[derive(Debug, Clone, Eq)]
    struct HeaderName(String);

    impl PartialEq for HeaderName {
        fn eq(&self, other: &Self) -> bool {
            self.0.eq_ignore_ascii_case(&other.0)
        }
    }

    impl Hash for HeaderName {
        fn hash<H: Hasher>(&self, state: &mut H) {
            self.0.to_ascii_lowercase().hash(state);
        }
    }

    /// Hasher factory whose seed is observable after cloning.
    #[derive(Debug, Clone, PartialEq)]
    struct Seeded(u64);

    impl BuildHasher for Seeded {
        type Hasher = DefaultHasher;

        fn build_hasher(&self) -> DefaultHasher {
            let mut hasher = DefaultHasher::new();
            hasher.write_u64(self.0);
            hasher
        }
    }

    #[test]
    fn hash_map_output_keeps_hasher_and_key_semantics() {
        let mut headers = HashMap::with_hasher(Seeded(42));
        headers.insert(HeaderName("Content-Length".into()), "512");
        headers.insert(HeaderName("Max-Forwards".into()), "10");

        let parsed = (&headers).traverse_values(|v| parse(v));

        let Either::Right(parsed) = parsed else {
            panic!("all header values are numeric");
        };
        assert_eq!(parsed.hasher(), &Seeded(42));
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.get(&HeaderName("content-length".into())), Some(&512));
        assert_eq!(parsed.get(&HeaderName("MAX-FORWARDS".into())), Some(&10));
    }

    #[test]
    fn owned_hash_map_short_circuits() {
        let source: HashMap<&str, &str> = HashMap::from([("only", "not a number")]);

        assert_eq!(traverse_values(source, parse), Either::left("Fail not a number".to_string()));
    }

    #[test]
    fn owned_hash_map_moves_values_into_projection() {
        let source: HashMap<u32, String> = (1..=3).map(|k| (k, "x".repeat(k as usize))).collect();

        let lengths = traverse_values(source, |v: String| Either::<(), usize>::right(v.len()));

        let Either::Right(lengths) = lengths else {
            panic!("projection never fails");
        };
        assert_eq!(lengths, HashMap::from([(1, 1), (2, 2), (3, 3)]));
    }
}
