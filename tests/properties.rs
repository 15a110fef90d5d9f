//! Property-based tests for predicate laws

use proptest::prelude::*;
use std::collections::HashSet;
use tributary::predicate::*;

fn threshold_pair() -> impl Strategy<Value = (i32, i32)> {
    (-1000i32..1000, -1000i32..1000)
}

proptest! {
    #[test]
    fn prop_de_morgan_and((a, b) in threshold_pair(), x in -2000i32..2000) {
        let negated_and = greater_than(a).and(less_than(b)).not();
        let or_of_negations = greater_than(a).not().or(less_than(b).not());
        prop_assert_eq!(negated_and.test(&x), or_of_negations.test(&x));
    }

    #[test]
    fn prop_de_morgan_or((a, b) in threshold_pair(), x in -2000i32..2000) {
        let negated_or = not(greater_than(a).or(less_than(b)));
        let and_of_negations = not(greater_than(a)).and(not(less_than(b)));
        prop_assert_eq!(negated_or.test(&x), and_of_negations.test(&x));
    }

    #[test]
    fn prop_double_negation(a in any::<i32>(), x in any::<i32>()) {
        prop_assert_eq!(not(not(at_least(a))).test(&x), at_least(a).test(&x));
    }

    #[test]
    fn prop_xor_of_one_is_identity(a in any::<i32>(), x in any::<i32>()) {
        prop_assert_eq!(xor([greater_than(a)]).test(&x), greater_than(a).test(&x));
    }

    #[test]
    fn prop_xor_of_same_twice_is_false(a in any::<i32>(), x in any::<i32>()) {
        prop_assert!(!xor([greater_than(a), greater_than(a)]).test(&x));
    }

    #[test]
    fn prop_xor_is_parity(flags in prop::collection::vec(any::<bool>(), 0..16)) {
        let predicates: Vec<Predicate<()>> = flags
            .iter()
            .map(|&flag| Predicate::of(move |_: &()| flag))
            .collect();
        let passed = flags.iter().filter(|&&flag| flag).count();
        prop_assert_eq!(xor(predicates).test(&()), passed % 2 == 1);
    }

    #[test]
    fn prop_within_bound_is_inclusive(lo in -100i32..100, hi in -100i32..100, x in -150i32..150) {
        prop_assert_eq!(within_bound(lo, hi).test(&x), lo <= x && x <= hi);
    }

    #[test]
    fn prop_quantifiers_match_iterators(values in prop::collection::vec(-50i32..50, 0..40)) {
        prop_assert_eq!(every_item(positive::<i32>()).test(&values), values.iter().all(|v| *v > 0));
        prop_assert_eq!(any_item(positive::<i32>()).test(&values), values.iter().any(|v| *v > 0));
        prop_assert_eq!(none_item(positive::<i32>()).test(&values), !values.iter().any(|v| *v > 0));
    }

    #[test]
    fn prop_count_items_matches_filter(values in prop::collection::vec(any::<i32>(), 0..40)) {
        let expected = values.iter().filter(|v| *v % 2 == 0).count();
        prop_assert!(count_items(even::<i32>(), equal_to(expected)).test(&values));
        prop_assert!(at_least_items(even::<i32>(), expected).test(&values));
        prop_assert!(at_most_items(even::<i32>(), expected).test(&values));
        prop_assert!(!at_least_items(even::<i32>(), expected + 1).test(&values));
    }

    #[test]
    fn prop_distinct_matches_set_cardinality(values in prop::collection::vec(0u8..20, 0..20)) {
        let unique: HashSet<_> = values.iter().collect();
        prop_assert_eq!(has_distinct_items::<u8>().test(&values), unique.len() == values.len());
    }

    #[test]
    fn prop_reduce_never_mutates_input(values in prop::collection::vec(-100i64..100, 0..30)) {
        let before = values.clone();
        let total: i64 = values.iter().sum();

        let seeded = reduce_items(equal_to(total), |acc: i64, x: &i64, _, _| acc + x, 0);
        prop_assert!(seeded.test(&values));
        prop_assert_eq!(&values, &before);

        let seedless = reduce_items_from_first(equal_to(total), |acc: i64, x: &i64, _, _| acc + x);
        match seedless.try_test(&values) {
            Ok(matched) => prop_assert!(matched),
            Err(err) => prop_assert!(values.is_empty() && err.is_empty_sequence()),
        }
        prop_assert_eq!(&values, &before);
    }

    #[test]
    fn prop_count_of_matches_manual_count(a in any::<i32>(), b in any::<i32>(), x in any::<i32>()) {
        let checks = [greater_than(a), less_than(b), even::<i32>()];
        let expected = checks.iter().filter(|p| p.test(&x)).count();
        prop_assert!(count_of(checks.clone(), equal_to(expected)).test(&x));
        prop_assert_eq!(one_of(checks).test(&x), expected == 1);
    }
}
