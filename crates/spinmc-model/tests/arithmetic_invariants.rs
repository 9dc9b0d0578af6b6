use std::collections::BTreeSet;

use proptest::prelude::*;
use spinmc_model::Polynomial;

fn pair_list() -> impl Strategy<Value = Vec<(BTreeSet<u8>, f64)>> {
    prop::collection::vec(
        (
            prop::collection::btree_set(0u8..6, 1..=3),
            (-5i32..=5).prop_map(f64::from),
        ),
        0..12,
    )
}

fn build(pairs: &[(BTreeSet<u8>, f64)]) -> Polynomial<u8> {
    Polynomial::from_pairs(
        pairs
            .iter()
            .map(|(labels, coefficient)| (labels.iter().copied().collect::<Vec<_>>(), *coefficient)),
    )
    .expect("non-empty distinct label sets")
}

fn assert_invariants(model: &Polynomial<u8>) {
    for (term, coefficient) in model.iter() {
        assert_ne!(coefficient, 0.0);
        assert!(!term.labels().is_empty());
        assert!(term.labels().windows(2).all(|pair| pair[0] < pair[1]));
    }
}

proptest! {
    #[test]
    fn construction_preserves_invariants(pairs in pair_list()) {
        let model = build(&pairs);
        assert_invariants(&model);
    }

    #[test]
    fn arithmetic_preserves_invariants(lhs in pair_list(), rhs in pair_list(), scale in -4i32..=4) {
        let a = build(&lhs);
        let b = build(&rhs);

        let sum = a.clone() + b.clone();
        let difference = a.clone() - b.clone();
        let scaled = a.clone() * f64::from(scale);
        let divided = b.clone() / 2.0;

        for model in [&sum, &difference, &scaled, &divided] {
            assert_invariants(model);
        }

        // Adding a plain pair collection behaves identically to adding the
        // model built from it.
        let mut via_pairs = a.clone();
        via_pairs
            .merge_pairs(rhs.iter().map(|(labels, coefficient)| {
                (labels.iter().copied().collect::<Vec<_>>(), *coefficient)
            }))
            .unwrap();
        prop_assert_eq!(via_pairs, sum);
    }

    #[test]
    fn subtracting_a_model_from_itself_empties_it(pairs in pair_list()) {
        let model = build(&pairs);
        let difference = model.clone() - model;
        prop_assert!(difference.is_empty());
    }

    #[test]
    fn scaling_by_zero_empties_the_model(pairs in pair_list()) {
        let model = build(&pairs);
        prop_assert!((model * 0.0).is_empty());
    }

    #[test]
    fn evaluation_matches_manual_summation(pairs in pair_list(), flips in prop::collection::vec(any::<bool>(), 6)) {
        let model = build(&pairs);
        let assignment = |label: &u8| if flips[*label as usize] { -1.0 } else { 1.0 };

        let manual: f64 = model
            .iter()
            .map(|(term, coefficient)| {
                coefficient * term.labels().iter().map(&assignment).product::<f64>()
            })
            .sum();

        prop_assert_eq!(model.evaluate(assignment), manual);
    }
}
