use std::collections::BTreeMap;
use std::collections::BTreeSet;

use proptest::prelude::*;
use spinmc_core::{Bit, Spin};
use spinmc_model::{
    boolean_to_spin_assignment, boolean_to_spin_model, spin_to_boolean_assignment, Polynomial,
    Term,
};

#[test]
fn single_variable_term_splits_into_offset_and_bias() {
    let mut model = Polynomial::new();
    model.set_labels(["v"], 1.0).unwrap();

    let (spin_model, offset) = boolean_to_spin_model(&model);

    // x = (1 - s) / 2.
    assert_eq!(offset, 0.5);
    assert_eq!(spin_model.len(), 1);
    assert_eq!(spin_model.coefficient(&Term::new(["v"]).unwrap()), -0.5);
}

#[test]
fn pair_term_expands_over_all_non_empty_subsets() {
    let mut model = Polynomial::new();
    model.set_labels([0u32, 1], 4.0).unwrap();

    let (spin_model, offset) = boolean_to_spin_model(&model);

    assert_eq!(offset, 1.0);
    assert_eq!(spin_model.coefficient(&Term::new([0u32]).unwrap()), -1.0);
    assert_eq!(spin_model.coefficient(&Term::new([1u32]).unwrap()), -1.0);
    assert_eq!(spin_model.coefficient(&Term::new([0u32, 1]).unwrap()), 1.0);
}

#[test]
fn cancelling_expansions_are_pruned() {
    // The bias contributions of {x} and {x, y} cancel exactly when the pair
    // coefficient is minus twice the unit coefficient.
    let mut model = Polynomial::new();
    model.set_labels(["x"], 1.0).unwrap();
    model.set_labels(["x", "y"], -2.0).unwrap();

    let (spin_model, _) = boolean_to_spin_model(&model);

    assert_eq!(spin_model.coefficient(&Term::new(["x"]).unwrap()), 0.0);
    assert_ne!(spin_model.coefficient(&Term::new(["x", "y"]).unwrap()), 0.0);
}

fn boolean_pairs() -> impl Strategy<Value = Vec<(BTreeSet<u8>, f64)>> {
    prop::collection::vec(
        (
            prop::collection::btree_set(0u8..5, 1..=3),
            (-4i32..=4).prop_map(f64::from),
        ),
        1..8,
    )
}

proptest! {
    #[test]
    fn substitution_preserves_objective_values(pairs in boolean_pairs(), bits in prop::collection::vec(any::<bool>(), 5)) {
        let model = Polynomial::from_pairs(
            pairs
                .iter()
                .map(|(labels, c)| (labels.iter().copied().collect::<Vec<_>>(), *c)),
        )
        .unwrap();
        let (spin_model, offset) = boolean_to_spin_model(&model);

        let boolean_value = |label: &u8| if bits[*label as usize] { 1.0 } else { 0.0 };
        let spin_value = |label: &u8| 1.0 - 2.0 * boolean_value(label);

        let boolean_energy = model.evaluate(boolean_value);
        let spin_energy = spin_model.evaluate(spin_value) + offset;

        prop_assert!((boolean_energy - spin_energy).abs() < 1e-9);
    }
}

#[test]
fn assignment_converters_invert_each_other() {
    let spins: BTreeMap<&str, Spin> =
        [("a", Spin::Up), ("b", Spin::Down)].into_iter().collect();

    let bits = spin_to_boolean_assignment(&spins);
    assert_eq!(bits[&"a"], Bit::Zero);
    assert_eq!(bits[&"b"], Bit::One);

    assert_eq!(boolean_to_spin_assignment(&bits), spins);
}
