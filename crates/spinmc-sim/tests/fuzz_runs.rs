use std::collections::BTreeSet;

use proptest::prelude::*;
use spinmc_model::Polynomial;
use spinmc_sim::SpinSimulator;

fn model_pairs() -> impl Strategy<Value = Vec<(BTreeSet<u8>, f64)>> {
    prop::collection::vec(
        (
            prop::collection::btree_set(0u8..6, 1..=3),
            (-4i32..=4).prop_map(f64::from),
        ),
        1..10,
    )
}

fn build(pairs: &[(BTreeSet<u8>, f64)]) -> Polynomial<u8> {
    Polynomial::from_pairs(
        pairs
            .iter()
            .map(|(labels, c)| (labels.iter().copied().collect::<Vec<_>>(), *c)),
    )
    .expect("non-empty distinct label sets")
}

proptest! {
    #[test]
    fn seeded_runs_are_reproducible(pairs in model_pairs(), seed in any::<u64>(), temperature in 0.0f64..5.0) {
        let mut sim_a = SpinSimulator::new(build(&pairs), None, 3).unwrap();
        let mut sim_b = SpinSimulator::new(build(&pairs), None, 3).unwrap();

        sim_a.update(temperature, 4, Some(seed)).unwrap();
        sim_b.update(temperature, 4, Some(seed)).unwrap();

        prop_assert_eq!(sim_a.state(), sim_b.state());
        prop_assert_eq!(sim_a.get_past_states(None), sim_b.get_past_states(None));
    }

    #[test]
    fn zero_temperature_never_raises_the_energy(pairs in model_pairs(), seed in any::<u64>()) {
        let mut sim = SpinSimulator::new(build(&pairs), None, 0).unwrap();

        let mut previous = sim.energy();
        sim.update(0.0, 1, Some(seed)).unwrap();
        for _ in 0..8 {
            sim.update(0.0, 1, None).unwrap();
            let current = sim.energy();
            prop_assert!(current <= previous);
            previous = current;
        }
    }

    #[test]
    fn reset_always_recovers_the_initial_configuration(pairs in model_pairs(), seed in any::<u64>()) {
        let mut sim = SpinSimulator::new(build(&pairs), None, 2).unwrap();
        let initial = sim.state();

        sim.update(3.0, 6, Some(seed)).unwrap();
        sim.reset();

        prop_assert_eq!(sim.state(), initial);
        prop_assert_eq!(sim.get_past_states(Some(50)).len(), 1);
    }
}
