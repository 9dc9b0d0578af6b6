use std::collections::BTreeMap;

use spinmc_model::Polynomial;
use spinmc_sim::SpinSimulator;

fn small_model() -> Polynomial<u32> {
    let mut model = Polynomial::new();
    model.set_labels([0u32, 1], -1.0).unwrap();
    model.set_labels([1u32, 2], 1.0).unwrap();
    model.set_labels([0u32], 0.5).unwrap();
    model
}

#[test]
fn zero_memory_always_yields_only_the_current_state() {
    let mut sim = SpinSimulator::new(small_model(), None, 0).unwrap();
    for round in 0..5 {
        sim.update(2.0, 3, Some(round)).unwrap();
        let states = sim.get_past_states(None);
        assert_eq!(states.len(), 1);
        assert_eq!(states[0], sim.state());
    }
}

#[test]
fn history_keeps_the_most_recent_snapshots_oldest_first() {
    let mut sim = SpinSimulator::new(small_model(), None, 3).unwrap();

    let mut pre_sweep_states: Vec<BTreeMap<u32, i8>> = Vec::new();
    for round in 0..5 {
        pre_sweep_states.push(sim.state());
        sim.update(4.0, 1, Some(round * 31 + 7)).unwrap();
    }

    // Memory of 3 means the buffer holds the pre-sweep states of the last
    // three updates; an unbounded request returns them all plus the current
    // state, oldest first.
    let all = sim.get_past_states(Some(100));
    assert_eq!(all.len(), 4);
    assert_eq!(all[0], pre_sweep_states[2]);
    assert_eq!(all[1], pre_sweep_states[3]);
    assert_eq!(all[2], pre_sweep_states[4]);
    assert_eq!(all[3], sim.state());

    // The default request is bounded by the memory capacity.
    let defaulted = sim.get_past_states(None);
    assert_eq!(defaulted.len(), 3);
    assert_eq!(defaulted[0], pre_sweep_states[3]);
    assert_eq!(defaulted[1], pre_sweep_states[4]);
    assert_eq!(defaulted[2], sim.state());
}

#[test]
fn requesting_one_state_skips_the_history() {
    let mut sim = SpinSimulator::new(small_model(), None, 5).unwrap();
    sim.update(3.0, 4, Some(1)).unwrap();

    let states = sim.get_past_states(Some(1));
    assert_eq!(states, vec![sim.state()]);
}

#[test]
fn reset_restores_construction_state_and_clears_history() {
    let start: BTreeMap<u32, i64> = [(0, -1), (1, 1), (2, -1)].into_iter().collect();
    let mut sim = SpinSimulator::new(small_model(), Some(&start), 4).unwrap();
    let initial = sim.state();
    let initial_energy = sim.energy();

    sim.update(5.0, 10, Some(8)).unwrap();
    sim.reset();

    assert_eq!(sim.state(), initial);
    assert_eq!(sim.initial_state(), initial);
    assert_eq!(sim.energy(), initial_energy);
    assert_eq!(sim.get_past_states(Some(50)).len(), 1);

    // Resetting an already reset simulator changes nothing.
    sim.reset();
    assert_eq!(sim.state(), initial);
    assert_eq!(sim.get_past_states(Some(50)).len(), 1);
}

#[test]
fn returned_states_are_independent_copies() {
    let mut sim = SpinSimulator::new(small_model(), None, 2).unwrap();
    sim.update(1.0, 2, Some(4)).unwrap();

    let mut exported = sim.get_past_states(None);
    let reference = sim.state();
    for state in &mut exported {
        for value in state.values_mut() {
            *value = 0;
        }
    }

    assert_eq!(sim.state(), reference);
}
