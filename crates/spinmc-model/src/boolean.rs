//! Boolean-domain helpers: assignment mapping and the algebraic substitution
//! of a Boolean model into the bipolar domain.

use std::collections::BTreeMap;

use spinmc_core::{Bit, Label, Spin};

use crate::poly::Polynomial;
use crate::term::Term;

/// Substitutes every Boolean variable `b` by `(1 - s) / 2` and expands.
///
/// A Boolean term of arity `k` contributes `coefficient * (-1)^|S| / 2^k` to
/// the bipolar term on every non-empty subset `S` of its labels; the
/// contributions are merged by coefficient summation under the container's
/// normal invariants. The empty subset accumulates into the returned constant
/// offset, which shifts every configuration's energy equally and never
/// affects a flip delta.
pub fn boolean_to_spin_model<V: Label>(model: &Polynomial<V>) -> (Polynomial<V>, f64) {
    let mut spin_model = Polynomial::new();
    let mut offset = 0.0;
    for (term, coefficient) in model.iter() {
        let labels = term.labels();
        let scale = coefficient / 2f64.powi(labels.len() as i32);
        for mask in 0u64..(1u64 << labels.len()) {
            let sign = if mask.count_ones() % 2 == 1 { -1.0 } else { 1.0 };
            if mask == 0 {
                offset += sign * scale;
                continue;
            }
            let subset: Vec<V> = labels
                .iter()
                .enumerate()
                .filter(|(position, _)| mask >> position & 1 == 1)
                .map(|(_, label)| label.clone())
                .collect();
            // A subset of a term's sorted distinct labels is itself sorted
            // and distinct.
            spin_model.accumulate(Term::from_sorted_labels(subset), sign * scale);
        }
    }
    (spin_model, offset)
}

/// Maps a bipolar assignment to its Boolean counterpart, `b = (1 - s) / 2`.
pub fn spin_to_boolean_assignment<V: Label>(state: &BTreeMap<V, Spin>) -> BTreeMap<V, Bit> {
    state
        .iter()
        .map(|(label, &spin)| (label.clone(), Bit::from(spin)))
        .collect()
}

/// Maps a Boolean assignment to its bipolar counterpart, `s = 1 - 2b`.
pub fn boolean_to_spin_assignment<V: Label>(state: &BTreeMap<V, Bit>) -> BTreeMap<V, Spin> {
    state
        .iter()
        .map(|(label, &bit)| (label.clone(), Spin::from(bit)))
        .collect()
}
