// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Exact outcome probabilities by tableau reduction and a Gray-code sum.

use std::f64::consts::FRAC_PI_4;

use paulirow::DensePauli;

use crate::QubitID;
use crate::error::Error;
use crate::tableau::ExtendedStabilizerTableau;

/// Phase pushed by the T gate; T† pushes its negation.
pub(crate) const T_ANGLE: f64 = FRAC_PI_4;

/// Angles closer than this to a reference are treated as equal, both when
/// chopping identity ancillas and when admitting the all-T fast path.
pub(crate) const PHASE_CHOP_THRESHOLD: f64 = 1e-10;

/// Past this many surviving magic qubits, the 2^t summation is slow enough
/// to warrant a log advisory. The caller owns admission control.
const MAGIC_QUBIT_WARNING_THRESHOLD: usize = 30;

fn binary_to_gray(num: u64) -> u64 {
    num ^ (num >> 1)
}

/// Exact probability of reading `outcomes` when measuring `qubits` in the
/// Z basis. Operates on a private copy of the tableau.
///
/// # Panics
///
/// Will panic if the slices differ in length or if `qubits` repeats a qubit
/// or names one outside the code register.
pub(crate) fn compute_probability(
    tableau: &ExtendedStabilizerTableau,
    num_code_qubits: usize,
    qubits: &[QubitID],
    outcomes: &[bool],
) -> Result<f64, Error> {
    assert_eq!(qubits.len(), outcomes.len());
    assert!(qubits.iter().all(|qubit| *qubit < num_code_qubits));

    let mut state = tableau.clone();
    let num_measured = qubits.len();
    let num_magic = state.num_magic_qubits();

    // Bring the measured qubits, in ascending qubit order, to the leading
    // positions. The permutation is tracked so each requested outcome
    // follows its qubit, making the result independent of argument order.
    let mut measured: Vec<(QubitID, bool)> = qubits
        .iter()
        .copied()
        .zip(outcomes.iter().copied())
        .collect();
    measured.sort_unstable_by_key(|(qubit, _)| *qubit);
    assert!(
        measured.windows(2).all(|pair| pair[0].0 != pair[1].0),
        "measured qubits must be distinct"
    );
    let mut position_of: Vec<usize> = (0..state.num_qubits()).collect();
    let mut qubit_at: Vec<usize> = (0..state.num_qubits()).collect();
    for (front, &(qubit, _)) in measured.iter().enumerate() {
        let current = position_of[qubit];
        if current != front {
            state.apply_swap(front, current);
            let displaced = qubit_at[front];
            qubit_at[front] = qubit;
            qubit_at[current] = displaced;
            position_of[qubit] = front;
            position_of[displaced] = current;
        }
    }

    // Flip each leading qubit whose requested outcome is one; afterwards the
    // question is always "all measured qubits read zero".
    for (front, &(_, outcome)) in measured.iter().enumerate() {
        if outcome {
            state.apply_x(front);
        }
    }

    let Some(kernel_rank) = state.apply_constraints(num_measured, num_magic) else {
        log::debug!("outcome is stabilizer-inconsistent, probability 0");
        return Ok(0.0);
    };
    state.isolate_magic_qubits();
    state.apply_t_constraints();
    state.delete_identity_magic_qubits(PHASE_CHOP_THRESHOLD);

    // Ancilla deletion can strip a generator down to ±identity; fold those
    // into the scalar factor the way kernel rows were.
    let Some(identity_rank) = state.drain_identity_rows() else {
        log::debug!("generator reduced to negative identity, probability 0");
        return Ok(0.0);
    };

    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    let scale = 2_f64.powi((kernel_rank + identity_rank) as i32 - num_measured as i32);
    if state.num_stabilizers() == 0 {
        return Ok(scale);
    }
    if let Some(&angle) = state
        .magic_phases()
        .iter()
        .find(|&&angle| (angle - T_ANGLE).abs() > PHASE_CHOP_THRESHOLD)
    {
        return Err(Error::UnsupportedMagicPhase(angle));
    }
    if state.num_qubits() > MAGIC_QUBIT_WARNING_THRESHOLD {
        log::warn!(
            "summing over {} magic qubits, expect 2^{} work",
            state.num_qubits(),
            state.num_stabilizers()
        );
    }
    log::debug!(
        "reduced to {} generators on {} magic qubits, scale {scale}",
        state.num_stabilizers(),
        state.num_qubits()
    );
    Ok(scale * sum_all_phases_t(&state))
}

/// Sum ⟨A|g|A⟩ over the group generated by the rows, all ancilla angles
/// being the T angle. Each T-state expectation contributes 1/√2 per X or Y
/// component, zero for any bare Z, and a sign from the Y count and the
/// row sign.
///
/// Subsets are enumerated in Gray-code order so each step updates the
/// running row by a single generator multiplication.
pub(crate) fn sum_all_phases_t(state: &ExtendedStabilizerTableau) -> f64 {
    let num_generators = state.num_stabilizers();
    assert!(num_generators < 64);
    let full_mask = if num_generators == 0 {
        0
    } else {
        (1_u64 << num_generators) - 1
    };
    if full_mask == 0 {
        return 1.0;
    }

    // The empty subset contributes the identity's expectation.
    let mut accumulator = 1.0;
    let mut row = DensePauli::identity(state.num_qubits());
    for mask in 1..=full_mask {
        let flipped = (binary_to_gray(mask) ^ binary_to_gray(mask - 1)).trailing_zeros() as usize;
        row.mul_assign(state.row(flipped));
        accumulator += term_value(&row);
    }
    accumulator
}

fn term_value(row: &DensePauli) -> f64 {
    if row.has_z_only() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let magnitude = 0.5_f64.powf(row.x_weight() as f64 / 2.0);
    if (usize::from(row.sign()) + row.y_weight()) % 2 == 0 {
        magnitude
    } else {
        -magnitude
    }
}
