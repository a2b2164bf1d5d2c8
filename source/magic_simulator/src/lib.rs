// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! An exact simulator for Clifford + T circuits.
//!
//! Clifford gates conjugate a stabilizer tableau as usual. Each T or T† gate
//! injects a phase-gadget ancilla instead, so the tableau stays exact at the
//! cost of one extra qubit per magic gate. Measurement probabilities are
//! computed on demand by reducing a copy of the tableau and summing over the
//! stabilizer group of the surviving magic subsystem; the cost is 2^t for t
//! surviving magic qubits, and Clifford-only circuits stay polynomial.

pub mod error;
pub mod operation;
pub mod tableau;

mod compute;

use rustc_hash::FxHashMap;

use crate::compute::T_ANGLE;
use crate::operation::{GATESET, Gate, GateOp, Instruction};
use crate::tableau::ExtendedStabilizerTableau;

pub use crate::error::Error;

/// A qubit ID.
pub type QubitID = usize;

/// A Clifford + T simulator over a fixed-size code register.
pub struct Simulator {
    /// The extended tableau; grows by one qubit per magic gate.
    qreg: ExtendedStabilizerTableau,
    /// Number of addressable circuit qubits.
    num_code_qubits: usize,
    /// Saved probabilities keyed by result label.
    results: FxHashMap<String, Vec<f64>>,
}

impl Simulator {
    /// Creates a new simulator with `num_qubits` qubits in the all-zeros
    /// state.
    #[must_use]
    pub fn new(num_qubits: usize) -> Self {
        Self {
            qreg: ExtendedStabilizerTableau::new(num_qubits),
            num_code_qubits: num_qubits,
            results: FxHashMap::default(),
        }
    }

    /// Applies a single named gate.
    ///
    /// An unrecognized name fails before any state change.
    pub fn apply_gate(&mut self, operation: &GateOp) -> Result<(), Error> {
        let Some(gate) = GATESET.get(operation.name.as_str()) else {
            return Err(Error::InvalidOperation(operation.name.clone()));
        };
        log::trace!("{} {:?}", operation.name, operation.qubits);
        let qubits = &operation.qubits;
        match gate {
            Gate::Id => {}
            Gate::X => self.qreg.apply_x(qubits[0]),
            Gate::Y => self.qreg.apply_y(qubits[0]),
            Gate::Z => self.qreg.apply_z(qubits[0]),
            Gate::H => self.qreg.apply_h(qubits[0]),
            Gate::S => self.qreg.apply_s(qubits[0]),
            Gate::Sdg => {
                self.qreg.apply_z(qubits[0]);
                self.qreg.apply_s(qubits[0]);
            }
            Gate::T => self.qreg.gadgetized_phase_gate(qubits[0], T_ANGLE),
            Gate::Tdg => self.qreg.gadgetized_phase_gate(qubits[0], -T_ANGLE),
            Gate::CX => self.qreg.apply_cx(qubits[0], qubits[1]),
            Gate::CZ => self.qreg.apply_cz(qubits[0], qubits[1]),
            Gate::Swap => self.qreg.apply_swap(qubits[0], qubits[1]),
        }
        Ok(())
    }

    /// Applies a list of gates.
    pub fn apply_gates(&mut self, operations: &[GateOp]) -> Result<(), Error> {
        operations
            .iter()
            .try_for_each(|operation| self.apply_gate(operation))
    }

    /// Runs a circuit program: gates mutate the register, probability saves
    /// record into the result sink, and anything else is rejected.
    pub fn apply_ops(&mut self, instructions: &[Instruction]) -> Result<(), Error> {
        for instruction in instructions {
            match instruction {
                Instruction::Gate(operation) => self.apply_gate(operation)?,
                Instruction::SaveProbability {
                    qubits,
                    outcomes,
                    label,
                } => {
                    let probability = self.compute_probability(qubits, outcomes)?;
                    self.results
                        .entry(label.clone())
                        .or_default()
                        .push(probability);
                }
                Instruction::Barrier => {
                    return Err(Error::InvalidInstruction("barrier".to_string()));
                }
                Instruction::Reset { .. } => {
                    return Err(Error::InvalidInstruction("reset".to_string()));
                }
            }
        }
        Ok(())
    }

    /// Exact probability of reading `outcomes` when measuring `qubits` in
    /// the Z basis. Never mutates the simulator.
    ///
    /// # Panics
    ///
    /// Will panic if the slices differ in length or if `qubits` repeats a
    /// qubit or names one outside the register.
    pub fn compute_probability(
        &self,
        qubits: &[QubitID],
        outcomes: &[bool],
    ) -> Result<f64, Error> {
        compute::compute_probability(&self.qreg, self.num_code_qubits, qubits, outcomes)
    }

    /// The saved probabilities recorded so far.
    #[must_use]
    pub fn results(&self) -> &FxHashMap<String, Vec<f64>> {
        &self.results
    }

    pub fn take_results(&mut self) -> FxHashMap<String, Vec<f64>> {
        std::mem::take(&mut self.results)
    }

    /// The current extended tableau.
    #[must_use]
    pub fn state(&self) -> &ExtendedStabilizerTableau {
        &self.qreg
    }
}
