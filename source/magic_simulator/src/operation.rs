// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Circuit instructions and the supported gate set.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use smallvec::{SmallVec, smallvec};

use crate::QubitID;

/// The gates this method executes natively: the Clifford generators plus the
/// two magic phase gates, which are realized by gadget injection rather than
/// tableau conjugation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Gate {
    Id,
    X,
    Y,
    Z,
    H,
    S,
    Sdg,
    T,
    Tdg,
    CX,
    CZ,
    Swap,
}

/// Gate-name lookup table, including the `delay` and upper-case two-qubit
/// aliases accepted by circuit frontends.
pub(crate) static GATESET: LazyLock<FxHashMap<&'static str, Gate>> = LazyLock::new(|| {
    FxHashMap::from_iter([
        ("delay", Gate::Id),
        ("id", Gate::Id),
        ("x", Gate::X),
        ("y", Gate::Y),
        ("z", Gate::Z),
        ("h", Gate::H),
        ("s", Gate::S),
        ("sdg", Gate::Sdg),
        ("t", Gate::T),
        ("tdg", Gate::Tdg),
        ("cx", Gate::CX),
        ("CX", Gate::CX),
        ("cz", Gate::CZ),
        ("CZ", Gate::CZ),
        ("swap", Gate::Swap),
    ])
});

/// A named gate application. The name is resolved against [`GATESET`] at
/// execution time so that an unrecognized gate fails before any state change.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GateOp {
    pub name: String,
    pub qubits: SmallVec<[QubitID; 2]>,
}

impl GateOp {
    #[must_use]
    pub fn new(name: &str, qubits: &[QubitID]) -> Self {
        Self {
            name: name.to_string(),
            qubits: SmallVec::from_slice(qubits),
        }
    }
}

/// One entry of a circuit program.
#[derive(Clone, Debug, PartialEq)]
pub enum Instruction {
    Gate(GateOp),
    /// Record the exact probability of the given measurement outcome under
    /// the result label.
    SaveProbability {
        qubits: Vec<QubitID>,
        outcomes: Vec<bool>,
        label: String,
    },
    /// Accepted by other engines; rejected by this one.
    Barrier,
    /// Accepted by other engines; rejected by this one.
    Reset { target: QubitID },
}

impl From<GateOp> for Instruction {
    fn from(gate: GateOp) -> Self {
        Instruction::Gate(gate)
    }
}

fn single(name: &str, target: QubitID) -> GateOp {
    GateOp {
        name: name.to_string(),
        qubits: smallvec![target],
    }
}

fn pair(name: &str, control: QubitID, target: QubitID) -> GateOp {
    GateOp {
        name: name.to_string(),
        qubits: smallvec![control, target],
    }
}

#[must_use]
pub fn id(target: QubitID) -> GateOp {
    single("id", target)
}

#[must_use]
pub fn x(target: QubitID) -> GateOp {
    single("x", target)
}

#[must_use]
pub fn y(target: QubitID) -> GateOp {
    single("y", target)
}

#[must_use]
pub fn z(target: QubitID) -> GateOp {
    single("z", target)
}

#[must_use]
pub fn h(target: QubitID) -> GateOp {
    single("h", target)
}

#[must_use]
pub fn s(target: QubitID) -> GateOp {
    single("s", target)
}

#[must_use]
pub fn sdg(target: QubitID) -> GateOp {
    single("sdg", target)
}

#[must_use]
pub fn t(target: QubitID) -> GateOp {
    single("t", target)
}

#[must_use]
pub fn tdg(target: QubitID) -> GateOp {
    single("tdg", target)
}

#[must_use]
pub fn cx(control: QubitID, target: QubitID) -> GateOp {
    pair("cx", control, target)
}

#[must_use]
pub fn cz(control: QubitID, target: QubitID) -> GateOp {
    pair("cz", control, target)
}

#[must_use]
pub fn swap(a: QubitID, b: QubitID) -> GateOp {
    pair("swap", a, b)
}

#[must_use]
pub fn save_probability(qubits: &[QubitID], outcomes: &[bool], label: &str) -> Instruction {
    Instruction::SaveProbability {
        qubits: qubits.to_vec(),
        outcomes: outcomes.to_vec(),
        label: label.to_string(),
    }
}
