// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use thiserror::Error;

/// Failures surfaced while running a circuit or evaluating a probability.
///
/// A probability of exactly zero is a result, never an error.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// A gate name outside the supported Clifford + T/T† set.
    #[error("unrecognized gate: {0}")]
    InvalidOperation(String),

    /// An instruction kind this simulation method cannot execute.
    #[error("instruction not supported by this method: {0}")]
    InvalidInstruction(String),

    /// A probability query left a residual magic phase that is not the
    /// canonical T angle, and only the all-T summation is implemented.
    #[error("residual magic phase {0} is not the T angle")]
    UnsupportedMagicPhase(f64),
}
