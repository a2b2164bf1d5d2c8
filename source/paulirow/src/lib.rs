// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Signed Pauli-row algebra over growable bit vectors.
//!
//! A Pauli operator on `n` qubits is stored as a pair of bit vectors (the X
//! and Z components) plus a sign bit, with Y encoded as both bits set. This
//! is the row representation used by stabilizer tableaux: conjugation by a
//! Clifford gate touches a constant number of columns per row, and row
//! multiplication is a word-parallel symmetric difference with a mod-4
//! phase-exponent correction.

pub mod bits;
pub mod pauli;

pub use bits::BitVec;
pub use pauli::{DensePauli, phase_exponent};
