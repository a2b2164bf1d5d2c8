// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Signed dense Pauli operators.

use std::fmt::{self, Display, Formatter, Write};

use crate::bits::BitVec;

/// A Hermitian Pauli operator with an overall ± sign.
///
/// Qubit `q` carries I, X, Z or Y according to the (x, z) bit pair at `q`,
/// with Y meaning both bits set (Y = iXZ). `sign == true` is the negated
/// operator.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct DensePauli {
    x_bits: BitVec,
    z_bits: BitVec,
    sign: bool,
}

impl DensePauli {
    #[must_use]
    pub fn identity(num_qubits: usize) -> Self {
        Self {
            x_bits: BitVec::zeros(num_qubits),
            z_bits: BitVec::zeros(num_qubits),
            sign: false,
        }
    }

    #[must_use]
    pub fn num_qubits(&self) -> usize {
        self.x_bits.len()
    }

    #[must_use]
    pub fn x(&self, qubit: usize) -> bool {
        self.x_bits.index(qubit)
    }

    #[must_use]
    pub fn z(&self, qubit: usize) -> bool {
        self.z_bits.index(qubit)
    }

    pub fn set_x(&mut self, qubit: usize, to: bool) {
        self.x_bits.assign_index(qubit, to);
    }

    pub fn set_z(&mut self, qubit: usize, to: bool) {
        self.z_bits.assign_index(qubit, to);
    }

    #[must_use]
    pub fn x_bits(&self) -> &BitVec {
        &self.x_bits
    }

    #[must_use]
    pub fn z_bits(&self) -> &BitVec {
        &self.z_bits
    }

    #[must_use]
    pub fn sign(&self) -> bool {
        self.sign
    }

    pub fn negate(&mut self) {
        self.sign = !self.sign;
    }

    pub fn negate_if(&mut self, condition: bool) {
        self.sign ^= condition;
    }

    /// True on the identity operator regardless of sign.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.x_bits.is_zero() && self.z_bits.is_zero()
    }

    /// Number of qubits carrying X or Y.
    #[must_use]
    pub fn x_weight(&self) -> usize {
        self.x_bits.weight()
    }

    /// Number of qubits carrying Y.
    #[must_use]
    pub fn y_weight(&self) -> usize {
        self.x_bits.and_weight(&self.z_bits)
    }

    /// True if some qubit carries Z with no X component.
    #[must_use]
    pub fn has_z_only(&self) -> bool {
        self.z_bits.intersects_complement(&self.x_bits)
    }

    pub fn swap_qubits(&mut self, a: usize, b: usize) {
        self.x_bits.swap(a, b);
        self.z_bits.swap(a, b);
    }

    pub fn resize(&mut self, num_qubits: usize) {
        self.x_bits.resize(num_qubits);
        self.z_bits.resize(num_qubits);
    }

    pub fn remove_qubit(&mut self, qubit: usize) {
        self.x_bits.remove(qubit);
        self.z_bits.remove(qubit);
    }

    /// In-place product with a commuting operator.
    ///
    /// The bit pairs combine by symmetric difference; the sign picks up the
    /// rhs sign and the imaginary-unit exponent of the product, which is even
    /// exactly when the operands commute.
    pub fn mul_assign(&mut self, rhs: &Self) {
        let exponent = phase_exponent(self, rhs);
        debug_assert!(exponent % 2 == 0);
        self.sign ^= rhs.sign ^ (exponent / 2 == 1);
        self.x_bits.bitxor_assign(&rhs.x_bits);
        self.z_bits.bitxor_assign(&rhs.z_bits);
    }
}

/// Exponent of i in the product `a · b = i^g (a XOR b)`, ignoring signs.
///
/// With operators written as `i^(x·z) X^x Z^z`, each qubit contributes
/// `x1·z1 + x2·z2 + 2·z1·x2 − x3·z3` to `g` (subscript 3 is the XOR). The
/// word-parallel form below evaluates the same sum a word at a time.
///
/// # Panics
///
/// Will panic if the operators act on different qubit counts.
#[must_use]
pub fn phase_exponent(a: &DensePauli, b: &DensePauli) -> u8 {
    assert_eq!(a.num_qubits(), b.num_qubits());
    let mut raise: i64 = 0;
    let mut lower: i64 = 0;
    let words = a
        .x_bits
        .words()
        .iter()
        .zip(a.z_bits.words())
        .zip(b.x_bits.words())
        .zip(b.z_bits.words());
    for (((&x1, &z1), &x2), &z2) in words {
        let into_y = z1 & x2;
        let out_of_y = x1 & z2;
        raise += i64::from(into_y.count_ones() + 2 * (into_y & (z2 ^ x1)).count_ones());
        lower += i64::from(out_of_y.count_ones() + 2 * (out_of_y & (z1 ^ x2)).count_ones());
    }
    ((raise - lower).rem_euclid(4)) as u8
}

impl Display for DensePauli {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_char(if self.sign { '-' } else { '+' })?;
        for qubit in 0..self.num_qubits() {
            let character = match (self.x(qubit), self.z(qubit)) {
                (false, false) => 'I',
                (true, false) => 'X',
                (false, true) => 'Z',
                (true, true) => 'Y',
            };
            formatter.write_char(character)?;
        }
        Ok(())
    }
}
