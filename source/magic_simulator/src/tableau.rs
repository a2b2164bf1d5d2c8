// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The extended stabilizer tableau.
//!
//! Beyond the code qubits, the tableau carries one ancilla qubit per magic
//! phase gate executed so far. Each ancilla remembers its phase angle; the
//! projection onto the ancilla is deferred until a probability is requested,
//! at which point it maps X ↦ cos θ, Y ↦ −sin θ and Z ↦ 0 on that qubit.

use std::f64::consts::TAU;
use std::fmt::{self, Display, Formatter};

use paulirow::DensePauli;

use crate::QubitID;

/// A stabilizer tableau over code qubits plus trailing magic ancillas.
///
/// One signed Pauli row per stabilizer generator. The generators always
/// commute pairwise; row multiplication relies on it.
#[derive(Clone, Debug)]
pub struct ExtendedStabilizerTableau {
    num_qubits: usize,
    table: Vec<DensePauli>,
    magic_phases: Vec<f64>,
}

enum Column {
    X(usize),
    Z(usize),
}

impl Column {
    fn of(&self, row: &DensePauli) -> bool {
        match *self {
            Column::X(qubit) => row.x(qubit),
            Column::Z(qubit) => row.z(qubit),
        }
    }
}

impl ExtendedStabilizerTableau {
    /// The all-zeros state on `num_qubits` code qubits.
    #[must_use]
    pub fn new(num_qubits: usize) -> Self {
        let table = (0..num_qubits)
            .map(|qubit| {
                let mut row = DensePauli::identity(num_qubits);
                row.set_z(qubit, true);
                row
            })
            .collect();
        Self {
            num_qubits,
            table,
            magic_phases: Vec::new(),
        }
    }

    #[must_use]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    #[must_use]
    pub fn num_stabilizers(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    pub fn num_magic_qubits(&self) -> usize {
        self.magic_phases.len()
    }

    #[must_use]
    pub fn magic_phases(&self) -> &[f64] {
        &self.magic_phases
    }

    pub(crate) fn row(&self, index: usize) -> &DensePauli {
        &self.table[index]
    }

    #[cfg(test)]
    pub(crate) fn from_parts(table: Vec<DensePauli>, magic_phases: Vec<f64>) -> Self {
        let num_qubits = table.first().map_or(0, DensePauli::num_qubits);
        Self {
            num_qubits,
            table,
            magic_phases,
        }
    }

    pub fn apply_x(&mut self, target: QubitID) {
        for row in &mut self.table {
            let flip = row.z(target);
            row.negate_if(flip);
        }
    }

    pub fn apply_y(&mut self, target: QubitID) {
        for row in &mut self.table {
            let flip = row.x(target) ^ row.z(target);
            row.negate_if(flip);
        }
    }

    pub fn apply_z(&mut self, target: QubitID) {
        for row in &mut self.table {
            let flip = row.x(target);
            row.negate_if(flip);
        }
    }

    pub fn apply_h(&mut self, target: QubitID) {
        for row in &mut self.table {
            let x = row.x(target);
            let z = row.z(target);
            row.negate_if(x && z);
            row.set_x(target, z);
            row.set_z(target, x);
        }
    }

    pub fn apply_s(&mut self, target: QubitID) {
        for row in &mut self.table {
            let x = row.x(target);
            let z = row.z(target);
            row.negate_if(x && z);
            row.set_z(target, z ^ x);
        }
    }

    pub fn apply_cx(&mut self, control: QubitID, target: QubitID) {
        for row in &mut self.table {
            let control_x = row.x(control);
            let control_z = row.z(control);
            let target_x = row.x(target);
            let target_z = row.z(target);
            row.negate_if(control_x && target_z && !(target_x ^ control_z));
            row.set_x(target, target_x ^ control_x);
            row.set_z(control, control_z ^ target_z);
        }
    }

    pub fn apply_cz(&mut self, a: QubitID, b: QubitID) {
        for row in &mut self.table {
            let x_a = row.x(a);
            let z_a = row.z(a);
            let x_b = row.x(b);
            let z_b = row.z(b);
            row.negate_if(x_a && x_b && (z_a ^ z_b));
            row.set_z(a, z_a ^ x_b);
            row.set_z(b, z_b ^ x_a);
        }
    }

    pub fn apply_swap(&mut self, a: QubitID, b: QubitID) {
        for row in &mut self.table {
            row.swap_qubits(a, b);
        }
    }

    /// Execute a phase gate of the given angle by gadget injection: grow the
    /// register by one ancilla stabilized by Z, entangle it with the target
    /// through CX, and remember the angle for the deferred projection.
    pub fn gadgetized_phase_gate(&mut self, target: QubitID, angle: f64) {
        let ancilla = self.num_qubits;
        self.num_qubits += 1;
        for row in &mut self.table {
            row.resize(self.num_qubits);
        }
        let mut stabilizer = DensePauli::identity(self.num_qubits);
        stabilizer.set_z(ancilla, true);
        self.table.push(stabilizer);
        self.apply_cx(target, ancilla);
        self.magic_phases.push(angle);
    }

    /// Restrict the generators to the subgroup acting as {I, Z} on the first
    /// `num_measured` qubits and as I on the remaining non-magic qubits, then
    /// split off the subgroup acting trivially on the magic region as well.
    ///
    /// Every element of that kernel evaluates to its sign under the measured
    /// projector, so a negative one proves the outcome impossible: `None`.
    /// Otherwise the kernel rank is returned and the surviving rows generate
    /// the magic-region group the summation runs over.
    pub fn apply_constraints(&mut self, num_measured: usize, num_magic: usize) -> Option<usize> {
        let first_magic = self.num_qubits - num_magic;
        let mut columns = Vec::new();
        for qubit in 0..num_measured {
            columns.push(Column::X(qubit));
        }
        for qubit in num_measured..first_magic {
            columns.push(Column::X(qubit));
            columns.push(Column::Z(qubit));
        }
        for column in &columns {
            self.eliminate_column(column);
        }

        let mut generators = Vec::new();
        for qubit in first_magic..self.num_qubits {
            for column in [Column::X(qubit), Column::Z(qubit)] {
                if let Some(pivot) = self.take_pivot(&column) {
                    generators.push(pivot);
                }
            }
        }

        let mut kernel_rank = 0;
        for row in &self.table {
            if row.sign() {
                return None;
            }
            kernel_rank += 1;
        }
        self.table = generators;
        Some(kernel_rank)
    }

    /// Drop the pivot row of `column` after clearing the column from every
    /// other row.
    fn eliminate_column(&mut self, column: &Column) {
        self.take_pivot(column);
    }

    fn take_pivot(&mut self, column: &Column) -> Option<DensePauli> {
        let pivot_index = self.table.iter().position(|row| column.of(row))?;
        let pivot = self.table.swap_remove(pivot_index);
        for row in &mut self.table {
            if column.of(row) {
                row.mul_assign(&pivot);
            }
        }
        Some(pivot)
    }

    /// Move the magic ancillas to the leading positions, in injection order,
    /// and truncate the rows to them. Call only after `apply_constraints`:
    /// the discarded columns then hold at most Z components on measured
    /// qubits, which evaluate to +1 and carry no information.
    pub fn isolate_magic_qubits(&mut self) {
        let num_magic = self.magic_phases.len();
        let first_magic = self.num_qubits - num_magic;
        for index in 0..num_magic {
            if first_magic + index != index {
                self.apply_swap(index, first_magic + index);
            }
        }
        for row in &mut self.table {
            row.resize(num_magic);
        }
        self.num_qubits = num_magic;
    }

    /// Remove every generator that is exactly ±Z on a single magic qubit,
    /// together with that qubit. Such a generator's cosets all contain a Z
    /// component on the qubit and contribute nothing to the sum, and the
    /// remaining generators commute with it, so they carry no X there and
    /// their Z components can be multiplied away.
    ///
    /// Call only after `isolate_magic_qubits`.
    pub fn apply_t_constraints(&mut self) {
        loop {
            let found = self.table.iter().enumerate().find_map(|(index, row)| {
                if row.x_bits().is_zero() && row.z_bits().weight() == 1 {
                    row.z_bits().support().next().map(|qubit| (index, qubit))
                } else {
                    None
                }
            });
            let Some((pivot_index, qubit)) = found else {
                return;
            };
            let pivot = self.table.remove(pivot_index);
            for row in &mut self.table {
                debug_assert!(!row.x(qubit));
                if row.z(qubit) {
                    row.mul_assign(&pivot);
                }
            }
            self.remove_magic_qubit(qubit);
        }
    }

    /// Drop magic qubits whose angle is a multiple of 2π within `tolerance`.
    /// The deferred projection there is ⟨+|, so a Z component zeroes a term
    /// while X acts as +1: eliminate the Z components through one pivot row
    /// (whose cosets contribute nothing) and delete the column.
    ///
    /// Call only after `isolate_magic_qubits`.
    pub fn delete_identity_magic_qubits(&mut self, tolerance: f64) {
        let mut qubit = 0;
        while qubit < self.num_qubits {
            let remainder = self.magic_phases[qubit].rem_euclid(TAU);
            if remainder.min(TAU - remainder) > tolerance {
                qubit += 1;
                continue;
            }
            if let Some(pivot_index) = self.table.iter().position(|row| row.z(qubit)) {
                let pivot = self.table.remove(pivot_index);
                for row in &mut self.table {
                    if row.z(qubit) {
                        row.mul_assign(&pivot);
                    }
                }
            }
            self.remove_magic_qubit(qubit);
        }
    }

    /// Remove rows reduced to the identity by qubit deletion. Each positive
    /// one doubles the group sum like a kernel row; a negative one proves
    /// the sum vanishes, reported as `None`.
    pub(crate) fn drain_identity_rows(&mut self) -> Option<usize> {
        if self.table.iter().any(|row| row.is_identity() && row.sign()) {
            return None;
        }
        let before = self.table.len();
        self.table.retain(|row| !row.is_identity());
        Some(before - self.table.len())
    }

    fn remove_magic_qubit(&mut self, qubit: usize) {
        for row in &mut self.table {
            row.remove_qubit(qubit);
        }
        self.magic_phases.remove(qubit);
        self.num_qubits -= 1;
    }
}

impl Display for ExtendedStabilizerTableau {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        for row in &self.table {
            writeln!(formatter, "{row}")?;
        }
        if !self.magic_phases.is_empty() {
            writeln!(formatter, "magic phases: {:?}", self.magic_phases)?;
        }
        Ok(())
    }
}
