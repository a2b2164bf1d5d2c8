use itertools::Itertools;
use paulirow::{BitVec, DensePauli, phase_exponent};

fn pauli_from_str(text: &str) -> DensePauli {
    let mut characters = text.chars();
    let sign = match characters.next() {
        Some('+') => false,
        Some('-') => true,
        _ => panic!("pauli string must start with a sign"),
    };
    let body = characters.collect_vec();
    let mut pauli = DensePauli::identity(body.len());
    if sign {
        pauli.negate();
    }
    for (qubit, character) in body.iter().enumerate() {
        match character {
            'I' => {}
            'X' => pauli.set_x(qubit, true),
            'Z' => pauli.set_z(qubit, true),
            'Y' => {
                pauli.set_x(qubit, true);
                pauli.set_z(qubit, true);
            }
            _ => panic!("unexpected pauli character"),
        }
    }
    pauli
}

#[test]
fn bitvec_index_round_trip() {
    let mut bits = BitVec::zeros(130);
    assert!(bits.is_zero());
    bits.assign_index(0, true);
    bits.assign_index(64, true);
    bits.assign_index(129, true);
    assert!(bits.index(64));
    assert_eq!(bits.weight(), 3);
    assert!(bits.parity());
    assert_eq!(bits.support().collect_vec(), vec![0, 64, 129]);
    bits.negate_index(64);
    assert!(!bits.index(64));
    assert_eq!(bits.weight(), 2);
    assert!(!bits.parity());
}

#[test]
fn bitvec_xor_and_weights() {
    let mut a = BitVec::zeros(70);
    let mut b = BitVec::zeros(70);
    a.assign_index(1, true);
    a.assign_index(65, true);
    b.assign_index(1, true);
    b.assign_index(2, true);
    assert_eq!(a.and_weight(&b), 1);
    assert!(a.intersects_complement(&b));
    a.bitxor_assign(&b);
    assert_eq!(a.support().collect_vec(), vec![2, 65]);
}

#[test]
fn bitvec_support_skips_empty_words() {
    let empty = BitVec::zeros(200);
    assert_eq!(empty.support().count(), 0);

    let mut bits = BitVec::zeros(200);
    bits.assign_index(130, true);
    bits.assign_index(199, true);
    assert_eq!(bits.support().collect_vec(), vec![130, 199]);
}

#[test]
fn bitvec_resize_clears_dropped_bits() {
    let mut bits = BitVec::zeros(10);
    bits.assign_index(9, true);
    bits.resize(5);
    assert_eq!(bits.len(), 5);
    assert!(bits.is_zero());
    bits.resize(10);
    assert!(!bits.index(9));
}

#[test]
fn bitvec_remove_shifts_across_words() {
    let mut bits = BitVec::zeros(130);
    bits.assign_index(0, true);
    bits.assign_index(63, true);
    bits.assign_index(64, true);
    bits.assign_index(129, true);
    bits.remove(63);
    assert_eq!(bits.len(), 129);
    assert_eq!(bits.support().collect_vec(), vec![0, 63, 128]);
    bits.remove(0);
    assert_eq!(bits.support().collect_vec(), vec![62, 127]);
}

#[test]
fn phase_exponent_single_qubit_table() {
    let cases = [
        ("+X", "+Z", 3),
        ("+Z", "+X", 1),
        ("+X", "+Y", 1),
        ("+Y", "+X", 3),
        ("+Y", "+Z", 1),
        ("+Z", "+Y", 3),
        ("+X", "+X", 0),
        ("+Y", "+Y", 0),
        ("+Z", "+Z", 0),
        ("+I", "+Y", 0),
    ];
    for (a, b, expected) in cases {
        assert_eq!(
            phase_exponent(&pauli_from_str(a), &pauli_from_str(b)),
            expected,
            "{a} * {b}"
        );
    }
}

#[test]
fn phase_exponent_is_even_for_commuting_rows() {
    let a = pauli_from_str("+XXI");
    let b = pauli_from_str("+ZZY");
    assert_eq!(phase_exponent(&a, &b) % 2, 0);
}

#[test]
fn mul_assign_combines_commuting_rows() {
    // XX * ZZ = -YY in the Hermitian convention.
    let mut a = pauli_from_str("+XX");
    a.mul_assign(&pauli_from_str("+ZZ"));
    assert_eq!(a.to_string(), "-YY");

    // YY * ZZ = -XX, and the rhs sign folds in.
    let mut b = pauli_from_str("+YY");
    b.mul_assign(&pauli_from_str("-ZZ"));
    assert_eq!(b.to_string(), "+XX");

    // Multiplying by itself cancels to the identity.
    let mut c = pauli_from_str("-XYZ");
    let copy = c.clone();
    c.mul_assign(&copy);
    assert!(c.is_identity());
    assert!(!c.sign());
}

#[test]
fn weight_helpers_classify_components() {
    let pauli = pauli_from_str("+XYZI");
    assert_eq!(pauli.x_weight(), 2);
    assert_eq!(pauli.y_weight(), 1);
    assert!(pauli.has_z_only());

    let no_bare_z = pauli_from_str("+XYI");
    assert!(!no_bare_z.has_z_only());
}

#[test]
fn qubit_editing_preserves_encoding() {
    let mut pauli = pauli_from_str("+XIZ");
    pauli.swap_qubits(0, 2);
    assert_eq!(pauli.to_string(), "+ZIX");
    pauli.remove_qubit(1);
    assert_eq!(pauli.to_string(), "+ZX");
    pauli.resize(4);
    assert_eq!(pauli.to_string(), "+ZXII");
}
