//! Monomial ordering shared by the constraint polynomials, the elimination
//! step and the action matrix.
//!
//! The twenty monomials of total degree at most three in (x, y, z) are kept
//! in one fixed order:
//!
//! ```text
//! x³, x²y, xy², y³, x²z, xyz, y²z, xz², yz², z³,
//! x²,  xy,  y²,  xz,  yz,  z²,  x,  y,  z,  1
//! ```
//!
//! The first ten are the degree-three monomials eliminated in the Gröbner
//! step; the last ten form the quotient-ring basis the action matrix acts
//! on. The action matrix rows are written against this exact order, so the
//! table below is a contract, not a convenience.

/// Total number of monomials of degree <= 3 in three variables.
pub const NUM_MONOMIALS: usize = 20;

/// Number of degree-three monomials at the front of the ordering.
pub const NUM_LEADING: usize = 10;

/// Exponent triples (x, y, z) for the full ordering.
pub const MONOMIALS: [(u8, u8, u8); NUM_MONOMIALS] = [
    (3, 0, 0),
    (2, 1, 0),
    (1, 2, 0),
    (0, 3, 0),
    (2, 0, 1),
    (1, 1, 1),
    (0, 2, 1),
    (1, 0, 2),
    (0, 1, 2),
    (0, 0, 3),
    (2, 0, 0),
    (1, 1, 0),
    (0, 2, 0),
    (1, 0, 1),
    (0, 1, 1),
    (0, 0, 2),
    (1, 0, 0),
    (0, 1, 0),
    (0, 0, 1),
    (0, 0, 0),
];

/// Exponent triples for the quotient-ring basis (degree <= 2 tail of the
/// ordering).
pub const BASIS_MONOMIALS: [(u8, u8, u8); NUM_MONOMIALS - NUM_LEADING] = [
    (2, 0, 0),
    (1, 1, 0),
    (0, 2, 0),
    (1, 0, 1),
    (0, 1, 1),
    (0, 0, 2),
    (1, 0, 0),
    (0, 1, 0),
    (0, 0, 1),
    (0, 0, 0),
];

/// Position of the monomial x^px * y^py * z^pz in the fixed ordering.
///
/// Only exponent triples of total degree <= 3 occur in this pipeline; the
/// polynomial arithmetic is bounded so anything else is a programming error.
pub fn monomial_index(px: u8, py: u8, pz: u8) -> usize {
    match (px, py, pz) {
        (3, 0, 0) => 0,
        (2, 1, 0) => 1,
        (1, 2, 0) => 2,
        (0, 3, 0) => 3,
        (2, 0, 1) => 4,
        (1, 1, 1) => 5,
        (0, 2, 1) => 6,
        (1, 0, 2) => 7,
        (0, 1, 2) => 8,
        (0, 0, 3) => 9,
        (2, 0, 0) => 10,
        (1, 1, 0) => 11,
        (0, 2, 0) => 12,
        (1, 0, 1) => 13,
        (0, 1, 1) => 14,
        (0, 0, 2) => 15,
        (1, 0, 0) => 16,
        (0, 1, 0) => 17,
        (0, 0, 1) => 18,
        (0, 0, 0) => 19,
        _ => unreachable!("monomial of total degree above three"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_inverts_the_table() {
        for (i, &(px, py, pz)) in MONOMIALS.iter().enumerate() {
            assert_eq!(monomial_index(px, py, pz), i);
        }
    }

    #[test]
    fn basis_is_the_tail_of_the_ordering() {
        assert_eq!(&MONOMIALS[NUM_LEADING..], &BASIS_MONOMIALS);
    }

    #[test]
    fn leading_block_is_exactly_degree_three() {
        for &(px, py, pz) in &MONOMIALS[..NUM_LEADING] {
            assert_eq!(px + py + pz, 3);
        }
        for &(px, py, pz) in &BASIS_MONOMIALS {
            assert!(px + py + pz <= 2);
        }
    }
}
