//! Gröbner basis of the constraint ideal by linear elimination.
//!
//! The ten cubics have their full coefficient support on the twenty
//! monomials of the fixed ordering, so a Gröbner basis under that ordering
//! reduces to plain Gaussian elimination on the 10×20 coefficient matrix:
//! bring the leading (degree-three) block to the identity and keep the
//! trailing block. Buchberger's algorithm is not needed.

use nalgebra::SMatrix;

use crate::poly::monomial::NUM_LEADING;
use crate::poly::Cubic;

/// Eliminates the leading monomials from the constraint system.
///
/// Returns G, the 10×10 trailing block of the reduced coefficient matrix:
/// row i encodes `mᵢ + Σⱼ G[i,j]·bⱼ = 0` on the solution set, where mᵢ is
/// the i-th leading monomial and bⱼ the j-th quotient-basis monomial.
///
/// The elimination is the LU solve `lead · G = tail` with partial
/// pivoting, which leaves G independent of the constraint row order.
/// `None` means the leading block is singular: the input configuration is
/// degenerate (the solution variety is not zero-dimensional) and no
/// candidates can be extracted.
pub fn reduce(constraints: &[Cubic; 10]) -> Option<SMatrix<f64, 10, 10>> {
    let mut lead = SMatrix::<f64, 10, 10>::zeros();
    let mut tail = SMatrix::<f64, 10, 10>::zeros();
    for (i, p) in constraints.iter().enumerate() {
        for j in 0..NUM_LEADING {
            lead[(i, j)] = p[j];
            tail[(i, j)] = p[NUM_LEADING + j];
        }
    }
    lead.lu().solve(&tail)
}
