//! Cubic constraint polynomials on the parametric essential matrix.
//!
//! Substituting E(x, y, z) = x·B₀ + y·B₁ + z·B₂ + B₃ into det(E) = 0 and
//! into the nine entries of 2·E·Eᵀ·E − trace(E·Eᵀ)·E = 0 yields ten cubic
//! polynomials in (x, y, z). Entry k of the 9-vector is taken as the
//! (k / 3, k mod 3) entry of E here; the polynomial system is unchanged
//! under the transposed reading, so the convention is fixed once, at the
//! final reshape.

use num_traits::Zero;

use crate::nullspace::EpipolarBasis;
use crate::poly::{Cubic, Linear, Quadratic};

/// The ten constraint polynomials, in order: determinant first, then the
/// nine entries of the singular-value constraint.
pub fn constraint_polynomials(basis: &EpipolarBasis) -> [Cubic; 10] {
    let e: [Linear; 9] = core::array::from_fn(|k| Linear {
        x: basis.vector(0)[k],
        y: basis.vector(1)[k],
        z: basis.vector(2)[k],
        w: basis.vector(3)[k],
    });

    let det = e[4] * (e[0] * e[8] - e[6] * e[2])
        + e[5] * (e[1] * e[6] - e[0] * e[7])
        + e[3] * (e[2] * e[7] - e[1] * e[8]);

    // trace(E·Eᵀ) = Σ Eₖ²
    let mut trace = Quadratic::zero();
    for entry in &e {
        trace = trace + *entry * *entry;
    }

    let mut constraints = [Cubic::zero(); 10];
    constraints[0] = det;
    for r in 0..3 {
        for c in 0..3 {
            // entry (r, c) of 2·E·Eᵀ·E − trace(E·Eᵀ)·E
            let mut entry = -(e[3 * r + c] * trace);
            for m in 0..3 {
                let row_dot = (e[3 * r] * e[3 * m]
                    + e[3 * r + 1] * e[3 * m + 1]
                    + e[3 * r + 2] * e[3 * m + 2])
                    * 2.0;
                entry = entry + e[3 * m + c] * row_dot;
            }
            constraints[1 + 3 * r + c] = entry;
        }
    }
    constraints
}
