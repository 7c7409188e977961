//! Action matrix of the quotient algebra.
//!
//! On the basis {x², xy, y², xz, yz, z², x, y, z, 1} of the quotient ring,
//! multiplication by x is a linear map. For the last four basis monomials
//! the product is again a basis monomial; for the first six it is one of
//! the degree-three leading monomials, which the reduced system rewrites
//! back into the basis. The eigenvalues of the resulting 10×10 matrix are
//! the x-coordinates of the roots, and its eigenvectors carry the basis
//! monomial values at each root.

use nalgebra::SMatrix;

/// Leading-monomial row of the reduced system hit by multiplying each of
/// the first six basis monomials by x:
/// x·x² = x³ (0), x·xy = x²y (1), x·y² = xy² (2),
/// x·xz = x²z (4), x·yz = xyz (5), x·z² = xz² (7).
const REDUCED_ROWS: [usize; 6] = [0, 1, 2, 4, 5, 7];

/// Assembles the action matrix from the reduced coefficient block G.
pub fn action_matrix(g: &SMatrix<f64, 10, 10>) -> SMatrix<f64, 10, 10> {
    let mut action = SMatrix::<f64, 10, 10>::zeros();
    for (row, &g_row) in REDUCED_ROWS.iter().enumerate() {
        for col in 0..10 {
            // mᵢ = −Σⱼ G[i,j]·bⱼ on the solution set
            action[(row, col)] = -g[(g_row, col)];
        }
    }
    action[(6, 0)] = 1.0; // x·x = x²
    action[(7, 1)] = 1.0; // x·y = xy
    action[(8, 3)] = 1.0; // x·z = xz
    action[(9, 6)] = 1.0; // x·1 = x
    action
}
