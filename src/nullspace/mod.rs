//! Nullspace basis of the epipolar constraint matrix.
//!
//! Five correspondences give five linear constraints on the nine entries of
//! the essential matrix, so the admissible matrices form (generically) a
//! four-dimensional family. The basis of that family parametrizes the
//! polynomial system solved downstream.

use nalgebra::{Point2, SMatrix, SVector};

use crate::errors::FivePointError;

/// Iteration cap for the symmetric eigendecomposition of the 9×9 scatter
/// matrix; generic inputs converge in a handful of sweeps.
const MAX_EIGEN_ITERATIONS: usize = 512;

/// Four 9-vectors spanning the right nullspace of the 5×9 epipolar
/// constraint matrix, ordered by decreasing singular value of the
/// directions they correspond to.
///
/// The parametric essential matrix is `x·B₀ + y·B₁ + z·B₂ + B₃`, with the
/// overall scale fixed by giving `B₃` unit coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct EpipolarBasis {
    vectors: [SVector<f64, 9>; 4],
}

impl EpipolarBasis {
    /// Extracts the nullspace basis for five point correspondences.
    ///
    /// The right singular vectors of the constraint matrix A are computed
    /// as the eigenvectors of the scatter matrix AᵀA; the four with the
    /// smallest eigenvalues span the nullspace. They are picked by index,
    /// not by thresholding, so rank-deficient (degenerate) inputs still
    /// produce a basis and are only weeded out downstream.
    pub fn from_correspondences(
        right: &[Point2<f64>; 5],
        left: &[Point2<f64>; 5],
    ) -> Result<Self, FivePointError> {
        let a = constraint_matrix(right, left);
        let scatter = a.tr_mul(&a);
        let eigen = scatter
            .try_symmetric_eigen(f64::EPSILON, MAX_EIGEN_ITERATIONS)
            .ok_or(FivePointError::NullspaceFailed)?;

        let mut order: [usize; 9] = core::array::from_fn(|i| i);
        order.sort_by(|&i, &j| eigen.eigenvalues[j].total_cmp(&eigen.eigenvalues[i]));

        let vectors =
            core::array::from_fn(|k| eigen.eigenvectors.column(order[5 + k]).into_owned());
        Ok(Self { vectors })
    }

    /// The k-th basis vector, k in 0..4.
    pub fn vector(&self, k: usize) -> &SVector<f64, 9> {
        &self.vectors[k]
    }

    /// Evaluates the parametric family at (x, y, z): the 9-vector
    /// `x·B₀ + y·B₁ + z·B₂ + B₃`.
    pub fn essential_vector(&self, x: f64, y: f64, z: f64) -> SVector<f64, 9> {
        self.vectors[0] * x + self.vectors[1] * y + self.vectors[2] * z + self.vectors[3]
    }
}

/// The 5×9 epipolar constraint matrix. Row i encodes pᵣᵀ·E·pₗ = 0 for
/// correspondence i, with the entries of E unrolled column-major.
pub fn constraint_matrix(
    right: &[Point2<f64>; 5],
    left: &[Point2<f64>; 5],
) -> SMatrix<f64, 5, 9> {
    let mut a = SMatrix::<f64, 5, 9>::zeros();
    for (i, (pr, pl)) in right.iter().zip(left.iter()).enumerate() {
        let row = [
            pr.x * pl.x,
            pr.y * pl.x,
            pl.x,
            pr.x * pl.y,
            pr.y * pl.y,
            pl.y,
            pr.x,
            pr.y,
            1.0,
        ];
        for (j, value) in row.into_iter().enumerate() {
            a[(i, j)] = value;
        }
    }
    a
}
