//! Top-level five-point solver.
//!
//! Runs the five pipeline stages on one set of correspondences: nullspace
//! basis, constraint polynomials, Gröbner reduction, action matrix, eigen
//! extraction. The solver is a pure function of its inputs and two scalars
//! of configuration; callers run it concurrently from as many threads as
//! they like, one sample per call.

use nalgebra::{Matrix3, Point2, SMatrix, SVector, Schur};
use serde::Serialize;

use crate::action::action_matrix;
use crate::constraint::constraint_polynomials;
use crate::errors::FivePointError;
use crate::groebner;
use crate::nullspace::EpipolarBasis;
use crate::scalar::Scalar;

/// A minimal sample: the algorithm consumes exactly five correspondences.
pub const SAMPLE_SIZE: usize = 5;

/// Iteration cap shared by the Schur form and the eigenvector SVDs.
const MAX_DECOMPOSITION_ITERATIONS: usize = 512;

/// Per-call counters, mostly of interest when tuning the outer RANSAC
/// loop or diagnosing near-degenerate samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SolveStatistics {
    /// Eigenvalues of the action matrix that passed the imaginary-part
    /// filter.
    pub number_of_real_eigenvalues: usize,
    /// Real roots dropped because a normalization divisor was below
    /// tolerance.
    pub number_of_rejected_normalizations: usize,
    /// Essential matrices returned to the caller.
    pub number_of_candidates: usize,
}

/// Five-point essential matrix solver.
///
/// `T` is the storage scalar for points and outputs; the algebraic
/// pipeline itself always runs in double precision. The tolerance bounds
/// the imaginary-part filter on the action-matrix eigenvalues and the
/// normalization guards of the extraction stage.
#[derive(Debug, Clone, Copy)]
pub struct FivePointSolver<T: Scalar> {
    tolerance: T,
}

impl<T: Scalar> Default for FivePointSolver<T> {
    fn default() -> Self {
        Self {
            tolerance: Scalar::from_f64(1e-4),
        }
    }
}

impl<T: Scalar> FivePointSolver<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerance(tolerance: T) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    /// Computes up to ten candidate essential matrices for five
    /// correspondences, each normalized so its (2, 2) entry is one.
    ///
    /// Every returned matrix E satisfies pᵣᵀ·E·pₗ ≈ 0 for all five input
    /// pairs, has (numerically) zero determinant and two equal nonzero
    /// singular values. Which candidate, if any, describes the actual
    /// camera motion is for the caller's verification stage to decide.
    ///
    /// A degenerate sample is not an error: it yields fewer candidates,
    /// possibly none.
    pub fn solve(
        &self,
        right_points: &[Point2<T>],
        left_points: &[Point2<T>],
    ) -> Result<Vec<Matrix3<T>>, FivePointError> {
        self.solve_with_statistics(right_points, left_points)
            .map(|(candidates, _)| candidates)
    }

    /// Like [`solve`](Self::solve), but also reports the extraction
    /// counters for this call.
    pub fn solve_with_statistics(
        &self,
        right_points: &[Point2<T>],
        left_points: &[Point2<T>],
    ) -> Result<(Vec<Matrix3<T>>, SolveStatistics), FivePointError> {
        if right_points.len() != SAMPLE_SIZE || left_points.len() != SAMPLE_SIZE {
            log::warn!(
                "five-point solve rejected: {} right and {} left correspondences",
                right_points.len(),
                left_points.len()
            );
            return Err(FivePointError::InvalidInputCount {
                left: left_points.len(),
                right: right_points.len(),
            });
        }
        let right: [Point2<f64>; SAMPLE_SIZE] = core::array::from_fn(|i| {
            Point2::new(right_points[i].x.to_f64(), right_points[i].y.to_f64())
        });
        let left: [Point2<f64>; SAMPLE_SIZE] = core::array::from_fn(|i| {
            Point2::new(left_points[i].x.to_f64(), left_points[i].y.to_f64())
        });
        let tolerance = self.tolerance.to_f64();

        let basis = EpipolarBasis::from_correspondences(&right, &left)?;
        let constraints = constraint_polynomials(&basis);
        let Some(reduced) = groebner::reduce(&constraints) else {
            log::debug!("constraint elimination is rank deficient; returning no candidates");
            return Ok((Vec::new(), SolveStatistics::default()));
        };
        let action = action_matrix(&reduced);
        let (candidates, statistics) = extract_candidates(&action, &basis, tolerance)?;
        log::trace!(
            "five-point solve: {} candidates from {} real eigenvalues",
            statistics.number_of_candidates,
            statistics.number_of_real_eigenvalues
        );

        let candidates = candidates
            .into_iter()
            .map(|m| m.map(Scalar::from_f64))
            .collect();
        Ok((candidates, statistics))
    }
}

/// One-shot solve with the default configuration.
pub fn solve<T: Scalar>(
    right_points: &[Point2<T>],
    left_points: &[Point2<T>],
) -> Result<Vec<Matrix3<T>>, FivePointError> {
    FivePointSolver::default().solve(right_points, left_points)
}

/// Walks the eigenvalues of the action matrix and reconstructs an
/// essential matrix for every sufficiently real root.
fn extract_candidates(
    action: &SMatrix<f64, 10, 10>,
    basis: &EpipolarBasis,
    tolerance: f64,
) -> Result<(Vec<Matrix3<f64>>, SolveStatistics), FivePointError> {
    let schur = Schur::try_new(*action, f64::EPSILON, MAX_DECOMPOSITION_ITERATIONS)
        .ok_or(FivePointError::ActionEigenFailed)?;
    let eigenvalues = schur.complex_eigenvalues();

    let mut statistics = SolveStatistics::default();
    let mut candidates = Vec::with_capacity(10);
    for eigenvalue in eigenvalues.iter() {
        if eigenvalue.im.abs() > tolerance {
            continue;
        }
        statistics.number_of_real_eigenvalues += 1;

        // Components of the right eigenvector are the quotient-basis
        // monomial values at the root, up to scale; entries 6..9 hold
        // (x, y, z, 1).
        let v = right_eigenvector(action, eigenvalue.re)?;
        let w = v[9];
        if w.abs() <= tolerance {
            statistics.number_of_rejected_normalizations += 1;
            continue;
        }
        let (x, y, z) = (v[6] / w, v[7] / w, v[8] / w);

        let e = basis.essential_vector(x, y, z);
        let scale = e[8];
        if scale.abs() <= tolerance * e.norm() {
            statistics.number_of_rejected_normalizations += 1;
            continue;
        }
        candidates.push(Matrix3::from_column_slice((e / scale).as_slice()));
    }
    statistics.number_of_candidates = candidates.len();
    Ok((candidates, statistics))
}

/// Right eigenvector for a real eigenvalue, as the nullspace direction of
/// the shifted matrix (the Schur form alone does not expose eigenvectors
/// of a non-symmetric matrix).
fn right_eigenvector(
    action: &SMatrix<f64, 10, 10>,
    eigenvalue: f64,
) -> Result<SVector<f64, 10>, FivePointError> {
    let shifted = *action - SMatrix::<f64, 10, 10>::identity() * eigenvalue;
    let svd = shifted
        .try_svd(false, true, f64::EPSILON, MAX_DECOMPOSITION_ITERATIONS)
        .ok_or(FivePointError::EigenvectorFailed)?;
    let Some(v_t) = svd.v_t else {
        return Err(FivePointError::EigenvectorFailed);
    };
    // singular values are sorted descending; the last right singular
    // direction is the nullspace one
    Ok(v_t.row(9).transpose())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    /// Rotation about the x axis with cos = 3/5 plus unit translation
    /// along x. E = [t]×·R, and the correspondences are exact projections
    /// of five non-coplanar 3D points visible in both views.
    fn ground_truth() -> ([Point2<f64>; 5], [Point2<f64>; 5], Matrix3<f64>) {
        let right = [
            Point2::new(1.0 / 3.0, -4.0 / 3.0),
            Point2::new(1.0, -4.0 / 3.0),
            Point2::new(1.0 / 7.0, -1.0 / 7.0),
            Point2::new(11.0 / 16.0, -13.0 / 16.0),
            Point2::new(-2.0 / 7.0, -1.0 / 7.0),
        ];
        let left = [
            Point2::new(0.0, 0.0),
            Point2::new(0.5, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.5, 0.25),
            Point2::new(-0.5, 1.0),
        ];
        let essential = Matrix3::new(0.0, 0.0, 0.0, 0.0, -0.8, -0.6, 0.0, 0.6, -0.8);
        (right, left, essential)
    }

    fn epipolar_residual(e: &Matrix3<f64>, pr: &Point2<f64>, pl: &Point2<f64>) -> f64 {
        let pr = Vector3::new(pr.x, pr.y, 1.0);
        let pl = Vector3::new(pl.x, pl.y, 1.0);
        pr.dot(&(e * pl))
    }

    /// Frobenius distance after normalizing both matrices to unit norm,
    /// modulo the overall sign.
    fn aligned_distance(a: &Matrix3<f64>, b: &Matrix3<f64>) -> f64 {
        let a = *a / a.norm();
        let b = *b / b.norm();
        ((a - b).norm()).min((a + b).norm())
    }

    #[test]
    fn recovers_synthetic_ground_truth() {
        let (right, left, truth) = ground_truth();
        let candidates = solve(&right, &left).unwrap();
        assert!(!candidates.is_empty());
        assert!(candidates.len() <= 10);
        let best = candidates
            .iter()
            .map(|e| aligned_distance(e, &truth))
            .fold(f64::INFINITY, f64::min);
        assert!(best < 1e-6, "closest candidate at distance {best}");
    }

    #[test]
    fn candidates_satisfy_the_epipolar_constraints() {
        let (right, left, _) = ground_truth();
        let candidates = solve(&right, &left).unwrap();
        assert!(!candidates.is_empty());
        for e in &candidates {
            assert_eq!(e[(2, 2)], 1.0);
            for (pr, pl) in right.iter().zip(left.iter()) {
                assert!(epipolar_residual(e, pr, pl).abs() < 1e-8 * e.norm());
            }
        }
    }

    #[test]
    fn candidates_are_algebraically_essential() {
        let (right, left, _) = ground_truth();
        let candidates = solve(&right, &left).unwrap();
        assert!(!candidates.is_empty());
        for e in &candidates {
            let cube = e.norm().powi(3);
            let eet = e * e.transpose();
            let defect = ((eet * e) * 2.0 - e * eet.trace()).norm();
            assert!(defect < 1e-8 * cube);
            assert!(e.determinant().abs() < 1e-8 * cube);
        }
    }

    #[test]
    fn rejects_wrong_input_sizes() {
        let (right, left, _) = ground_truth();
        let err = solve(&right[..4], &left).unwrap_err();
        assert_eq!(err, FivePointError::InvalidInputCount { left: 5, right: 4 });
        let err = solve(&right, &left[..3]).unwrap_err();
        assert_eq!(err, FivePointError::InvalidInputCount { left: 3, right: 5 });
    }

    #[test]
    fn identity_correspondences_complete() {
        // No camera motion; every skew-symmetric matrix fits, so the
        // quotient ring degenerates. The call must still come back.
        let points = [
            Point2::new(0.1, 0.2),
            Point2::new(-0.3, 0.4),
            Point2::new(0.5, -0.1),
            Point2::new(-0.2, -0.35),
            Point2::new(0.45, 0.3),
        ];
        if let Ok(candidates) = solve(&points, &points) {
            assert!(candidates.len() <= 10);
        }
    }

    #[test]
    fn literal_grid_case_completes() {
        let points = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.5, 0.5),
        ];
        if let Ok(candidates) = solve(&points, &points) {
            assert!(candidates.len() <= 10);
            for e in &candidates {
                for (pr, pl) in points.iter().zip(points.iter()) {
                    assert!(epipolar_residual(e, pr, pl).abs() < 1e-6 * e.norm());
                }
            }
        }
    }

    #[test]
    fn permutation_of_correspondences_preserves_the_solution_set() {
        let (right, left, _) = ground_truth();
        let permutation = [2usize, 0, 4, 1, 3];
        let right_permuted: [Point2<f64>; 5] = core::array::from_fn(|i| right[permutation[i]]);
        let left_permuted: [Point2<f64>; 5] = core::array::from_fn(|i| left[permutation[i]]);

        let original = solve(&right, &left).unwrap();
        let permuted = solve(&right_permuted, &left_permuted).unwrap();
        assert_eq!(original.len(), permuted.len());
        for e in &original {
            let best = permuted
                .iter()
                .map(|f| aligned_distance(e, f))
                .fold(f64::INFINITY, f64::min);
            assert!(best < 1e-6, "unmatched candidate at distance {best}");
        }
    }

    #[test]
    fn repeated_solves_are_bit_identical() {
        let (right, left, _) = ground_truth();
        let first = solve(&right, &left).unwrap();
        let second = solve(&right, &left).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn single_precision_storage_still_recovers_the_motion() {
        let (right, left, truth) = ground_truth();
        let right: [Point2<f32>; 5] =
            core::array::from_fn(|i| Point2::new(right[i].x as f32, right[i].y as f32));
        let left: [Point2<f32>; 5] =
            core::array::from_fn(|i| Point2::new(left[i].x as f32, left[i].y as f32));

        let solver = FivePointSolver::<f32>::default();
        let candidates = solver.solve(&right, &left).unwrap();
        assert!(!candidates.is_empty());
        let best = candidates
            .iter()
            .map(|e| aligned_distance(&e.map(|v| v as f64), &truth))
            .fold(f64::INFINITY, f64::min);
        assert!(best < 1e-3, "closest candidate at distance {best}");
    }

    #[test]
    fn statistics_account_for_every_real_root() {
        let (right, left, _) = ground_truth();
        let solver = FivePointSolver::<f64>::default();
        let (candidates, statistics) = solver.solve_with_statistics(&right, &left).unwrap();
        assert_eq!(statistics.number_of_candidates, candidates.len());
        assert!(statistics.number_of_real_eigenvalues <= 10);
        assert_eq!(
            statistics.number_of_real_eigenvalues,
            statistics.number_of_candidates + statistics.number_of_rejected_normalizations
        );
    }

    #[test]
    fn tolerance_is_configurable() {
        let solver = FivePointSolver::with_tolerance(1e-6);
        assert_eq!(solver.tolerance(), 1e-6);
        let (right, left, truth) = ground_truth();
        // the synthetic roots are exactly real, so a much tighter filter
        // still keeps the true solution
        let candidates = solver.solve(&right, &left).unwrap();
        let best = candidates
            .iter()
            .map(|e| aligned_distance(e, &truth))
            .fold(f64::INFINITY, f64::min);
        assert!(best < 1e-6);
    }
}
