//! Essential matrix estimation from five point correspondences.
//!
//! Given exactly five pairs of matched image points in normalized
//! coordinates (calibrated cameras, principal point at the origin, unit
//! focal length), the solver computes every essential matrix compatible
//! with them (up to ten) by the five-point algorithm of Nistér, in the
//! Gröbner-basis formulation of Stewénius, Engels and Nistér. The
//! candidates are meant to be fed to a RANSAC loop as hypotheses; scoring
//! them against further correspondences, picking the winner and
//! decomposing it into rotation and translation are the caller's job.
//!
//! The pipeline is purely algebraic: a four-dimensional nullspace basis of
//! the epipolar constraints, ten cubic constraint polynomials, Gaussian
//! elimination to a Gröbner basis under a fixed monomial ordering, a 10×10
//! action matrix, and an eigendecomposition whose real eigenvectors encode
//! the solutions. Points and outputs are generic over [`Scalar`] (`f32` or
//! `f64`); the elimination and eigensolve always run in double precision.
//!
//! ```
//! use five_point::solve;
//! use nalgebra::Point2;
//!
//! // projections of five 3D points seen from two calibrated views
//! let right: [Point2<f64>; 5] = [
//!     Point2::new(1.0 / 3.0, -4.0 / 3.0),
//!     Point2::new(1.0, -4.0 / 3.0),
//!     Point2::new(1.0 / 7.0, -1.0 / 7.0),
//!     Point2::new(11.0 / 16.0, -13.0 / 16.0),
//!     Point2::new(-2.0 / 7.0, -1.0 / 7.0),
//! ];
//! let left: [Point2<f64>; 5] = [
//!     Point2::new(0.0, 0.0),
//!     Point2::new(0.5, 0.0),
//!     Point2::new(0.0, 1.0),
//!     Point2::new(0.5, 0.25),
//!     Point2::new(-0.5, 1.0),
//! ];
//!
//! let candidates = solve(&right, &left).unwrap();
//! assert!(!candidates.is_empty() && candidates.len() <= 10);
//! for e in &candidates {
//!     // every candidate satisfies the epipolar constraint of every pair
//!     let residual = nalgebra::Vector3::new(right[0].x, right[0].y, 1.0)
//!         .dot(&(e * nalgebra::Vector3::new(left[0].x, left[0].y, 1.0)));
//!     assert!(residual.abs() < 1e-8 * e.norm());
//! }
//! ```
//!
//! References: D. Nistér, "An efficient solution to the five-point
//! relative pose problem", PAMI 2004; H. Stewénius, C. Engels, D. Nistér,
//! "Recent developments on direct relative orientation", ISPRS 2006.

pub mod action;
pub mod constraint;
pub mod errors;
pub mod groebner;
pub mod nullspace;
pub mod poly;
pub mod scalar;
pub mod solver;

pub use errors::FivePointError;
pub use nullspace::EpipolarBasis;
pub use scalar::Scalar;
pub use solver::{solve, FivePointSolver, SolveStatistics, SAMPLE_SIZE};
