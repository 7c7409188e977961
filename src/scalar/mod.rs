use nalgebra::RealField;

/// Scalar type for point and output storage.
///
/// The algebraic pipeline (Gröbner reduction, eigensolve) is always run in
/// double precision regardless of the storage scalar; single precision is
/// not accurate enough for the elimination step, so `f32` inputs are
/// promoted on entry and demoted on exit.
pub trait Scalar: RealField + Copy {
    fn to_f64(self) -> f64;
    fn from_f64(value: f64) -> Self;
}

impl Scalar for f64 {
    fn to_f64(self) -> f64 {
        self
    }
    fn from_f64(value: f64) -> Self {
        value
    }
}

impl Scalar for f32 {
    fn to_f64(self) -> f64 {
        self as f64
    }
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}
