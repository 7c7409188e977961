//! Bounded multivariate polynomial arithmetic over (x, y, z).
//!
//! The constraint generation stage only ever multiplies a degree-one
//! polynomial by a degree-one or degree-two polynomial, so instead of a
//! general sparse polynomial type there are three dense value types keyed
//! by the fixed monomial ordering of [`monomial`]: [`Linear`],
//! [`Quadratic`] and [`Cubic`].

use std::ops::{Add, Index, Mul, Neg, Sub};

use num_traits::Zero;

pub mod monomial;

use self::monomial::{monomial_index, BASIS_MONOMIALS, NUM_MONOMIALS};

/// Degree-one polynomial a·x + b·y + c·z + d.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Linear {
    pub fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        self.x * x + self.y * y + self.z * z + self.w
    }
}

/// Degree-two polynomial over the basis x², xy, y², xz, yz, z², x, y, z, 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    coeffs: [f64; 10],
}

impl Quadratic {
    pub fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        let powers = [
            x * x,
            x * y,
            y * y,
            x * z,
            y * z,
            z * z,
            x,
            y,
            z,
            1.0,
        ];
        self.coeffs
            .iter()
            .zip(powers)
            .map(|(c, p)| c * p)
            .sum()
    }
}

/// Degree-three polynomial over the full twenty-monomial ordering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubic {
    coeffs: [f64; NUM_MONOMIALS],
}

impl Cubic {
    /// Coefficient of the monomial at `index` in the fixed ordering.
    pub fn coefficient(&self, index: usize) -> f64 {
        self.coeffs[index]
    }

    pub fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        monomial::MONOMIALS
            .iter()
            .zip(self.coeffs)
            .map(|(&(px, py, pz), c)| {
                c * x.powi(px as i32) * y.powi(py as i32) * z.powi(pz as i32)
            })
            .sum()
    }
}

impl Index<usize> for Cubic {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.coeffs[index]
    }
}

impl Mul for Linear {
    type Output = Quadratic;

    fn mul(self, rhs: Linear) -> Quadratic {
        Quadratic {
            coeffs: [
                self.x * rhs.x,
                self.x * rhs.y + self.y * rhs.x,
                self.y * rhs.y,
                self.x * rhs.z + self.z * rhs.x,
                self.y * rhs.z + self.z * rhs.y,
                self.z * rhs.z,
                self.x * rhs.w + self.w * rhs.x,
                self.y * rhs.w + self.w * rhs.y,
                self.z * rhs.w + self.w * rhs.z,
                self.w * rhs.w,
            ],
        }
    }
}

impl Mul<Quadratic> for Linear {
    type Output = Cubic;

    fn mul(self, rhs: Quadratic) -> Cubic {
        let mut coeffs = [0.0; NUM_MONOMIALS];
        for (k, &(px, py, pz)) in BASIS_MONOMIALS.iter().enumerate() {
            let c = rhs.coeffs[k];
            if c == 0.0 {
                continue;
            }
            coeffs[monomial_index(px + 1, py, pz)] += self.x * c;
            coeffs[monomial_index(px, py + 1, pz)] += self.y * c;
            coeffs[monomial_index(px, py, pz + 1)] += self.z * c;
            coeffs[monomial_index(px, py, pz)] += self.w * c;
        }
        Cubic { coeffs }
    }
}

impl Mul<f64> for Quadratic {
    type Output = Quadratic;

    fn mul(mut self, rhs: f64) -> Quadratic {
        for c in self.coeffs.iter_mut() {
            *c *= rhs;
        }
        self
    }
}

impl Add for Quadratic {
    type Output = Quadratic;

    fn add(mut self, rhs: Quadratic) -> Quadratic {
        for (a, b) in self.coeffs.iter_mut().zip(rhs.coeffs) {
            *a += b;
        }
        self
    }
}

impl Sub for Quadratic {
    type Output = Quadratic;

    fn sub(mut self, rhs: Quadratic) -> Quadratic {
        for (a, b) in self.coeffs.iter_mut().zip(rhs.coeffs) {
            *a -= b;
        }
        self
    }
}

impl Zero for Quadratic {
    fn zero() -> Self {
        Quadratic { coeffs: [0.0; 10] }
    }

    fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| *c == 0.0)
    }
}

impl Add for Cubic {
    type Output = Cubic;

    fn add(mut self, rhs: Cubic) -> Cubic {
        for (a, b) in self.coeffs.iter_mut().zip(rhs.coeffs) {
            *a += b;
        }
        self
    }
}

impl Sub for Cubic {
    type Output = Cubic;

    fn sub(mut self, rhs: Cubic) -> Cubic {
        for (a, b) in self.coeffs.iter_mut().zip(rhs.coeffs) {
            *a -= b;
        }
        self
    }
}

impl Neg for Cubic {
    type Output = Cubic;

    fn neg(mut self) -> Cubic {
        for c in self.coeffs.iter_mut() {
            *c = -*c;
        }
        self
    }
}

impl Zero for Cubic {
    fn zero() -> Self {
        Cubic {
            coeffs: [0.0; NUM_MONOMIALS],
        }
    }

    fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| *c == 0.0)
    }
}
