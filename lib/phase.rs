//! Numerically exact, real phases backed by rational numbers.
//!
//! All phases and arithmetic operations thereof are automatically performed
//! modulo 2*π*. Gates in the Clifford+T hierarchy only ever carry phases that
//! are multiples of π/4, so keeping them rational makes adjoints and products
//! exact; conversion to floating point happens only when matrix elements are
//! produced.

use std::fmt;
use std::f64::consts::TAU;
use num_complex::Complex64 as C64;
use num_rational::Rational64 as R64;
use num_traits::{ One, Signed, Zero };

// return the reduction of `a` modulo 1, constrained to non-negative values
fn rempos1(a: R64) -> R64 {
    let numer = a.numer().rem_euclid(*a.denom());
    R64::new(numer, *a.denom())
}

/// A description of a phase.
///
/// Holds a rational number *φ* in [0, 1) such that the phase represented by a
/// `Phase` as a whole is 2*π* × *φ*. Every constructor and operation reduces
/// *φ*, so structural equality and hashing agree with equality modulo 2*π*.
///
/// ```
/// # use bloqs::phase::Phase;
/// assert_eq!(  Phase::new(7, 8),      -Phase::pi4() );
/// assert_eq!(  Phase::pi4() * 2,       Phase::pi2() );
/// assert_eq!(  Phase::pi4() + Phase::new(7, 8), Phase::zero() );
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Phase(R64);

impl PartialOrd for Phase {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Phase {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering { self.0.cmp(&other.0) }
}

impl From<Phase> for f64 {
    fn from(ph: Phase) -> Self {
        TAU * (*ph.0.numer() as f64 / *ph.0.denom() as f64)
    }
}

impl Phase {
    /// Construct a new `Phase` as `(numer / denom) × 2π`.
    ///
    /// *Panics if `denom` is zero.*
    pub fn new(numer: i64, denom: i64) -> Self {
        Self(rempos1(R64::new(numer, denom)))
    }

    /// Return the `Phase` representation of 0 ≡ 2π mod 2π.
    pub fn zero() -> Self { Self(R64::zero()) }

    /// Return the `Phase` representation of π.
    pub fn pi() -> Self { Self(R64::new(1, 2)) }

    /// Return the `Phase` representation of π/2.
    pub fn pi2() -> Self { Self(R64::new(1, 4)) }

    /// Return the `Phase` representation of π/4.
    pub fn pi4() -> Self { Self(R64::new(1, 8)) }

    /// Return the `Phase` representation of 2π/`n`.
    ///
    /// *Panics if `n` is zero.*
    pub fn frac(n: i64) -> Self { Self(rempos1(R64::new(1, n))) }

    /// Return the inner fraction *φ* of the full turn.
    pub fn turns(self) -> R64 { self.0 }

    /// Convert to a floating-point angle in radians, in [0, 2π).
    pub fn into_float(self) -> f64 { self.into() }

    /// Return `true` if `self` is an integer multiple of 2π/`n`.
    pub fn is_mult(self, n: i64) -> bool {
        (self.0 * n).is_integer()
    }

    /// Convert to a complex number with modulus 1 and argument equal to `self`.
    pub fn cis(self) -> C64 { C64::cis(self.into()) }

    /// Compact text label in units of π, as used on diagram nodes.
    ///
    /// Phases are printed in (-π, π] so that an adjoint shows up as a sign
    /// flip, e.g. `π/4` and `-π/4`.
    pub fn label(&self) -> String {
        if *self == Self::zero() {
            return "0".to_string();
        } else if *self == Self::pi() {
            return "π".to_string();
        }
        let half = R64::new(1, 2);
        let signed = if self.0 > half { self.0 - R64::one() } else { self.0 };
        let modpi = signed * 2;
        let sign = if modpi < R64::zero() { "-" } else { "" };
        let modpi = modpi.abs();
        if *modpi.numer() == 1 {
            format!("{}π/{}", sign, modpi.denom())
        } else {
            format!("{}({})π", sign, modpi)
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl std::ops::Neg for Phase {
    type Output = Phase;

    fn neg(self) -> Self::Output { Self(rempos1(-self.0)) }
}

macro_rules! impl_addsub_phase {
    (
        $trait:ident,
        $fun:ident,
        $op:tt,
        $trait_assign:ident,
        $fun_assign:ident
    ) => {
        impl std::ops::$trait<Phase> for Phase {
            type Output = Phase;

            fn $fun(self, rhs: Phase) -> Self::Output {
                Self(rempos1(self.0 $op rhs.0))
            }
        }

        impl std::ops::$trait_assign<Phase> for Phase {
            fn $fun_assign(&mut self, rhs: Phase) {
                *self = *self $op rhs;
            }
        }
    }
}
impl_addsub_phase!(Add, add, +, AddAssign, add_assign);
impl_addsub_phase!(Sub, sub, -, SubAssign, sub_assign);

impl std::ops::Mul<i64> for Phase {
    type Output = Phase;

    fn mul(self, rhs: i64) -> Self::Output { Self(rempos1(self.0 * rhs)) }
}

impl std::ops::Mul<Phase> for i64 {
    type Output = Phase;

    fn mul(self, rhs: Phase) -> Self::Output { rhs * self }
}

impl std::iter::Sum for Phase {
    fn sum<I>(iter: I) -> Self
    where I: Iterator<Item = Self>
    {
        iter.fold(Self::zero(), |acc, ph| acc + ph)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn init_mod() {
        assert_eq!(Phase::new(9, 8), Phase::pi4());
        assert_eq!(Phase::new(-1, 8), Phase::new(7, 8));
        assert_eq!(Phase::new(1, -8), Phase::new(7, 8));
        assert_eq!(Phase::pi(), Phase::new(1, 2));
        assert_eq!(Phase::pi2(), Phase::new(1, 4));
        assert_eq!(Phase::pi4(), Phase::new(1, 8));
        assert_eq!(Phase::frac(1), Phase::zero());
        assert_eq!(Phase::frac(8), Phase::pi4());
    }

    #[test]
    fn neg_is_adjoint_phase() {
        assert_eq!(-Phase::pi4(), Phase::new(7, 8));
        assert_eq!(-(-Phase::pi4()), Phase::pi4());
        assert_eq!(-Phase::zero(), Phase::zero());
        assert_eq!(Phase::pi4() + -Phase::pi4(), Phase::zero());
    }

    #[test]
    fn arith() {
        assert_eq!(Phase::pi4() * 2, Phase::pi2());
        assert_eq!(4 * Phase::pi4(), Phase::pi());
        assert_eq!(Phase::pi4() * 8, Phase::zero());
        assert_eq!(Phase::pi2() - Phase::pi4(), Phase::pi4());
        let total: Phase = std::iter::repeat(Phase::pi4()).take(3).sum();
        assert_eq!(total, Phase::new(3, 8));
        assert!(Phase::pi2().is_mult(8));
        assert!(!Phase::pi4().is_mult(4));
    }

    #[test]
    fn cis() {
        let z = Phase::pi4().cis();
        let s = std::f64::consts::FRAC_1_SQRT_2;
        assert!((z - C64::new(s, s)).norm() < 1e-15);
        let zd = (-Phase::pi4()).cis();
        assert!((zd - z.conj()).norm() < 1e-15);
    }

    #[test]
    fn labels() {
        assert_eq!(Phase::zero().label(), "0");
        assert_eq!(Phase::pi().label(), "π");
        assert_eq!(Phase::pi4().label(), "π/4");
        assert_eq!((-Phase::pi4()).label(), "-π/4");
        assert_eq!(Phase::new(3, 8).label(), "(3/4)π");
    }
}
