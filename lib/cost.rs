//! Standardized resource counts for bloqs.
//!
//! In fault-tolerant architectures Clifford gates are cheap and T gates are
//! not: each T gate consumes a distilled magic state. [`TComplexity`] counts
//! the non-Clifford T gates, the Clifford gates, and arbitrary-angle rotations
//! (which must themselves be synthesized from T gates) used by a bloq.

use std::{ fmt, iter::Sum, ops::{ Add, AddAssign, Mul } };

/// Counts of T gates, Clifford gates, and single-qubit rotations.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TComplexity {
    /// Number of T (or T†) gates.
    pub t: usize,
    /// Number of Clifford gates.
    pub clifford: usize,
    /// Number of arbitrary-angle single-qubit rotations.
    pub rotations: usize,
}

impl TComplexity {
    /// Create a new cost record.
    pub fn new(t: usize, clifford: usize, rotations: usize) -> Self {
        Self { t, clifford, rotations }
    }

    /// The cost of a single T (or T†) gate.
    pub fn single_t() -> Self { Self { t: 1, ..Self::default() } }

    /// Return `true` if nothing is counted.
    pub fn is_zero(&self) -> bool { *self == Self::default() }

    /// Return the number of T gates needed when every rotation is synthesized
    /// to precision `eps` from Clifford+T gates.
    ///
    /// Each rotation costs ⌈1.149 log<sub>2</sub>(1/*ε*) + 9.2⌉ T gates,
    /// following the mixed fallback protocol of Kliuchnikov *et al.*,
    /// [arXiv:2203.10064](https://arxiv.org/abs/2203.10064).
    ///
    /// *Panics if `eps` is not in (0, 1).*
    pub fn t_incl_rotations(&self, eps: f64) -> usize {
        assert!(
            eps > 0.0 && eps < 1.0,
            "rotation synthesis precision must lie in (0, 1)",
        );
        let t_per_rotation = (1.149 * (1.0 / eps).log2() + 9.2).ceil() as usize;
        self.t + self.rotations * t_per_rotation
    }
}

impl Add for TComplexity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            t: self.t + rhs.t,
            clifford: self.clifford + rhs.clifford,
            rotations: self.rotations + rhs.rotations,
        }
    }
}

impl AddAssign for TComplexity {
    fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl Mul<usize> for TComplexity {
    type Output = Self;

    fn mul(self, n: usize) -> Self::Output {
        Self {
            t: self.t * n,
            clifford: self.clifford * n,
            rotations: self.rotations * n,
        }
    }
}

impl Sum for TComplexity {
    fn sum<I>(iter: I) -> Self
    where I: Iterator<Item = Self>
    {
        iter.fold(Self::default(), |acc, c| acc + c)
    }
}

impl fmt::Display for TComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "T-count: {}, Clifford: {}, rotations: {}",
            self.t, self.clifford, self.rotations,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arith() {
        let a = TComplexity::new(1, 2, 0);
        let b = TComplexity::new(3, 0, 1);
        assert_eq!(a + b, TComplexity::new(4, 2, 1));
        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
        assert_eq!(a * 3, TComplexity::new(3, 6, 0));
        let total: TComplexity = std::iter::repeat(TComplexity::single_t()).take(7).sum();
        assert_eq!(total.t, 7);
        assert!(TComplexity::default().is_zero());
        assert!(!total.is_zero());
    }

    #[test]
    fn rotations() {
        let cost = TComplexity::new(4, 10, 2);
        // 1.149 * log2(1e3) + 9.2 = 20.65.. -> 21 per rotation
        assert_eq!(cost.t_incl_rotations(1e-3), 4 + 2 * 21);
        assert_eq!(TComplexity::single_t().t_incl_rotations(1e-10), 1);
    }

    #[test]
    fn display() {
        assert_eq!(
            TComplexity::single_t().to_string(),
            "T-count: 1, Clifford: 0, rotations: 0",
        );
    }
}
