//! Conventional circuit-model operations that bloqs can be lowered to.
//!
//! This is the boundary to external circuit simulators: a bloq translates
//! itself into an [`Operation`] acting on caller-owned qubit handles, and the
//! simulator adapter maps the operation onward into its own representation.
//! Qubit handles are whatever type the caller's [`QubitManager`] hands out.

use std::fmt;
use itertools::Itertools;
use ndarray as nd;
use num_complex::Complex64 as C64;
use rustc_hash::FxHashMap;
use thiserror::Error;
use crate::{ c, phase::Phase };

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CircuitError {
    #[error("qubit {0} is not currently allocated")]
    UnknownQubit(String),
}
pub type CircuitResult<T> = Result<T, CircuitError>;

pub(crate) mod qubits;
pub use qubits::*;

/// Mapping from register names to the qubit handles carrying them.
pub type Quregs<Q> = FxHashMap<String, Vec<Q>>;

/// A single-qubit unitary gate from the Clifford+T family.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Gate {
    /// The T gate, diag(1, e<sup><i>iπ</i>/4</sup>).
    T,
    /// The adjoint of the T gate, diag(1, e<sup>–<i>iπ</i>/4</sup>).
    Tdg,
    /// A general phase gate, diag(1, e<sup><i>iφ</i></sup>).
    Phase(Phase),
}

impl Gate {
    /// Return `true` if `self` is `T`.
    pub fn is_t(&self) -> bool { matches!(self, Self::T) }

    /// Return `true` if `self` is `Tdg`.
    pub fn is_tdg(&self) -> bool { matches!(self, Self::Tdg) }

    /// Return `true` if `self` is `Phase`.
    pub fn is_phase(&self) -> bool { matches!(self, Self::Phase(..)) }

    /// Return the number of qubits the gate acts on.
    pub fn num_qubits(&self) -> usize { 1 }

    /// Return the phase applied to the ∣1⟩ state.
    pub fn phase(&self) -> Phase {
        match self {
            Self::T => Phase::pi4(),
            Self::Tdg => -Phase::pi4(),
            Self::Phase(ph) => *ph,
        }
    }

    /// Return the inverse of `self`.
    ///
    /// `T` and `Tdg` are each other's inverses; they are never expressed as
    /// powers of one another.
    pub fn inv(&self) -> Self {
        match *self {
            Self::T => Self::Tdg,
            Self::Tdg => Self::T,
            Self::Phase(ph) => Self::Phase(-ph),
        }
    }

    /// Return `true` if `other` is the inverse of `self`.
    pub fn is_inv(&self, other: &Self) -> bool {
        self.phase() + other.phase() == Phase::zero()
    }

    /// Return the gate's short name.
    pub fn name(&self) -> String {
        match self {
            Self::T => "T".to_string(),
            Self::Tdg => "T†".to_string(),
            Self::Phase(ph) => format!("P({})", ph),
        }
    }

    /// Return the 2×2 unitary matrix of the gate.
    pub fn matrix(&self) -> nd::Array2<C64> {
        nd::array![
            [c!(1.0), c!(0.0)],
            [c!(0.0), self.phase().cis()],
        ]
    }

    /// Apply `self` to a list of qubits, producing an [`Operation`].
    pub fn on<Q, I>(self, qubits: I) -> Operation<Q>
    where I: IntoIterator<Item = Q>
    {
        Operation { gate: self, qubits: qubits.into_iter().collect() }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// A [`Gate`] applied to specific qubits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Operation<Q> {
    gate: Gate,
    qubits: Vec<Q>,
}

impl<Q> Operation<Q> {
    /// Return the gate being applied.
    pub fn gate(&self) -> Gate { self.gate }

    /// Return the qubits acted upon.
    pub fn qubits(&self) -> &[Q] { &self.qubits }

    /// Return the unitary matrix of the operation.
    pub fn matrix(&self) -> nd::Array2<C64> { self.gate.matrix() }
}

impl<Q> Operation<Q>
where Q: Clone
{
    /// Return the inverse of `self` on the same qubits.
    pub fn inv(&self) -> Self {
        Self { gate: self.gate.inv(), qubits: self.qubits.clone() }
    }
}

impl<Q> fmt::Display for Operation<Q>
where Q: fmt::Display
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.gate, self.qubits.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::Tensor;

    fn as_tensor(a: &nd::Array2<C64>) -> Tensor<u8> {
        Tensor::new(a.clone(), [0, 1], Vec::<String>::new()).unwrap()
    }

    fn approx_eq(a: &nd::Array2<C64>, b: &nd::Array2<C64>) -> bool {
        as_tensor(a).approx_eq(&as_tensor(b), None)
    }

    #[test]
    fn inverses() {
        assert_eq!(Gate::T.inv(), Gate::Tdg);
        assert_eq!(Gate::Tdg.inv(), Gate::T);
        assert!(Gate::T.is_inv(&Gate::Tdg));
        assert!(Gate::T.is_inv(&Gate::Phase(-Phase::pi4())));
        assert!(!Gate::T.is_inv(&Gate::T));
        assert_eq!(Gate::Phase(Phase::pi2()).inv(), Gate::Phase(-Phase::pi2()));
    }

    #[test]
    fn matrices() {
        let t = Gate::T.matrix();
        let tdg = Gate::Tdg.matrix();
        let t_conj_t = t.t().mapv(|a| a.conj());
        assert!(approx_eq(&tdg, &t_conj_t));
        assert!(approx_eq(&t.dot(&tdg), &nd::Array2::eye(2)));
        assert!(approx_eq(&t, &Gate::Phase(Phase::pi4()).matrix()));
    }

    #[test]
    fn operations() {
        let op = Gate::T.on([LineQubit(3)]);
        assert_eq!(op.qubits(), [LineQubit(3)]);
        assert_eq!(op.to_string(), "T(q(3))");
        let inv = op.inv();
        assert_eq!(inv.gate(), Gate::Tdg);
        assert_eq!(inv.qubits(), op.qubits());
        assert_eq!(inv.to_string(), "T†(q(3))");
        assert_eq!(Gate::Phase(Phase::pi2()).name(), "P(π/2)");
    }
}
