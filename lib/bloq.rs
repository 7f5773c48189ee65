//! The contract every bloq satisfies.
//!
//! A *bloq* is an immutable description of a quantum operation, independent of
//! any simulation backend. Given a bloq, a caller can ask for its
//! [signature][Bloq::signature], its [adjoint][Bloq::adjoint], its
//! [T-complexity][Bloq::t_complexity], its [tensor][Bloq::add_my_tensors]
//! within a larger network, an equivalent [circuit
//! operation][Bloq::as_circuit_op], or a [diagram symbol][Bloq::wire_symbol].
//! Each of these is an independent view over the same value; none of them
//! modifies the bloq.

use std::fmt;
use ndarray as nd;
use num_complex::Complex64 as C64;
use rustc_hash::FxHashMap;
use thiserror::Error;
use crate::{
    circuit::{ CircuitError, Operation, QubitManager, Quregs },
    cost::TComplexity,
    drawing::WireSymbol,
    signature::{ Register, Signature, SignatureError },
    tensor::{ Network, TensorError, TensorNetwork },
};

#[derive(Debug, Error)]
pub enum BloqError {
    #[error("no leg supplied for register '{0}'")]
    MissingLeg(String),

    #[error("no qubits supplied for register '{0}'")]
    MissingQureg(String),

    #[error("register '{reg}' expects {expected} qubit(s), got {got}")]
    QubitCount { reg: String, expected: usize, got: usize },

    #[error("graphviz error: {0}")]
    GraphVizError(String),

    #[error("tensor error: {0}")]
    TensorError(#[from] TensorError),

    #[error("signature error: {0}")]
    SignatureError(#[from] SignatureError),

    #[error("circuit error: {0}")]
    CircuitError(#[from] CircuitError),

    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),
}
pub type BloqResult<T> = Result<T, BloqError>;

/// Mapping from register names to the network legs attached to them.
pub type LegMap<L> = FxHashMap<String, L>;

/// Identifies the bloq a [`Soquet`] belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BloqInstance {
    /// The open input boundary of a composite.
    LeftDangle,
    /// The open output boundary of a composite.
    RightDangle,
    /// The `k`-th bloq placed in a composite.
    Instance(usize),
}

/// A wire endpoint: one register of one bloq instance.
///
/// Soquets are handed out by whatever framework wires bloqs together. They
/// implement [`Leg`][crate::tensor::Leg] and so can label tensor-network legs
/// directly.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Soquet {
    binst: BloqInstance,
    reg: Register,
}

impl Soquet {
    /// Create a new soquet.
    pub fn new(binst: BloqInstance, reg: Register) -> Self {
        Self { binst, reg }
    }

    /// Return the bloq instance the soquet belongs to.
    pub fn binst(&self) -> BloqInstance { self.binst }

    /// Return the register the soquet belongs to.
    pub fn reg(&self) -> &Register { &self.reg }

    /// Return `true` if the soquet sits on the open boundary of a composite.
    pub fn is_dangling(&self) -> bool {
        matches!(self.binst, BloqInstance::LeftDangle | BloqInstance::RightDangle)
    }
}

impl fmt::Display for Soquet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.binst {
            BloqInstance::LeftDangle => write!(f, "LeftDangle.{}", self.reg.name()),
            BloqInstance::RightDangle => write!(f, "RightDangle.{}", self.reg.name()),
            BloqInstance::Instance(k) => write!(f, "B[{}].{}", k, self.reg.name()),
        }
    }
}

/// Interface for an immutable, backend-independent quantum operation.
///
/// Implementors are plain values: equal parameters mean interchangeable bloqs,
/// and every method is a pure function of `self` apart from the insertion into
/// a caller-owned network in [`add_my_tensors`][Self::add_my_tensors].
pub trait Bloq: fmt::Debug + fmt::Display {
    /// Return the registers the bloq acts on.
    fn signature(&self) -> &Signature;

    /// Return a short label for the bloq, suitable for diagrams and tensor
    /// tags.
    fn pretty_name(&self) -> String;

    /// Return a new bloq implementing the conjugate transpose of `self`.
    fn adjoint(&self) -> Self where Self: Sized;

    /// Return the T-complexity of the bloq.
    ///
    /// Defaults to zero cost.
    fn t_complexity(&self) -> TComplexity { TComplexity::default() }

    /// Add the tensors for this bloq to a network.
    ///
    /// `incoming` and `outgoing` map each register name of the signature to
    /// the leg carrying its value into and out of the bloq. Every added tensor
    /// is tagged with [`pretty_name`][Self::pretty_name] and `tag`.
    fn add_my_tensors<N>(
        &self,
        tn: &mut N,
        tag: &str,
        incoming: &LegMap<N::Leg>,
        outgoing: &LegMap<N::Leg>,
    ) -> BloqResult<()>
    where N: TensorNetwork;

    /// Translate the bloq into a circuit operation acting on caller-owned
    /// qubits.
    ///
    /// `quregs` maps each register name of the signature to its qubits. The
    /// returned map gives, for each register, the qubits carrying it after the
    /// operation so the caller can thread them onward. `qm` supplies scratch
    /// qubits for bloqs that need them.
    fn as_circuit_op<M>(&self, qm: &mut M, quregs: &Quregs<M::Qubit>)
        -> BloqResult<(Operation<M::Qubit>, Quregs<M::Qubit>)>
    where M: QubitManager;

    /// Return the diagram symbol drawn for the bloq on the wire of `soq`.
    fn wire_symbol(&self, soq: &Soquet) -> WireSymbol {
        let _ = soq;
        WireSymbol::TextBox(self.pretty_name())
    }

    /// Contract the bloq's tensors into its full matrix.
    ///
    /// Rows run over the output registers and columns over the input
    /// registers, each in signature order.
    fn tensor_contract(&self) -> BloqResult<nd::Array2<C64>>
    where Self: Sized
    {
        let sig = self.signature();
        let lefts: Vec<Soquet> =
            sig.lefts()
            .map(|reg| Soquet::new(BloqInstance::LeftDangle, reg.clone()))
            .collect();
        let rights: Vec<Soquet> =
            sig.rights()
            .map(|reg| Soquet::new(BloqInstance::RightDangle, reg.clone()))
            .collect();
        let incoming: LegMap<Soquet> =
            lefts.iter()
            .map(|soq| (soq.reg().name().to_string(), soq.clone()))
            .collect();
        let outgoing: LegMap<Soquet> =
            rights.iter()
            .map(|soq| (soq.reg().name().to_string(), soq.clone()))
            .collect();
        let mut tn: Network<Soquet> = Network::new();
        self.add_my_tensors(&mut tn, "contract", &incoming, &outgoing)?;
        Ok(tn.to_matrix(&rights, &lefts)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soquet_display() {
        let q = Register::new("q", 1);
        let l = Soquet::new(BloqInstance::LeftDangle, q.clone());
        let r = Soquet::new(BloqInstance::RightDangle, q.clone());
        let b = Soquet::new(BloqInstance::Instance(3), q);
        assert_eq!(l.to_string(), "LeftDangle.q");
        assert_eq!(r.to_string(), "RightDangle.q");
        assert_eq!(b.to_string(), "B[3].q");
        assert!(l.is_dangling());
        assert!(!b.is_dangling());
        assert_ne!(l, r);
    }
}
