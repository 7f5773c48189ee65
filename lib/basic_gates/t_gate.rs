use std::{ fmt, sync::OnceLock };
use ndarray as nd;
use num_complex::Complex64 as C64;
use tracing::trace;
use crate::{
    c,
    bloq::{ Bloq, BloqError, BloqResult, LegMap },
    circuit::{ Gate, Operation, QubitManager, Quregs },
    cost::TComplexity,
    doc::{ BloqDocSpec, BloqExample, Reference },
    phase::Phase,
    signature::Signature,
    tensor::{ Tensor, TensorNetwork },
};

use BloqError::*;

static SIGNATURE: OnceLock<Signature> = OnceLock::new();

/// The T gate.
///
/// This is the fourth root of the Pauli Z gate,
/// ```text
/// T = [ 1  0         ]
///     [ 0  e^(iπ/4)  ]
/// ```
/// Circuits built only from Clifford gates (X, Z, H, S, CNOT, ...) can be
/// simulated efficiently on a classical computer, and adding any non-Clifford
/// gate makes the set universal. The T gate is the usual choice, giving the
/// Clifford+T gate set. In error-corrected architectures it is by far the most
/// expensive member of that set, which is why bloq costs are quoted in T gates.
///
/// The gate acts on a single register `q` of one qubit. With `is_adjoint` set
/// the bloq is T<sup>†</sup> instead; both cost one T gate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TGate {
    is_adjoint: bool,
}

impl TGate {
    /// Create a new T gate, or its adjoint if `is_adjoint` is `true`.
    pub fn new(is_adjoint: bool) -> Self { Self { is_adjoint } }

    /// Create a new T<sup>†</sup> gate.
    pub fn dagger() -> Self { Self { is_adjoint: true } }

    /// Return `true` if `self` is T<sup>†</sup>.
    pub fn is_adjoint(&self) -> bool { self.is_adjoint }

    /// Return the unitary matrix of the gate.
    pub fn matrix(&self) -> nd::Array2<C64> {
        let t: nd::Array2<C64>
            = nd::array![
                [c!(1.0), c!(0.0)],
                [c!(0.0), Phase::pi4().cis()],
            ];
        if self.is_adjoint { t.t().mapv(|a| a.conj()) } else { t }
    }

    /// Return the documentation record for the gate.
    pub fn doc_spec() -> BloqDocSpec<Self> {
        BloqDocSpec {
            bloq_name: "TGate",
            import_line: "use bloqs::basic_gates::TGate;",
            examples: vec![BloqExample { name: "t_gate", make: example }],
            references: vec![
                Reference {
                    title: "Universal Quantum Computation with ideal Clifford gates and noisy ancillas",
                    authors: "Bravyi and Kitaev",
                    year: 2004,
                    url: "https://arxiv.org/abs/quant-ph/0403025",
                },
                Reference {
                    title: "Fast and efficient exact synthesis of single qubit unitaries generated by Clifford and T gates",
                    authors: "Kliuchnikov et al.",
                    year: 2012,
                    url: "https://arxiv.org/abs/1206.5236",
                },
                Reference {
                    title: "Universal Gate Set, Magic States, and costliness of the T gate",
                    authors: "Gidney",
                    year: 2023,
                    url: "https://quantumcomputing.stackexchange.com/a/33358",
                },
            ],
        }
    }
}

/// Example instance: a plain T gate.
pub fn example() -> TGate { TGate::default() }

impl fmt::Display for TGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_adjoint {
            write!(f, "TGate(is_adjoint=true)")
        } else {
            write!(f, "TGate()")
        }
    }
}

impl Bloq for TGate {
    fn signature(&self) -> &Signature {
        SIGNATURE.get_or_init(|| Signature::qubit("q"))
    }

    fn pretty_name(&self) -> String {
        if self.is_adjoint { "T†".to_string() } else { "T".to_string() }
    }

    fn adjoint(&self) -> Self { Self { is_adjoint: !self.is_adjoint } }

    fn t_complexity(&self) -> TComplexity { TComplexity::single_t() }

    fn add_my_tensors<N>(
        &self,
        tn: &mut N,
        tag: &str,
        incoming: &LegMap<N::Leg>,
        outgoing: &LegMap<N::Leg>,
    ) -> BloqResult<()>
    where N: TensorNetwork
    {
        let inp = incoming.get("q").ok_or_else(|| MissingLeg("q".to_string()))?;
        let out = outgoing.get("q").ok_or_else(|| MissingLeg("q".to_string()))?;
        let tensor
            = Tensor::new(
                self.matrix(),
                [out.clone(), inp.clone()],
                [self.pretty_name(), tag.to_string()],
            )?;
        trace!(bloq = %self, tag, "adding tensor");
        tn.add_tensor(tensor);
        Ok(())
    }

    fn as_circuit_op<M>(&self, _qm: &mut M, quregs: &Quregs<M::Qubit>)
        -> BloqResult<(Operation<M::Qubit>, Quregs<M::Qubit>)>
    where M: QubitManager
    {
        let q = quregs.get("q").ok_or_else(|| MissingQureg("q".to_string()))?;
        let [q0] = q.as_slice() else {
            return Err(QubitCount { reg: "q".to_string(), expected: 1, got: q.len() });
        };
        let gate = if self.is_adjoint { Gate::Tdg } else { Gate::T };
        trace!(bloq = %self, ?q0, "translating to circuit operation");
        let out: Quregs<M::Qubit>
            = [("q".to_string(), vec![q0.clone()])].into_iter().collect();
        Ok((gate.on([q0.clone()]), out))
    }
}
