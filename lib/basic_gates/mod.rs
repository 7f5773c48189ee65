//! Primitive single-qubit gates expressed as bloqs.

pub mod t_gate;
pub use t_gate::TGate;
