//! Tensor-network plumbing for simulating bloqs.
//!
//! Every bloq contributes one or more [`Tensor`]s to a network through
//! [`Bloq::add_my_tensors`][crate::bloq::Bloq::add_my_tensors]. Tensors carry
//! a dense array of complex amplitudes with one axis per *leg*, an
//! ordered list of leg labels, and a list of string tags. Two tensors sharing a
//! leg label are connected along that leg, and the linear map denoted by a
//! network as a whole is the contraction of all its tensors, with the network's
//! free legs being those that appear exactly once.
//!
//! Any tensor-network backend can receive bloqs by implementing
//! [`TensorNetwork`]. [`Network`] is a small dense implementation, sufficient
//! to contract few-qubit networks and check embeddings numerically.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TensorError {
    #[error("duplicate leg {0} in tensor")]
    DuplicateLeg(String),

    #[error("non-matching legs {0:?} and shape {1:?}")]
    IncompatibleShape(Box<[String]>, Box<[usize]>),

    #[error("axis {0} has length zero")]
    EmptyAxis(usize),

    #[error("cannot contract leg {0} of dimension {1} with dimension {2}")]
    DimMismatch(String, usize, usize),

    #[error("leg {0} does not belong to the tensor")]
    MissingLeg(String),

    #[error("legs {0:?} would be left out of the requested matrix")]
    UncoveredLegs(Box<[String]>),

    #[error("cannot contract an empty network")]
    EmptyNetwork,

    #[error("array shape error: {0}")]
    ShapeError(#[from] ndarray::ShapeError),
}
pub type TensorResult<T> = Result<T, TensorError>;

pub(crate) mod data;
pub use data::*;

pub(crate) mod network;
pub use network::*;
