use itertools::Itertools;
use ndarray as nd;
use num_complex::Complex64 as C64;
use rustc_hash::FxHashMap;
use tracing::debug;
use super::{ Leg, Tensor, TensorError, TensorResult };

use TensorError::*;

/// A tensor network that bloqs can add their tensors to.
///
/// This is the only operation a bloq needs from a network; implement it to
/// route bloq tensors into any contraction backend.
pub trait TensorNetwork {
    /// Label type for the legs connecting tensors.
    type Leg: Leg;

    /// Insert a single tensor into the network.
    fn add_tensor(&mut self, tensor: Tensor<Self::Leg>);
}

/// A simple, dense tensor network.
///
/// Tensors are kept in insertion order. Legs shared by two tensors are bonds;
/// legs appearing on a single tensor are free legs of the network. Contraction
/// proceeds left to right through the insertion order, which is fine for the
/// few-qubit networks this type is intended for.
#[derive(Clone, Debug)]
pub struct Network<L> {
    tensors: Vec<Tensor<L>>,
}

impl<L> Default for Network<L> {
    fn default() -> Self { Self { tensors: Vec::new() } }
}

impl<L> FromIterator<Tensor<L>> for Network<L> {
    fn from_iter<I>(iter: I) -> Self
    where I: IntoIterator<Item = Tensor<L>>
    {
        Self { tensors: iter.into_iter().collect() }
    }
}

impl<L> Network<L> {
    /// Create a new, empty network.
    pub fn new() -> Self { Self::default() }

    /// Return the number of tensors.
    pub fn len(&self) -> usize { self.tensors.len() }

    /// Return `true` if `self` has no tensors.
    pub fn is_empty(&self) -> bool { self.tensors.is_empty() }

    /// Return a reference to the `k`-th tensor, if it exists.
    pub fn get(&self, k: usize) -> Option<&Tensor<L>> { self.tensors.get(k) }

    /// Return an iterator over all tensors in insertion order.
    pub fn tensors(&self) -> std::slice::Iter<'_, Tensor<L>> {
        self.tensors.iter()
    }

    /// Add a tensor to the network.
    pub fn push(&mut self, tensor: Tensor<L>) { self.tensors.push(tensor); }
}

impl<L> Network<L>
where L: Leg
{
    /// Return an iterator over all tensors carrying the tag `tag`.
    pub fn select<'a>(&'a self, tag: &'a str)
        -> impl Iterator<Item = &'a Tensor<L>> + 'a
    {
        self.tensors.iter().filter(move |t| t.has_tag(tag))
    }

    /// Return all legs that appear on exactly one tensor, in order of first
    /// appearance.
    pub fn outer_legs(&self) -> Vec<L> {
        let mut counts: FxHashMap<&L, usize> = FxHashMap::default();
        self.tensors.iter()
            .flat_map(|t| t.legs())
            .for_each(|leg| { *counts.entry(leg).or_insert(0) += 1; });
        self.tensors.iter()
            .flat_map(|t| t.legs())
            .filter(|leg| counts.get(leg) == Some(&1))
            .cloned()
            .unique()
            .collect()
    }

    /// Contract every tensor in the network into a single tensor.
    ///
    /// Fails if the network is empty.
    pub fn contract(&self) -> TensorResult<Tensor<L>> {
        debug!(
            n_tensors = self.tensors.len(),
            n_outer = self.outer_legs().len(),
            "contracting network"
        );
        let mut iter = self.tensors.iter().cloned();
        let first = iter.next().ok_or(EmptyNetwork)?;
        iter.try_fold(first, |acc, t| acc.contract(t))
    }

    /// Contract the network and reshape the result into a matrix with rows
    /// indexed by `rows` and columns by `cols`.
    ///
    /// See [`Tensor::to_matrix`].
    pub fn to_matrix(&self, rows: &[L], cols: &[L])
        -> TensorResult<nd::Array2<C64>>
    {
        self.contract()?.to_matrix(rows, cols)
    }
}

impl<L> TensorNetwork for Network<L>
where L: Leg
{
    type Leg = L;

    fn add_tensor(&mut self, tensor: Tensor<L>) { self.push(tensor); }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::c;

    fn x_gate<L: Leg>(out: L, inp: L, tag: &str) -> Tensor<L> {
        let data = nd::array![[c!(0.0), c!(1.0)], [c!(1.0), c!(0.0)]];
        Tensor::new(data, [out, inp], [tag]).unwrap()
    }

    #[test]
    fn select_by_tag() {
        let mut tn: Network<u32> = Network::new();
        tn.add_tensor(x_gate(1, 0, "first"));
        tn.add_tensor(x_gate(2, 1, "second"));
        assert_eq!(tn.len(), 2);
        assert_eq!(tn.select("first").count(), 1);
        assert_eq!(tn.select("second").count(), 1);
        assert_eq!(tn.select("third").count(), 0);
        assert_eq!(tn.outer_legs(), vec![0, 2]);
    }

    #[test]
    fn contract_chain() {
        // X . X = I
        let tn: Network<u32> =
            [x_gate(1, 0, "a"), x_gate(2, 1, "b")].into_iter().collect();
        let m = tn.to_matrix(&[2], &[0]).unwrap();
        assert_eq!(m, nd::Array2::eye(2));
    }

    #[test]
    fn contract_empty() {
        let tn: Network<u32> = Network::new();
        assert!(matches!(tn.contract(), Err(EmptyNetwork)));
    }
}
