use std::{ fmt, hash::Hash };
use itertools::Itertools;
use ndarray::{ self as nd, IxDyn };
use num_complex::Complex64 as C64;
use super::{ TensorError, TensorResult };

use TensorError::*;

/// Requirements for a leg label.
///
/// Legs are opaque to tensors and networks: the only thing that matters is
/// whether two labels are equal. This trait is implemented automatically for
/// every type satisfying its bounds, e.g. integers, strings, and
/// [`Soquet`][crate::bloq::Soquet]s.
pub trait Leg: Clone + Eq + Hash + fmt::Debug { }

impl<T> Leg for T where T: Clone + Eq + Hash + fmt::Debug { }

fn leg_str<L: fmt::Debug>(leg: &L) -> String { format!("{:?}", leg) }

/// A dense tensor over labeled legs.
///
/// The `k`-th axis of the data array belongs to the `k`-th leg. A leg carrying
/// an *n*-qubit register has dimension 2<sup><i>n</i></sup>. A tensor with no
/// legs is a scalar stored as a zero-dimensional array. Tags are free-form
/// strings used to find tensors in a network after the fact; they play no role
/// in contraction other than being merged.
#[derive(Clone, PartialEq, Debug)]
pub struct Tensor<L> {
    data: nd::ArrayD<C64>,
    legs: Vec<L>,
    tags: Vec<String>,
}

impl<L> Tensor<L>
where L: Leg
{
    /// Create a new tensor from an n-dimensional array, a list of legs, and a
    /// list of tags.
    ///
    /// Fails if any leg is repeated, if the number of legs differs from the
    /// number of array axes, or if any axis has length zero. Repeated tags are
    /// dropped.
    pub fn new<S, D, I, T, U>(array: nd::ArrayBase<S, D>, legs: I, tags: T)
        -> TensorResult<Self>
    where
        S: nd::DataOwned<Elem = C64>,
        D: nd::Dimension,
        I: IntoIterator<Item = L>,
        T: IntoIterator<Item = U>,
        U: Into<String>,
    {
        let legs: Vec<L> = legs.into_iter().collect();
        if let Some(dup) = legs.iter().duplicates().next() {
            return Err(DuplicateLeg(leg_str(dup)));
        }
        let shape = array.shape();
        if shape.len() != legs.len() {
            let leg_strs: Box<[String]> = legs.iter().map(leg_str).collect();
            let array_shape: Box<[usize]> = shape.into();
            return Err(IncompatibleShape(leg_strs, array_shape));
        }
        if let Some(k) = shape.iter().position(|n| *n == 0) {
            return Err(EmptyAxis(k));
        }
        let tags: Vec<String> =
            tags.into_iter().map(Into::<String>::into).unique().collect();
        Ok(Self { data: array.into_owned().into_dyn(), legs, tags })
    }

    /// Create a new rank-0 tensor.
    pub fn new_scalar(val: C64) -> Self {
        Self { data: nd::arr0(val).into_dyn(), legs: Vec::new(), tags: Vec::new() }
    }

    /// Return the underlying array.
    pub fn data(&self) -> &nd::ArrayD<C64> { &self.data }

    /// Return the legs of `self`, in axis order.
    pub fn legs(&self) -> &[L] { &self.legs }

    /// Return the tags of `self`.
    pub fn tags(&self) -> &[String] { &self.tags }

    /// Return `true` if `self` carries the tag `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Return `true` if `self` has the leg `leg`.
    pub fn has_leg(&self, leg: &L) -> bool { self.legs.contains(leg) }

    /// Return the axis position of a leg if it exists.
    pub fn leg_pos(&self, leg: &L) -> Option<usize> {
        self.legs.iter().position(|l| l == leg)
    }

    /// Return the rank of `self`.
    pub fn rank(&self) -> usize { self.legs.len() }

    /// If `self` has rank 0, return its value as a single scalar.
    pub fn as_scalar(&self) -> Option<C64> {
        self.legs.is_empty().then(|| self.data.iter().copied().next())
            .flatten()
    }

    /// Return the element-wise conjugate of `self`, keeping legs and tags.
    pub fn conj(&self) -> Self {
        Self {
            data: self.data.mapv(|a| a.conj()),
            legs: self.legs.clone(),
            tags: self.tags.clone(),
        }
    }

    /// Contract `self` with `rhs` over all shared legs, consuming both.
    ///
    /// The result carries the free legs of `self` followed by the free legs of
    /// `rhs`, each group in its original order, and the union of both sets of
    /// tags. Tensors without shared legs are combined by outer product.
    pub fn contract(self, rhs: Self) -> TensorResult<Self> {
        let Self { data: a, legs: legs_a, mut tags } = self;
        let Self { data: b, legs: legs_b, tags: tags_b } = rhs;
        let common: Vec<(usize, usize)> =
            legs_a.iter().enumerate()
            .filter_map(|(ka, leg)| {
                legs_b.iter().position(|l| l == leg).map(|kb| (ka, kb))
            })
            .collect();
        let free_a: Vec<usize> =
            (0..legs_a.len())
            .filter(|k| common.iter().all(|(ka, _)| ka != k))
            .collect();
        let free_b: Vec<usize> =
            (0..legs_b.len())
            .filter(|k| common.iter().all(|(_, kb)| kb != k))
            .collect();

        // move shared axes to the rightmost positions in a and the leftmost in
        // b, then fuse so that the contraction is a single matmul
        let perm_a: Vec<usize> =
            free_a.iter().copied()
            .chain(common.iter().map(|(ka, _)| *ka))
            .collect();
        let perm_b: Vec<usize> =
            common.iter().map(|(_, kb)| *kb)
            .chain(free_b.iter().copied())
            .collect();
        let dim_mismatch =
            common.iter().copied()
            .find(|(ka, kb)| a.shape()[*ka] != b.shape()[*kb]);
        if let Some((ka, kb)) = dim_mismatch {
            let leg = leg_str(&legs_a[ka]);
            return Err(DimMismatch(leg, a.shape()[ka], b.shape()[kb]));
        }
        let shape_free_a: Vec<usize> =
            free_a.iter().map(|k| a.shape()[*k]).collect();
        let shape_free_b: Vec<usize> =
            free_b.iter().map(|k| b.shape()[*k]).collect();
        let dim_free_a: usize = shape_free_a.iter().product();
        let dim_comm: usize = common.iter().map(|(ka, _)| a.shape()[*ka]).product();
        let dim_free_b: usize = shape_free_b.iter().product();
        let a = a.permuted_axes(perm_a);
        let a: nd::CowArray<C64, nd::Ix2> =
            a.as_standard_layout().into_shape((dim_free_a, dim_comm))?;
        let b = b.permuted_axes(perm_b);
        let b: nd::CowArray<C64, nd::Ix2> =
            b.as_standard_layout().into_shape((dim_comm, dim_free_b))?;
        let c: nd::Array2<C64> = a.dot(&b);

        let new_shape: Vec<usize> =
            shape_free_a.into_iter().chain(shape_free_b).collect();
        let data = c.into_shape(IxDyn(&new_shape))?;
        let legs: Vec<L> =
            free_a.iter().map(|k| legs_a[*k].clone())
            .chain(free_b.iter().map(|k| legs_b[*k].clone()))
            .collect();
        tags_b.into_iter()
            .for_each(|tag| { if !tags.contains(&tag) { tags.push(tag); } });
        Ok(Self { data, legs, tags })
    }

    /// Reshape `self` into a matrix whose row index runs over `rows` and whose
    /// column index runs over `cols`.
    ///
    /// Both lists together must name every leg of `self` exactly once. The
    /// first leg in each list is the most significant bit of the corresponding
    /// matrix index.
    pub fn to_matrix(&self, rows: &[L], cols: &[L])
        -> TensorResult<nd::Array2<C64>>
    {
        let perm: Vec<usize> =
            rows.iter().chain(cols)
            .map(|leg| {
                self.leg_pos(leg).ok_or_else(|| MissingLeg(leg_str(leg)))
            })
            .collect::<TensorResult<_>>()?;
        if let Some(dup) = perm.iter().duplicates().next() {
            return Err(DuplicateLeg(leg_str(&self.legs[*dup])));
        }
        if perm.len() != self.legs.len() {
            let uncovered: Box<[String]> =
                self.legs.iter()
                .filter(|leg| !rows.contains(leg) && !cols.contains(leg))
                .map(leg_str)
                .collect();
            return Err(UncoveredLegs(uncovered));
        }
        let shape = self.data.shape();
        let dim_rows: usize = perm[..rows.len()].iter().map(|k| shape[*k]).product();
        let dim_cols: usize = perm[rows.len()..].iter().map(|k| shape[*k]).product();
        let permuted = self.data.view().permuted_axes(perm);
        let matrix =
            permuted.as_standard_layout()
            .into_shape((dim_rows, dim_cols))?
            .into_owned();
        Ok(matrix)
    }

    /// Return `true` if `self` and `other` have identical legs and all
    /// corresponding elements differ in modulus by less than `thresh`, which
    /// defaults to `1e-12`.
    pub fn approx_eq(&self, other: &Self, thresh: Option<f64>) -> bool {
        let eps = thresh.unwrap_or(1e-12);
        self.legs == other.legs
            && self.data.shape() == other.data.shape()
            && self.data.iter().zip(&other.data)
                .all(|(l, r)| (*l - *r).norm() < eps)
    }
}

impl<L> fmt::Display for Tensor<L>
where L: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.data, f)?;
        write!(f, "\n{{ ")?;
        write!(f, "{}", self.legs.iter().map(|leg| format!("{:?}", leg)).join(", "))?;
        write!(f, " }} [{}]", self.tags.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::c;

    fn t_matrix() -> nd::Array2<C64> {
        nd::array![[c!(1.0), c!(0.0)], [c!(0.0), c!(e std::f64::consts::FRAC_PI_4)]]
    }

    #[test]
    fn new_checks_shape() {
        let ok = Tensor::new(t_matrix(), ["out", "in"], ["T"]);
        assert!(ok.is_ok());
        let dup = Tensor::new(t_matrix(), ["a", "a"], Vec::<String>::new());
        assert!(matches!(dup, Err(DuplicateLeg(_))));
        let short = Tensor::new(t_matrix(), ["a"], Vec::<String>::new());
        assert!(matches!(short, Err(IncompatibleShape(..))));
        let empty: nd::Array2<C64> = nd::Array2::zeros((2, 0));
        let bad = Tensor::new(empty, ["a", "b"], Vec::<String>::new());
        assert!(matches!(bad, Err(EmptyAxis(1))));
    }

    #[test]
    fn tags_deduplicated() {
        let t = Tensor::new(t_matrix(), [0, 1], ["T", "x", "T"]).unwrap();
        assert_eq!(t.tags(), ["T".to_string(), "x".to_string()]);
        assert!(t.has_tag("x"));
        assert!(!t.has_tag("y"));
    }

    #[test]
    fn contract_matmul() {
        // (out, mid) . (mid, in) = ordinary matrix product
        let a = Tensor::new(t_matrix(), ["out", "mid"], ["a"]).unwrap();
        let b = Tensor::new(t_matrix(), ["mid", "in"], ["b"]).unwrap();
        let c = a.contract(b).unwrap();
        assert_eq!(c.legs(), ["out", "in"]);
        assert_eq!(c.tags(), ["a".to_string(), "b".to_string()]);
        let m = c.to_matrix(&["out"], &["in"]).unwrap();
        assert!((m[[0, 0]] - c!(1.0)).norm() < 1e-12);
        assert!((m[[1, 1]] - c!(i 1.0)).norm() < 1e-12);
        assert!(m[[0, 1]].norm() < 1e-12);
        assert!(m[[1, 0]].norm() < 1e-12);
    }

    #[test]
    fn contract_to_scalar() {
        let ket: nd::Array1<C64> = nd::array![c!(0.0), c!(1.0)];
        let a = Tensor::new(ket.clone(), ["w"], Vec::<String>::new()).unwrap();
        let b = Tensor::new(ket, ["w"], Vec::<String>::new()).unwrap();
        let c = a.contract(b).unwrap();
        assert_eq!(c.rank(), 0);
        assert_eq!(c.as_scalar(), Some(c!(1.0)));
    }

    #[test]
    fn scalars() {
        let s: Tensor<u8> = Tensor::new_scalar(c!(0.5, -2.0));
        assert_eq!(s.rank(), 0);
        assert_eq!(s.as_scalar(), Some(c!(0.5, -2.0)));
        assert!(s.tags().is_empty());
        let t = Tensor::new(t_matrix(), [0_u8, 1], ["T"]).unwrap();
        assert_eq!(t.as_scalar(), None);
        // scalars contract by plain multiplication
        let prod = s.contract(Tensor::new_scalar(c!(0.0, 1.0))).unwrap();
        assert_eq!(prod.as_scalar(), Some(c!(2.0, 0.5)));
    }

    #[test]
    fn approx_eq() {
        let t = Tensor::new(t_matrix(), ["out", "in"], ["T"]).unwrap();
        let nudged = Tensor::new(t_matrix().mapv(|a| a + 1e-14), ["out", "in"], ["T"]).unwrap();
        assert!(t.approx_eq(&nudged, None));
        assert!(!t.approx_eq(&nudged, Some(1e-15)));
        let swapped = Tensor::new(t_matrix(), ["in", "out"], ["T"]).unwrap();
        assert!(!t.approx_eq(&swapped, None));
        assert!(!t.approx_eq(&t.conj(), None));
    }

    #[test]
    fn outer_product() {
        let ket: nd::Array1<C64> = nd::array![c!(1.0), c!(0.0)];
        let a = Tensor::new(ket.clone(), [0], Vec::<String>::new()).unwrap();
        let b = Tensor::new(ket, [1], Vec::<String>::new()).unwrap();
        let c = a.contract(b).unwrap();
        assert_eq!(c.legs(), [0, 1]);
        assert_eq!(c.data().shape(), [2, 2]);
        assert_eq!(c.data()[[0, 0].as_slice()], c!(1.0));
    }

    #[test]
    fn register_legs() {
        // a two-qubit register is a single leg of dimension 4
        let id4: nd::Array2<C64> = nd::Array2::eye(4);
        let a = Tensor::new(id4.clone(), ["out", "mid"], ["a"]).unwrap();
        let b = Tensor::new(id4, ["mid", "in"], ["b"]).unwrap();
        let c = a.contract(b).unwrap();
        assert_eq!(c.data().shape(), [4, 4]);
        assert_eq!(c.to_matrix(&["out"], &["in"]).unwrap(), nd::Array2::eye(4));

        let x: nd::Array1<C64> = nd::Array1::zeros(4);
        let y: nd::Array1<C64> = nd::Array1::zeros(2);
        let x = Tensor::new(x, ["w"], Vec::<String>::new()).unwrap();
        let y = Tensor::new(y, ["w"], Vec::<String>::new()).unwrap();
        assert!(matches!(x.contract(y), Err(DimMismatch(_, 4, 2))));
    }

    #[test]
    fn to_matrix_transposes() {
        let t = Tensor::new(t_matrix(), ["out", "in"], ["T"]).unwrap();
        let m = t.to_matrix(&["in"], &["out"]).unwrap();
        assert_eq!(m, t_matrix().reversed_axes());
        assert!(matches!(
            t.to_matrix(&["out"], &["nope"]),
            Err(MissingLeg(_)),
        ));
        assert!(matches!(t.to_matrix(&["out"], &[]), Err(UncoveredLegs(_))));
    }

    #[test]
    fn conj() {
        let t = Tensor::new(t_matrix(), ["out", "in"], ["T"]).unwrap();
        let tc = t.conj();
        assert_eq!(tc.legs(), t.legs());
        assert!((tc.data()[[1, 1].as_slice()] - t_matrix()[[1, 1]].conj()).norm() < 1e-15);
    }
}
