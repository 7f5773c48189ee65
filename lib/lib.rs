#![allow(dead_code, non_snake_case, non_upper_case_globals)]

//! This package describes quantum operations as *bloqs*: immutable,
//! backend-independent values that can report their resource cost, embed
//! themselves in a [tensor network][tn] for simulation, lower themselves to
//! ordinary [circuit][qcircuits] operations, and draw themselves in wire
//! diagrams.
//!
//! - [`bloq`] defines the [`Bloq`][bloq::Bloq] trait every operation
//! implements, together with the wire-endpoint handles used to connect them.
//! - [`signature`] describes the named, sized registers a bloq acts on.
//! - [`tensor`] provides the tensor-network boundary and a small dense network
//! for checking embeddings numerically.
//! - [`circuit`] provides circuit-model gates, operations, and qubit
//! management for lowering bloqs.
//! - [`cost`] counts T gates, Clifford gates, and rotations.
//! - [`drawing`] renders bloqs with [graphviz].
//! - [`basic_gates`] holds concrete bloqs, starting with the
//! [T gate][basic_gates::TGate].
//!
//! ```
//! use bloqs::{ basic_gates::TGate, bloq::Bloq };
//!
//! let t = TGate::default();
//! assert_eq!(t.pretty_name(), "T");
//! assert_eq!(t.adjoint().pretty_name(), "T†");
//! assert_eq!(t.t_complexity().t, 1);
//! ```
//!
//! [tn]: https://en.wikipedia.org/wiki/Tensor_network
//! [qcircuits]: https://en.wikipedia.org/wiki/Quantum_circuit
//! [graphviz]: https://graphviz.org/
//!
//! # Further reading
//! - S. Bravyi, A. Kitaev, "Universal quantum computation with ideal Clifford
//! gates and noisy ancillas."
//! [arXiv:quant-ph/0403025](https://arxiv.org/abs/quant-ph/0403025)
//! - J. Biamonte, V. Bergholm, "Tensor networks in a nutshell."
//! [arXiv:1708.00006](https://arxiv.org/abs/1708.00006)
//!

pub mod phase;
pub mod signature;
pub mod tensor;
pub mod circuit;
pub mod cost;
pub mod bloq;
pub mod basic_gates;
pub mod doc;
pub mod drawing;
pub(crate) mod vizdefs;

pub extern crate num_complex;
/// Handy macro to create `num_complex::Complex64`s from more natural and
/// succinct syntax.
///
/// ```
/// use std::f64::consts::PI;
/// use num_complex::Complex64;
/// use bloqs::c;
///
/// assert_eq!( c!(i (-1.0)),    Complex64::new(0.0, -1.0)      );
/// assert_eq!( c!(e PI),        Complex64::cis(PI)             );
/// assert_eq!( c!(1.0),         Complex64::new(1.0, 0.0)       );
/// assert_eq!( c!(1.0 + i 1.0), Complex64::new(1.0, 1.0)       );
/// assert_eq!( c!(1.0 - i 1.0), Complex64::new(1.0, -1.0)      );
/// assert_eq!( c!(1.0 + 1.0 i), Complex64::new(1.0, 1.0)       );
/// assert_eq!( c!(1.0 - 1.0 i), Complex64::new(1.0, -1.0)      );
/// assert_eq!( c!(1.0, 1.0),    Complex64::new(1.0, 1.0)       );
/// assert_eq!( c!(1.0, e PI),   Complex64::from_polar(1.0, PI) );
/// ```
#[macro_export]
macro_rules! c {
    ( i $im:expr )
        => { $crate::num_complex::Complex64::new(0.0, $im) };
    ( e $ph:expr )
        => { $crate::num_complex::Complex64::cis($ph) };
    ( $re:expr )
        => { $crate::num_complex::Complex64::new($re, 0.0) };
    ( $re:literal + i $im:literal )
        => { $crate::num_complex::Complex64::new($re, $im) };
    ( $re:literal - i $im:literal )
        => { $crate::num_complex::Complex64::new($re, -$im) };
    ( $re:literal + $im:literal i )
        => { $crate::num_complex::Complex64::new($re, $im) };
    ( $re:literal - $im:literal i )
        => { $crate::num_complex::Complex64::new($re, -$im) };
    ( $r:expr, e $ph:expr )
        => { $crate::num_complex::Complex64::from_polar($r, $ph) };
    ( $re:expr, $im:expr )
        => { $crate::num_complex::Complex64::new($re, $im) };
}
