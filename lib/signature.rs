//! Named, sized registers describing the ports of a bloq.
//!
//! A [`Signature`] is the typed interface of a bloq: an ordered list of
//! [`Register`]s, each naming a wire bundle and its width in qubits. Signatures
//! are immutable once built; there is no API that adds, removes, or resizes a
//! register after construction.

use std::fmt;
use itertools::Itertools;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("duplicate register name '{0}'")]
    DuplicateRegister(String),

    #[error("register '{0}' has zero width")]
    ZeroWidth(String),
}
pub type SignatureResult<T> = Result<T, SignatureError>;
use SignatureError::*;

/// The direction(s) in which a register carries data through a bloq.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Side {
    /// The register is only an input; the bloq consumes it.
    Left,
    /// The register is only an output; the bloq allocates it.
    Right,
    /// The register is both an input and an output.
    #[default]
    Thru,
}

impl Side {
    /// Return `true` if the register appears on the input side of the bloq.
    pub fn is_left(&self) -> bool { matches!(self, Self::Left | Self::Thru) }

    /// Return `true` if the register appears on the output side of the bloq.
    pub fn is_right(&self) -> bool { matches!(self, Self::Right | Self::Thru) }
}

/// A single named wire bundle.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Register {
    name: String,
    bitsize: usize,
    side: Side,
}

impl Register {
    /// Create a new `THRU` register.
    pub fn new<S>(name: S, bitsize: usize) -> Self
    where S: Into<String>
    {
        Self { name: name.into(), bitsize, side: Side::Thru }
    }

    /// Set the side of the register.
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Return the name of the register.
    pub fn name(&self) -> &str { &self.name }

    /// Return the width of the register in qubits.
    pub fn bitsize(&self) -> usize { self.bitsize }

    /// Return the side of the register.
    pub fn side(&self) -> Side { self.side }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.bitsize)
    }
}

/// Ordered collection of uniquely named [`Register`]s.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    regs: Vec<Register>,
}

impl Signature {
    /// Build a signature of `THRU` registers from `(name, bitsize)` pairs.
    ///
    /// Fails if any name is repeated or any bitsize is zero.
    ///
    /// ```
    /// # use bloqs::signature::Signature;
    /// let sig = Signature::build([("q", 1)]).unwrap();
    /// assert_eq!(sig.len(), 1);
    /// assert_eq!(sig.get("q").map(|r| r.bitsize()), Some(1));
    /// ```
    pub fn build<I, S>(regs: I) -> SignatureResult<Self>
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        Self::from_registers(
            regs.into_iter().map(|(name, n)| Register::new(name, n)))
    }

    /// Collect a signature from arbitrary registers.
    ///
    /// Fails if any name is repeated or any bitsize is zero.
    pub fn from_registers<I>(regs: I) -> SignatureResult<Self>
    where I: IntoIterator<Item = Register>
    {
        let regs: Vec<Register> = regs.into_iter().collect();
        if let Some(reg) = regs.iter().find(|reg| reg.bitsize == 0) {
            return Err(ZeroWidth(reg.name.clone()));
        }
        if let Some(dup) = regs.iter().map(|reg| &reg.name).duplicates().next() {
            return Err(DuplicateRegister(dup.clone()));
        }
        Ok(Self { regs })
    }

    /// Return a signature holding a single one-qubit `THRU` register.
    pub fn qubit<S>(name: S) -> Self
    where S: Into<String>
    {
        Self { regs: vec![Register::new(name, 1)] }
    }

    /// Return the number of registers.
    pub fn len(&self) -> usize { self.regs.len() }

    /// Return `true` if there are no registers.
    pub fn is_empty(&self) -> bool { self.regs.is_empty() }

    /// Look up a register by name.
    pub fn get(&self, name: &str) -> Option<&Register> {
        self.regs.iter().find(|reg| reg.name == name)
    }

    /// Return an iterator over all registers in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Register> { self.regs.iter() }

    /// Return an iterator over all registers on the input side.
    pub fn lefts(&self) -> impl Iterator<Item = &Register> + '_ {
        self.regs.iter().filter(|reg| reg.side.is_left())
    }

    /// Return an iterator over all registers on the output side.
    pub fn rights(&self) -> impl Iterator<Item = &Register> + '_ {
        self.regs.iter().filter(|reg| reg.side.is_right())
    }

    /// Return the width of the wider side, in qubits.
    pub fn n_qubits(&self) -> usize {
        let l: usize = self.lefts().map(|reg| reg.bitsize).sum();
        let r: usize = self.rights().map(|reg| reg.bitsize).sum();
        l.max(r)
    }
}

impl<'a> IntoIterator for &'a Signature {
    type Item = &'a Register;
    type IntoIter = std::slice::Iter<'a, Register>;

    fn into_iter(self) -> Self::IntoIter { self.regs.iter() }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self.regs.iter().join(", "))
    }
}
