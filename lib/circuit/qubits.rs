use std::{ fmt, hash::Hash };
use rustc_hash::FxHashSet;
use tracing::trace;
use super::{ CircuitError, CircuitResult };

use CircuitError::*;

/// Allocator for qubit handles.
///
/// Bloqs that need scratch space request fresh qubits through this trait while
/// being lowered to circuit operations; single-qubit gates receive one for
/// uniformity but never use it.
pub trait QubitManager {
    /// Handle type for a single qubit.
    type Qubit: Clone + Eq + Hash + fmt::Debug;

    /// Allocate `n` fresh qubits.
    fn qalloc(&mut self, n: usize) -> Vec<Self::Qubit>;

    /// Return qubits to the manager.
    ///
    /// Fails if any of the qubits is not currently allocated; in that case no
    /// qubit is freed.
    fn qfree(&mut self, qubits: &[Self::Qubit]) -> CircuitResult<()>;
}

/// A qubit identified by its position on a line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineQubit(pub usize);

impl fmt::Display for LineQubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q({})", self.0)
    }
}

/// A [`QubitManager`] that hands out [`LineQubit`]s with increasing indices,
/// starting from a fixed offset, and never reuses them.
#[derive(Clone, Debug, Default)]
pub struct SimpleQubitManager {
    next: usize,
    live: FxHashSet<LineQubit>,
}

impl SimpleQubitManager {
    /// Create a new manager whose first allocated qubit is `LineQubit(start)`.
    pub fn new(start: usize) -> Self {
        Self { next: start, live: FxHashSet::default() }
    }

    /// Return the number of currently allocated qubits.
    pub fn num_live(&self) -> usize { self.live.len() }

    /// Return `true` if `q` is currently allocated.
    pub fn is_live(&self, q: &LineQubit) -> bool { self.live.contains(q) }
}

impl QubitManager for SimpleQubitManager {
    type Qubit = LineQubit;

    fn qalloc(&mut self, n: usize) -> Vec<LineQubit> {
        let qubits: Vec<LineQubit> =
            (self.next..self.next + n).map(LineQubit).collect();
        self.next += n;
        self.live.extend(qubits.iter().copied());
        trace!(n, live = self.live.len(), "allocated qubits");
        qubits
    }

    fn qfree(&mut self, qubits: &[LineQubit]) -> CircuitResult<()> {
        if let Some(q) = qubits.iter().find(|q| !self.live.contains(q)) {
            return Err(UnknownQubit(q.to_string()));
        }
        qubits.iter().for_each(|q| { self.live.remove(q); });
        trace!(n = qubits.len(), live = self.live.len(), "freed qubits");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_free() {
        let mut qm = SimpleQubitManager::new(10);
        let a = qm.qalloc(2);
        let b = qm.qalloc(1);
        assert_eq!(a, vec![LineQubit(10), LineQubit(11)]);
        assert_eq!(b, vec![LineQubit(12)]);
        assert_eq!(qm.num_live(), 3);
        qm.qfree(&a).unwrap();
        assert_eq!(qm.num_live(), 1);
        assert!(qm.is_live(&LineQubit(12)));
        assert!(!qm.is_live(&LineQubit(10)));
    }

    #[test]
    fn double_free() {
        let mut qm = SimpleQubitManager::default();
        let a = qm.qalloc(2);
        qm.qfree(&a[..1]).unwrap();
        assert_eq!(qm.qfree(&a), Err(UnknownQubit("q(0)".to_string())));
        // the still-live qubit was not freed by the failed call
        assert!(qm.is_live(&a[1]));
    }
}
