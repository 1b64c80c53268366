use std::hash::Hash;

use roompath_core::Graph;

/// Minimal search interface — provides neighbor enumeration.
pub trait Pather<N> {
    /// Append neighbors of `n` into `buf`, in the order they should be
    /// explored. The caller clears `buf` before calling.
    fn neighbors(&self, n: &N, buf: &mut Vec<N>);
}

impl<N: Clone + Eq + Hash> Pather<N> for Graph<N> {
    fn neighbors(&self, n: &N, buf: &mut Vec<N>) {
        if let Some(ns) = self.neighbors_of(n) {
            buf.extend_from_slice(ns);
        }
    }
}
