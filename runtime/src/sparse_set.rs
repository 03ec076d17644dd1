//! Provides a sparse set of node indices, used as the state set of the
//! simulation in place of a HashSet.

use crate::NodeIdx;

/// A set of automaton nodes with constant time insertion, membership and
/// clearing.
///
/// Members are kept in insertion order in `dense`. `sparse` maps a node
/// index to its slot in `dense` and is only trusted when that slot points
/// back at the same node.
pub struct StateSet {
    dense: Vec<NodeIdx>,
    sparse: Vec<usize>,
}

impl StateSet {
    /// Initializes a new set able to hold the node indices `0..max_len`
    /// without reallocating.
    #[must_use]
    pub fn new(max_len: usize) -> Self {
        Self {
            dense: Vec::with_capacity(max_len),
            sparse: vec![0; max_len],
        }
    }

    /// Returns `true` if the set contains no nodes.
    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    /// Returns the number of nodes in the set.
    #[allow(unused)]
    pub fn len(&self) -> usize {
        self.dense.len()
    }

    /// Returns the number of node indices the set can address without
    /// growing.
    #[allow(unused)]
    pub fn capacity(&self) -> usize {
        self.sparse.len()
    }

    /// Inserts a node, returning `false` if it was already a member.
    pub fn insert(&mut self, idx: NodeIdx) -> bool {
        if self.contains(idx) {
            return false;
        }

        let val = idx.as_usize();
        if self.sparse.len() <= val {
            // double the size.
            self.sparse.resize(val * 2 + 1, 0);
        }

        self.sparse[val] = self.dense.len();
        self.dense.push(idx);
        true
    }

    /// Returns `true` if the set contains the node.
    pub fn contains(&self, idx: NodeIdx) -> bool {
        self.sparse
            .get(idx.as_usize())
            .and_then(|&slot| self.dense.get(slot))
            // if none, the bounds of the set are exceeded and thus doesn't
            // contain the value.
            .map_or(false, |&member| member == idx)
    }

    /// Clears the set, removing all nodes.
    pub fn clear(&mut self) {
        self.dense.clear();
    }

    /// Iterates the members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = NodeIdx> + '_ {
        self.dense.iter().copied()
    }
}

impl core::fmt::Debug for StateSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "StateSet({:?})", &self.dense)
    }
}
