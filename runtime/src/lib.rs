//! Provides the compiled automaton representation and the simulation that
//! decides whether an input is accepted by it.
//!
//! # Example
//!
//! ```rust
//! use thompson_runtime::*;
//!
//! // approximate to `a.b`
//! let automaton = Automaton::new(
//!     vec![
//!         Node::consume('a', NodeIdx::from(1)),
//!         Node::epsilon(NodeIdx::from(2)),
//!         Node::consume('b', NodeIdx::from(3)),
//!         Node::empty(),
//!     ],
//!     NodeIdx::from(0),
//!     NodeIdx::from(3),
//! );
//!
//! assert!(matches(&automaton, "ab"));
//! assert!(!matches(&automaton, "abb"));
//! ```

#[macro_use]
mod macros;

pub mod matcher;
mod sparse_set;

pub use matcher::{matches, matches_symbols};

use std::fmt::Display;

/// An offset into an automaton's node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIdx(usize);

impl NodeIdx {
    #[inline]
    pub const fn as_usize(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeIdx {
    fn from(idx: usize) -> Self {
        Self(idx)
    }
}

impl Display for NodeIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A single state of the automaton.
///
/// A node carrying a symbol consumes exactly that symbol and continues along
/// its first edge. A node without a symbol is an epsilon node, following
/// zero, one or both of its edges without consuming input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    symbol: Option<char>,
    edge1: Option<NodeIdx>,
    edge2: Option<NodeIdx>,
}

impl Node {
    /// An epsilon node with no outgoing edges, as used for a fresh accept
    /// node.
    pub const fn empty() -> Self {
        Self {
            symbol: None,
            edge1: None,
            edge2: None,
        }
    }

    /// A node that consumes `symbol` and moves to `next`.
    pub const fn consume(symbol: char, next: NodeIdx) -> Self {
        Self {
            symbol: Some(symbol),
            edge1: Some(next),
            edge2: None,
        }
    }

    /// An epsilon node with a single outgoing edge.
    pub const fn epsilon(next: NodeIdx) -> Self {
        Self {
            symbol: None,
            edge1: Some(next),
            edge2: None,
        }
    }

    /// An epsilon node branching to both `edge1` and `edge2`.
    pub const fn split(edge1: NodeIdx, edge2: NodeIdx) -> Self {
        Self {
            symbol: None,
            edge1: Some(edge1),
            edge2: Some(edge2),
        }
    }

    pub const fn symbol(&self) -> Option<char> {
        self.symbol
    }

    pub const fn edge1(&self) -> Option<NodeIdx> {
        self.edge1
    }

    pub const fn edge2(&self) -> Option<NodeIdx> {
        self.edge2
    }

    /// Returns `true` if the node can be left without consuming input.
    pub const fn is_epsilon(&self) -> bool {
        self.symbol.is_none()
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.symbol, self.edge1, self.edge2) {
            (Some(symbol), Some(next), _) => write!(f, "consume {:?} -> {}", symbol, next),
            (Some(symbol), None, _) => write!(f, "consume {:?}", symbol),
            (None, Some(x), Some(y)) => write!(f, "split -> {}, {}", x, y),
            (None, Some(next), None) | (None, None, Some(next)) => {
                write!(f, "epsilon -> {}", next)
            }
            (None, None, None) => write!(f, "accept"),
        }
    }
}

/// A fully wired automaton with a designated initial and accept node.
///
/// The automaton owns every node it references, back edges included, and
/// exposes no way of rewiring them once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    nodes: Vec<Node>,
    initial: NodeIdx,
    accept: NodeIdx,
}

impl Automaton {
    #[must_use]
    pub fn new(nodes: Vec<Node>, initial: NodeIdx, accept: NodeIdx) -> Self {
        Self {
            nodes,
            initial,
            accept,
        }
    }

    pub fn initial(&self) -> NodeIdx {
        self.initial
    }

    pub fn accept(&self) -> NodeIdx {
        self.accept
    }

    /// Returns the node at `idx` if it exists.
    pub fn get(&self, idx: NodeIdx) -> Option<&Node> {
        self.nodes.get(idx.as_usize())
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the number of nodes in the automaton.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Display for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (id, node) in self.nodes.iter().enumerate() {
            let idx = NodeIdx::from(id);
            let marker = if idx == self.initial { "> " } else { "  " };
            writeln!(f, "{}{}: {}", marker, idx, node)?
        }

        Ok(())
    }
}

impl std::ops::Index<NodeIdx> for Automaton {
    type Output = Node;

    fn index(&self, index: NodeIdx) -> &Self::Output {
        &self.nodes[index.as_usize()]
    }
}
