//! Builds an automaton from a postfix token sequence with Thompson's
//! construction.
//!
//! Every token pushes one fragment onto an operand stack. Operators pop
//! their operands and wire them together by patching the still unwired
//! accept node of each operand in place, rather than copying it.

use thompson_runtime::{Automaton, Node, NodeIdx};

use crate::postfix::Postfix;
use crate::token::{Operator, Token};

/// Represents the ways a postfix sequence can fail to reduce to a single
/// automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildErr {
    /// An operator found fewer fragments on the stack than it consumes.
    OperandUnderflow(Operator),
    /// The stack held the given number of fragments once every token was
    /// consumed, rather than exactly one.
    Unreduced(usize),
}

impl std::fmt::Display for BuildErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildErr::OperandUnderflow(op) => write!(
                f,
                "operator '{}' expects {} operand(s)",
                op,
                op.arity()
            ),
            BuildErr::Unreduced(cnt) => {
                write!(f, "expected a single fragment, found {}", cnt)
            }
        }
    }
}

/// A partially built automaton whose accept node has no outgoing edges yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fragment {
    initial: NodeIdx,
    accept: NodeIdx,
}

impl Fragment {
    fn new(initial: NodeIdx, accept: NodeIdx) -> Self {
        Self { initial, accept }
    }
}

/// Backing storage for every node of the automaton under construction.
///
/// Unlike [Automaton], the arena allows a fragment's accept node to be
/// rewired after the fact.
#[derive(Debug, Default)]
struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    fn next_idx(&self) -> NodeIdx {
        NodeIdx::from(self.nodes.len())
    }

    fn push(&mut self, node: Node) -> NodeIdx {
        let idx = self.next_idx();
        self.nodes.push(node);
        idx
    }

    /// Rewires the accept node of a consumed fragment.
    fn patch_mut(&mut self, accept: NodeIdx, node: Node) {
        if let Some(slot) = self.nodes.get_mut(accept.as_usize()) {
            *slot = node;
        }
    }

    /// Pushes a fresh split node branching to `edge1` and to a fresh accept
    /// node allocated directly after it, returning both.
    fn split_with_accept(&mut self, edge1: NodeIdx) -> Fragment {
        let split = self.next_idx();
        let accept = NodeIdx::from(split.as_usize() + 1);

        self.push(Node::split(edge1, accept));
        self.push(Node::empty());
        Fragment::new(split, accept)
    }

    fn literal(&mut self, symbol: char) -> Fragment {
        let initial = self.next_idx();
        let accept = NodeIdx::from(initial.as_usize() + 1);

        self.push(Node::consume(symbol, accept));
        self.push(Node::empty());
        Fragment::new(initial, accept)
    }

    fn concatenate(&mut self, a: Fragment, b: Fragment) -> Fragment {
        self.patch_mut(a.accept, Node::epsilon(b.initial));
        Fragment::new(a.initial, b.accept)
    }

    fn alternate(&mut self, a: Fragment, b: Fragment) -> Fragment {
        let accept = self.push(Node::empty());
        let split = self.push(Node::split(a.initial, b.initial));

        self.patch_mut(a.accept, Node::epsilon(accept));
        self.patch_mut(b.accept, Node::epsilon(accept));
        Fragment::new(split, accept)
    }

    fn zero_or_more(&mut self, a: Fragment) -> Fragment {
        let Fragment { initial, accept } = self.split_with_accept(a.initial);

        // the old accept node becomes the loop decision.
        self.patch_mut(a.accept, Node::split(a.initial, accept));
        Fragment::new(initial, accept)
    }

    fn one_or_more(&mut self, a: Fragment) -> Fragment {
        let Fragment {
            initial: split,
            accept,
        } = self.split_with_accept(a.initial);

        self.patch_mut(a.accept, Node::split(split, accept));
        // at least one pass through the operand is required.
        Fragment::new(a.initial, accept)
    }

    fn zero_or_one(&mut self, a: Fragment) -> Fragment {
        let split = self.next_idx();
        let accept = NodeIdx::from(split.as_usize() + 1);

        self.push(Node::split(accept, a.initial));
        self.push(Node::empty());
        self.patch_mut(a.accept, Node::split(accept, accept));
        Fragment::new(split, accept)
    }

    fn into_automaton(self, fragment: Fragment) -> Automaton {
        Automaton::new(self.nodes, fragment.initial, fragment.accept)
    }
}

fn pop_operand(stack: &mut Vec<Fragment>, op: Operator) -> Result<Fragment, BuildErr> {
    stack.pop().ok_or(BuildErr::OperandUnderflow(op))
}

/// Pops the right then the left operand of a binary operator, returning
/// them in left, right order.
fn pop_operands(
    stack: &mut Vec<Fragment>,
    op: Operator,
) -> Result<(Fragment, Fragment), BuildErr> {
    let b = pop_operand(stack, op)?;
    let a = pop_operand(stack, op)?;

    Ok((a, b))
}

/// Builds an automaton from a postfix token sequence.
///
/// # Example
///
/// ```
/// use thompson_compiler::builder::build;
/// use thompson_compiler::postfix::Postfix;
/// use thompson_runtime::matches;
///
/// let postfix: Postfix = "ab.*".parse().unwrap();
/// let automaton = build(&postfix).unwrap();
///
/// assert!(matches(&automaton, "abab"));
/// assert!(!matches(&automaton, "aba"));
/// ```
pub fn build(postfix: &Postfix) -> Result<Automaton, BuildErr> {
    let mut arena = Arena::default();
    let mut stack: Vec<Fragment> = Vec::new();

    for &token in postfix.as_ref() {
        let fragment = match token {
            Token::Literal(symbol) => arena.literal(symbol),
            // grouping never survives conversion, when handed one directly
            // it is just another symbol.
            Token::GroupOpen | Token::GroupClose => arena.literal(token.as_char()),
            Token::Operator(op @ Operator::Concatenate) => {
                let (a, b) = pop_operands(&mut stack, op)?;
                arena.concatenate(a, b)
            }
            Token::Operator(op @ Operator::Alternate) => {
                let (a, b) = pop_operands(&mut stack, op)?;
                arena.alternate(a, b)
            }
            Token::Operator(op @ Operator::ZeroOrMore) => {
                let a = pop_operand(&mut stack, op)?;
                arena.zero_or_more(a)
            }
            Token::Operator(op @ Operator::OneOrMore) => {
                let a = pop_operand(&mut stack, op)?;
                arena.one_or_more(a)
            }
            Token::Operator(op @ Operator::ZeroOrOne) => {
                let a = pop_operand(&mut stack, op)?;
                arena.zero_or_one(a)
            }
        };

        stack.push(fragment);
    }

    match stack.as_slice() {
        [fragment] => Ok(arena.into_automaton(*fragment)),
        fragments => Err(BuildErr::Unreduced(fragments.len())),
    }
}
