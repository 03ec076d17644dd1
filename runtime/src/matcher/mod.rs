//! Simulates an [Automaton] against an input by tracking every node it could
//! occupy at once.

use crate::sparse_set::StateSet;
use crate::{Automaton, NodeIdx};

/// Adds `idx` and everything reachable from it over epsilon edges to
/// `states`.
///
/// Expansion stops at symbol nodes, at the accept node and at nodes already
/// in the set, the last of which keeps epsilon cycles such as `(a*)*` from
/// looping.
fn add_state(automaton: &Automaton, states: &mut StateSet, idx: NodeIdx) {
    let accept = automaton.accept();
    let mut pending = vec![idx];

    while let Some(idx) = pending.pop() {
        let node = match automaton.get(idx) {
            // Don't visit states we've already added.
            Some(_) if states.contains(idx) => continue,
            // an edge leading outside the arena is a dead end.
            None => continue,
            Some(node) => {
                states.insert(idx);
                node
            }
        };

        if idx == accept || !node.is_epsilon() {
            continue;
        }

        // edge1 is pushed last so that it is expanded first.
        pending.extend(node.edge2());
        pending.extend(node.edge1());
    }
}

/// Returns `true` if consuming every symbol of `input` drives `automaton`
/// from its initial node into its accept node.
///
/// # Example
///
/// ```
/// use thompson_runtime::*;
///
/// // approximate to `a?`
/// let automaton = Automaton::new(
///     vec![
///         Node::consume('a', NodeIdx::from(1)),
///         Node::split(NodeIdx::from(3), NodeIdx::from(3)),
///         Node::split(NodeIdx::from(3), NodeIdx::from(0)),
///         Node::empty(),
///     ],
///     NodeIdx::from(2),
///     NodeIdx::from(3),
/// );
///
/// assert!(matches(&automaton, ""));
/// assert!(matches(&automaton, "a"));
/// assert!(!matches(&automaton, "aa"));
/// ```
pub fn matches(automaton: &Automaton, input: &str) -> bool {
    matches_symbols(automaton, input.chars())
}

/// Symbol-iterator form of [matches], comparing each item element for
/// element against the symbol nodes.
pub fn matches_symbols<I>(automaton: &Automaton, symbols: I) -> bool
where
    I: IntoIterator<Item = char>,
{
    use core::mem::swap;

    let node_cnt = automaton.len();
    let mut current = StateSet::new(node_cnt);
    let mut next = StateSet::new(node_cnt);

    add_state(automaton, &mut current, automaton.initial());

    for symbol in symbols {
        for idx in current.iter() {
            let target = automaton
                .get(idx)
                .filter(|node| node.symbol() == Some(symbol))
                .and_then(|node| node.edge1());

            if let Some(target) = target {
                add_state(automaton, &mut next, target);
            }
        }

        swap(&mut current, &mut next);
        next.clear();

        trace!("consumed {:?}, {} live states", symbol, current.len());

        // no node survived, the remaining input can't be consumed.
        if current.is_empty() {
            return false;
        }
    }

    current.contains(automaton.accept())
}
