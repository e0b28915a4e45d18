//! The NFA engine: epsilon-closure and symbol-step, shared by
//! [`Nfa::decide_string`](super::Nfa::decide_string) and subset
//! construction.

use super::Nfa;
use std::collections::BTreeSet;

/// The union of `δ(q, Some(c))` over every `q` in `states`.
pub fn symbol_reachable(n: &Nfa, states: &BTreeSet<usize>, c: char) -> BTreeSet<usize> {
    let mut out = BTreeSet::new();
    for &q in states {
        out.extend(n.step(q, Some(c)));
    }
    out
}

/// The least fixed point of `states` closed under epsilon transitions.
pub fn epsilon_reachable(n: &Nfa, states: &BTreeSet<usize>) -> BTreeSet<usize> {
    let mut closure = states.clone();
    let mut worklist: Vec<usize> = states.iter().copied().collect();
    while let Some(q) = worklist.pop() {
        for next in n.step(q, None) {
            if closure.insert(next) {
                worklist.push(next);
            }
        }
    }
    closure
}
