//! Subset (powerset) construction: turns an [`Nfa`] into a [`Dfa`] by
//! exploring reachable epsilon-closed NFA state sets.

use super::builder::DfaSt;
use crate::dfa::Dfa;
use crate::nfa::{epsilon_reachable, symbol_reachable, Nfa};
use std::collections::BTreeSet;

/// Builds a DFA from `n` without minimizing it. The resulting DFA may
/// contain a dead sink state (e.g. the empty set key) or other redundant
/// states; run [`crate::construct::minimize::dfa_minimization`] to remove
/// them.
pub fn dfa_construction(n: &Nfa) -> Dfa {
    let mut builder: DfaSt<BTreeSet<usize>> = DfaSt::new(n.alphabet.clone());
    let initial_key = epsilon_reachable(n, &BTreeSet::from([n.initial_state]));

    let mut worklist = Vec::new();
    let result = builder.lookup_update(&initial_key, || is_accepting(n, &initial_key));
    let initial_state = result.state();
    worklist.push(initial_key);

    while let Some(key) = worklist.pop() {
        let from_state = builder.state_of(&key);
        for c in n.alphabet.iter() {
            let next_key = epsilon_reachable(n, &symbol_reachable(n, &key, c));
            let result = builder.lookup_update(&next_key, || is_accepting(n, &next_key));
            builder.add_transition(from_state, c, result.state());
            if result.is_new() {
                worklist.push(next_key);
            }
        }
    }

    builder.into_dfa(initial_state)
}

fn is_accepting(n: &Nfa, key: &BTreeSet<usize>) -> bool {
    !key.is_disjoint(&n.accepting)
}
