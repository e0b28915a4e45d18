//! Nondeterministic finite automata with epsilon transitions, and the
//! primitive constructors that assemble them from regex trees (Thompson
//! construction).

mod build;
mod eval;

pub use build::{
    accepts_empty_nfa, concat_nfa, empty_set_nfa, empty_string_nfa, kleene_nfa, single_char_nfa,
    thompson_nfa_construction, union_nfa,
};
pub use eval::{epsilon_reachable, symbol_reachable};

use crate::alphabet::Alphabet;
use crate::error::AutomatonError;
use std::collections::{BTreeSet, HashMap};

/// An NFA transition key: a source state and either a character (`Some`) or
/// an epsilon move (`None`).
pub type TransitionKey = (usize, Option<char>);

/// A nondeterministic finite automaton with epsilon transitions.
///
/// `transitions` is a sparse partial map: a missing key means the empty set
/// of target states, never an explicit empty `BTreeSet` entry (the
/// constructors never insert one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    pub alphabet: Alphabet,
    pub num_states: usize,
    pub transitions: HashMap<TransitionKey, BTreeSet<usize>>,
    pub initial_state: usize,
    pub accepting: BTreeSet<usize>,
}

impl Nfa {
    /// Targets reachable from `state` on `c` (`None` for epsilon), or the
    /// empty set if there is no such transition.
    pub fn step(&self, state: usize, c: Option<char>) -> BTreeSet<usize> {
        self.transitions
            .get(&(state, c))
            .cloned()
            .unwrap_or_default()
    }

    /// Decides whether `w` is accepted, returning `None` if `w` contains a
    /// character outside the alphabet (the input is undecidable, not
    /// rejected).
    ///
    /// The initial state set is `{q0}`, deliberately **not** closed under
    /// epsilon before consuming the first character. An NFA whose start
    /// reaches an accept state only via epsilon transitions therefore
    /// rejects the empty string unless built with [`accepts_empty_nfa`].
    pub fn decide_string(&self, w: &str) -> Option<bool> {
        let mut states: BTreeSet<usize> = BTreeSet::from([self.initial_state]);
        for c in w.chars() {
            if !self.alphabet.contains(c) {
                return None;
            }
            let stepped = symbol_reachable(self, &states, c);
            states = epsilon_reachable(self, &stepped);
        }
        Some(!states.is_disjoint(&self.accepting))
    }

    /// Validates structural invariants: every referenced state is in range,
    /// and every labeled transition's character is in the alphabet.
    pub fn check_invariants(&self) -> Result<(), AutomatonError> {
        if self.initial_state >= self.num_states {
            return Err(AutomatonError::StateOutOfRange(
                self.initial_state,
                self.num_states,
            ));
        }
        for &s in &self.accepting {
            if s >= self.num_states {
                return Err(AutomatonError::StateOutOfRange(s, self.num_states));
            }
        }
        for (&(src, c), targets) in &self.transitions {
            if src >= self.num_states {
                return Err(AutomatonError::StateOutOfRange(src, self.num_states));
            }
            if let Some(c) = c {
                if !self.alphabet.contains(c) {
                    return Err(AutomatonError::CharNotInAlphabet(c));
                }
            }
            for &t in targets {
                if t >= self.num_states {
                    return Err(AutomatonError::StateOutOfRange(t, self.num_states));
                }
            }
        }
        Ok(())
    }
}
