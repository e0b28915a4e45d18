//! # rexdfa
//!
//! A regex-to-DFA compilation core. Given a [`regex::Regex`] tree, builds a
//! minimal deterministic finite automaton through either of two
//! independent pipelines:
//!
//! - [`thompson_construction`]: regex → NFA ([`nfa::thompson_nfa_construction`])
//!   → DFA ([`construct::dfa_construction`]) → minimized DFA.
//! - [`brzozowski_construction`]: regex → DFA directly, by iterating
//!   Brzozowski derivatives → minimized DFA.
//!
//! Both pipelines agree on every input (see the property tests in
//! `src/proptests.rs`), and both route through the same minimization step.
//!
//! This crate does not parse regex syntax — `Regex` trees are built
//! directly via the smart constructors in [`regex`].

pub mod alphabet;
pub mod construct;
pub mod dfa;
pub mod error;
pub mod nfa;
pub mod regex;

#[cfg(test)]
mod proptests;

use construct::{brzozowski, minimize, subset};
use dfa::Dfa;
use nfa::Nfa;
use regex::Regex;

/// Regex → NFA → DFA → minimized DFA, via Thompson/subset construction.
pub fn thompson_construction(r: &Regex) -> Dfa {
    let n = nfa::thompson_nfa_construction(r);
    let d = subset::dfa_construction(&n);
    minimize::dfa_minimization(&d)
}

/// Regex → NFA, via Thompson construction, without subset construction.
pub fn thompson_nfa_construction(r: &Regex) -> Nfa {
    nfa::thompson_nfa_construction(r)
}

/// Regex → minimized DFA, via iterated Brzozowski derivatives.
pub fn brzozowski_construction(r: &Regex) -> Dfa {
    let d = brzozowski::brzozowski_construction(r);
    minimize::dfa_minimization(&d)
}

/// NFA → DFA without minimization, via subset construction.
pub fn dfa_construction(n: &Nfa) -> Dfa {
    subset::dfa_construction(n)
}

/// Minimizes an already-built DFA.
pub fn dfa_minimization(d: &Dfa) -> Dfa {
    minimize::dfa_minimization(d)
}

/// Decides whether `w` is accepted by `n`, or `None` if `w` contains a
/// character outside `n`'s alphabet.
pub fn decide_string_nfa(n: &Nfa, w: &str) -> Option<bool> {
    n.decide_string(w)
}

/// Decides whether `w` is accepted by `d`, or `None` if `w` contains a
/// character outside `d`'s alphabet.
pub fn decide_string_dfa(d: &Dfa, w: &str) -> Option<bool> {
    d.decide_string(w)
}
