//! Errors surfaced by the construction pipeline.
//!
//! Most failures in this crate are invariant breaks (see the minimization
//! module) and are reported as panics, not `Result`s, because a correctly
//! built automaton never triggers them. [`AutomatonError`] exists for the
//! one caller-facing contract this crate does validate at runtime: the
//! structural well-formedness of a hand-assembled [`crate::nfa::Nfa`] or
//! [`crate::dfa::Dfa`] passed in from outside, via `check_invariants`.
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AutomatonError {
    #[error("state {0} is out of range (automaton has {1} states)")]
    StateOutOfRange(usize, usize),
    #[error("transition on '{0}' targets a character outside the automaton's alphabet")]
    CharNotInAlphabet(char),
    #[error("state {0} has more than one target for '{1}'")]
    NonDeterministicTransition(usize, char),
}
