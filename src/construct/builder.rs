//! Shared incremental DFA-building state (component H), used by both
//! subset construction and Brzozowski construction.
//!
//! Both constructions explore a worklist of opaque "keys" — an NFA state
//! set for subset construction, a canonical regex for Brzozowski — and need
//! identical bookkeeping to turn newly discovered keys into DFA state
//! numbers. `DfaSt` is that bookkeeping, owned exclusively by the
//! construction call that creates it and discarded once the `Dfa` is
//! extracted.

use crate::alphabet::Alphabet;
use crate::dfa::Dfa;
use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

/// Whether a key was already known to the builder, or freshly allocated.
pub enum LookupResult {
    Known(usize),
    New(usize),
}

impl LookupResult {
    pub fn state(&self) -> usize {
        match self {
            LookupResult::Known(s) | LookupResult::New(s) => *s,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, LookupResult::New(_))
    }
}

pub struct DfaSt<K> {
    alphabet: Alphabet,
    counter: usize,
    corr: HashMap<K, usize>,
    transitions: HashMap<(usize, char), usize>,
    accepting: BTreeSet<usize>,
}

impl<K: Clone + Eq + Hash> DfaSt<K> {
    pub fn new(alphabet: Alphabet) -> Self {
        DfaSt {
            alphabet,
            counter: 0,
            corr: HashMap::new(),
            transitions: HashMap::new(),
            accepting: BTreeSet::new(),
        }
    }

    /// Returns the DFA state assigned to `key`, allocating a fresh one if
    /// `key` hasn't been seen before. `is_accepting` is evaluated only on
    /// first sight of `key`.
    pub fn lookup_update(&mut self, key: &K, is_accepting: impl FnOnce() -> bool) -> LookupResult {
        if let Some(&state) = self.corr.get(key) {
            return LookupResult::Known(state);
        }
        let state = self.counter;
        self.counter += 1;
        self.corr.insert(key.clone(), state);
        if is_accepting() {
            self.accepting.insert(state);
        }
        LookupResult::New(state)
    }

    pub fn add_transition(&mut self, from: usize, c: char, to: usize) {
        self.transitions.insert((from, c), to);
    }

    /// The DFA state already assigned to `key`. Panics if `key` has never
    /// been passed to `lookup_update` — callers only ever call this for a
    /// key they just looked up themselves.
    pub fn state_of(&self, key: &K) -> usize {
        *self
            .corr
            .get(key)
            .expect("state_of called with a key never passed to lookup_update")
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Consumes the builder, producing the finished DFA with the given
    /// initial state.
    pub fn into_dfa(self, initial_state: usize) -> Dfa {
        Dfa {
            alphabet: self.alphabet,
            num_states: self.counter,
            transitions: self.transitions,
            initial_state,
            accepting: self.accepting,
        }
    }
}
