//! NFA primitive constructors (Thompson construction, component B).
//!
//! Every primitive here allocates states numbered from `0`, with start
//! state `0`. They are combined using the standard Thompson-construction
//! idiom of shifting one automaton's state numbers up so the two state
//! spaces don't collide.

use super::Nfa;
use crate::alphabet::Alphabet;
use crate::regex::Regex;
use std::collections::{BTreeSet, HashMap};

/// An NFA matching exactly the single character `c`.
pub fn single_char_nfa(c: char, alphabet: &Alphabet) -> Nfa {
    let mut transitions = HashMap::new();
    transitions.insert((0, Some(c)), BTreeSet::from([1]));
    Nfa {
        alphabet: alphabet.clone(),
        num_states: 2,
        transitions,
        initial_state: 0,
        accepting: BTreeSet::from([1]),
    }
}

/// An NFA matching only the empty string.
pub fn empty_string_nfa(alphabet: &Alphabet) -> Nfa {
    Nfa {
        alphabet: alphabet.clone(),
        num_states: 1,
        transitions: HashMap::new(),
        initial_state: 0,
        accepting: BTreeSet::from([0]),
    }
}

/// An NFA matching nothing at all.
pub fn empty_set_nfa(alphabet: &Alphabet) -> Nfa {
    Nfa {
        alphabet: alphabet.clone(),
        num_states: 1,
        transitions: HashMap::new(),
        initial_state: 0,
        accepting: BTreeSet::new(),
    }
}

/// `n` with its start state additionally marked accepting, so the empty
/// string is accepted regardless of how the rest of `n` reaches its accept
/// states.
pub fn accepts_empty_nfa(mut n: Nfa) -> Nfa {
    n.accepting.insert(n.initial_state);
    n
}

/// Shifts every state number in `n` up by `offset`, returning the new
/// transition map, accept set, and initial state.
fn shifted(
    n: &Nfa,
    offset: usize,
) -> (HashMap<(usize, Option<char>), BTreeSet<usize>>, BTreeSet<usize>, usize) {
    let transitions = n
        .transitions
        .iter()
        .map(|(&(src, c), targets)| {
            (
                (src + offset, c),
                targets.iter().map(|t| t + offset).collect(),
            )
        })
        .collect();
    let accepting = n.accepting.iter().map(|a| a + offset).collect();
    (transitions, accepting, n.initial_state + offset)
}

fn add_epsilon(
    transitions: &mut HashMap<(usize, Option<char>), BTreeSet<usize>>,
    from: usize,
    to: usize,
) {
    transitions.entry((from, None)).or_default().insert(to);
}

/// An NFA matching the union of the languages of `n1` and `n2`.
///
/// A fresh start state branches via epsilon to both shifted sub-starts; each
/// sub-automaton's accept states branch via epsilon to a fresh shared
/// accept.
pub fn union_nfa(n1: &Nfa, n2: &Nfa) -> Nfa {
    assert_eq!(n1.alphabet, n2.alphabet, "union_nfa requires equal alphabets");
    let (t1, acc1, start1) = shifted(n1, 1);
    let (t2, acc2, start2) = shifted(n2, 1 + n1.num_states);

    let mut transitions = t1;
    transitions.extend(t2);
    let fresh_start = 0;
    let fresh_accept = 1 + n1.num_states + n2.num_states;

    add_epsilon(&mut transitions, fresh_start, start1);
    add_epsilon(&mut transitions, fresh_start, start2);
    for a in acc1.iter().chain(acc2.iter()) {
        add_epsilon(&mut transitions, *a, fresh_accept);
    }

    Nfa {
        alphabet: n1.alphabet.clone(),
        num_states: fresh_accept + 1,
        transitions,
        initial_state: fresh_start,
        accepting: BTreeSet::from([fresh_accept]),
    }
}

/// An NFA matching the concatenation of the languages of `n1` and `n2`.
///
/// The fresh start state has epsilon transitions to **both** shifted
/// sub-starts, not only `n1`'s — an over-connection at the NFA level that
/// is preserved rather than tightened, since later construction and
/// minimization steps resolve it away.
pub fn concat_nfa(n1: &Nfa, n2: &Nfa) -> Nfa {
    assert_eq!(n1.alphabet, n2.alphabet, "concat_nfa requires equal alphabets");
    let (t1, acc1, start1) = shifted(n1, 1);
    let (t2, acc2, start2) = shifted(n2, 1 + n1.num_states);

    let mut transitions = t1;
    transitions.extend(t2);
    let fresh_start = 0;

    add_epsilon(&mut transitions, fresh_start, start1);
    add_epsilon(&mut transitions, fresh_start, start2);
    for a in &acc1 {
        add_epsilon(&mut transitions, *a, start2);
    }

    Nfa {
        alphabet: n1.alphabet.clone(),
        num_states: 1 + n1.num_states + n2.num_states,
        transitions,
        initial_state: fresh_start,
        accepting: acc2,
    }
}

/// An NFA matching zero or more repetitions of `n`'s language.
///
/// Requires `n` to have at least 2 states; every primitive other than
/// `empty_string_nfa`/`empty_set_nfa` satisfies this, and those two only
/// ever reach `kleene_nfa` through a `Star` node whose smart constructor
/// already canonicalizes `Star(Void)`/`Star(Empty)` away to `Empty` before
/// `thompson_nfa_construction` would build one.
pub fn kleene_nfa(n: &Nfa) -> Nfa {
    assert!(n.num_states >= 2, "kleene_nfa requires an inner NFA with at least 2 states");
    let (t, acc, start) = shifted(n, 1);

    let mut transitions = t;
    let fresh_start = 0;
    let fresh_accept = 1 + n.num_states;

    add_epsilon(&mut transitions, fresh_start, start);
    add_epsilon(&mut transitions, fresh_start, fresh_accept);
    for a in &acc {
        add_epsilon(&mut transitions, *a, start);
        add_epsilon(&mut transitions, *a, fresh_accept);
    }

    Nfa {
        alphabet: n.alphabet.clone(),
        num_states: fresh_accept + 1,
        transitions,
        initial_state: fresh_start,
        accepting: BTreeSet::from([fresh_accept]),
    }
}

/// An NFA matching any single character in `cs`, built by unioning a
/// `single_char_nfa` for each character in alphabet order.
fn char_class_nfa(cs: &crate::regex::CharSet, alphabet: &Alphabet) -> Nfa {
    let mut chars: Vec<char> = cs.iter().copied().collect();
    chars.sort_unstable();
    let mut iter = chars.into_iter();
    let first = iter
        .next()
        .expect("r_char never constructs a Regex::Char with an empty set");
    let mut acc = single_char_nfa(first, alphabet);
    for c in iter {
        acc = union_nfa(&acc, &single_char_nfa(c, alphabet));
    }
    acc
}

/// Builds an NFA for `r` via Thompson construction: recursively applying
/// the primitives above according to `r`'s shape.
///
/// Panics if `r.alpha()` is `None` (a regex with no `Char` node has no
/// meaningful alphabet to build an automaton over).
pub fn thompson_nfa_construction(r: &Regex) -> Nfa {
    let alphabet = r
        .alpha()
        .expect("thompson_nfa_construction requires a regex with at least one Char node");
    build(r, &alphabet)
}

fn build(r: &Regex, alphabet: &Alphabet) -> Nfa {
    match r {
        Regex::Void => empty_set_nfa(alphabet),
        Regex::Empty => empty_string_nfa(alphabet),
        Regex::Char(cs) => char_class_nfa(cs, alphabet),
        Regex::Alt(a, b) => union_nfa(&build(a, alphabet), &build(b, alphabet)),
        Regex::Seq(a, b) => concat_nfa(&build(a, alphabet), &build(b, alphabet)),
        Regex::Star(inner) => kleene_nfa(&build(inner, alphabet)),
    }
}
