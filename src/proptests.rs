//! Property-based tests over randomly generated regex trees and randomly
//! generated DFAs, covering the universal properties that must hold
//! between the two construction pipelines and across minimization.

use crate::construct::minimize::prune_unreachable;
use crate::construct::dfa_construction;
use crate::dfa::Dfa;
use crate::nfa::thompson_nfa_construction;
use crate::regex::{deriv, r_alt, r_char, r_seq, r_star, CharSet, Regex};
use crate::{brzozowski_construction, dfa_minimization, thompson_construction};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeSet, HashMap, HashSet};

fn arb_charset() -> impl Strategy<Value = CharSet> {
    prop::collection::btree_set(prop::char::range('a', 'c'), 1..=2)
}

fn arb_regex() -> impl Strategy<Value = Regex> {
    let leaf = arb_charset().prop_map(r_char);
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| r_alt(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| r_seq(a, b)),
            inner.prop_map(r_star),
        ]
    })
}

fn arb_word() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::char::range('a', 'c'), 0..6).prop_map(|v| v.into_iter().collect())
}

/// A derivative-only matcher, independent of any automaton construction:
/// folds `deriv` across `w` and checks nullability of what's left.
fn regex_matches(r: &Regex, w: &str) -> bool {
    let residual = w.chars().fold(r.clone(), |acc, c| deriv(&acc, c));
    residual.nullable()
}

proptest! {
    /// Property 1: the Thompson and Brzozowski pipelines accept exactly the
    /// same strings.
    #[test]
    fn thompson_and_brzozowski_agree(r in arb_regex(), w in arb_word()) {
        let via_thompson = thompson_construction(&r);
        let via_brzozowski = brzozowski_construction(&r);
        prop_assert_eq!(via_thompson.decide_string(&w), via_brzozowski.decide_string(&w));
    }

    /// Property 1b: both pipelines agree with a pure derivative-based
    /// matcher whenever the word stays within the regex's own alphabet.
    #[test]
    fn construction_matches_derivative_matcher(r in arb_regex(), w in arb_word()) {
        let alphabet = r.alpha().unwrap();
        if w.chars().all(|c| alphabet.contains(c)) {
            let expected = Some(regex_matches(&r, &w));
            prop_assert_eq!(thompson_construction(&r).decide_string(&w), expected);
            prop_assert_eq!(brzozowski_construction(&r).decide_string(&w), expected);
        }
    }

    /// Property 2: `cw` is in `L(r)` iff `w` is in `L(deriv(r, c))`.
    #[test]
    fn derivative_law(r in arb_regex(), c in prop::char::range('a', 'c'), w in arb_word()) {
        let cw: String = std::iter::once(c).chain(w.chars()).collect();
        prop_assert_eq!(regex_matches(&r, &cw), regex_matches(&deriv(&r, c), &w));
    }

    /// Property 3: nullability agrees with whether the empty string matches.
    #[test]
    fn nullable_matches_empty_string(r in arb_regex()) {
        prop_assert_eq!(r.nullable(), regex_matches(&r, ""));
    }

    /// Property 4: minimizing an already-minimized DFA changes nothing.
    #[test]
    fn minimization_is_idempotent(r in arb_regex()) {
        let n = thompson_nfa_construction(&r);
        let built = dfa_construction(&n);
        let once = dfa_minimization(&built);
        let twice = dfa_minimization(&once);
        prop_assert_eq!(once, twice);
    }

    /// Property 6: every state surviving unreachable-state pruning has an
    /// incoming transition from a *distinct* state, or is the start state.
    #[test]
    fn pruning_soundness(r in arb_regex()) {
        let n = thompson_nfa_construction(&r);
        let built = dfa_construction(&n);
        let pruned = prune_unreachable(&built);
        for state in 0..pruned.num_states {
            if state == pruned.initial_state {
                continue;
            }
            let has_distinct_predecessor = pruned
                .transitions
                .iter()
                .any(|(&(src, _c), &tgt)| tgt == state && src != state);
            prop_assert!(has_distinct_predecessor, "state {state} has no distinct predecessor");
        }
    }
}

/// Property 5: no two distinct states of a minimized DFA are
/// language-equivalent, checked via the standard table-filling
/// distinguishability algorithm (independent of the Moore-refinement
/// implementation under test).
fn all_states_pairwise_distinguishable(d: &Dfa) -> bool {
    const DEAD: usize = usize::MAX;
    let target = |s: usize, c: char| d.step(s, c).unwrap_or(DEAD);

    let mut distinguishable: HashSet<(usize, usize)> = HashSet::new();
    let states: Vec<usize> = (0..d.num_states).collect();
    for &p in &states {
        for &q in &states {
            if p < q && d.accepting.contains(&p) != d.accepting.contains(&q) {
                distinguishable.insert((p, q));
            }
        }
    }

    loop {
        let mut changed = false;
        for &p in &states {
            for &q in &states {
                if p >= q || distinguishable.contains(&(p, q)) {
                    continue;
                }
                let marked = d.alphabet.iter().any(|c| {
                    let (tp, tq) = (target(p, c), target(q, c));
                    if tp == tq {
                        false
                    } else if tp == DEAD || tq == DEAD {
                        true
                    } else {
                        distinguishable.contains(&(tp.min(tq), tp.max(tq)))
                    }
                });
                if marked {
                    distinguishable.insert((p, q));
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    let total_pairs = states.len() * states.len().saturating_sub(1) / 2;
    distinguishable.len() == total_pairs
}

proptest! {
    #[test]
    fn minimized_states_are_pairwise_distinguishable(r in arb_regex()) {
        let minimized = thompson_construction(&r);
        prop_assert!(all_states_pairwise_distinguishable(&minimized));
    }
}

/// A small random DFA over a fixed two-letter alphabet, used to test
/// minimization properties independently of any regex.
fn random_dfa(rng: &mut StdRng, num_states: usize) -> Dfa {
    let alphabet = crate::alphabet::Alphabet::new(['a', 'b']);
    let mut transitions = HashMap::new();
    for s in 0..num_states {
        for c in alphabet.iter() {
            if rng.gen_bool(0.8) {
                transitions.insert((s, c), rng.gen_range(0..num_states));
            }
        }
    }
    let accepting: BTreeSet<usize> = (0..num_states).filter(|_| rng.gen_bool(0.4)).collect();
    Dfa {
        alphabet,
        num_states,
        transitions,
        initial_state: 0,
        accepting,
    }
}

#[test]
fn random_dfa_minimization_is_idempotent_and_no_larger() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let n = rng.gen_range(1..10);
        let d = random_dfa(&mut rng, n);
        let once = dfa_minimization(&d);
        let twice = dfa_minimization(&once);
        assert_eq!(once, twice);
        assert!(once.num_states <= d.num_states);
        assert!(all_states_pairwise_distinguishable(&once));
    }
}

#[test]
fn regex_cross_checked_against_library_regex() {
    // Spot-check a handful of concrete regexes against the `regex` crate,
    // mirroring a standard cross-validation technique against a production
    // regex engine.
    let cases: &[(&str, fn() -> Regex)] = &[
        ("a", || crate::regex::r_lit('a')),
        ("ab", || r_seq(crate::regex::r_lit('a'), crate::regex::r_lit('b'))),
        ("a*", || r_star(crate::regex::r_lit('a'))),
        ("a|b", || r_alt(crate::regex::r_lit('a'), crate::regex::r_lit('b'))),
    ];
    let words = ["", "a", "b", "ab", "aa", "ba", "aaa"];
    for (pattern, build) in cases {
        let anchored = format!("^(?:{pattern})$");
        let lib = regex::Regex::new(&anchored).unwrap();
        let ours = thompson_construction(&build());
        for w in words {
            let expected = lib.is_match(w);
            if let Some(actual) = ours.decide_string(w) {
                assert_eq!(actual, expected, "pattern {pattern:?} word {w:?}");
            }
        }
    }
}
