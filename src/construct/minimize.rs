//! DFA minimization (component F): unreachable-state pruning followed by
//! Moore partition refinement.

use crate::dfa::Dfa;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Minimizes `d`: first prunes unreachable states to a fixed point, then
/// refines the surviving states by Moore partition refinement.
///
/// If refinement cannot locate the class of the start state, an accepting
/// state, or a transition target after building the partition, the DFA is
/// considered not amenable to refinement and the pruned-but-unrefined DFA
/// is returned instead. A correctly built DFA never hits that path; it
/// exists as a defensive fallback, not a reported error.
pub fn dfa_minimization(d: &Dfa) -> Dfa {
    let pruned = prune_unreachable(d);
    refine(&pruned).unwrap_or(pruned)
}

/// F1: repeatedly removes any non-initial state with no incoming transition
/// from a *distinct* state (a self-loop does not count as a predecessor),
/// until the set of surviving states stops shrinking. Remaining states are
/// renumbered contiguously from 0.
pub(crate) fn prune_unreachable(d: &Dfa) -> Dfa {
    let mut alive: BTreeSet<usize> = (0..d.num_states).collect();
    loop {
        let mut has_distinct_predecessor: HashSet<usize> = HashSet::new();
        for (&(src, _c), &tgt) in &d.transitions {
            if src != tgt && alive.contains(&src) && alive.contains(&tgt) {
                has_distinct_predecessor.insert(tgt);
            }
        }
        let next_alive: BTreeSet<usize> = alive
            .iter()
            .copied()
            .filter(|&s| s == d.initial_state || has_distinct_predecessor.contains(&s))
            .collect();
        if next_alive == alive {
            break;
        }
        alive = next_alive;
    }

    let old_to_new: HashMap<usize, usize> = alive.iter().enumerate().map(|(i, &s)| (s, i)).collect();
    let transitions = d
        .transitions
        .iter()
        .filter_map(|(&(src, c), &tgt)| {
            let new_src = *old_to_new.get(&src)?;
            let new_tgt = *old_to_new.get(&tgt)?;
            Some(((new_src, c), new_tgt))
        })
        .collect();
    let accepting = d
        .accepting
        .iter()
        .filter_map(|s| old_to_new.get(s).copied())
        .collect();

    Dfa {
        alphabet: d.alphabet.clone(),
        num_states: alive.len(),
        transitions,
        initial_state: *old_to_new
            .get(&d.initial_state)
            .expect("initial state is never pruned"),
        accepting,
    }
}

/// F2: Moore partition refinement by literal signature-vector computation.
fn refine(d: &Dfa) -> Option<Dfa> {
    let mut blocks: Vec<Vec<usize>> = {
        let accepting: Vec<usize> = (0..d.num_states).filter(|s| d.accepting.contains(s)).collect();
        let rejecting: Vec<usize> = (0..d.num_states).filter(|s| !d.accepting.contains(s)).collect();
        [accepting, rejecting]
            .into_iter()
            .filter(|b| !b.is_empty())
            .collect()
    };

    loop {
        let mut state_block: HashMap<usize, usize> = HashMap::new();
        for (i, block) in blocks.iter().enumerate() {
            for &s in block {
                state_block.insert(s, i);
            }
        }

        let mut new_blocks: Vec<Vec<usize>> = Vec::new();
        for block in &blocks {
            let mut by_signature: Vec<(Vec<Option<usize>>, Vec<usize>)> = Vec::new();
            for &s in block {
                let signature: Vec<Option<usize>> = d
                    .alphabet
                    .iter()
                    .map(|c| d.step(s, c).map(|t| state_block[&t]))
                    .collect();
                match by_signature.iter_mut().find(|(sig, _)| *sig == signature) {
                    Some((_, states)) => states.push(s),
                    None => by_signature.push((signature, vec![s])),
                }
            }
            new_blocks.extend(by_signature.into_iter().map(|(_, states)| states));
        }

        if new_blocks.len() == blocks.len() {
            break;
        }
        blocks = new_blocks;
    }

    // Deterministic class numbering: order blocks by their minimal member.
    blocks.sort_by_key(|b| *b.iter().min().unwrap());
    let mut class_of: HashMap<usize, usize> = HashMap::new();
    for (class, block) in blocks.iter().enumerate() {
        for &s in block {
            class_of.insert(s, class);
        }
    }

    let initial_state = *class_of.get(&d.initial_state)?;
    let mut accepting = BTreeSet::new();
    for &s in &d.accepting {
        accepting.insert(*class_of.get(&s)?);
    }

    let mut transitions = HashMap::new();
    for (class, block) in blocks.iter().enumerate() {
        let representative = block[0];
        for c in d.alphabet.iter() {
            if let Some(target) = d.step(representative, c) {
                let target_class = *class_of.get(&target)?;
                transitions.insert((class, c), target_class);
            }
        }
    }

    Some(Dfa {
        alphabet: d.alphabet.clone(),
        num_states: blocks.len(),
        transitions,
        initial_state,
        accepting,
    })
}
