//! Brzozowski construction: builds a [`Dfa`] directly from a [`Regex`] by
//! iterating derivatives, without an intermediate NFA.

use super::builder::DfaSt;
use crate::dfa::Dfa;
use crate::regex::{deriv, Regex};

/// Builds a DFA from `r` by exploring the (finite, thanks to the smart
/// constructors canonicalizing every intermediate regex) set of distinct
/// derivatives reachable from `r`.
///
/// Panics if `r.alpha()` is `None`.
pub fn brzozowski_construction(r: &Regex) -> Dfa {
    let alphabet = r
        .alpha()
        .expect("brzozowski_construction requires a regex with at least one Char node");
    let mut builder: DfaSt<Regex> = DfaSt::new(alphabet);

    let result = builder.lookup_update(r, || r.nullable());
    let initial_state = result.state();

    let mut worklist = vec![r.clone()];
    while let Some(current) = worklist.pop() {
        let from_state = builder.state_of(&current);
        for c in builder.alphabet().iter().collect::<Vec<_>>() {
            let next = deriv(&current, c);
            let result = builder.lookup_update(&next, || next.nullable());
            builder.add_transition(from_state, c, result.state());
            if result.is_new() {
                worklist.push(next);
            }
        }
    }

    builder.into_dfa(initial_state)
}
