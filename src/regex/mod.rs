//! Regular-expression trees and the operations on them needed by the
//! construction pipelines: computing an alphabet, checking nullability, and
//! taking a Brzozowski derivative.
//!
//! This is not a parser. A [`Regex`] is built directly through the smart
//! constructors below, which keep every tree in a canonical form. That
//! canonicalization is what makes [`deriv`] terminate: without it, the set
//! of syntactically distinct derivatives of a given regex can grow without
//! bound.

use crate::alphabet::Alphabet;
use std::collections::BTreeSet;
use std::rc::Rc;

/// A set of characters, used as the label of a [`Regex::Char`] node.
pub type CharSet = BTreeSet<char>;

/// A regular-expression tree.
///
/// Only ever construct one of these through [`r_alt`], [`r_seq`], [`r_star`]
/// and [`r_char`] (or the `Void`/`Empty` constants) — building a variant
/// directly can produce a non-canonical tree that [`deriv`] won't terminate
/// on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Regex {
    /// Matches nothing.
    Void,
    /// Matches only the empty string.
    Empty,
    /// Matches any single character in the set.
    Char(CharSet),
    Alt(Rc<Regex>, Rc<Regex>),
    Seq(Rc<Regex>, Rc<Regex>),
    Star(Rc<Regex>),
}

/// `Alt(Void, r) = r`, `Alt(r, Void) = r`.
pub fn r_alt(a: Regex, b: Regex) -> Regex {
    match (a, b) {
        (Regex::Void, b) => b,
        (a, Regex::Void) => a,
        (a, b) => Regex::Alt(Rc::new(a), Rc::new(b)),
    }
}

/// `Seq(Void, _) = Void`, `Seq(_, Void) = Void`, `Seq(Empty, r) = r`, `Seq(r, Empty) = r`.
pub fn r_seq(a: Regex, b: Regex) -> Regex {
    match (a, b) {
        (Regex::Void, _) | (_, Regex::Void) => Regex::Void,
        (Regex::Empty, b) => b,
        (a, Regex::Empty) => a,
        (a, b) => Regex::Seq(Rc::new(a), Rc::new(b)),
    }
}

/// `Star(Void) = Empty`, `Star(Empty) = Empty`, `Star(Star(r)) = Star(r)`.
pub fn r_star(a: Regex) -> Regex {
    match a {
        Regex::Void | Regex::Empty => Regex::Empty,
        Regex::Star(r) => Regex::Star(r),
        r => Regex::Star(Rc::new(r)),
    }
}

/// An empty character set collapses to `Void`.
pub fn r_char(cs: CharSet) -> Regex {
    if cs.is_empty() {
        Regex::Void
    } else {
        Regex::Char(cs)
    }
}

/// Convenience constructor for a single-character regex.
pub fn r_lit(c: char) -> Regex {
    r_char(CharSet::from([c]))
}

impl Regex {
    /// The alphabet of this regex: every character appearing in any `Char`
    /// node. `None` if the regex has no `Char` node anywhere (e.g. `Void` or
    /// `Empty` alone) — such a regex has no meaningful alphabet of its own,
    /// and construction entry points document this as a precondition.
    pub fn alpha(&self) -> Option<Alphabet> {
        let mut chars = BTreeSet::new();
        collect_chars(self, &mut chars);
        if chars.is_empty() {
            None
        } else {
            Some(Alphabet::new(chars))
        }
    }

    /// Whether this regex matches the empty string.
    pub fn nullable(&self) -> bool {
        match self {
            Regex::Void => false,
            Regex::Empty => true,
            Regex::Char(_) => false,
            Regex::Alt(a, b) => a.nullable() || b.nullable(),
            Regex::Seq(a, b) => a.nullable() && b.nullable(),
            Regex::Star(_) => true,
        }
    }
}

fn collect_chars(r: &Regex, out: &mut BTreeSet<char>) {
    match r {
        Regex::Void | Regex::Empty => {}
        Regex::Char(cs) => out.extend(cs.iter().copied()),
        Regex::Alt(a, b) | Regex::Seq(a, b) => {
            collect_chars(a, out);
            collect_chars(b, out);
        }
        Regex::Star(r) => collect_chars(r, out),
    }
}

/// The Brzozowski derivative of `r` with respect to `c`: a regex matching
/// exactly those `w` with `cw` in the language of `r`.
pub fn deriv(r: &Regex, c: char) -> Regex {
    match r {
        Regex::Void => Regex::Void,
        Regex::Empty => Regex::Void,
        Regex::Char(cs) => {
            if cs.contains(&c) {
                Regex::Empty
            } else {
                Regex::Void
            }
        }
        Regex::Alt(a, b) => r_alt(deriv(a, c), deriv(b, c)),
        Regex::Seq(a, b) => {
            let head = r_seq(deriv(a, c), (**b).clone());
            if a.nullable() {
                r_alt(head, deriv(b, c))
            } else {
                head
            }
        }
        Regex::Star(inner) => r_seq(deriv(inner, c), r_star((**inner).clone())),
    }
}
