//! The two construction pipelines (NFA subset construction and Brzozowski
//! derivative construction) and DFA minimization, all built on the shared
//! incremental builder in [`builder`].

pub mod brzozowski;
pub mod builder;
pub mod minimize;
pub mod subset;

pub use brzozowski::brzozowski_construction;
pub use minimize::dfa_minimization;
pub use subset::dfa_construction;
