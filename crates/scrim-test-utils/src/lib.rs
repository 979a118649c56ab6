//! Test fixtures for Scrim development.
//!
//! - [`standard_game_header`]: a two-team header with every body type.
//! - [`HeaderBuilder`] / [`DeltaBuilder`]: terse construction of match
//!   headers and turn deltas.
//! - [`synthetic_match`]: a seeded, internally consistent match of any
//!   length for determinism and benchmark runs.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod delta;
mod header;
mod synthetic;

pub use delta::DeltaBuilder;
pub use header::{standard_game_header, standard_health, HeaderBuilder, TEAM_A, TEAM_B};
pub use synthetic::{synthetic_match, SyntheticMatch};
