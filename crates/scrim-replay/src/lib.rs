//! Seeking, hashing and comparison on top of the forward-only world engine.
//!
//! # Architecture
//!
//! - [`Timeline`] owns the live snapshot, every delta received so far and
//!   a set of checkpoints. Backward seeks restore the nearest earlier
//!   checkpoint and replay forward.
//! - [`world_hash`] folds a snapshot into a 64-bit FNV-1a digest.
//! - [`compare_worlds`] is hash-first and, on mismatch, lists which parts
//!   of the two snapshots differ.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod error;
pub mod hash;
pub mod timeline;

pub use compare::{compare_worlds, Divergence, DivergenceReport};
pub use error::ReplayError;
pub use hash::world_hash;
pub use timeline::Timeline;
