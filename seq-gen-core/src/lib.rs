//! Synthetic DNA sequence generation library.
//!
//! This crate provides the building blocks of a small FASTA generator:
//! - Weighted random nucleotide sequences with an injectable random source
//! - Token insertion at a uniformly random offset
//! - Composition statistics (per-base percentages, CG/AT ratio)
//! - FASTA persistence with 80-column wrapping and one-deep backups
//! - Input validation shared by every front-end

/// Core sequence model and generation logic.
pub mod model;

/// FASTA reading and writing, path helpers.
pub mod io;

/// Validation of raw user input.
pub mod validate;

/// Error types.
pub mod error;

pub use error::{Error, InputError, Result};
pub use model::generator::{BaseWeights, Insertion, SequenceGenerator, insert_token_at};
pub use model::nucleotide::Nucleotide;
pub use model::record::{SequenceRecord, SequenceRequest};
pub use model::seed::{seeded_rng, time_seed};
pub use model::statistics::{Ratio, Statistics, calculate_statistics};
