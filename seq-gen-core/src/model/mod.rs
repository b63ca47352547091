//! Sequence model: bases, weighted generation, token insertion and
//! composition statistics.
//!
//! This module provides:
//! - The four-letter alphabet (`Nucleotide`)
//! - A weighted generator drawing from an explicit random source (`SequenceGenerator`)
//! - Seeding helpers for reproducible runs
//! - Validated requests and generated records (`SequenceRequest`, `SequenceRecord`)
//! - Composition statistics with a tagged CG/AT ratio (`Statistics`, `Ratio`)

/// The A/C/G/T alphabet.
pub mod nucleotide;

/// Weighted sequence generation and token insertion.
///
/// All randomness comes from a caller-provided source, so a fixed seed
/// gives a fixed output.
pub mod generator;

/// Random source construction (explicit or clock-derived seed).
pub mod seed;

/// Single-pass composition statistics.
pub mod statistics;

/// Validated generation input and its generated output.
pub mod record;
