//! Error types for sequence generation, statistics and FASTA I/O.
//!
//! Every fallible operation of the crate returns [`Error`]. Front-ends map
//! it to a single `Error: {message}` line and a process exit status.

use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum Error {
	/// User-supplied input was rejected by the validator
	#[error("{0}")]
	Input(#[from] InputError),

	/// No A, C, G or T left after filtering
	#[error("no valid DNA nucleotides in sequence")]
	EmptyComposition,

	/// Base weights cannot form a distribution (negative, NaN, all zero)
	#[error("invalid base weights: {0}")]
	Weights(#[from] rand::distr::weighted::Error),

	/// A FASTA file could not be parsed back
	#[error("malformed FASTA: {0}")]
	Format(String),

	/// File I/O error
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
	/// Length is not an integer at all
	#[error("please enter a valid positive integer for sequence length, got '{0}'")]
	InvalidLength(String),

	/// Length parsed but is zero or negative
	#[error("length must be positive, got {0}")]
	NonPositiveLength(i64),

	/// Length above the in-memory generation limit
	#[error("length must be at most {max}")]
	LengthTooLarge { max: usize },

	/// A required field was empty after trimming
	#[error("{0} cannot be empty")]
	EmptyField(&'static str),

	/// Base weights string is not four comma-separated numbers
	#[error("weights must be four comma-separated numbers (A,C,G,T), got '{0}'")]
	InvalidWeights(String),
}

impl Error {
	/// Returns true for errors caused by user input.
	pub fn is_input(&self) -> bool {
		matches!(self, Error::Input(_))
	}

	/// Process exit status for this error.
	///
	/// Input errors get a distinguished status so scripts can tell a bad
	/// invocation from a failed run.
	pub fn exit_code(&self) -> i32 {
		if self.is_input() { 2 } else { 1 }
	}
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
