use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four DNA bases.
///
/// The declaration order (A, C, G, T) is the order used for weights,
/// counts and printed statistics throughout the crate.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Nucleotide {
	A,
	C,
	G,
	T,
}

impl Nucleotide {
	/// All bases in canonical order.
	pub const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

	/// Exact, case-sensitive conversion. Lowercase letters and ambiguity
	/// codes are not nucleotides.
	pub fn from_char(c: char) -> Option<Self> {
		match c {
			'A' => Some(Nucleotide::A),
			'C' => Some(Nucleotide::C),
			'G' => Some(Nucleotide::G),
			'T' => Some(Nucleotide::T),
			_ => None,
		}
	}

	pub fn as_char(self) -> char {
		match self {
			Nucleotide::A => 'A',
			Nucleotide::C => 'C',
			Nucleotide::G => 'G',
			Nucleotide::T => 'T',
		}
	}

	/// Position in [`Nucleotide::ALL`].
	pub fn index(self) -> usize {
		self as usize
	}

	pub fn is_gc(self) -> bool {
		matches!(self, Nucleotide::C | Nucleotide::G)
	}
}

impl fmt::Display for Nucleotide {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_char())
	}
}
