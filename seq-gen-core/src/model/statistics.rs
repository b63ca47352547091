use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::nucleotide::Nucleotide;

/// CG/AT ratio, in percent.
///
/// `Unbounded` stands for a composition without any A or T, where the
/// ratio has no finite value. It is a valid result, not an error.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Ratio {
	Finite(f64),
	Unbounded,
}

impl Ratio {
	pub fn is_unbounded(&self) -> bool {
		matches!(self, Ratio::Unbounded)
	}

	/// Finite value, if any.
	pub fn value(&self) -> Option<f64> {
		match self {
			Ratio::Finite(v) => Some(*v),
			Ratio::Unbounded => None,
		}
	}
}

impl fmt::Display for Ratio {
	/// One decimal place, or `inf`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Ratio::Finite(v) => write!(f, "{:.1}", v),
			Ratio::Unbounded => write!(f, "inf"),
		}
	}
}

/// Composition statistics of a sequence.
///
/// # Invariants
/// - `total` is the sum of `counts` and is never zero
/// - The four percentages sum to 100.0 (up to floating-point rounding)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Statistics {
	counts: BTreeMap<Nucleotide, usize>,
	total: usize,
	percentages: BTreeMap<Nucleotide, f64>,
	ratio: Ratio,
}

impl Statistics {
	pub fn count(&self, nucleotide: Nucleotide) -> usize {
		self.counts.get(&nucleotide).copied().unwrap_or(0)
	}

	/// Number of alphabet-valid characters that were counted.
	pub fn total(&self) -> usize {
		self.total
	}

	/// Share of a base among the counted characters, in `[0, 100]`.
	pub fn percentage(&self, nucleotide: Nucleotide) -> f64 {
		self.percentages.get(&nucleotide).copied().unwrap_or(0.0)
	}

	/// Combined C and G percentage.
	pub fn cg_percentage(&self) -> f64 {
		self.percentage(Nucleotide::C) + self.percentage(Nucleotide::G)
	}

	pub fn ratio(&self) -> Ratio {
		self.ratio
	}
}

/// Computes composition statistics over the A/C/G/T characters of `text`.
///
/// # Behavior
/// - Keeps only characters that are exactly `A`, `C`, `G` or `T`
///   (case-sensitive). Anything else, including lowercase bases, is
///   ignored. Letters of an inserted token are ordinary characters here:
///   an uppercase `A` in a name is counted like any other `A`.
/// - Percentage of a base: `count / total * 100`.
/// - Ratio: `(C + G) / (A + T) * 100`, or `Ratio::Unbounded` without any
///   A or T.
///
/// # Errors
/// Returns `Error::EmptyComposition` when no character is kept.
pub fn calculate_statistics(text: &str) -> Result<Statistics> {
	let mut counts = [0usize; 4];
	for nucleotide in text.chars().filter_map(Nucleotide::from_char) {
		counts[nucleotide.index()] += 1;
	}

	let total: usize = counts.iter().sum();
	if total == 0 {
		return Err(Error::EmptyComposition);
	}

	let cg = counts[Nucleotide::C.index()] + counts[Nucleotide::G.index()];
	let at = counts[Nucleotide::A.index()] + counts[Nucleotide::T.index()];
	let ratio = if at == 0 {
		Ratio::Unbounded
	} else {
		Ratio::Finite(cg as f64 / at as f64 * 100.0)
	};

	Ok(Statistics {
		counts: Nucleotide::ALL.iter().map(|&n| (n, counts[n.index()])).collect(),
		total,
		percentages: Nucleotide::ALL
			.iter()
			.map(|&n| (n, counts[n.index()] as f64 / total as f64 * 100.0))
			.collect(),
		ratio,
	})
}
