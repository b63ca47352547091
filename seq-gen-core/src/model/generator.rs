use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use crate::error::{InputError, Result};
use crate::model::nucleotide::Nucleotide;
use crate::model::record::{SequenceRecord, SequenceRequest};

/// Relative draw weights for A, C, G and T (in that order).
///
/// Weights do not need to sum to 1.0; they are normalized by the
/// distribution. Validity (non-negative, at least one non-zero) is checked
/// when a [`SequenceGenerator`] is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaseWeights(pub [f64; 4]);

impl BaseWeights {
	/// Weight of a single base.
	pub fn weight(&self, nucleotide: Nucleotide) -> f64 {
		self.0[nucleotide.index()]
	}

	/// Expected frequency of a base, i.e. its weight over the total.
	pub fn expected_frequency(&self, nucleotide: Nucleotide) -> f64 {
		let total: f64 = self.0.iter().sum();
		self.weight(nucleotide) / total
	}
}

impl Default for BaseWeights {
	/// AT-rich composition: A and T are 1.5x as likely as C and G.
	fn default() -> Self {
		Self([0.3, 0.2, 0.2, 0.3])
	}
}

impl FromStr for BaseWeights {
	type Err = InputError;

	/// Parses `"a,c,g,t"`, e.g. `"0.3,0.2,0.2,0.3"` or `"3,2,2,3"`.
	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		let invalid = || InputError::InvalidWeights(s.to_owned());
		let values = s
			.split(',')
			.map(|part| part.trim().parse::<f64>().map_err(|_| invalid()))
			.collect::<std::result::Result<Vec<_>, _>>()?;
		let weights: [f64; 4] = values.try_into().map_err(|_| invalid())?;
		Ok(Self(weights))
	}
}

impl fmt::Display for BaseWeights {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let [a, c, g, t] = self.0;
		write!(f, "A:{a} C:{c} G:{g} T:{t}")
	}
}

/// A sequence with a token spliced into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Insertion {
	/// The annotated sequence.
	pub sequence: String,

	/// Character offset at which the token starts, in `[0, L]`.
	pub position: usize,

	/// Number of characters of the inserted token.
	pub token_len: usize,
}

impl Insertion {
	/// Removes the token again, giving back the original sequence.
	pub fn without_token(&self) -> String {
		self.sequence
			.chars()
			.enumerate()
			.filter(|(i, _)| *i < self.position || *i >= self.position + self.token_len)
			.map(|(_, c)| c)
			.collect()
	}
}

/// Weighted random nucleotide sequence generator.
///
/// # Responsibilities
/// - Hold a validated weighted distribution over the four bases
/// - Draw sequences of an exact length from a caller-provided random source
/// - Splice a token into a sequence at a uniformly random offset
///
/// The generator never seeds anything itself: given the same seeded
/// source it always produces the same output.
#[derive(Clone, Debug)]
pub struct SequenceGenerator {
	weights: BaseWeights,
	distribution: WeightedIndex<f64>,
}

impl SequenceGenerator {
	/// Builds a generator from explicit base weights.
	///
	/// # Errors
	/// Returns `Error::Weights` if a weight is negative or NaN, or if all
	/// weights are zero.
	pub fn new(weights: BaseWeights) -> Result<Self> {
		let distribution = WeightedIndex::new(weights.0.iter())?;
		Ok(Self { weights, distribution })
	}

	pub fn weights(&self) -> BaseWeights {
		self.weights
	}

	/// Generates a sequence of exactly `length` bases.
	///
	/// # Parameters
	/// - `length`: Number of bases. Callers validate it is positive;
	///   `0` simply yields an empty string.
	/// - `rng`: Random source, consumed draw after draw.
	///
	/// # Notes
	/// - Each position is drawn independently.
	/// - Only `A`, `C`, `G` and `T` are ever produced.
	pub fn generate<R: Rng>(&self, length: usize, rng: &mut R) -> String {
		(0..length)
			.map(|_| Nucleotide::ALL[self.distribution.sample(rng)].as_char())
			.collect()
	}

	/// Inserts `token` at a position drawn uniformly from `[0, L]`.
	///
	/// The token is spliced verbatim, whatever characters it contains.
	pub fn insert_token<R: Rng>(&self, sequence: &str, token: &str, rng: &mut R) -> Insertion {
		let position = rng.random_range(0..=sequence.chars().count());
		insert_token_at(sequence, token, position)
	}

	/// Generates a sequence for a validated request and splices its token.
	pub fn build_record<R: Rng>(&self, request: &SequenceRequest, rng: &mut R) -> SequenceRecord {
		let sequence = self.generate(request.length, rng);
		let insertion = self.insert_token(&sequence, &request.token, rng);
		debug!(
			"Generated {} bases for '{}', token inserted at {}",
			request.length, request.id, insertion.position
		);
		SequenceRecord {
			id: request.id.clone(),
			description: request.description.clone(),
			sequence: insertion.sequence,
			insertion: insertion.position,
		}
	}
}

impl Default for SequenceGenerator {
	fn default() -> Self {
		// Impossible to panic, default weights are all positive
		Self::new(BaseWeights::default()).unwrap()
	}
}

/// Pure splice: prefix of `position` characters, the token, then the rest.
///
/// Positions past the end are clamped to the end of the sequence.
pub fn insert_token_at(sequence: &str, token: &str, position: usize) -> Insertion {
	let byte_offset = sequence
		.char_indices()
		.nth(position)
		.map(|(i, _)| i)
		.unwrap_or(sequence.len());
	let position = sequence[..byte_offset].chars().count();

	let mut spliced = String::with_capacity(sequence.len() + token.len());
	spliced.push_str(&sequence[..byte_offset]);
	spliced.push_str(token);
	spliced.push_str(&sequence[byte_offset..]);

	Insertion {
		sequence: spliced,
		position,
		token_len: token.chars().count(),
	}
}
