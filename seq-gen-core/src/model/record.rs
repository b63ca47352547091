use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::statistics::{Statistics, calculate_statistics};
use crate::validate::{check_length, parse_length, require_non_empty};

/// Validated input of one generation run.
///
/// `SequenceRequest` can only be built through [`SequenceRequest::new`],
/// so holding one means every field already passed validation.
///
/// # Invariants
/// - `length` is in `1..=MAX_LENGTH`
/// - `id` and `token` are non-empty and trimmed
/// - `description` is trimmed and may be empty
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SequenceRequest {
	/// Number of generated bases (the token comes on top).
	pub length: usize,

	/// Sequence identifier, used as header prefix and file stem.
	pub id: String,

	/// Free-text description appended to the header.
	pub description: String,

	/// Opaque string spliced into the generated sequence.
	pub token: String,
}

impl SequenceRequest {
	/// Validates raw user input.
	///
	/// # Errors
	/// Returns `Error::Input` for an invalid or non-positive length, or an
	/// empty identifier or token. Fields are checked in prompt order.
	pub fn new(length: &str, id: &str, description: &str, token: &str) -> Result<Self> {
		let length = parse_length(length)?;
		Self::with_length(length, id, description, token)
	}

	/// Same as [`SequenceRequest::new`] for an already parsed length.
	pub fn with_length(length: usize, id: &str, description: &str, token: &str) -> Result<Self> {
		let length = check_length(length)?;
		let id = require_non_empty("sequence ID", id)?.to_owned();
		let token = require_non_empty("name", token)?.to_owned();
		Ok(Self {
			length,
			id,
			description: description.trim().to_owned(),
			token,
		})
	}
}

/// A generated, annotated sequence ready to be saved.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SequenceRecord {
	pub id: String,
	pub description: String,

	/// Generated bases with the token spliced in.
	pub sequence: String,

	/// Character offset of the token in `sequence`.
	pub insertion: usize,
}

impl SequenceRecord {
	/// FASTA header without the `>` marker: `"{id} {description}"`.
	///
	/// The separating space is kept even when the description is empty.
	pub fn header(&self) -> String {
		format!("{} {}", self.id, self.description)
	}

	/// Composition statistics of the annotated sequence.
	pub fn statistics(&self) -> Result<Statistics> {
		calculate_statistics(&self.sequence)
	}
}
