use crate::error::{InputError, Result};

/// Largest accepted sequence length (100 Mbp).
///
/// The whole sequence is built in memory, so anything above this is
/// rejected as input instead of failing the allocation.
pub const MAX_LENGTH: usize = 100_000_000;

/// Parses a raw sequence length.
///
/// - Surrounding whitespace is ignored
/// - The value must parse as an integer, be strictly positive and at
///   most [`MAX_LENGTH`]
///
/// # Errors
/// Returns `Error::Input` on parse failure or an out-of-range value.
pub fn parse_length(raw: &str) -> Result<usize> {
	let trimmed = raw.trim();
	let length: i64 = trimmed
		.parse()
		.map_err(|_| InputError::InvalidLength(trimmed.to_owned()))?;
	if length <= 0 {
		return Err(InputError::NonPositiveLength(length).into());
	}
	let length = usize::try_from(length).map_err(|_| InputError::LengthTooLarge { max: MAX_LENGTH })?;
	check_length(length)
}

/// Bounds an already parsed length to `1..=MAX_LENGTH`.
pub fn check_length(length: usize) -> Result<usize> {
	if length == 0 {
		return Err(InputError::NonPositiveLength(0).into());
	}
	if length > MAX_LENGTH {
		return Err(InputError::LengthTooLarge { max: MAX_LENGTH }.into());
	}
	Ok(length)
}

/// Trims `raw` and rejects it if nothing is left.
///
/// `field` names the value in the error message.
pub fn require_non_empty<'a>(field: &'static str, raw: &'a str) -> Result<&'a str> {
	let trimmed = raw.trim();
	if trimmed.is_empty() {
		return Err(InputError::EmptyField(field).into());
	}
	Ok(trimmed)
}
