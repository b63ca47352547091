use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Characters per sequence line in written FASTA files.
pub const LINE_WIDTH: usize = 80;

/// Extension of written FASTA files.
pub const DEFAULT_EXTENSION: &str = "fasta";

/// Suffix appended to the file stem of a rotated file.
const BACKUP_SUFFIX: &str = "_backup";

/// A single FASTA record as read back from disk.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FastaRecord {
	/// Header line without the leading `>`.
	pub header: String,

	/// All sequence lines concatenated.
	pub sequence: String,
}

/// Builds the output path of a record.
///
/// Example:
/// `"out"` + `"seq1"` + `"fasta"` → `out/seq1.fasta`
///
/// The identifier is used verbatim, dots included. An empty extension
/// gives a path without extension.
pub fn build_output_path<P: AsRef<Path>>(folder: P, id: &str, extension: &str) -> PathBuf {
	let extension = extension.trim_start_matches('.');
	let filename = if extension.is_empty() {
		id.to_owned()
	} else {
		format!("{}.{}", id, extension)
	};
	folder.as_ref().join(filename)
}

/// Builds the sibling backup path of a file.
///
/// Examples:
/// - `"data/seq1.fasta"` → `"data/seq1_backup.fasta"`
/// - `"seq1"` → `"seq1_backup"`
pub fn backup_path<P: AsRef<Path>>(path: P) -> io::Result<PathBuf> {
	let path = path.as_ref();

	let parent = path.parent().unwrap_or_else(|| Path::new("."));
	let file_stem = path
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))?;

	let mut backup_name = file_stem.to_os_string();
	backup_name.push(BACKUP_SUFFIX);
	if let Some(extension) = path.extension() {
		backup_name.push(".");
		backup_name.push(extension);
	}

	Ok(parent.join(backup_name))
}

/// Writes one FASTA record.
///
/// # Behavior
/// - Writes `>{header}` on its own line.
/// - Wraps the sequence into lines of `line_width` characters; only the
///   last line may be shorter.
/// - An empty sequence writes no sequence line.
/// - A `line_width` of 0 disables wrapping.
///
/// # Notes
/// - Counts characters, not bytes, so a multi-byte token is never split.
pub fn write_record<W: Write>(writer: &mut W, header: &str, sequence: &str, line_width: usize) -> io::Result<()> {
	writeln!(writer, ">{}", header)?;

	if line_width == 0 {
		if !sequence.is_empty() {
			writeln!(writer, "{}", sequence)?;
		}
		return Ok(());
	}

	let mut line = String::with_capacity(line_width);
	let mut line_len = 0;
	for c in sequence.chars() {
		line.push(c);
		line_len += 1;
		if line_len == line_width {
			writeln!(writer, "{}", line)?;
			line.clear();
			line_len = 0;
		}
	}
	if line_len > 0 {
		writeln!(writer, "{}", line)?;
	}

	Ok(())
}

/// Formats one FASTA record in memory.
pub fn format_fasta(header: &str, sequence: &str, line_width: usize) -> String {
	let mut buffer = Vec::with_capacity(header.len() + sequence.len() + sequence.len() / LINE_WIDTH + 4);
	// Writing into a Vec cannot fail
	write_record(&mut buffer, header, sequence, line_width).unwrap();
	// Only valid UTF-8 was written
	String::from_utf8(buffer).unwrap()
}

/// Saves a FASTA record, rotating any existing file to its backup path.
///
/// # Parameters
/// - `path`: Destination file.
/// - `header`: Header without the `>` marker.
/// - `sequence`: Sequence to wrap.
/// - `line_width`: Characters per line (see [`write_record`]).
///
/// # Returns
/// - `Ok(Some(backup))` when a previous file was moved to `backup`
/// - `Ok(None)` when nothing existed at `path`
///
/// # Notes
/// - Only one previous version is kept: an existing backup is replaced.
/// - The sequence is check existence → rename → write. A failure during
///   the write leaves a partial file behind.
pub fn save_fasta<P: AsRef<Path>>(path: P, header: &str, sequence: &str, line_width: usize) -> Result<Option<PathBuf>> {
	let path = path.as_ref();

	let backup = if path.exists() {
		let backup = backup_path(path)?;
		fs::rename(path, &backup)?;
		info!("Moved existing {} to {}", path.display(), backup.display());
		Some(backup)
	} else {
		None
	};

	let mut writer = BufWriter::new(File::create(path)?);
	write_record(&mut writer, header, sequence, line_width)?;
	writer.flush()?;
	info!("Wrote {} characters to {}", sequence.chars().count(), path.display());

	Ok(backup)
}

/// Reads the first FASTA record of a file.
///
/// # Errors
/// - `Error::Io` if the file cannot be read
/// - `Error::Format` if the first non-blank line is not a header
pub fn read_fasta<P: AsRef<Path>>(path: P) -> Result<FastaRecord> {
	let contents = fs::read_to_string(&path)?;
	let mut lines = contents.lines().skip_while(|l| l.trim().is_empty());

	let header = match lines.next() {
		Some(line) if line.starts_with('>') => line[1..].to_owned(),
		Some(_) => return Err(Error::Format("first line is not a '>' header".to_owned())),
		None => return Err(Error::Format("file is empty".to_owned())),
	};

	let mut sequence = String::new();
	for line in lines {
		if line.starts_with('>') {
			warn!("{} holds several records, only the first is read", path.as_ref().display());
			break;
		}
		sequence.push_str(line.trim_end());
	}

	Ok(FastaRecord { header, sequence })
}
