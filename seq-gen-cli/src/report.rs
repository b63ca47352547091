use std::fmt::Write;
use std::path::Path;

use seq_gen_core::{Nucleotide, Statistics};

/// Statistics block: one line per base, then %CG and the CG/AT ratio.
pub fn statistics(stats: &Statistics) -> String {
    let mut out = String::from("Sequence statistics (excluding non-DNA characters):\n");
    for nucleotide in Nucleotide::ALL {
        // Writing into a String cannot fail
        writeln!(out, "{}: {:.1}%", nucleotide, stats.percentage(nucleotide)).unwrap();
    }
    writeln!(out, "%CG: {:.1}", stats.cg_percentage()).unwrap();
    writeln!(out, "CG/AT ratio: {}", stats.ratio()).unwrap();
    out
}

/// Full report printed after a successful generation.
pub fn saved(path: &Path, backup: Option<&Path>, stats: &Statistics) -> String {
    let mut out = format!("\nThe sequence was saved to the file {}\n", path.display());
    if let Some(backup) = backup {
        out.push_str(&format!("Previous version moved to {}\n", backup.display()));
    }
    out.push_str(&statistics(stats));
    out
}
