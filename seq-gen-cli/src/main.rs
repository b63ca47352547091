use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use env_logger::Env;
use log::debug;
use seq_gen_core::io::{build_output_path, read_fasta, save_fasta};
use seq_gen_core::{Result, SequenceGenerator, calculate_statistics, seeded_rng};

use crate::args::{Cli, Command, GenerateArgs};
use crate::prompt::Prompter;

mod args;
mod prompt;
mod report;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Some(Command::Stats { file }) => stats(&file),
        None => generate(&cli.generate, io::stdin().lock(), io::stdout()).map(|_| ()),
    };

    // Every failure ends the run, input errors with their own status
    if let Err(e) = result {
        eprintln!("\nError: {}", e);
        process::exit(e.exit_code());
    }
}

/// Prompts for missing values, generates the record, saves it and prints
/// its statistics.
///
/// Prompts and the report both go to `output`. Returns the written path.
fn generate<R: BufRead, W: Write>(args: &GenerateArgs, input: R, mut output: W) -> Result<PathBuf> {
    let generator = SequenceGenerator::new(args.weights.unwrap_or_default())?;
    debug!("Base weights: {}", generator.weights());

    let request = {
        let mut prompter = Prompter::new(input, &mut output);
        prompt::collect_request(args, &mut prompter)?
    };

    let (mut rng, seed) = seeded_rng(args.seed);
    debug!("Seed: {}", seed);
    let record = generator.build_record(&request, &mut rng);

    let path = build_output_path(&args.output_dir, &record.id, &args.extension);
    let backup = save_fasta(&path, &record.header(), &record.sequence, args.line_width)?;
    let stats = record.statistics()?;

    write!(output, "{}", report::saved(&path, backup.as_deref(), &stats))?;
    output.flush()?;
    Ok(path)
}

/// Prints the statistics of the first record of a FASTA file.
fn stats(file: &Path) -> Result<()> {
    let record = read_fasta(file)?;
    let stats = calculate_statistics(&record.sequence)?;
    println!(">{}", record.header);
    print!("{}", report::statistics(&stats));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn flags(dir: &Path, seed: Option<u64>) -> GenerateArgs {
        GenerateArgs {
            length: Some("200".to_owned()),
            id: Some("seq1".to_owned()),
            description: Some("test".to_owned()),
            token: Some("Ada".to_owned()),
            seed,
            extension: "fasta".to_owned(),
            output_dir: dir.to_path_buf(),
            line_width: 80,
            ..GenerateArgs::default()
        }
    }

    fn run(args: &GenerateArgs) -> (PathBuf, String) {
        let mut output = Vec::new();
        let path = generate(args, Cursor::new(Vec::new()), &mut output).unwrap();
        (path, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_generate_writes_wrapped_fasta() {
        let dir = tempdir().unwrap();
        let (path, output) = run(&flags(dir.path(), Some(42)));

        assert_eq!(path, dir.path().join("seq1.fasta"));
        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], ">seq1 test");
        assert_eq!(lines[1].len(), 80);
        assert_eq!(lines[2].len(), 80);
        assert_eq!(lines[3].len(), 43);
        assert_eq!(lines.len(), 4);
        assert!(lines[1..].concat().contains("Ada"));

        // Every value came from a flag, nothing was asked
        assert!(!output.contains("Enter"));
        assert!(output.contains("The sequence was saved to the file"));
        assert!(output.contains("CG/AT ratio: "));
        assert!(!output.contains("Previous version"));
    }

    #[test]
    fn test_generate_twice_rotates_backup() {
        let dir = tempdir().unwrap();
        let args = flags(dir.path(), Some(42));

        let (path, _) = run(&args);
        let first = fs::read_to_string(&path).unwrap();
        let (_, output) = run(&args);

        let backup = dir.path().join("seq1_backup.fasta");
        assert!(backup.exists());
        assert!(output.contains("Previous version moved to"));
        // Same seed, same file
        assert_eq!(fs::read_to_string(&backup).unwrap(), first);
        assert_eq!(fs::read_to_string(&path).unwrap(), first);
    }

    #[test]
    fn test_generate_prompts_for_missing_values() {
        let dir = tempdir().unwrap();
        let args = GenerateArgs {
            description: None,
            ..flags(dir.path(), Some(1))
        };
        let mut output = Vec::new();
        let path = generate(&args, Cursor::new(b"from stdin\n".to_vec()), &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with("Provide a description of the sequence: "));
        let text = fs::read_to_string(path).unwrap();
        assert!(text.starts_with(">seq1 from stdin\n"));
    }

    #[test]
    fn test_generate_invalid_length_writes_nothing() {
        let dir = tempdir().unwrap();
        let args = GenerateArgs {
            length: Some("0".to_owned()),
            ..flags(dir.path(), None)
        };
        let err = generate(&args, Cursor::new(Vec::new()), Vec::new()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
