use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use seq_gen_core::BaseWeights;
use seq_gen_core::io::{DEFAULT_EXTENSION, LINE_WIDTH};

/// Generate a random DNA sequence with your name hidden in it, save it as
/// FASTA and print its composition.
///
/// Values not given as options are asked for interactively.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the composition statistics of an existing FASTA file
    Stats {
        /// FASTA file to analyse (first record only)
        file: PathBuf,
    },
}

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Sequence length (positive integer)
    #[arg(short, long)]
    pub length: Option<String>,

    /// Sequence identifier, also the output file name
    #[arg(short, long)]
    pub id: Option<String>,

    /// Free-text description for the header
    #[arg(short, long)]
    pub description: Option<String>,

    /// Name (token) to insert into the sequence
    #[arg(short, long)]
    pub token: Option<String>,

    /// Seed of the random source; derived from the clock when absent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Base weights as "A,C,G,T" (default 0.3,0.2,0.2,0.3)
    #[arg(long)]
    pub weights: Option<BaseWeights>,

    /// Extension of the output file
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Folder the FASTA file is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Characters per sequence line (0 disables wrapping)
    #[arg(long, default_value_t = LINE_WIDTH)]
    pub line_width: usize,
}
