//! Command-line interface for allele-db.
//!
//! One operation: digest one or more typing scheme FASTAs into the two
//! database files.
//!
//! ## Usage
//!
//! ```text
//! # Digest a scheme spread over one file per locus
//! allele-db scheme/*.tfa --out senterica.db
//!
//! # Rebuild in place, with progress on stderr
//! allele-db scheme/*.tfa --out senterica.db --force --verbose
//! ```

use std::path::PathBuf;

use clap::Parser;

pub mod digest;

#[derive(Parser)]
#[command(name = "allele-db")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Build a hashed allele database from typing scheme FASTAs")]
#[command(
    long_about = "allele-db converts multi-FASTA allele files into a normalized database:\na reference FASTA holding the first allele per locus, and a TSV mapping\nevery allele to a base64-encoded MD5 content hash.\n\nSequence names must have the form <locus>_<allele>, and each locus must be\nfully contained in one input file."
)]
pub struct Cli {
    /// Input FASTA file(s) with alleles named <locus>_<allele>
    /// (plain text or gzip-compressed)
    #[arg(required = true)]
    pub fasta: Vec<PathBuf>,

    /// Output directory, created if absent
    #[arg(short = 'o', long = "out", alias = "outdir")]
    pub out: PathBuf,

    /// Proceed when the output directory already exists
    #[arg(long)]
    pub force: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
