use std::fs;

use crate::cli::Cli;
use crate::db::builder::DbBuilder;

/// Execute the database build.
///
/// # Errors
///
/// Returns an error (and a non-zero exit from `main`) if the output
/// directory exists without `--force`, an input file is missing, a record
/// name is malformed, or a locus spans more than one input file.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    if cli.out.is_dir() && !cli.force {
        anyhow::bail!(
            "Output directory '{}' exists, use --force to proceed",
            cli.out.display()
        );
    }
    fs::create_dir_all(&cli.out)?;

    let mut builder = DbBuilder::create(&cli.out)?;

    for fasta_path in &cli.fasta {
        if !fasta_path.exists() {
            anyhow::bail!("File {} not found", fasta_path.display());
        }

        builder.add_file(fasta_path)?;
    }

    let summary = builder.finish()?;

    if cli.verbose {
        eprintln!("Wrote {summary}");
    }

    Ok(())
}
