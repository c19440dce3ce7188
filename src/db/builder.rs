//! Single-pass database construction.
//!
//! Input files are streamed in the order given; every record is validated,
//! tracked, digested, and written before the next is read. The first fatal
//! condition aborts the run, leaving any partially written output on disk.

use std::fmt;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::core::digest::seq_digest;
use crate::core::tracker::{LocusTracker, Ownership};
use crate::db::writer::DbWriter;
use crate::parsing::fasta;

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, Default)]
pub struct DbSummary {
    /// Input files processed
    pub files: usize,
    /// Allele rows written to the TSV
    pub alleles: usize,
    /// Distinct loci (equals the number of reference records)
    pub loci: usize,
}

impl fmt::Display for DbSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} alleles across {} loci from {} file(s)",
            self.alleles, self.loci, self.files
        )
    }
}

/// Streams allele FASTAs into the database files.
///
/// The builder owns the open output handles and the locus ownership map for
/// the lifetime of a run; files are added one at a time and the whole run is
/// finalized with [`finish`](DbBuilder::finish).
pub struct DbBuilder {
    writer: DbWriter,
    tracker: LocusTracker,
    files: usize,
    alleles: usize,
}

impl DbBuilder {
    /// Open the database files inside `outdir`, which must already exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the output files cannot be created.
    pub fn create(outdir: &Path) -> anyhow::Result<Self> {
        let writer = DbWriter::create(outdir)
            .with_context(|| format!("creating database files in {}", outdir.display()))?;
        Ok(Self {
            writer,
            tracker: LocusTracker::new(),
            files: 0,
            alleles: 0,
        })
    }

    /// Stream one input file into the database.
    ///
    /// For each record: validate the `locus_allele` name, register the locus,
    /// write the reference entry if this is the locus's first allele, then
    /// append the digest row.
    ///
    /// # Errors
    ///
    /// Returns an error on unreadable input, a malformed record name, or a
    /// locus already owned by a different file.
    pub fn add_file(&mut self, path: &Path) -> anyhow::Result<()> {
        debug!("Processing {}", path.display());

        let reader = fasta::open(path)
            .with_context(|| format!("opening {}", path.display()))?;

        for result in reader {
            let record =
                result.with_context(|| format!("reading {}", path.display()))?;
            let (locus, _allele) = record.split_name()?;

            if self.tracker.observe(locus, path, &record.name)? == Ownership::First {
                self.writer
                    .write_reference(&record.name, &record.sequence)?;
            }

            let digest = seq_digest(&record.sequence);
            self.writer.write_allele(locus, &digest)?;
            self.alleles += 1;
        }

        self.files += 1;
        Ok(())
    }

    /// Flush the output files and report totals.
    ///
    /// # Errors
    ///
    /// Returns an error if either output file cannot be flushed.
    pub fn finish(mut self) -> anyhow::Result<DbSummary> {
        self.writer.flush().context("flushing database files")?;
        Ok(DbSummary {
            files: self.files,
            alleles: self.alleles,
            loci: self.tracker.len(),
        })
    }
}
