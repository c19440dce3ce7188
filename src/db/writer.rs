//! Append-only writers for the two database files.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::digest::DIGEST_METHOD;

/// Name of the reference FASTA within the output directory.
pub const REF_FASTA: &str = "ref.fasta";

/// Name of the allele table within the output directory.
pub const ALLELES_TSV: &str = "alleles.tsv";

/// Buffered handles for the two output files.
///
/// Both files are created once at start and receive interleaved appends for
/// the duration of the run; writes are order-preserving and never rewound.
pub struct DbWriter {
    reference: BufWriter<File>,
    alleles: BufWriter<File>,
}

impl DbWriter {
    /// Create both output files in `outdir` and write the TSV header.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be created or the header
    /// cannot be written.
    pub fn create(outdir: &Path) -> io::Result<Self> {
        let reference = BufWriter::new(File::create(outdir.join(REF_FASTA))?);
        let mut alleles = BufWriter::new(File::create(outdir.join(ALLELES_TSV))?);
        writeln!(alleles, "# locus\tallele\thash-type")?;
        Ok(Self { reference, alleles })
    }

    /// Append a reference record: the full original name and its sequence.
    pub fn write_reference(&mut self, name: &str, sequence: &str) -> io::Result<()> {
        writeln!(self.reference, ">{name}\n{sequence}")
    }

    /// Append one allele row.
    ///
    /// The second column carries the digest, not the allele identifier,
    /// even though the header names it `allele`. Downstream consumers of
    /// the hashsum format rely on this layout.
    pub fn write_allele(&mut self, locus: &str, digest: &str) -> io::Result<()> {
        writeln!(self.alleles, "{locus}\t{digest}\t{DIGEST_METHOD}")
    }

    /// Flush both handles.
    pub fn flush(&mut self) -> io::Result<()> {
        self.reference.flush()?;
        self.alleles.flush()
    }
}
