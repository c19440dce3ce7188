//! Allele database construction and storage.
//!
//! The database is two flat files inside the output directory:
//!
//! - `ref.fasta` — one record per distinct locus, holding its first-seen
//!   allele (the assumed reference).
//! - `alleles.tsv` — one row per input allele: locus, base64-MD5 digest,
//!   digest method.
//!
//! [`writer::DbWriter`] owns the file handles; [`builder::DbBuilder`] drives
//! the single-pass pipeline that fills them.

pub mod builder;
pub mod writer;
