//! # allele-db
//!
//! A library for building normalized, hashed allele databases from
//! multi-locus typing scheme FASTAs.
//!
//! Typing schemes (MLST and its genome-scale descendants) distribute their
//! alleles as multi-FASTA files, one record per allele, named
//! `<locus>_<allele>`. Working with the raw files is awkward: sequences are
//! large, and comparing alleles across runs means comparing full sequences.
//!
//! `allele-db` digests a scheme once into two compact artifacts:
//!
//! - `ref.fasta` — the first-seen allele per locus, used as the
//!   representative sequence.
//! - `alleles.tsv` — every allele mapped to a base64-encoded MD5 content
//!   hash, so downstream tools can identify alleles without the sequences.
//!
//! ## Guarantees
//!
//! - **Single pass**: every input is streamed once; records are validated,
//!   tracked, hashed, and written in input order.
//! - **Name validation**: a record whose name is not `<locus>_<allele>`
//!   aborts the run.
//! - **Scheme consistency**: a locus appearing in more than one input file
//!   aborts the run.
//! - **Deterministic output**: identical inputs reproduce byte-identical
//!   databases.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use allele_db::DbBuilder;
//!
//! let mut builder = DbBuilder::create(Path::new("senterica.db")).unwrap();
//! builder.add_file(Path::new("scheme/aroC.tfa")).unwrap();
//! builder.add_file(Path::new("scheme/dnaN.tfa")).unwrap();
//! let summary = builder.finish().unwrap();
//! println!("{summary}");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Sequence records, name validation, digests, locus tracking
//! - [`db`]: Database writer and the single-pass builder
//! - [`parsing`]: Streaming FASTA reader with transparent gzip decompression
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod db;
pub mod parsing;

// Re-export commonly used types for convenience
pub use core::digest::{seq_digest, DIGEST_METHOD};
pub use core::record::{SchemeError, SequenceRecord};
pub use core::tracker::{LocusTracker, Ownership};
pub use db::builder::{DbBuilder, DbSummary};
pub use db::writer::{DbWriter, ALLELES_TSV, REF_FASTA};
pub use parsing::fasta::FastaReader;
