//! Parsers for allele scheme input files.
//!
//! Currently a single format is supported:
//!
//! - **FASTA files**: one record per allele, named `<locus>_<allele>`.
//!   Plain text or gzip-compressed (`.gz`, `.bgz`).
//!
//! ## Example
//!
//! ```rust,no_run
//! use allele_db::parsing::fasta;
//! use std::path::Path;
//!
//! for result in fasta::open(Path::new("aroC.fasta.gz")).unwrap() {
//!     let record = result.unwrap();
//!     println!("{}: {} bp", record.name, record.sequence.len());
//! }
//! ```

pub mod fasta;
