//! Core data types for allele database construction.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`SequenceRecord`]: A single allele sequence with its `locus_allele` name
//! - [`LocusTracker`]: Records which input file owns each locus
//! - [`SchemeError`]: Fatal validation errors for a typing scheme
//!
//! ## Record Naming
//!
//! Every sequence in a typing scheme FASTA is named `<locus>_<allele>`, e.g.
//! `aroC_1`. The locus identifies the typed marker; the allele identifies the
//! sequence variant. Neither part may itself contain an underscore — a name
//! that does not split into exactly two non-empty parts is rejected.
//!
//! [`SequenceRecord`]: record::SequenceRecord
//! [`LocusTracker`]: tracker::LocusTracker
//! [`SchemeError`]: record::SchemeError

pub mod digest;
pub mod record;
pub mod tracker;
