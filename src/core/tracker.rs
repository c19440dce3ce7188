use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::record::SchemeError;

/// Whether a locus observation was the first for that locus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// First allele seen for this locus; its sequence becomes the reference
    First,
    /// Locus already registered from the same file
    Seen,
}

/// Records which input file owns each locus.
///
/// A typing scheme keeps every allele of a locus in a single file. The
/// tracker is an explicit accumulator threaded through per-file processing,
/// so the cross-file consistency contract is enforced in one place and can
/// be tested in isolation.
#[derive(Debug, Default)]
pub struct LocusTracker {
    owners: HashMap<String, PathBuf>,
}

impl LocusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sighting of `locus` in `file`.
    ///
    /// `record` is the full sequence name, reported when the sighting
    /// conflicts with an earlier file.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::LocusCollision`] if the locus was first seen in
    /// a different file.
    pub fn observe(
        &mut self,
        locus: &str,
        file: &Path,
        record: &str,
    ) -> Result<Ownership, SchemeError> {
        match self.owners.get(locus) {
            None => {
                debug!("+ locus {locus} from {}", file.display());
                self.owners.insert(locus.to_string(), file.to_path_buf());
                Ok(Ownership::First)
            }
            Some(owner) if owner == file => Ok(Ownership::Seen),
            Some(owner) => Err(SchemeError::LocusCollision {
                locus: locus.to_string(),
                first: owner.display().to_string(),
                second: file.display().to_string(),
                record: record.to_string(),
            }),
        }
    }

    /// Number of distinct loci seen so far.
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// File that first introduced `locus`, if any.
    pub fn owner(&self, locus: &str) -> Option<&Path> {
        self.owners.get(locus).map(PathBuf::as_path)
    }
}
