use thiserror::Error;

/// Fatal validation errors for a typing scheme.
#[derive(Error, Debug)]
pub enum SchemeError {
    #[error("'{0}' is not a valid sequence name (should be locus_allele)")]
    InvalidName(String),

    #[error("locus {locus} is found in multiple files ({first} and {second}) as {record}")]
    LocusCollision {
        locus: String,
        first: String,
        second: String,
        record: String,
    },
}

/// A single allele sequence read from an input FASTA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// Full record name as it appeared on the defline, without the leading `>`
    /// and with trailing whitespace trimmed
    pub name: String,

    /// Sequence text with line endings stripped
    pub sequence: String,
}

impl SequenceRecord {
    pub fn new(name: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sequence: sequence.into(),
        }
    }

    /// Split the record name into `(locus, allele)`.
    ///
    /// The name must contain exactly one underscore separating two non-empty
    /// parts. Identifiers that themselves contain an underscore are rejected;
    /// the scheme format reserves the separator.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::InvalidName`] if the name does not split into
    /// exactly two non-empty parts.
    pub fn split_name(&self) -> Result<(&str, &str), SchemeError> {
        let mut parts = self.name.split('_');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(locus), Some(allele), None) if !locus.is_empty() && !allele.is_empty() => {
                Ok((locus, allele))
            }
            _ => Err(SchemeError::InvalidName(self.name.clone())),
        }
    }
}
