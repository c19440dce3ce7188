//! Streaming parser for allele FASTA files.
//!
//! Records are yielded lazily, one at a time; only the sequence currently
//! being assembled is held in memory. Gzip-compressed input is decompressed
//! transparently based on the file extension.
//!
//! Unlike general-purpose FASTA readers, the record name is the FULL
//! remainder of the defline (trailing whitespace trimmed), not just the
//! first word. Scheme deflines carry no description field, and the whole
//! name participates in `locus_allele` validation downstream.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::core::record::SequenceRecord;

/// Check if the path is a gzipped file
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Open a FASTA file for streaming, decompressing transparently.
///
/// The caller is expected to have checked that the path exists; a missing
/// file surfaces here as an I/O error all the same.
///
/// # Errors
///
/// Returns an error if the file cannot be opened.
pub fn open(path: &Path) -> io::Result<FastaReader<Box<dyn BufRead>>> {
    let file = File::open(path)?;
    let reader: Box<dyn BufRead> = if is_gzipped(path) {
        Box::new(BufReader::new(GzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };
    Ok(FastaReader::new(reader))
}

/// Lazy, finite, non-restartable iterator over FASTA records.
///
/// A record begins at a line starting with `>`; the remainder of that line
/// (trailing whitespace trimmed) is the name. Subsequent lines are trimmed
/// of trailing whitespace and concatenated into the sequence until the next
/// `>` or end of input. A final record without a trailing newline is still
/// emitted. Lines before the first `>` are ignored.
pub struct FastaReader<R> {
    reader: R,
    line: String,
    /// Name of the record currently being assembled, if any
    pending: Option<String>,
    done: bool,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pending: None,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = io::Result<SequenceRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut sequence = String::new();
        loop {
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => {
                    // EOF: flush the record in progress, if any
                    self.done = true;
                    return self
                        .pending
                        .take()
                        .map(|name| Ok(SequenceRecord::new(name, sequence)));
                }
                Ok(_) => {}
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }

            if let Some(rest) = self.line.strip_prefix('>') {
                let name = rest.trim_end().to_string();
                if let Some(prev) = self.pending.replace(name) {
                    return Some(Ok(SequenceRecord::new(prev, sequence)));
                }
            } else if self.pending.is_some() {
                sequence.push_str(self.line.trim_end());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn records(input: &[u8]) -> Vec<SequenceRecord> {
        FastaReader::new(input).map(Result::unwrap).collect()
    }

    #[test]
    fn test_is_gzipped() {
        assert!(is_gzipped(Path::new("scheme.fasta.gz")));
        assert!(is_gzipped(Path::new("scheme.fa.bgz")));
        assert!(is_gzipped(Path::new("SCHEME.FASTA.GZ")));
        assert!(!is_gzipped(Path::new("scheme.fasta")));
        assert!(!is_gzipped(Path::new("scheme.tfa")));
    }

    #[test]
    fn test_multiple_records() {
        let parsed = records(b">aroC_1\nACGT\nACGT\n>aroC_2\nGGGG\n");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0], SequenceRecord::new("aroC_1", "ACGTACGT"));
        assert_eq!(parsed[1], SequenceRecord::new("aroC_2", "GGGG"));
    }

    #[test]
    fn test_name_is_full_defline() {
        // The whole defline is the name, not just the first word
        let parsed = records(b">aroC_1 extra tokens\nACGT\n");
        assert_eq!(parsed[0].name, "aroC_1 extra tokens");
    }

    #[test]
    fn test_no_trailing_newline() {
        let parsed = records(b">aroC_1\nACGT");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].sequence, "ACGT");
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(records(b"").is_empty());
    }

    #[test]
    fn test_lines_before_first_header_ignored() {
        let parsed = records(b"; stray comment\n>aroC_1\nACGT\n");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "aroC_1");
    }

    #[test]
    fn test_crlf_line_endings() {
        let parsed = records(b">aroC_1\r\nACGT\r\nGGGG\r\n");
        assert_eq!(parsed[0], SequenceRecord::new("aroC_1", "ACGTGGGG"));
    }

    #[test]
    fn test_record_with_empty_sequence() {
        let parsed = records(b">aroC_1\n>aroC_2\nACGT\n");
        assert_eq!(parsed[0], SequenceRecord::new("aroC_1", ""));
        assert_eq!(parsed[1], SequenceRecord::new("aroC_2", "ACGT"));
    }

    #[test]
    fn test_open_plain_file() {
        let mut temp = NamedTempFile::with_suffix(".fasta").unwrap();
        temp.write_all(b">aroC_1\nACGT\n").unwrap();
        temp.flush().unwrap();

        let parsed: Vec<_> = open(temp.path()).unwrap().map(Result::unwrap).collect();
        assert_eq!(parsed, vec![SequenceRecord::new("aroC_1", "ACGT")]);
    }

    #[test]
    fn test_open_gzipped_file() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let mut temp = NamedTempFile::with_suffix(".fasta.gz").unwrap();
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b">aroC_1\nACGT\n>aroC_2\nACGG\n").unwrap();
        temp.write_all(&encoder.finish().unwrap()).unwrap();
        temp.flush().unwrap();

        let parsed: Vec<_> = open(temp.path()).unwrap().map(Result::unwrap).collect();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1], SequenceRecord::new("aroC_2", "ACGG"));
    }
}
