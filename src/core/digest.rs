//! Content digests for allele sequences.
//!
//! Alleles are identified by an MD5 digest of the sequence text rather than
//! by storing the sequence itself. The digest is base64-encoded (standard
//! alphabet) with trailing `=` padding stripped, giving a fixed 22-character
//! fingerprint.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Method label written alongside every digest in the allele table.
pub const DIGEST_METHOD: &str = "md5";

/// Compute the digest of a sequence: base64-encoded MD5, padding stripped.
///
/// The digest is taken over the UTF-8 bytes of the sequence exactly as read.
/// Case and any internal whitespace are significant; no normalization is
/// performed beyond the line-ending trimming done by the reader.
pub fn seq_digest(sequence: &str) -> String {
    let digest = md5::compute(sequence.as_bytes());
    let mut encoded = STANDARD.encode(digest.0);
    encoded.truncate(encoded.trim_end_matches('=').len());
    encoded
}
