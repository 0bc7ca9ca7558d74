use crate::extractor::{self, contains, BYTE_RANGE, SUB_FILTER};
use crate::SignatureDetails;

/// At least one of these must accompany `/ByteRange` and `/SubFilter`.
const FILTER_MARKERS: [&[u8]; 3] = [b"adbe.pkcs7", b"ETSI.CAdES", b"/Type/Sig"];

/// Returns `true` when `bytes` look like they contain a signature dictionary.
///
/// The buffer must contain `/ByteRange`, `/SubFilter`, and at least one of
/// `adbe.pkcs7`, `ETSI.CAdES` or `/Type/Sig`. Matching is a case-sensitive
/// substring search over the whole buffer, so these tokens inside a comment or
/// an unrelated stream also count.
///
/// ```
/// # use pdfsigscan::detect_signature;
/// assert!(detect_signature(b"/ByteRange [0 1 2 3] /SubFilter /adbe.pkcs7.detached"));
/// assert!(!detect_signature(b"/SubFilter /adbe.pkcs7.detached"));
/// ```
pub fn detect_signature(bytes: &[u8]) -> bool {
    contains(bytes, BYTE_RANGE)
        && contains(bytes, SUB_FILTER)
        && FILTER_MARKERS.iter().any(|marker| contains(bytes, marker))
}

/// Detect a signature and, when one is present, extract its details.
///
/// This is the single entry point most callers want: an unsigned document
/// yields [`SignatureDetails::unsigned`] without running the extractor.
pub fn inspect_signature(bytes: &[u8]) -> SignatureDetails {
    if detect_signature(bytes) {
        extractor::extract_signature_details(bytes)
    } else {
        SignatureDetails::unsigned()
    }
}
