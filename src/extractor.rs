use crate::date_parser::parse_pdf_date;
use crate::string_decoder::decode_pdf_string;
use crate::{SignatureDetails, SignatureType};
use lazy_static::lazy_static;
use regex::bytes::Regex;

pub(crate) const BYTE_RANGE: &[u8] = b"/ByteRange";
pub(crate) const SUB_FILTER: &[u8] = b"/SubFilter";

/// Sub-filter names in priority order. The first one present anywhere in the
/// buffer decides the type, wherever the others appear.
const SUB_FILTER_TYPES: [(&[u8], SignatureType); 3] = [
    (b"adbe.pkcs7.detached", SignatureType::Pkcs7Detached),
    (b"adbe.pkcs7.sha1", SignatureType::Pkcs7Sha1),
    (b"ETSI.CAdES.detached", SignatureType::CadesDetached),
];

lazy_static! {
    /// `/Name(...)` with the payload running to the first unescaped `)`.
    static ref RE_SIGNER_NAME: Regex = Regex::new(r"(?s-u)/Name\(((?:\\.|[^\\)])*)\)").unwrap();

    /// `/M(D:...)` whose payload opens with fourteen digits.
    static ref RE_SIGNING_TIME: Regex = Regex::new(r"(?-u)/M\(D:([0-9]{14})[^)]*\)").unwrap();
}

/// Plain substring search over raw bytes.
pub(crate) fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    memchr::memmem::find(haystack, needle).is_some()
}

/// Classify the signature and pull the signer name and signing date out of
/// `bytes`.
///
/// Returns [`SignatureDetails::unsigned`] unless both `/ByteRange` and
/// `/SubFilter` occur in the buffer. Name and date come from the first match
/// in the whole buffer, not from the dictionary that holds `/ByteRange`.
///
/// The `/Name` payload is decoded as it appears in the file, without resolving
/// literal-string escapes. A UTF-16BE name whose writer escaped a `(`, `)` or
/// `\` byte (U+0129 is stored as `01 5C 29`, for instance) keeps the backslash.
/// With an odd number of such escapes the payload fails to decode and
/// `signer_name` is `None`; with an even number the name comes back garbled.
pub fn extract_signature_details(bytes: &[u8]) -> SignatureDetails {
    if !contains(bytes, BYTE_RANGE) || !contains(bytes, SUB_FILTER) {
        return SignatureDetails::unsigned();
    }

    SignatureDetails {
        has_signature: true,
        signature_type: Some(classify_signature(bytes)),
        signer_name: find_signer_name(bytes),
        signature_date: find_signing_time(bytes),
        certificate_issuer: None,
    }
}

fn classify_signature(bytes: &[u8]) -> SignatureType {
    SUB_FILTER_TYPES
        .iter()
        .find(|(name, _)| contains(bytes, name))
        .map_or(SignatureType::Unknown, |(_, kind)| *kind)
}

fn find_signer_name(bytes: &[u8]) -> Option<String> {
    let payload = RE_SIGNER_NAME.captures(bytes)?.get(1)?.as_bytes();

    match decode_pdf_string(payload) {
        Ok(name) => Some(name),
        Err(e) => {
            log::debug!("ignoring undecodable /Name entry: {e}");
            None
        }
    }
}

fn find_signing_time(bytes: &[u8]) -> Option<String> {
    let digits = RE_SIGNING_TIME.captures(bytes)?.get(1)?.as_bytes();
    // The capture is ASCII digits only.
    let digits = std::str::from_utf8(digits).ok()?;
    parse_pdf_date(digits)
}
