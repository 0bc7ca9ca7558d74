//! Decoding of PDF literal-string payloads to UTF-8.

use thiserror::Error;

const UTF16BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// A string payload that declared UTF-16BE but could not be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The bytes after the byte-order mark do not form whole code units.
    #[error("UTF-16BE payload has an odd number of bytes ({0})")]
    OddLength(usize),

    /// The code units contain an unpaired surrogate.
    #[error("UTF-16BE payload is not valid UTF-16")]
    InvalidUtf16,
}

/// Decode the payload of a PDF literal string to UTF-8.
///
/// A payload starting with `FE FF` is UTF-16BE; everything after the
/// byte-order mark is decoded as big-endian code units. Any other payload is
/// taken as UTF-8 (which covers ASCII). Legacy PDFDocEncoding text with
/// high-bit characters is not mapped; invalid sequences become U+FFFD.
///
/// Escape sequences (`\(`, `\)`, `\\`, octal) are not interpreted.
///
/// ```
/// # use pdfsigscan::decode_pdf_string;
/// assert_eq!(decode_pdf_string(b"John").unwrap(), "John");
/// assert_eq!(decode_pdf_string(&[0xFE, 0xFF, 0x00, b'J', 0x00, b'o']).unwrap(), "Jo");
/// ```
pub fn decode_pdf_string(payload: &[u8]) -> Result<String, DecodeError> {
    match payload.strip_prefix(&UTF16BE_BOM) {
        Some(units) => decode_utf16be(units),
        None => Ok(String::from_utf8_lossy(payload).into_owned()),
    }
}

fn decode_utf16be(bytes: &[u8]) -> Result<String, DecodeError> {
    if bytes.len() % 2 != 0 {
        return Err(DecodeError::OddLength(bytes.len()));
    }

    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();

    String::from_utf16(&units).map_err(|_| DecodeError::InvalidUtf16)
}
