// Tests for the scanning core: detection, classification, field extraction
// and the two field decoders. All fixtures are small byte buffers that carry
// only the tokens under test.

use pdfsigscan::{
    decode_pdf_string, detect_signature, extract_signature_details, inspect_signature,
    parse_pdf_date, DecodeError, SignatureDetails, SignatureType,
};

fn utf16be_with_bom(text: &str) -> Vec<u8> {
    let mut out = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        out.extend_from_slice(&unit.to_be_bytes());
    }
    out
}

const SIGNED_PKCS7: &[u8] = b"%PDF-1.7\n1 0 obj\n<< /Type/Sig /Filter /Adobe.PPKLite \
/SubFilter /adbe.pkcs7.detached /ByteRange [0 100 200 300] /Contents <3082> >>\nendobj\n";

// ── Detection ─────────────────────────────────────────────────────────────────

#[test]
fn detect_requires_byte_range() {
    assert!(!detect_signature(b"/SubFilter /adbe.pkcs7.detached /Type/Sig"));
}

#[test]
fn detect_requires_sub_filter() {
    assert!(!detect_signature(b"/ByteRange [0 1 2 3] adbe.pkcs7.detached /Type/Sig ETSI.CAdES"));
}

#[test]
fn detect_requires_a_filter_marker() {
    assert!(!detect_signature(b"/ByteRange [0 1 2 3] /SubFilter /Something.Else"));
}

#[test]
fn detect_accepts_any_single_filter_marker() {
    assert!(detect_signature(b"/ByteRange /SubFilter adbe.pkcs7"));
    assert!(detect_signature(b"/ByteRange /SubFilter ETSI.CAdES"));
    assert!(detect_signature(b"/ByteRange /SubFilter /x.y /Type/Sig"));
}

#[test]
fn detect_is_case_sensitive() {
    assert!(!detect_signature(b"/byterange /SubFilter adbe.pkcs7"));
    assert!(!detect_signature(b"/ByteRange /SubFilter ADBE.PKCS7"));
}

#[test]
fn detect_ignores_object_boundaries() {
    // Tokens scattered across a comment and an unrelated stream still count.
    let bytes = b"% /ByteRange in a comment\nstream\n/SubFilter\nendstream\n% adbe.pkcs7";
    assert!(detect_signature(bytes));
}

#[test]
fn detect_empty_input_is_false() {
    assert!(!detect_signature(b""));
}

#[test]
fn detect_tolerates_binary_noise() {
    let mut bytes = vec![0xFF, 0x00, 0x9C, 0xE2];
    bytes.extend_from_slice(SIGNED_PKCS7);
    bytes.extend_from_slice(&[0x80, 0x81, 0x00]);
    assert!(detect_signature(&bytes));
}

// ── Classification ────────────────────────────────────────────────────────────

#[test]
fn pkcs7_detached_is_classified() {
    assert!(detect_signature(SIGNED_PKCS7));
    let details = extract_signature_details(SIGNED_PKCS7);
    assert!(details.has_signature);
    assert_eq!(details.signature_type, Some(SignatureType::Pkcs7Detached));
}

#[test]
fn pkcs7_sha1_is_classified() {
    let details = extract_signature_details(b"/ByteRange /SubFilter /adbe.pkcs7.sha1");
    assert_eq!(details.signature_type, Some(SignatureType::Pkcs7Sha1));
}

#[test]
fn cades_detached_is_classified() {
    let details = extract_signature_details(b"/ByteRange /SubFilter /ETSI.CAdES.detached");
    assert_eq!(details.signature_type, Some(SignatureType::CadesDetached));
}

#[test]
fn priority_beats_position() {
    let bytes = b"/ByteRange /SubFilter /ETSI.CAdES.detached ... /SubFilter /adbe.pkcs7.detached";
    let details = extract_signature_details(bytes);
    assert_eq!(details.signature_type, Some(SignatureType::Pkcs7Detached));
}

#[test]
fn sha1_outranks_cades() {
    let bytes = b"/ByteRange /SubFilter /ETSI.CAdES.detached /adbe.pkcs7.sha1";
    let details = extract_signature_details(bytes);
    assert_eq!(details.signature_type, Some(SignatureType::Pkcs7Sha1));
}

#[test]
fn unrecognised_sub_filter_is_unknown() {
    let details = inspect_signature(b"/Type/Sig /ByteRange [0 1 2 3] /SubFilter /ETSI.RFC3161");
    assert!(details.has_signature);
    assert_eq!(details.signature_type, Some(SignatureType::Unknown));
}

#[test]
fn extract_without_markers_is_unsigned() {
    let details = extract_signature_details(b"/SubFilter /adbe.pkcs7.detached /Name(Jane)");
    assert_eq!(details, SignatureDetails::unsigned());
}

// ── Field extraction ──────────────────────────────────────────────────────────

#[test]
fn end_to_end_unsigned_buffer() {
    let details = inspect_signature(b"%PDF-1.4\n1 0 obj << /Type /Catalog >> endobj\n/Name(Nobody)");
    assert_eq!(
        details,
        SignatureDetails {
            has_signature: false,
            signature_type: None,
            signer_name: None,
            signature_date: None,
            certificate_issuer: None,
        }
    );
}

#[test]
fn end_to_end_cades_with_name_and_date() {
    let bytes = b"<< /Type /Sig /Filter /Adobe.PPKLite /SubFilter /ETSI.CAdES.detached \
/ByteRange [0 10 20 30] /Name(Jane Doe) /M(D:20250101093000+01'00') >>";
    let details = inspect_signature(bytes);
    assert!(details.has_signature);
    assert_eq!(details.signature_type, Some(SignatureType::CadesDetached));
    assert_eq!(details.signer_name.as_deref(), Some("Jane Doe"));
    assert_eq!(details.signature_date.as_deref(), Some("2025-01-01 09:30:00"));
    assert_eq!(details.certificate_issuer, None);
}

#[test]
fn signer_name_may_be_missing() {
    let details = inspect_signature(b"/ByteRange /SubFilter /adbe.pkcs7.detached /M(D:20240229235959Z)");
    assert_eq!(details.signer_name, None);
    assert_eq!(details.signature_date.as_deref(), Some("2024-02-29 23:59:59"));
}

#[test]
fn signer_name_utf16_is_decoded() {
    let mut bytes = b"/ByteRange /SubFilter /adbe.pkcs7.detached /Name(".to_vec();
    bytes.extend(utf16be_with_bom("J\u{fc}rgen"));
    bytes.extend_from_slice(b")");
    let details = inspect_signature(&bytes);
    assert_eq!(details.signer_name.as_deref(), Some("J\u{fc}rgen"));
}

#[test]
fn malformed_utf16_name_only_drops_that_field() {
    // BOM followed by an odd number of bytes.
    let mut bytes = b"/ByteRange /SubFilter /adbe.pkcs7.detached /Name(".to_vec();
    bytes.extend_from_slice(&[0xFE, 0xFF, 0x00, b'J', 0x00]);
    bytes.extend_from_slice(b") /M(D:20250315120000)");
    let details = inspect_signature(&bytes);
    assert!(details.has_signature);
    assert_eq!(details.signer_name, None);
    assert_eq!(details.signature_date.as_deref(), Some("2025-03-15 12:00:00"));
}

#[test]
fn utf16_name_with_escaped_paren_byte_is_dropped() {
    // U+0129 is 01 29 in UTF-16BE; the writer escapes the 29 byte.
    let mut bytes = b"/ByteRange /SubFilter adbe.pkcs7 /Name(".to_vec();
    bytes.extend_from_slice(&[0xFE, 0xFF, 0x01, b'\\', b')', 0x00, b'A']);
    bytes.extend_from_slice(b") /M(D:20250315120000)");
    let details = inspect_signature(&bytes);
    assert!(details.has_signature);
    assert_eq!(details.signer_name, None);
    assert_eq!(details.signature_date.as_deref(), Some("2025-03-15 12:00:00"));
}

#[test]
fn signer_name_stops_at_first_unescaped_paren() {
    let bytes = b"/ByteRange /SubFilter adbe.pkcs7 /Name(Doe \\(Jr\\)) trailing)";
    let details = inspect_signature(bytes);
    assert_eq!(details.signer_name.as_deref(), Some("Doe \\(Jr\\)"));
}

#[test]
fn first_name_in_buffer_wins() {
    let bytes = b"/Name(First Signer) /ByteRange /SubFilter adbe.pkcs7 /Name(Second Signer)";
    let details = inspect_signature(bytes);
    assert_eq!(details.signer_name.as_deref(), Some("First Signer"));
}

#[test]
fn date_with_fewer_than_fourteen_digits_is_ignored() {
    let details = inspect_signature(b"/ByteRange /SubFilter adbe.pkcs7 /M(D:20250315)");
    assert_eq!(details.signature_date, None);
}

#[test]
fn date_without_d_prefix_is_ignored() {
    let details = inspect_signature(b"/ByteRange /SubFilter adbe.pkcs7 /M(20250315120000)");
    assert_eq!(details.signature_date, None);
}

#[test]
fn later_well_formed_date_is_used_when_first_is_short() {
    let bytes = b"/ByteRange /SubFilter adbe.pkcs7 /M(D:2025) /M(D:20230607080910-05'00')";
    let details = inspect_signature(bytes);
    assert_eq!(details.signature_date.as_deref(), Some("2023-06-07 08:09:10"));
}

#[test]
fn signed_at_rejects_impossible_dates() {
    let details = inspect_signature(b"/ByteRange /SubFilter adbe.pkcs7 /M(D:20251399000000)");
    assert_eq!(details.signature_date.as_deref(), Some("2025-13-99 00:00:00"));
    assert_eq!(details.signed_at(), None);
}

#[test]
fn signed_at_parses_valid_dates() {
    use chrono::{Datelike, Timelike};
    let details = inspect_signature(b"/ByteRange /SubFilter adbe.pkcs7 /M(D:20250101093000Z)");
    let at = details.signed_at().unwrap();
    assert_eq!((at.year(), at.month(), at.day()), (2025, 1, 1));
    assert_eq!((at.hour(), at.minute(), at.second()), (9, 30, 0));
}

// ── String decoder ────────────────────────────────────────────────────────────

#[test]
fn decode_utf16be_with_bom() {
    assert_eq!(decode_pdf_string(&utf16be_with_bom("John")).unwrap(), "John");
}

#[test]
fn decode_ascii_passes_through() {
    assert_eq!(decode_pdf_string(b"John").unwrap(), "John");
}

#[test]
fn decode_bom_only_is_empty() {
    assert_eq!(decode_pdf_string(&[0xFE, 0xFF]).unwrap(), "");
}

#[test]
fn decode_odd_length_utf16_fails() {
    assert_eq!(
        decode_pdf_string(&[0xFE, 0xFF, 0x00, b'J', 0x00]),
        Err(DecodeError::OddLength(3))
    );
}

#[test]
fn decode_unpaired_surrogate_fails() {
    assert_eq!(
        decode_pdf_string(&[0xFE, 0xFF, 0xD8, 0x00, 0x00, b'A']),
        Err(DecodeError::InvalidUtf16)
    );
}

#[test]
fn decode_surrogate_pair() {
    assert_eq!(decode_pdf_string(&utf16be_with_bom("\u{1F58B}")).unwrap(), "\u{1F58B}");
}

#[test]
fn decode_little_endian_bom_is_not_utf16() {
    let decoded = decode_pdf_string(&[0xFF, 0xFE, b'A', 0x00]).unwrap();
    assert!(decoded.ends_with("A\u{0}"));
}

// ── Date parser ───────────────────────────────────────────────────────────────

#[test]
fn parse_full_date() {
    assert_eq!(parse_pdf_date("20250315120000").as_deref(), Some("2025-03-15 12:00:00"));
}

#[test]
fn parse_rejects_six_digits() {
    assert_eq!(parse_pdf_date("202503"), None);
}

#[test]
fn parse_ten_digits_defaults_minutes_and_seconds() {
    assert_eq!(parse_pdf_date("2025031512").as_deref(), Some("2025-03-15 12:00:00"));
}

#[test]
fn parse_date_only() {
    assert_eq!(parse_pdf_date("20250315").as_deref(), Some("2025-03-15 00:00:00"));
}

#[test]
fn parse_twelve_digits() {
    assert_eq!(parse_pdf_date("202503151245").as_deref(), Some("2025-03-15 12:45:00"));
}

#[test]
fn parse_ignores_timezone_suffix() {
    assert_eq!(
        parse_pdf_date("20250101093000+01'00'").as_deref(),
        Some("2025-01-01 09:30:00")
    );
}

#[test]
fn parse_does_not_validate_calendar() {
    assert_eq!(parse_pdf_date("20251332256199").as_deref(), Some("2025-13-32 25:61:99"));
}

#[test]
fn parse_rejects_non_digit_start() {
    assert_eq!(parse_pdf_date("D:20250315"), None);
    assert_eq!(parse_pdf_date(""), None);
}
