use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

// ── SignatureType ────────────────────────────────────────────────────────────

/// Cryptographic container format, as named by the signature's `/SubFilter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SignatureType {
    /// `adbe.pkcs7.detached`
    Pkcs7Detached,
    /// `adbe.pkcs7.sha1`
    Pkcs7Sha1,
    /// `ETSI.CAdES.detached` (PAdES)
    CadesDetached,
    /// Signature markers were present but no recognised sub-filter was found.
    Unknown,
}

impl SignatureType {
    /// Returns the sub-filter name this variant is recognised by, or
    /// `"unknown"` for [`SignatureType::Unknown`].
    pub fn as_sub_filter(&self) -> &'static str {
        match self {
            SignatureType::Pkcs7Detached => "adbe.pkcs7.detached",
            SignatureType::Pkcs7Sha1 => "adbe.pkcs7.sha1",
            SignatureType::CadesDetached => "ETSI.CAdES.detached",
            SignatureType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SignatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sub_filter())
    }
}

// ── SignatureDetails ─────────────────────────────────────────────────────────

/// What the scan found out about a document's signature.
///
/// When `has_signature` is `false` every other field is `None`. When it is
/// `true`, each remaining field is populated independently, only if its own
/// pattern was found in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureDetails {
    /// `true` when the signature markers were found.
    pub has_signature: bool,

    /// Container format derived from the sub-filter.
    pub signature_type: Option<SignatureType>,

    /// Signer name from the first `/Name(...)` entry, decoded to UTF-8.
    pub signer_name: Option<String>,

    /// Signing time from the first `/M(D:...)` entry, formatted as
    /// `YYYY-MM-DD HH:MM:SS`. The timezone offset is dropped.
    pub signature_date: Option<String>,

    /// Reserved. The scanner never fills this in.
    pub certificate_issuer: Option<String>,
}

impl SignatureDetails {
    /// The result for a document without a signature.
    pub fn unsigned() -> Self {
        Self::default()
    }

    /// Parses [`signature_date`](Self::signature_date) into a calendar
    /// timestamp.
    ///
    /// `signature_date` is not validated, so it may hold an impossible date
    /// such as month 13; this returns `None` for those.
    ///
    /// ```
    /// # use pdfsigscan::SignatureDetails;
    /// let details = SignatureDetails {
    ///     has_signature: true,
    ///     signature_date: Some("2025-03-15 12:00:00".into()),
    ///     ..Default::default()
    /// };
    /// assert!(details.signed_at().is_some());
    /// ```
    pub fn signed_at(&self) -> Option<NaiveDateTime> {
        let date = self.signature_date.as_deref()?;
        NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S").ok()
    }
}
