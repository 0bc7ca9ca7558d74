use crate::validator::PdfValidator;
use crate::{detector, reader, Result, ScanConfig, SignatureDetails, SignatureError};
use std::path::Path;

// ── SignatureAnalyzer ─────────────────────────────────────────────────────────

/// Entry point for checking a single document.
///
/// The analyzer owns the document bytes; every query re-scans them, so it is
/// cheap to keep around and safe to share between threads.
///
/// # Creating an analyzer
///
/// ```no_run
/// use pdfsigscan::{ScanConfig, SignatureAnalyzer};
///
/// // From a file path
/// let a = SignatureAnalyzer::from_path("contract.pdf").unwrap();
///
/// // From an in-memory buffer
/// let bytes = std::fs::read("contract.pdf").unwrap();
/// let a = SignatureAnalyzer::from_bytes(bytes);
///
/// // With custom configuration
/// let cfg = ScanConfig {
///     max_file_size: Some(50 * 1024 * 1024),
///     ..Default::default()
/// };
/// let a = SignatureAnalyzer::with_config("contract.pdf", cfg).unwrap();
/// ```
pub struct SignatureAnalyzer {
    bytes: Vec<u8>,
    config: ScanConfig,
}

impl SignatureAnalyzer {
    // ── Constructors ──────────────────────────────────────────────────────────

    /// Read a document from the file system.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_config(path, ScanConfig::default())
    }

    /// Wrap a document that is already in memory.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            config: ScanConfig::default(),
        }
    }

    /// Read a document from the file system with a custom [`ScanConfig`].
    ///
    /// The file is refused when it exceeds [`ScanConfig::max_file_size`].
    pub fn with_config<P: AsRef<Path>>(path: P, config: ScanConfig) -> Result<Self> {
        Ok(Self {
            bytes: reader::read_pdf_bytes(path, &config)?,
            config,
        })
    }

    // ── Signature queries ─────────────────────────────────────────────────────

    /// Returns `true` when the document contains the signature markers.
    /// See [`crate::detect_signature`].
    pub fn has_signature(&self) -> bool {
        detector::detect_signature(&self.bytes)
    }

    /// Returns the signature type, signer name and signing date, or the
    /// unsigned result when no signature is present.
    pub fn signature_details(&self) -> SignatureDetails {
        detector::inspect_signature(&self.bytes)
    }

    // ── Structure ─────────────────────────────────────────────────────────────

    /// Returns `Ok(true)` when lopdf can load the document and it has a
    /// catalog, at least one page, and a non-empty trailer, and `Ok(false)`
    /// when it loads but one of those is missing. Bytes lopdf cannot parse at
    /// all give [`SignatureError::ParseError`].
    ///
    /// This is independent of signature detection: a buffer can be reported as
    /// signed without being a parseable PDF.
    pub fn is_pdf(&self) -> Result<bool> {
        match PdfValidator::load(&self.bytes)?.validate_pdf_structure() {
            Ok(()) => Ok(true),
            Err(SignatureError::InvalidPdf(reason)) => {
                log::debug!("document loads but is not a valid PDF: {reason}");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Returns the raw document bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns a reference to the active [`ScanConfig`].
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }
}
