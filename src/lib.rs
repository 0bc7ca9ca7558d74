//! # pdfsigscan
//!
//! A Rust library for detecting digital signatures in PDF documents.
//!
//! ## What this crate does
//!
//! 1. **Detect a signature** — scans the raw bytes for the markers of a
//!    signature dictionary (`/ByteRange`, `/SubFilter` and a known filter).
//! 2. **Classify it** — maps the sub-filter to PKCS#7 detached, PKCS#7 SHA-1,
//!    CAdES detached, or unknown.
//! 3. **Extract metadata** — pulls the signer name (`/Name`) and signing date
//!    (`/M`) out of the buffer, best effort.
//! 4. **Track documents** — records results per document in a
//!    [`SignatureStore`] and reports unprocessed and unsigned documents.
//!
//! Detection is a textual scan, not a PDF parser: nothing here walks the
//! object graph or verifies the cryptographic signature. When a document holds
//! several signatures, the extracted name and date come from the first
//! matching `/Name(...)` and `/M(D:...)` in the file, which need not belong to
//! the same signature.
//!
//! ## Quick example
//!
//! ```no_run
//! use pdfsigscan::SignatureAnalyzer;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let analyzer = SignatureAnalyzer::from_path("contract.pdf")?;
//!
//! let details = analyzer.signature_details();
//! if details.has_signature {
//!     println!("Signed by {:?} on {:?}", details.signer_name, details.signature_date);
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

mod analyzer;
mod batch;
mod date_parser;
mod detector;
mod details;
mod extractor;
mod reader;
mod store;
mod string_decoder;
mod validator;

pub use analyzer::SignatureAnalyzer;
pub use batch::{record_outcomes, scan_documents, ScanOutcome, ScanReport};
pub use date_parser::parse_pdf_date;
pub use detector::{detect_signature, inspect_signature};
pub use details::{SignatureDetails, SignatureType};
pub use extractor::extract_signature_details;
pub use reader::read_pdf_bytes;
pub use store::{DocumentId, JsonFileStore, MemoryStore, SignatureStatistics, SignatureStore};
pub use string_decoder::{decode_pdf_string, DecodeError};

// ── Configuration ────────────────────────────────────────────────────────────

/// Runtime configuration for reading and scanning documents.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// If set, [`read_pdf_bytes`] returns [`SignatureError::FileSizeExceeded`]
    /// for any file larger than this many bytes.
    pub max_file_size: Option<usize>,

    /// When `true`, [`scan_documents`] also loads each document with lopdf and
    /// records whether it is a structurally valid PDF. Detection itself never
    /// depends on this check.
    pub check_structure: bool,

    /// Number of worker threads used by [`scan_documents`]. `None` uses the
    /// global rayon pool.
    pub worker_threads: Option<usize>,
}

// ── Error type ───────────────────────────────────────────────────────────────

/// Every error that this crate can produce outside the pure scanning core.
#[derive(Error, Debug)]
pub enum SignatureError {
    /// A filesystem I/O error occurred (e.g. when reading a document or store file).
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The structural check found the document is not a valid PDF.
    #[error("Invalid PDF: {0}")]
    InvalidPdf(String),

    /// The underlying lopdf parser returned an error during the structural check.
    #[error("PDF parse error: {0}")]
    ParseError(#[from] lopdf::Error),

    /// The document exceeds the configured `max_file_size` limit.
    #[error("'{path}' is {size} bytes, above the configured limit of {limit} bytes")]
    FileSizeExceeded {
        path: String,
        size: u64,
        limit: usize,
    },

    /// The store could not be serialised or deserialised.
    #[error("Signature store error: {0}")]
    StoreError(String),
}

impl From<serde_json::Error> for SignatureError {
    fn from(err: serde_json::Error) -> Self {
        SignatureError::StoreError(err.to_string())
    }
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, SignatureError>;
