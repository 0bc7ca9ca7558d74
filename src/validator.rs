use crate::{Result, SignatureError};
use lopdf::Document;

// ── PdfValidator ──────────────────────────────────────────────────────────────
//
// Internal type. Callers use SignatureAnalyzer::is_pdf or ScanConfig::check_structure.
// Signature detection never goes through here.

pub(crate) struct PdfValidator {
    document: Document,
}

impl PdfValidator {
    /// Parse `bytes` with lopdf. Fails with [`SignatureError::ParseError`] when
    /// lopdf cannot load the cross-reference table or object graph.
    pub(crate) fn load(bytes: &[u8]) -> Result<Self> {
        Ok(Self {
            document: Document::load_mem(bytes)?,
        })
    }

    /// Checks that the parsed document has a catalog, at least one page, and a
    /// non-empty trailer. The first missing element is reported as
    /// [`SignatureError::InvalidPdf`].
    pub(crate) fn validate_pdf_structure(&self) -> Result<()> {
        self.document
            .catalog()
            .map_err(|e| SignatureError::InvalidPdf(format!("missing or invalid catalog: {e}")))?;

        if self.document.get_pages().is_empty() {
            return Err(SignatureError::InvalidPdf("document has no pages".into()));
        }

        if self.document.trailer.is_empty() {
            return Err(SignatureError::InvalidPdf("missing trailer dictionary".into()));
        }

        Ok(())
    }
}

/// Load and validate in one step; any failure reads as "not a valid PDF".
pub(crate) fn is_structurally_valid(bytes: &[u8]) -> bool {
    match PdfValidator::load(bytes).and_then(|v| v.validate_pdf_structure()) {
        Ok(()) => true,
        Err(e) => {
            log::debug!("structural check failed: {e}");
            false
        }
    }
}
