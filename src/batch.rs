use crate::store::{DocumentId, SignatureStore};
use crate::{detector, reader, validator, Result, ScanConfig, SignatureDetails};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// What the scan produced for one readable document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub details: SignatureDetails,
    /// Structural verdict; `None` unless [`ScanConfig::check_structure`] is set.
    pub is_pdf: Option<bool>,
}

/// Result of scanning one document in a batch.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub document_id: DocumentId,
    pub path: PathBuf,
    /// The report, or the reason the document could not be read.
    pub result: std::result::Result<ScanReport, String>,
}

/// Scan many documents in parallel, one task per document.
///
/// A document that cannot be read is logged and reported in its outcome; it
/// never stops the rest of the batch. Outcomes come back in input order.
pub fn scan_documents(documents: &[(DocumentId, PathBuf)], config: &ScanConfig) -> Vec<ScanOutcome> {
    let run = || -> Vec<ScanOutcome> {
        documents
            .par_iter()
            .map(|(id, path)| scan_one(id, path, config))
            .collect()
    };

    match config.worker_threads {
        Some(threads) => match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool.install(run),
            Err(e) => {
                log::warn!("cannot build a {threads}-thread pool ({e}); using the global pool");
                run()
            }
        },
        None => run(),
    }
}

fn scan_one(document_id: &str, path: &Path, config: &ScanConfig) -> ScanOutcome {
    let result = match reader::read_pdf_bytes(path, config) {
        Ok(bytes) => {
            let details = detector::inspect_signature(&bytes);
            log::debug!(
                "{document_id}: signed={} type={:?}",
                details.has_signature,
                details.signature_type
            );
            let is_pdf = config
                .check_structure
                .then(|| validator::is_structurally_valid(&bytes));
            Ok(ScanReport { details, is_pdf })
        }
        Err(e) => {
            log::warn!("skipping '{document_id}' ({}): {e}", path.display());
            Err(e.to_string())
        }
    };

    ScanOutcome {
        document_id: document_id.to_owned(),
        path: path.to_path_buf(),
        result,
    }
}

/// Store every successful outcome as one change and return how many were
/// stored.
///
/// Documents the store has not seen before get a new row. When the store
/// rejects the batch nothing is recorded and the error is returned.
pub fn record_outcomes<S: SignatureStore + ?Sized>(
    store: &mut S,
    outcomes: &[ScanOutcome],
) -> Result<usize> {
    let entries: Vec<(DocumentId, SignatureDetails)> = outcomes
        .iter()
        .filter_map(|outcome| {
            let report = outcome.result.as_ref().ok()?;
            Some((outcome.document_id.clone(), report.details.clone()))
        })
        .collect();

    let stored = entries.len();
    store.upsert_all(entries)?;
    log::debug!("recorded {stored} of {} outcome(s)", outcomes.len());
    Ok(stored)
}
