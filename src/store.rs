//! Per-document tracking of signature scan results.
//!
//! A store holds one row per registered document: the entity (document class
//! in the managing system) it belongs to, and the last recorded
//! [`SignatureDetails`], if the document has been scanned. Re-scanning a
//! document replaces its row, so there is at most one result per document.
//! Rows created by `upsert` without a prior `register` have an empty entity.

use crate::{Result, SignatureDetails, SignatureType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Identifier of a document in the managing system.
pub type DocumentId = String;

/// Storage interface for scan results.
pub trait SignatureStore {
    /// Start tracking `document_id` under `entity`. Registering a known
    /// document again leaves its row untouched.
    fn register(&mut self, document_id: &str, entity: &str) -> Result<()>;

    /// Record the scan result for a document, replacing any previous result.
    /// A document that was never registered gets a new row with no entity.
    fn upsert(&mut self, document_id: &str, details: SignatureDetails) -> Result<()>;

    /// The recorded result, or `None` when the document is unknown or has not
    /// been scanned yet.
    fn get(&self, document_id: &str) -> Option<SignatureDetails>;

    /// Up to `limit` documents of `entity` without a recorded result, in
    /// ascending id order.
    fn list_unprocessed(&self, entity: &str, limit: usize) -> Vec<DocumentId>;

    /// Scanned documents of `entity` that have no signature.
    fn list_unsigned(&self, entity: &str) -> Vec<DocumentId>;

    /// Aggregate counts for `entity`.
    fn statistics(&self, entity: &str) -> SignatureStatistics;

    /// Register several documents under `entity` as one change.
    fn register_all(&mut self, document_ids: &[DocumentId], entity: &str) -> Result<()> {
        for id in document_ids {
            self.register(id, entity)?;
        }
        Ok(())
    }

    /// Upsert several results as one change.
    fn upsert_all(&mut self, entries: Vec<(DocumentId, SignatureDetails)>) -> Result<()> {
        for (id, details) in entries {
            self.upsert(&id, details)?;
        }
        Ok(())
    }
}

/// Aggregate counts over the documents of one entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignatureStatistics {
    pub total: usize,
    pub processed: usize,
    pub signed: usize,
    pub unsigned: usize,
    pub by_type: BTreeMap<SignatureType, usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DocumentRecord {
    entity: String,
    details: Option<SignatureDetails>,
}

// ── MemoryStore ───────────────────────────────────────────────────────────────

/// In-memory [`SignatureStore`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    documents: BTreeMap<DocumentId, DocumentRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered documents across all entities.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn of_entity<'a>(
        &'a self,
        entity: &'a str,
    ) -> impl Iterator<Item = (&'a DocumentId, &'a DocumentRecord)> + 'a {
        self.documents.iter().filter(move |(_, r)| r.entity == entity)
    }
}

impl SignatureStore for MemoryStore {
    fn register(&mut self, document_id: &str, entity: &str) -> Result<()> {
        self.documents
            .entry(document_id.to_owned())
            .or_insert_with(|| DocumentRecord {
                entity: entity.to_owned(),
                details: None,
            });
        Ok(())
    }

    fn upsert(&mut self, document_id: &str, details: SignatureDetails) -> Result<()> {
        let record = self
            .documents
            .entry(document_id.to_owned())
            .or_insert_with(|| DocumentRecord {
                entity: String::new(),
                details: None,
            });
        record.details = Some(details);
        Ok(())
    }

    fn get(&self, document_id: &str) -> Option<SignatureDetails> {
        self.documents.get(document_id)?.details.clone()
    }

    fn list_unprocessed(&self, entity: &str, limit: usize) -> Vec<DocumentId> {
        self.of_entity(entity)
            .filter(|(_, r)| r.details.is_none())
            .take(limit)
            .map(|(id, _)| id.clone())
            .collect()
    }

    fn list_unsigned(&self, entity: &str) -> Vec<DocumentId> {
        self.of_entity(entity)
            .filter(|(_, r)| matches!(&r.details, Some(d) if !d.has_signature))
            .map(|(id, _)| id.clone())
            .collect()
    }

    fn statistics(&self, entity: &str) -> SignatureStatistics {
        let mut stats = SignatureStatistics::default();

        for (_, record) in self.of_entity(entity) {
            stats.total += 1;
            let Some(details) = &record.details else {
                continue;
            };
            stats.processed += 1;
            if details.has_signature {
                stats.signed += 1;
                let kind = details.signature_type.unwrap_or(SignatureType::Unknown);
                *stats.by_type.entry(kind).or_default() += 1;
            } else {
                stats.unsigned += 1;
            }
        }

        stats
    }
}

// ── JsonFileStore ─────────────────────────────────────────────────────────────

/// [`SignatureStore`] persisted to a JSON file.
///
/// Each mutation is applied to a copy of the table, written to a temporary
/// file next to the store and renamed over it. The in-memory table only
/// changes once the rename succeeded, so a failed write leaves both the file
/// and the store as they were. Use [`SignatureStore::register_all`] and
/// [`SignatureStore::upsert_all`] to write a whole batch at once.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    /// Open the store at `path`, starting empty when the file does not exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let inner = if path.exists() {
            let raw = std::fs::read(&path)?;
            serde_json::from_slice(&raw)?
        } else {
            MemoryStore::new()
        };
        Ok(Self { path, inner })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn commit<F>(&mut self, change: F) -> Result<()>
    where
        F: FnOnce(&mut MemoryStore) -> Result<()>,
    {
        let mut next = self.inner.clone();
        change(&mut next)?;
        self.persist(&next)?;
        self.inner = next;
        Ok(())
    }

    fn persist(&self, table: &MemoryStore) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let raw = serde_json::to_vec_pretty(table)?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&raw)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl SignatureStore for JsonFileStore {
    fn register(&mut self, document_id: &str, entity: &str) -> Result<()> {
        self.commit(|table| table.register(document_id, entity))
    }

    fn upsert(&mut self, document_id: &str, details: SignatureDetails) -> Result<()> {
        self.commit(|table| table.upsert(document_id, details))
    }

    fn get(&self, document_id: &str) -> Option<SignatureDetails> {
        self.inner.get(document_id)
    }

    fn list_unprocessed(&self, entity: &str, limit: usize) -> Vec<DocumentId> {
        self.inner.list_unprocessed(entity, limit)
    }

    fn list_unsigned(&self, entity: &str) -> Vec<DocumentId> {
        self.inner.list_unsigned(entity)
    }

    fn statistics(&self, entity: &str) -> SignatureStatistics {
        self.inner.statistics(entity)
    }

    fn register_all(&mut self, document_ids: &[DocumentId], entity: &str) -> Result<()> {
        self.commit(|table| table.register_all(document_ids, entity))
    }

    fn upsert_all(&mut self, entries: Vec<(DocumentId, SignatureDetails)>) -> Result<()> {
        self.commit(|table| table.upsert_all(entries))
    }
}
