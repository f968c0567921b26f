//! Document storage — the only seam between the API and the file system.
//!
//! `AppState` holds an `Arc<dyn DocumentStore>`; production wires in the
//! `tokio::fs`-backed `FsDocumentStore`, tests swap in `MemoryStore`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;

/// The two documents this service knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Document {
    /// Read-only portfolio content: projects and skills.
    Portfolio,
    /// The accumulating contact log, newest first.
    Contacts,
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Human-readable location of a document, for diagnostics.
    fn location(&self, doc: Document) -> String;

    async fn exists(&self, doc: Document) -> bool;

    /// Raw document contents. `Ok(None)` means the document has never been
    /// written, which is an error for reads of the portfolio but the normal
    /// starting state for the contact log.
    async fn load(&self, doc: Document) -> Result<Option<String>>;

    async fn save(&self, doc: Document, contents: &str) -> Result<()>;
}

/// File-system store: each document is one UTF-8 JSON file under the
/// configured data directory.
pub struct FsDocumentStore {
    portfolio_path: PathBuf,
    contacts_path: PathBuf,
}

impl FsDocumentStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            portfolio_path: data_dir.join("portfolio.json"),
            contacts_path: data_dir.join("contacts.json"),
        }
    }

    fn path(&self, doc: Document) -> &Path {
        match doc {
            Document::Portfolio => &self.portfolio_path,
            Document::Contacts => &self.contacts_path,
        }
    }
}

#[async_trait]
impl DocumentStore for FsDocumentStore {
    fn location(&self, doc: Document) -> String {
        self.path(doc).display().to_string()
    }

    async fn exists(&self, doc: Document) -> bool {
        tokio::fs::try_exists(self.path(doc)).await.unwrap_or(false)
    }

    async fn load(&self, doc: Document) -> Result<Option<String>> {
        let path = self.path(doc);
        match tokio::fs::read_to_string(path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(e).with_context(|| format!("failed to read {}", path.display()))
            }
        }
    }

    async fn save(&self, doc: Document, contents: &str) -> Result<()> {
        let path = self.path(doc);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        tokio::fs::write(path, contents)
            .await
            .with_context(|| format!("failed to write {}", path.display()))
    }
}

/// In-memory store for tests: a map of document contents plus a switch to
/// make every save fail, for exercising the write-failure path.
#[cfg(test)]
pub struct MemoryStore {
    docs: std::sync::Mutex<std::collections::HashMap<Document, String>>,
    fail_saves: bool,
}

#[cfg(test)]
impl MemoryStore {
    pub fn empty() -> Self {
        Self {
            docs: std::sync::Mutex::new(std::collections::HashMap::new()),
            fail_saves: false,
        }
    }

    pub fn with_document(doc: Document, contents: &str) -> Self {
        let store = Self::empty();
        store
            .docs
            .lock()
            .unwrap()
            .insert(doc, contents.to_string());
        store
    }

    pub fn failing_saves() -> Self {
        Self {
            docs: std::sync::Mutex::new(std::collections::HashMap::new()),
            fail_saves: true,
        }
    }

    pub fn contents(&self, doc: Document) -> Option<String> {
        self.docs.lock().unwrap().get(&doc).cloned()
    }
}

#[cfg(test)]
#[async_trait]
impl DocumentStore for MemoryStore {
    fn location(&self, doc: Document) -> String {
        match doc {
            Document::Portfolio => "mem://portfolio.json".to_string(),
            Document::Contacts => "mem://contacts.json".to_string(),
        }
    }

    async fn exists(&self, doc: Document) -> bool {
        self.docs.lock().unwrap().contains_key(&doc)
    }

    async fn load(&self, doc: Document) -> Result<Option<String>> {
        Ok(self.contents(doc))
    }

    async fn save(&self, doc: Document, contents: &str) -> Result<()> {
        if self.fail_saves {
            anyhow::bail!("simulated storage failure");
        }
        self.docs
            .lock()
            .unwrap()
            .insert(doc, contents.to_string());
        Ok(())
    }
}
