//! Contact form handling: input validation and the append-only submission log.

pub mod validation;

use anyhow::{Context, Result};
use chrono::Utc;

use crate::models::contact::ContactSubmission;
use crate::state::AppState;
use crate::storage::Document;

use validation::ValidContact;

/// Records a validated submission at the head of the contact log.
///
/// The read-prepend-write cycle runs under the state's write lock so
/// concurrent submissions cannot drop each other's entries. A missing log
/// file is the empty log, not an error. The log is persisted pretty-printed
/// to stay hand-readable.
pub async fn record_submission(
    state: &AppState,
    contact: ValidContact,
    ip: Option<String>,
) -> Result<ContactSubmission> {
    let now = Utc::now();
    let submission = ContactSubmission {
        id: now.timestamp_millis(),
        name: contact.name,
        email: contact.email,
        message: contact.message,
        timestamp: now,
        ip,
    };

    let _guard = state.contact_write_lock.lock().await;

    let mut log: Vec<ContactSubmission> = match state.store.load(Document::Contacts).await? {
        Some(raw) => serde_json::from_str(&raw).context("contact log is not valid JSON")?,
        None => Vec::new(),
    };
    log.insert(0, submission.clone());

    let serialized =
        serde_json::to_string_pretty(&log).context("failed to serialize contact log")?;
    state.store.save(Document::Contacts, &serialized).await?;

    Ok(submission)
}
