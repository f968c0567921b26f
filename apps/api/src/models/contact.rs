use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One accepted contact-form submission, as persisted in the contact log.
///
/// The log file is a JSON array of these, newest first. Entries are only ever
/// prepended; nothing in this service mutates or removes an existing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// Creation time in epoch milliseconds. Unique enough for a
    /// single-process, human-paced contact form.
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Best-effort caller address. Omitted from the file when unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}
