//! Raw archive messages.

use serde::{Deserialize, Serialize};

/// One raw message read from an email archive. Immutable once ingested.
///
/// Every field is optional: notification archives routinely carry entries
/// with missing headers or empty bodies, and absence is a valid outcome
/// rather than an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMessage {
    pub subject: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub date: Option<String>,
    pub body: Option<String>,
}
