//! Mbox archive reading via `mail-parser`.
//!
//! The mbox container is a line-framed format: each message starts at a
//! line beginning with `From ` (the envelope separator). Framing is handled
//! here; all MIME decoding (multipart walking, charsets, quoted-printable)
//! is delegated to `mail-parser`.

use std::path::Path;

use mail_parser::{Message, MessageParser};
use tracing::{debug, warn};

use innbox_core::{Error, RawMessage, Result};

/// Read an mbox archive into raw messages, in archive order.
///
/// Entries `mail-parser` cannot make sense of are skipped with a warning;
/// a missing or unreadable file aborts the whole batch.
pub fn read_mbox(path: &Path) -> Result<Vec<RawMessage>> {
    let data = std::fs::read(path)
        .map_err(|e| Error::Archive(format!("cannot read {}: {}", path.display(), e)))?;

    let parser = MessageParser::default();
    let mut messages = Vec::new();

    for (start, end) in message_ranges(&data) {
        // Skip the `From ` envelope line itself.
        let body_start = data[start..end]
            .iter()
            .position(|&b| b == b'\n')
            .map(|i| start + i + 1)
            .unwrap_or(end);

        match parser.parse(&data[body_start..end]) {
            Some(message) => messages.push(to_raw_message(&message)),
            None => warn!("Skipping unparsable mbox entry at byte {}", start),
        }
    }

    debug!("Read {} messages from {}", messages.len(), path.display());
    Ok(messages)
}

/// Byte ranges of each message in the archive, delimited by line-initial
/// `From ` separators.
fn message_ranges(data: &[u8]) -> Vec<(usize, usize)> {
    let mut starts = Vec::new();
    let mut at_line_start = true;
    for (i, &b) in data.iter().enumerate() {
        if at_line_start && data[i..].starts_with(b"From ") {
            starts.push(i);
        }
        at_line_start = b == b'\n';
    }

    starts
        .iter()
        .enumerate()
        .map(|(k, &s)| (s, starts.get(k + 1).copied().unwrap_or(data.len())))
        .collect()
}

fn to_raw_message(message: &Message<'_>) -> RawMessage {
    RawMessage {
        subject: message.subject().map(|s| s.to_string()),
        from: message.from().and_then(format_address),
        to: message.to().and_then(format_address),
        // The wire contract passes the Date header through verbatim.
        date: message.header_raw("Date").map(|s| s.trim().to_string()),
        body: extract_body(message),
    }
}

/// Render an address header as display text: `Name <addr>` or bare address.
fn format_address(addr: &mail_parser::Address<'_>) -> Option<String> {
    let first = addr.first()?;
    let email = first.address().unwrap_or_default();
    match first.name() {
        Some(name) => Some(format!("{} <{}>", name, email)),
        None => Some(email.to_string()),
    }
}

/// Concatenate the decoded `text/plain` parts of a message.
fn extract_body(message: &Message<'_>) -> Option<String> {
    let mut body = String::new();
    for i in 0..message.text_body_count() {
        if let Some(part) = message.body_text(i) {
            body.push_str(&part);
        }
    }
    if body.is_empty() {
        None
    } else {
        Some(body)
    }
}
