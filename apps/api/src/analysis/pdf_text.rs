//! PDF text extraction for uploaded resumes.
//!
//! Deterministic and model-free: the hosted model only ever sees the text produced here.
//! Every failure collapses to an empty string.

use std::time::Duration;

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use tracing::{debug, warn};

/// Decodes a resume payload: either `data:application/pdf;base64,<data>` or bare base64.
/// Returns `None` when there is no payload data or it is not valid base64.
pub fn decode_pdf_payload(payload: &str) -> Option<Vec<u8>> {
    let payload = payload.trim();
    let encoded = if payload.starts_with("data:") {
        match payload.split_once(',') {
            Some((_, data)) => data,
            None => {
                warn!("Resume data URI has no payload section");
                return None;
            }
        }
    } else {
        payload
    };

    // Line-wrapped base64 is common in pasted payloads
    let encoded: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    if encoded.is_empty() {
        warn!("Resume payload is empty");
        return None;
    }

    match BASE64_STANDARD.decode(encoded.as_bytes()) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            warn!("Resume payload is not valid base64: {e}");
            None
        }
    }
}

/// Extracts plain text from PDF bytes. Returns an empty string on any parse failure.
///
/// Parsing runs on the blocking pool under `limit`; a parser panic or overrun is treated
/// as a failure.
pub async fn extract_pdf_text(pdf_bytes: Vec<u8>, limit: Duration) -> String {
    if pdf_bytes.is_empty() {
        return String::new();
    }

    let size = pdf_bytes.len();
    let parse = move || pdf_extract::extract_text_from_mem(&pdf_bytes).map_err(|e| e.to_string());

    match blocking_with_limit(limit, parse).await {
        Ok(text) => {
            let text = text.trim().to_string();
            debug!("Extracted {} chars from {} byte PDF", text.len(), size);
            text
        }
        Err(reason) => {
            warn!("PDF text extraction failed: {reason}");
            String::new()
        }
    }
}

/// Runs `work` on the blocking pool and stops waiting after `limit`.
/// The blocking thread itself cannot be cancelled and finishes in the background.
async fn blocking_with_limit<T, F>(limit: Duration, work: F) -> Result<T, String>
where
    F: FnOnce() -> Result<T, String> + Send + 'static,
    T: Send + 'static,
{
    match tokio::time::timeout(limit, tokio::task::spawn_blocking(work)).await {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => Err(format!("aborted: {e}")),
        Err(_) => Err(format!("timed out after {}s", limit.as_secs_f32())),
    }
}
