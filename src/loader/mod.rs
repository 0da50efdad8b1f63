//! Document retrieval and decoding
//!
//! Turns a file path or `http(s)://` URL into a decoded [`Document`].
//! The content sniff is deliberately simple: trimmed text starting with
//! `{` is JSON, everything else is YAML. Network fetches use a sync
//! ureq agent with a bounded timeout; there are no retries.

use crate::errors::GradeError;
use crate::models::Document;
use std::time::Duration;
use tracing::debug;

/// Remote fetches fail cleanly after this long.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Retrieve and decode a document from a path or URL.
pub fn load_document(source: &str) -> Result<Document, GradeError> {
    let text = fetch_text(source)?;
    decode_document(&text, source)
}

/// Retrieve raw document text without decoding it.
pub fn fetch_text(source: &str) -> Result<String, GradeError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        fetch_url(source)
    } else {
        debug!("Reading local file {}", source);
        std::fs::read_to_string(source).map_err(|e| GradeError::from_io(&e, source))
    }
}

fn fetch_url(url: &str) -> Result<String, GradeError> {
    debug!("Fetching {}", url);
    let agent = ureq::config::Config::builder()
        .http_status_as_error(false)
        .timeout_global(Some(FETCH_TIMEOUT))
        .build()
        .new_agent();

    let response = agent.get(url).call().map_err(|e| GradeError::Network {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(GradeError::Network {
            url: url.to_string(),
            message: format!("HTTP {}", status),
        });
    }

    response
        .into_body()
        .read_to_string()
        .map_err(|e| GradeError::Network {
            url: url.to_string(),
            message: e.to_string(),
        })
}

/// Decode document text as JSON or YAML depending on its shape.
pub fn decode_document(text: &str, source_id: &str) -> Result<Document, GradeError> {
    if text.trim_start().starts_with('{') {
        serde_json::from_str(text).map_err(|e| GradeError::Syntax {
            source_id: source_id.to_string(),
            message: e.to_string(),
        })
    } else {
        serde_yaml::from_str(text).map_err(|e| GradeError::Syntax {
            source_id: source_id.to_string(),
            message: e.to_string(),
        })
    }
}
