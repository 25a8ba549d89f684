//! Input boundary with the scraping collaborator.
//!
//! The scraper answers a scan request with a `{success, chats, error}`
//! envelope over the host messaging channel. A failed scan (target page
//! absent, layout changed) carries `success: false` and a human-readable
//! detail; it surfaces here as an explicit error result so the UI can render
//! a message instead of crashing.

use serde::{Deserialize, Serialize};

use crate::chats::ChatRecord;
use crate::error::{ChatscoutError, Result};

/// Maximum number of chat previews a single scan may carry.
pub const MAX_CHATS: usize = 15;

/// Response envelope produced by the page scraper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResponse {
    pub success: bool,
    #[serde(default)]
    pub chats: Vec<ChatRecord>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ScanResponse {
    /// Unwrap the envelope, surfacing scraper failure as [`ChatscoutError::ChatSource`].
    pub fn into_chats(self) -> Result<Vec<ChatRecord>> {
        if self.success {
            Ok(self.chats)
        } else {
            Err(ChatscoutError::ChatSource(
                self.error
                    .unwrap_or_else(|| "scan failed with no detail".to_string()),
            ))
        }
    }
}

/// Parse a raw scan payload as received over the host messaging channel.
pub fn parse_scan_response(payload: &str) -> Result<ScanResponse> {
    Ok(serde_json::from_str(payload)?)
}
