//! chatscout-common — Shared types and errors used across all Chatscout crates.

pub mod chats;
pub mod error;
pub mod scan;

// Re-export commonly used types
pub use chats::{ChatRecord, ContextSignal, EnrichedChat, LastMessage, Recommendation, SignalType};
pub use error::{ChatscoutError, Result};
pub use scan::{parse_scan_response, ScanResponse, MAX_CHATS};
