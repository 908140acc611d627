use serde_json::Value;

use crate::api::ApiEnvelope;

pub const LOAD_FAILED: &str = "Failed to load attendance data";
pub const TAP_FAILED: &str = "Failed to process attendance";
pub const ACTION_FAILED: &str = "Action failed";
pub const PROCESSING: &str = "Processing...";

/// What the page does after the tap endpoint answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapOutcome {
    /// Reload today's record, then show `notice` if any.
    Refetch { notice: Option<String> },
    /// Show the message and keep the current record.
    Rejected(String),
}

pub fn classify_tap(envelope: &ApiEnvelope<Value>) -> TapOutcome {
    if envelope.success {
        return TapOutcome::Refetch { notice: None };
    }
    if envelope.is_already_completed() {
        return TapOutcome::Refetch {
            notice: envelope.message.clone(),
        };
    }
    TapOutcome::Rejected(
        envelope
            .message
            .clone()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| ACTION_FAILED.to_string()),
    )
}
