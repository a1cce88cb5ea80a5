//! # Result Presenter
//!
//! View model for the result card shown after a successful decode.
//!
//! ## Rendering Contract
//! The decoded code is displayed **verbatim** - no formatting, trimming, or
//! validation. Two actions are offered: process the ticket, or scan again.
//!
//! ## The `process` Placeholder
//! Processing a scanned ticket (marking it admitted) has no backend yet.
//! [`process`] logs the intent and does nothing else. Real check-in
//! semantics - idempotence per ticket, duplicate-scan handling - must be
//! decided at this boundary before it grows a backend call.

use serde::{Deserialize, Serialize};
use tracing::info;

use usher_core::types::ScanResult;

/// Actions offered on the result card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResultAction {
    /// Process the ticket (check-in placeholder)
    Process,

    /// Discard the result and start a new scan
    ScanAgain,
}

/// View model for the result card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    /// The decoded code, verbatim
    pub code: String,

    /// Actions the card offers, in display order
    pub actions: Vec<ResultAction>,
}

impl From<&ScanResult> for ResultView {
    fn from(result: &ScanResult) -> Self {
        ResultView {
            code: result.code.clone(),
            actions: vec![ResultAction::Process, ResultAction::ScanAgain],
        }
    }
}

/// Check-in placeholder: records the intent, performs no backend call.
pub fn process(result: &ScanResult) {
    info!(
        code = %result.code,
        received_at = %result.received_at,
        "ticket check-in requested (no processing backend configured)"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_rendered_verbatim() {
        let result = ScanResult::new("  TCKT-00042\n");
        let view = ResultView::from(&result);
        // No trimming or normalization of the payload
        assert_eq!(view.code, "  TCKT-00042\n");
    }

    #[test]
    fn test_actions_offered() {
        let result = ScanResult::new("TCKT-1");
        let view = ResultView::from(&result);
        assert_eq!(
            view.actions,
            vec![ResultAction::Process, ResultAction::ScanAgain]
        );
    }

    #[test]
    fn test_process_is_a_noop() {
        // Logs only; must not panic or mutate anything
        process(&ScanResult::new("TCKT-1"));
    }
}
