/// Shared shape of the hardware classifiers
///
/// Vector mode and label mode read the same facts but have their own axes,
/// tables and outputs. They only share this trait.

use crate::hardware::HardwareFacts;
use serde_json::Value;

/// A classification strategy over a hardware snapshot
pub trait CapabilityClassifier {
    type Output;

    /// Classify an already parsed snapshot
    fn classify(&self, facts: &HardwareFacts) -> Self::Output;

    /// What to report when the facts can't be read
    fn fallback(&self) -> Self::Output;

    /// Classify the collector's raw document
    ///
    /// Never fails: an unreadable document is logged and yields `fallback()`.
    fn classify_json(&self, raw: &Value) -> Self::Output {
        match HardwareFacts::from_json(raw) {
            Ok(facts) => self.classify(&facts),
            Err(e) => {
                tracing::error!("Error classifying hardware: {}", e);
                self.fallback()
            }
        }
    }
}
