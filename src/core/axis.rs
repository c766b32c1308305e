/// Binary preference axes
///
/// Questions tagged with one of these parameter names are compared by
/// equality against the distro's raw score instead of only being weighed.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BinaryAxis {
    /// Update cadence (rolling vs fixed releases)
    #[serde(rename = "updates")]
    Updates,
    /// Desktop look and feel
    #[serde(rename = "UI_Look")]
    UiLook,
}

impl BinaryAxis {
    pub const ALL: [BinaryAxis; 2] = [BinaryAxis::Updates, BinaryAxis::UiLook];

    /// Parameter name as written in marking.json and distro.json
    pub fn name(&self) -> &'static str {
        match self {
            BinaryAxis::Updates => "updates",
            BinaryAxis::UiLook => "UI_Look",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|axis| axis.name() == name)
    }
}

impl std::fmt::Display for BinaryAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
