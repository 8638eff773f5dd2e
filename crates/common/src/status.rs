//! Clearance status assigned to every registered agent

use serde::{Deserialize, Serialize};

/// Outcome of the clearance scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClearanceStatus {
    Approved,
    DoubleAgent,
    Imposter,
}

impl ClearanceStatus {
    /// Wire form used in stored records and API payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            ClearanceStatus::Approved => "approved",
            ClearanceStatus::DoubleAgent => "double-agent",
            ClearanceStatus::Imposter => "imposter",
        }
    }

    /// Banner text shown on badges and the venue screen
    pub fn label(&self) -> &'static str {
        match self {
            ClearanceStatus::Approved => "APPROVED AGENT",
            ClearanceStatus::DoubleAgent => "DOUBLE AGENT",
            ClearanceStatus::Imposter => "IMPOSTER DETECTED",
        }
    }
}

impl std::fmt::Display for ClearanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
