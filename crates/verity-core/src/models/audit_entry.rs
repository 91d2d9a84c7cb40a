use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An entry in the append-only audit log, keyed by entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub entity_id: String,
    pub operation: AuditOperation,
    /// JSON details about the operation.
    pub details: serde_json::Value,
    pub actor: AuditActor,
    pub timestamp: DateTime<Utc>,
}

/// Operations tracked in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditOperation {
    SynthesisGenerated,
    StatusChanged,
    Reverified,
}

impl AuditOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SynthesisGenerated => "synthesis_generated",
            Self::StatusChanged => "status_changed",
            Self::Reverified => "reverified",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "synthesis_generated" => Some(Self::SynthesisGenerated),
            "status_changed" => Some(Self::StatusChanged),
            "reverified" => Some(Self::Reverified),
            _ => None,
        }
    }
}

/// Who performed the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditActor {
    System,
    User,
    Orchestrator,
}

impl AuditActor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Orchestrator => "orchestrator",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "system" => Some(Self::System),
            "user" => Some(Self::User),
            "orchestrator" => Some(Self::Orchestrator),
            _ => None,
        }
    }
}
