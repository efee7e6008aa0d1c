//! DecisionSnapshot - serializable export record of the decision set.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{IncidentId, Timestamp};

/// Default file name used for exported snapshots.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "incident-briefing-decisions.json";

/// One exported decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    #[serde(rename = "decision")]
    pub label: String,
    pub approved: bool,
}

/// Point-in-time export of every decision and its approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionSnapshot {
    pub timestamp: Timestamp,
    #[serde(rename = "incident")]
    pub incident_id: IncidentId,
    #[serde(rename = "executiveDecisions")]
    pub items: Vec<DecisionRecord>,
}

impl DecisionSnapshot {
    /// Serializes with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn approved_count(&self) -> usize {
        self.items.iter().filter(|r| r.approved).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn snapshot() -> DecisionSnapshot {
        let dt = DateTime::parse_from_rfc3339("2025-09-04T14:05:00Z")
            .unwrap()
            .with_timezone(&Utc);
        DecisionSnapshot {
            timestamp: Timestamp::from_datetime(dt),
            incident_id: IncidentId::new("INC-2025-0904-001").unwrap(),
            items: vec![
                DecisionRecord {
                    label: "Approve failover".to_string(),
                    approved: true,
                },
                DecisionRecord {
                    label: "Engage vendor".to_string(),
                    approved: false,
                },
            ],
        }
    }

    #[test]
    fn serializes_with_export_field_names() {
        let value = serde_json::to_value(snapshot()).unwrap();
        assert_eq!(value["timestamp"], "2025-09-04T14:05:00Z");
        assert_eq!(value["incident"], "INC-2025-0904-001");
        assert_eq!(value["executiveDecisions"][0]["decision"], "Approve failover");
        assert_eq!(value["executiveDecisions"][1]["approved"], false);
    }

    #[test]
    fn pretty_json_uses_two_space_indent() {
        let json = snapshot().to_json_pretty().unwrap();
        assert!(json.starts_with("{\n  \"timestamp\""));
    }

    #[test]
    fn approved_count_counts_true_flags() {
        assert_eq!(snapshot().approved_count(), 1);
    }
}
