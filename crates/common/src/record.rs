//! Agent roster records

use crate::status::ClearanceStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered agent as stored in the roster
///
/// Exactly one of `photo_data_url` / `image_url` is populated: inline
/// photo storage fills the former, blob storage the latter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRecord {
    /// Store-assigned unique identifier
    pub id: String,

    /// Codename shown on the badge and the venue screen
    pub codename: String,

    /// Clearance scan outcome
    pub status: ClearanceStatus,

    /// Processed passport photo as a JPEG data URL (inline storage)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_data_url: Option<String>,

    /// Public URL of the processed photo (blob storage)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Backstory from the template catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story: Option<String>,

    /// Achievement headline from the template catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievement_title: Option<String>,

    /// Store-assigned creation timestamp; roster ordering key
    pub created_at: DateTime<Utc>,
}

/// Write-side payload for a new registration
///
/// `id` and `created_at` are assigned by the store, never by the caller.
#[derive(Debug, Clone)]
pub struct NewAgent {
    pub codename: String,
    pub status: ClearanceStatus,
    pub photo_data_url: Option<String>,
    pub image_url: Option<String>,
    pub story: Option<String>,
    pub achievement_title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> AgentRecord {
        AgentRecord {
            id: "abc-123".to_string(),
            codename: "The Glitch".to_string(),
            status: ClearanceStatus::Approved,
            photo_data_url: Some("data:image/jpeg;base64,AAAA".to_string()),
            image_url: None,
            story: Some("A story.".to_string()),
            achievement_title: Some("The Volcano Tech".to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(sample_record()).unwrap();

        assert_eq!(json["codename"], "The Glitch");
        assert_eq!(json["status"], "approved");
        assert_eq!(json["photoDataUrl"], "data:image/jpeg;base64,AAAA");
        assert_eq!(json["achievementTitle"], "The Volcano Tech");
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_absent_options_are_omitted() {
        let mut record = sample_record();
        record.photo_data_url = None;
        record.story = None;
        record.achievement_title = None;

        let json = serde_json::to_value(record).unwrap();

        assert!(json.get("photoDataUrl").is_none());
        assert!(json.get("imageUrl").is_none());
        assert!(json.get("story").is_none());
        assert!(json.get("achievementTitle").is_none());
    }

    #[test]
    fn test_deserializes_without_optional_fields() {
        let json = r#"{
            "id": "x1",
            "codename": "Echo One",
            "status": "double-agent",
            "createdAt": "2026-08-01T19:30:00Z"
        }"#;

        let record: AgentRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.codename, "Echo One");
        assert_eq!(record.status, ClearanceStatus::DoubleAgent);
        assert!(record.photo_data_url.is_none());
        assert!(record.image_url.is_none());
    }
}
