//! Dispute generation request/response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Which letter body to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LetterType {
    Dispute,
    Validation,
    Goodwill,
}

/// Optional overrides for the letter header and signature.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisputeCustomizations {
    pub recipient_name: Option<String>,
    pub recipient_address: Option<String>,
    pub sender_name: Option<String>,
    pub sender_address: Option<String>,
}

fn default_output_format() -> String {
    "text".to_string()
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisputeRequest {
    /// IDs of the detected issues to include.
    pub selected_issues: Vec<String>,
    pub letter_type: LetterType,
    #[serde(default)]
    pub customizations: DisputeCustomizations,
    /// Only "text" is supported.
    #[serde(default = "default_output_format")]
    pub output_format: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DisputeResponse {
    pub report_id: Uuid,
    pub letter_content: String,
    pub call_script: String,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let req: DisputeRequest = serde_json::from_str(
            r#"{"selectedIssues": ["issue_001"], "letterType": "goodwill"}"#,
        )
        .unwrap();
        assert_eq!(req.letter_type, LetterType::Goodwill);
        assert_eq!(req.output_format, "text");
        assert!(req.customizations.sender_name.is_none());
    }
}
