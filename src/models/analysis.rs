//! Analysis output models.
//!
//! The wire shape uses camelCase keys; the same JSON is persisted verbatim
//! in `report_data.processed_json`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Complete analysis output for one report.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedReport {
    pub personal_info: PersonalInfo,
    pub credit_accounts: Vec<CreditAccount>,
    pub payment_history: Vec<PaymentEntry>,
    pub public_records: Vec<PublicRecord>,
    pub inquiries: Vec<Inquiry>,
    pub employment_history: Vec<EmploymentRecord>,
    pub detected_issues: Vec<DetectedIssue>,
    pub analysis_metadata: AnalysisMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub ssn: String,
    pub date_of_birth: String,
    pub addresses: Vec<Address>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreditAccount {
    pub creditor_name: String,
    pub account_number: String,
    pub account_type: String,
    pub status: String,
    pub balance: f64,
    pub payment_history: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentEntry {
    pub month: String,
    pub status: String,
    pub creditor: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicRecord {
    pub r#type: String,
    pub amount: f64,
    pub date: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub company: String,
    pub date: String,
    pub r#type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentRecord {
    pub employer: String,
    pub position: String,
    pub date_range: String,
}

/// Severity of a detected issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum IssueSeverity {
    High,
    Medium,
    Low,
}

/// One likely reporting error surfaced by the analysis.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DetectedIssue {
    pub id: String,
    pub r#type: String,
    pub severity: IssueSeverity,
    pub description: String,
    pub recommendation: String,
    pub affected_item: String,
    pub confidence: u32,
    pub potential_impact: String,
    pub dispute_strategy: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetadata {
    /// Wall-clock processing time in milliseconds.
    pub processing_time: u64,
    /// Overall confidence (0-100).
    pub confidence: u32,
    pub total_issues: usize,
    pub high_priority_issues: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_keys_are_camel_case() {
        let issue = DetectedIssue {
            id: "issue_001".to_string(),
            r#type: "Payment History Error".to_string(),
            severity: IssueSeverity::High,
            description: "late payment".to_string(),
            recommendation: "dispute it".to_string(),
            affected_item: "Chase Bank Credit Card (****1234)".to_string(),
            confidence: 95,
            potential_impact: "score".to_string(),
            dispute_strategy: "statements".to_string(),
        };

        let json = serde_json::to_value(&issue).unwrap();
        assert!(json.get("affectedItem").is_some());
        assert!(json.get("potentialImpact").is_some());
        assert!(json.get("disputeStrategy").is_some());
        assert_eq!(json["severity"], "High");
    }
}
