//! Report lifecycle models and response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;
use uuid::Uuid;

/// Report processing lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Uploaded,
    Processing,
    Processed,
    Error,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uploaded => "uploaded",
            Self::Processing => "processing",
            Self::Processed => "processed",
            Self::Error => "error",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "uploaded" => Some(Self::Uploaded),
            "processing" => Some(Self::Processing),
            "processed" => Some(Self::Processed),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Audit wizard step shown to the client alongside the report status.
///
/// The sequence is strictly linear; `next`/`back` never branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStep {
    Setup,
    Upload,
    Processing,
    Review,
    Generation,
    Complete,
}

impl WorkflowStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Upload => "upload",
            Self::Processing => "processing",
            Self::Review => "review",
            Self::Generation => "generation",
            Self::Complete => "complete",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "setup" => Some(Self::Setup),
            "upload" => Some(Self::Upload),
            "processing" => Some(Self::Processing),
            "review" => Some(Self::Review),
            "generation" => Some(Self::Generation),
            "complete" => Some(Self::Complete),
            _ => None,
        }
    }

    /// The step after this one; `Complete` is terminal.
    pub fn next(&self) -> Self {
        match self {
            Self::Setup => Self::Upload,
            Self::Upload => Self::Processing,
            Self::Processing => Self::Review,
            Self::Review => Self::Generation,
            Self::Generation => Self::Complete,
            Self::Complete => Self::Complete,
        }
    }

    /// The step before this one; `Setup` is the floor.
    pub fn back(&self) -> Self {
        match self {
            Self::Setup => Self::Setup,
            Self::Upload => Self::Setup,
            Self::Processing => Self::Upload,
            Self::Review => Self::Processing,
            Self::Generation => Self::Review,
            Self::Complete => Self::Generation,
        }
    }

    /// Map a report status to the wizard step the client should show.
    pub fn from_status(status: ReportStatus) -> Self {
        match status {
            ReportStatus::Uploaded => Self::Processing,
            ReportStatus::Processing => Self::Processing,
            ReportStatus::Processed => Self::Review,
            ReportStatus::Error => Self::Upload,
        }
    }
}

impl std::fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Response for a successful upload.
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub report_id: Uuid,
    pub status: ReportStatus,
    pub pdf_url: String,
}

/// Response for a completed processing run.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProcessResponse {
    pub report_id: Uuid,
    pub status: ReportStatus,
    pub issues_found: usize,
    pub confidence: u32,
}

/// Full report payload.
///
/// `data` and `processed_at` are present only once processing has finished;
/// until then `message` explains the current state.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReportResponse {
    pub report_id: Uuid,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Lightweight status poll response.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub report_id: Uuid,
    pub status: ReportStatus,
    pub workflow_step: WorkflowStep,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            ReportStatus::Uploaded,
            ReportStatus::Processing,
            ReportStatus::Processed,
            ReportStatus::Error,
        ] {
            assert_eq!(ReportStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ReportStatus::parse("done"), None);
    }

    #[test]
    fn test_workflow_advances_linearly() {
        let mut step = WorkflowStep::Setup;
        let expected = [
            WorkflowStep::Upload,
            WorkflowStep::Processing,
            WorkflowStep::Review,
            WorkflowStep::Generation,
            WorkflowStep::Complete,
        ];
        for want in expected {
            step = step.next();
            assert_eq!(step, want);
        }
        // Terminal step stays put
        assert_eq!(WorkflowStep::Complete.next(), WorkflowStep::Complete);
    }

    #[test]
    fn test_workflow_back_is_linear() {
        assert_eq!(WorkflowStep::Complete.back(), WorkflowStep::Generation);
        assert_eq!(WorkflowStep::Generation.back(), WorkflowStep::Review);
        assert_eq!(WorkflowStep::Review.back(), WorkflowStep::Processing);
        assert_eq!(WorkflowStep::Processing.back(), WorkflowStep::Upload);
        assert_eq!(WorkflowStep::Upload.back(), WorkflowStep::Setup);
        assert_eq!(WorkflowStep::Setup.back(), WorkflowStep::Setup);
    }

    #[test]
    fn test_step_from_status() {
        assert_eq!(
            WorkflowStep::from_status(ReportStatus::Uploaded),
            WorkflowStep::Processing
        );
        assert_eq!(
            WorkflowStep::from_status(ReportStatus::Processed),
            WorkflowStep::Review
        );
        assert_eq!(
            WorkflowStep::from_status(ReportStatus::Error),
            WorkflowStep::Upload
        );
    }
}
