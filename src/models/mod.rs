//! Domain models and API DTOs.

pub mod analysis;
pub mod dispute;
pub mod report;
pub mod subscription;
pub mod user;

pub use analysis::{
    AnalysisMetadata, DetectedIssue, IssueSeverity, ProcessedReport,
};
pub use dispute::{DisputeCustomizations, DisputeRequest, DisputeResponse, LetterType};
pub use report::{
    ProcessResponse, ReportResponse, ReportStatus, StatusResponse, UploadResponse, WorkflowStep,
};
pub use subscription::Subscription;
pub use user::AuthenticatedUser;
