//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, data, error, models, services};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "ScoreSweep API",
        version = "0.3.0",
        description = "API server for credit report audits: upload a report PDF, analyze it for likely reporting errors, and generate dispute letters and phone scripts"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::health,
        api::health::ready,
        // Report lifecycle
        api::upload::upload_report,
        api::process::process_report,
        api::report::get_report,
        api::report::get_report_status,
        // Disputes
        api::dispute::generate_dispute,
        // Reference data
        api::agencies::list_agencies,
        api::agencies::get_agency,
        // Internal
        api::cleanup::trigger_cleanup,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            // Health
            api::health::HealthResponse,
            api::health::ReadyResponse,
            // Reports
            models::ReportStatus,
            models::WorkflowStep,
            models::UploadResponse,
            models::ProcessResponse,
            models::ReportResponse,
            models::StatusResponse,
            // Analysis
            models::ProcessedReport,
            models::analysis::PersonalInfo,
            models::analysis::Address,
            models::analysis::CreditAccount,
            models::analysis::PaymentEntry,
            models::analysis::PublicRecord,
            models::analysis::Inquiry,
            models::analysis::EmploymentRecord,
            models::DetectedIssue,
            models::IssueSeverity,
            models::AnalysisMetadata,
            // Disputes
            models::LetterType,
            models::DisputeCustomizations,
            models::DisputeRequest,
            models::DisputeResponse,
            // Reference data
            data::ReportingAgency,
            data::agencies::AgencyType,
            data::BillingProduct,
            data::products::PaymentMode,
            // Users / billing
            models::AuthenticatedUser,
            models::Subscription,
            // Internal
            services::cleanup::CleanupOutcome,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Reports", description = "Report upload, processing and retrieval"),
        (name = "Disputes", description = "Dispute letter and phone script generation"),
        (name = "Agencies", description = "Reporting agency directory"),
        (name = "Internal", description = "Admin-key-guarded maintenance endpoints")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Add bearer and admin-key security schemes.
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
            components.add_security_scheme(
                "admin_key",
                utoipa::openapi::security::SecurityScheme::ApiKey(
                    utoipa::openapi::security::ApiKey::Header(
                        utoipa::openapi::security::ApiKeyValue::new("X-Admin-Key"),
                    ),
                ),
            );
        }
    }
}
