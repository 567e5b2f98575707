//! Dispute letter generation endpoint.

use actix_web::{post, web, HttpResponse};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::auth::BearerAuth;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::analysis::ProcessedReport;
use crate::models::{DisputeRequest, DisputeResponse, ReportStatus};
use crate::services::dispute::{generate_dispute_letter, generate_phone_script};

/// Generate a dispute letter and phone script for selected issues.
///
/// POST /generate-dispute/{id}
///
/// The report must be processed. `selected_issues` ids are matched against
/// the stored detected issues; an empty selection or one that matches
/// nothing is a 400. PDF output is not supported.
#[utoipa::path(
    post,
    path = "/api/v1/generate-dispute/{id}",
    tag = "Disputes",
    params(("id" = Uuid, Path, description = "Report ID")),
    request_body = DisputeRequest,
    responses(
        (status = 200, description = "Generated letter and script", body = DisputeResponse),
        (status = 400, description = "Report not processed, no matching issues, or unsupported output format"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Report not found")
    )
)]
#[post("/generate-dispute/{id}")]
pub async fn generate_dispute(
    auth: BearerAuth,
    path: web::Path<Uuid>,
    request: web::Json<DisputeRequest>,
    pool: web::Data<DbPool>,
) -> AppResult<HttpResponse> {
    let report_id = path.into_inner();
    let request = request.into_inner();

    if request.output_format != "text" {
        return Err(AppError::InvalidInput(format!(
            "Unsupported output format '{}'; only 'text' is available",
            request.output_format
        )));
    }

    if request.selected_issues.is_empty() {
        return Err(AppError::InvalidInput(
            "At least one issue must be selected".to_string(),
        ));
    }

    let report = pool
        .get_report_for_user(report_id, &auth.user.id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Report {}", report_id)))?;

    if ReportStatus::parse(&report.status) != Some(ReportStatus::Processed) {
        return Err(AppError::InvalidInput(
            "Report must be processed before generating disputes".to_string(),
        ));
    }

    let data = pool
        .get_report_data(report_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Processed data for report {}", report_id)))?;

    let processed: ProcessedReport = serde_json::from_value(data.processed_json)?;

    let selected: Vec<_> = processed
        .detected_issues
        .into_iter()
        .filter(|issue| request.selected_issues.contains(&issue.id))
        .collect();

    if selected.is_empty() {
        return Err(AppError::InvalidInput(
            "Selected issues not found in report data".to_string(),
        ));
    }

    let letter_content =
        generate_dispute_letter(&selected, &request.customizations, request.letter_type);
    let call_script = generate_phone_script(&selected, "Credit Bureau");

    info!(
        "Generated {:?} letter for report {} covering {} issues",
        request.letter_type,
        report_id,
        selected.len()
    );

    Ok(HttpResponse::Ok().json(DisputeResponse {
        report_id,
        letter_content,
        call_script,
        generated_at: Utc::now(),
    }))
}

/// Configure dispute routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(generate_dispute);
}
