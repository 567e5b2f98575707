//! Report retrieval endpoints.

use actix_web::{get, web, HttpResponse};
use uuid::Uuid;

use crate::auth::BearerAuth;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{ReportResponse, ReportStatus, StatusResponse, WorkflowStep};

/// Get a report with its processed data.
///
/// GET /report/{id}
///
/// Before processing finishes the response carries a `message` instead of
/// the data payload; the request still succeeds.
#[utoipa::path(
    get,
    path = "/api/v1/report/{id}",
    tag = "Reports",
    params(("id" = Uuid, Path, description = "Report ID")),
    responses(
        (status = 200, description = "Report", body = ReportResponse),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Report not found")
    )
)]
#[get("/report/{id}")]
pub async fn get_report(
    auth: BearerAuth,
    path: web::Path<Uuid>,
    pool: web::Data<DbPool>,
) -> AppResult<HttpResponse> {
    let report_id = path.into_inner();

    let report = pool
        .get_report_for_user(report_id, &auth.user.id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Report {}", report_id)))?;

    let status = ReportStatus::parse(&report.status)
        .ok_or_else(|| AppError::Database(format!("Unknown report status: {}", report.status)))?;

    let mut response = ReportResponse {
        report_id,
        status,
        created_at: report.created_at,
        updated_at: report.updated_at,
        processed_at: None,
        data: None,
        message: None,
    };

    if status == ReportStatus::Processed {
        let data = pool
            .get_report_data(report_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Processed data for report {}", report_id)))?;
        response.processed_at = Some(data.processed_at);
        response.data = Some(data.processed_json);
    } else {
        response.message = Some(format!(
            "Report is in the '{}' state; processed data is not available yet",
            status
        ));
    }

    Ok(HttpResponse::Ok().json(response))
}

/// Get a report's lifecycle status.
///
/// GET /report/{id}/status
#[utoipa::path(
    get,
    path = "/api/v1/report/{id}/status",
    tag = "Reports",
    params(("id" = Uuid, Path, description = "Report ID")),
    responses(
        (status = 200, description = "Report status", body = StatusResponse),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Report not found")
    )
)]
#[get("/report/{id}/status")]
pub async fn get_report_status(
    auth: BearerAuth,
    path: web::Path<Uuid>,
    pool: web::Data<DbPool>,
) -> AppResult<HttpResponse> {
    let report_id = path.into_inner();

    let report = pool
        .get_report_for_user(report_id, &auth.user.id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Report {}", report_id)))?;

    let status = ReportStatus::parse(&report.status)
        .ok_or_else(|| AppError::Database(format!("Unknown report status: {}", report.status)))?;

    Ok(HttpResponse::Ok().json(StatusResponse {
        report_id,
        status,
        workflow_step: WorkflowStep::from_status(status),
        created_at: report.created_at,
        updated_at: report.updated_at,
    }))
}

/// Configure report routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_report).service(get_report_status);
}
