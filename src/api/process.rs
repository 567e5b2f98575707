//! Report processing endpoint.

use actix_web::{post, web, HttpResponse};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::BearerAuth;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{ProcessResponse, ReportStatus};
use crate::services::{Analyzer, Storage};

/// Run analysis on an uploaded report.
///
/// POST /process/{id}
///
/// Only reports in the `uploaded` state can be processed; re-processing is
/// rejected with 400. On success the sanitized payload is stored and the
/// report moves to `processed`. Storage or database failures move it to
/// `error` and surface as 500.
#[utoipa::path(
    post,
    path = "/api/v1/process/{id}",
    tag = "Reports",
    params(("id" = Uuid, Path, description = "Report ID")),
    responses(
        (status = 200, description = "Report processed", body = ProcessResponse),
        (status = 400, description = "Report is not in the uploaded state"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Report not found"),
        (status = 500, description = "Processing failed; report moved to error state")
    )
)]
#[post("/process/{id}")]
pub async fn process_report(
    auth: BearerAuth,
    path: web::Path<Uuid>,
    pool: web::Data<DbPool>,
    storage: web::Data<Storage>,
    analyzer: web::Data<Analyzer>,
) -> AppResult<HttpResponse> {
    let report_id = path.into_inner();

    let report = pool
        .get_report_for_user(report_id, &auth.user.id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Report {}", report_id)))?;

    if ReportStatus::parse(&report.status) != Some(ReportStatus::Uploaded) {
        return Err(AppError::InvalidInput(
            "Report has already been processed or is in processing".to_string(),
        ));
    }

    pool.update_report_status(report_id, ReportStatus::Processing)
        .await?;

    match run_processing(&pool, &storage, &analyzer, report_id, &report.pdf_key).await {
        Ok(response) => {
            info!(
                "Report {} processed: {} issues found",
                report_id, response.issues_found
            );
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            error!("Processing failed for report {}: {}", report_id, e);
            // Best effort: surface the original failure even if this update fails
            if let Err(update_err) = pool
                .update_report_status(report_id, ReportStatus::Error)
                .await
            {
                error!(
                    "Failed to mark report {} as errored: {}",
                    report_id, update_err
                );
            }
            Err(AppError::Analysis(format!(
                "Failed to process report: {}",
                e
            )))
        }
    }
}

async fn run_processing(
    pool: &DbPool,
    storage: &Storage,
    analyzer: &Analyzer,
    report_id: Uuid,
    pdf_key: &str,
) -> AppResult<ProcessResponse> {
    let pdf_bytes = storage
        .get(pdf_key)
        .await?
        .ok_or_else(|| AppError::Storage(format!("PDF missing for report {}", report_id)))?;

    // Analysis cannot fail: LLM errors degrade to the mock payload
    let processed = analyzer.analyze(&pdf_bytes).await;

    let issues_found = processed.detected_issues.len();
    let confidence = processed.analysis_metadata.confidence;

    let payload = serde_json::to_value(&processed)?;
    pool.insert_report_data(report_id, payload).await?;

    pool.update_report_status(report_id, ReportStatus::Processed)
        .await?;

    Ok(ProcessResponse {
        report_id,
        status: ReportStatus::Processed,
        issues_found,
        confidence,
    })
}

/// Configure process routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(process_report);
}
