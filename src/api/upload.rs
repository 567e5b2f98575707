//! Report PDF upload endpoint.

use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse};
use futures_util::StreamExt;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::BearerAuth;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{ReportStatus, UploadResponse};
use crate::services::Storage;

/// Per-request upload size limit, shared through app data.
#[derive(Clone, Copy)]
pub struct MaxUploadSize(pub usize);

/// Upload a report PDF.
///
/// POST /upload
/// Content-Type: multipart/form-data with a single `file` field
///
/// The file must be a PDF (content type or .pdf extension, plus the %PDF
/// magic bytes) and no larger than the configured limit. The object is
/// stored first; if the database insert then fails the object is removed
/// again so storage and rows stay consistent.
#[utoipa::path(
    post,
    path = "/api/v1/upload",
    tag = "Reports",
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Report uploaded", body = UploadResponse),
        (status = 400, description = "Not a PDF or missing file field"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 413, description = "File exceeds the upload size limit")
    )
)]
#[post("/upload")]
pub async fn upload_report(
    auth: BearerAuth,
    mut payload: Multipart,
    pool: web::Data<DbPool>,
    storage: web::Data<Storage>,
    max_size: web::Data<MaxUploadSize>,
) -> AppResult<HttpResponse> {
    let mut pdf_bytes: Option<Vec<u8>> = None;

    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| AppError::InvalidInput(format!("Multipart error: {}", e)))?;

        let Some(content_disposition) = field.content_disposition() else {
            continue;
        };

        if content_disposition.get_name() != Some("file") {
            continue;
        }

        let filename = content_disposition
            .get_filename()
            .map(str::to_string)
            .unwrap_or_default();
        let content_type = field.content_type().map(|m| m.to_string());

        let looks_like_pdf = content_type.as_deref() == Some("application/pdf")
            || filename.to_lowercase().ends_with(".pdf");
        if !looks_like_pdf {
            return Err(AppError::InvalidInput(
                "Only PDF files are allowed".to_string(),
            ));
        }

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk =
                chunk.map_err(|e| AppError::InvalidInput(format!("Multipart error: {}", e)))?;
            if data.len() + chunk.len() > max_size.0 {
                return Err(AppError::PayloadTooLarge(format!(
                    "File exceeds the {} byte limit",
                    max_size.0
                )));
            }
            data.extend_from_slice(&chunk);
        }

        pdf_bytes = Some(data);
    }

    let pdf_bytes = pdf_bytes
        .ok_or_else(|| AppError::InvalidInput("Missing 'file' form field".to_string()))?;

    if !pdf_bytes.starts_with(b"%PDF") {
        return Err(AppError::InvalidInput(
            "File content is not a valid PDF".to_string(),
        ));
    }

    let report_id = Uuid::new_v4();
    let pdf_key = Storage::report_key(&auth.user.id, report_id);

    storage.put(&pdf_key, pdf_bytes).await?;

    let report = match pool.insert_report(report_id, &auth.user.id, &pdf_key).await {
        Ok(report) => report,
        Err(e) => {
            // Roll the object back so no orphan is left behind
            if let Err(cleanup_err) = storage.delete(&pdf_key).await {
                warn!(
                    "Failed to remove orphaned upload {}: {}",
                    pdf_key, cleanup_err
                );
            }
            return Err(e);
        }
    };

    info!("Report {} uploaded by user {}", report_id, auth.user.id);

    let status = ReportStatus::parse(&report.status).unwrap_or(ReportStatus::Uploaded);

    Ok(HttpResponse::Created().json(UploadResponse {
        report_id,
        status,
        pdf_url: pdf_key,
    }))
}

/// Configure upload routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(upload_report);
}
