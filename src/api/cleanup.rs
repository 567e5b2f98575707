//! Internal on-demand cleanup endpoint.

use actix_web::{post, web, HttpRequest, HttpResponse};
use tracing::info;

use crate::auth::AdminKey;
use crate::config::ADMIN_KEY_HEADER;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::services::cleanup::{run_cleanup_pass, CleanupOutcome};
use crate::services::Storage;

/// Retention period shared through app data.
#[derive(Clone, Copy)]
pub struct RetentionDays(pub i64);

/// Run a cleanup pass now.
///
/// POST /internal/cleanup
/// X-Admin-Key: <admin key>
///
/// Intended as a cron hook; the background task runs the same pass on its
/// own schedule.
#[utoipa::path(
    post,
    path = "/api/v1/internal/cleanup",
    tag = "Internal",
    responses(
        (status = 200, description = "Cleanup outcome", body = CleanupOutcome),
        (status = 401, description = "Missing or invalid admin key")
    )
)]
#[post("/internal/cleanup")]
pub async fn trigger_cleanup(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    storage: web::Data<Storage>,
    admin_key: web::Data<AdminKey>,
    retention: web::Data<RetentionDays>,
) -> AppResult<HttpResponse> {
    let provided = req
        .headers()
        .get(ADMIN_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if !admin_key.verify(provided) {
        return Err(AppError::Unauthorized(format!(
            "Valid {} header required",
            ADMIN_KEY_HEADER
        )));
    }

    let outcome = run_cleanup_pass(&pool, &storage, retention.0).await?;

    info!(
        "On-demand cleanup removed {}/{} expired reports",
        outcome.deleted_count, outcome.total_expired
    );

    Ok(HttpResponse::Ok().json(outcome))
}

/// Configure cleanup routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(trigger_cleanup);
}
