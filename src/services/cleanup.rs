//! Cleanup service for deleting expired reports.
//!
//! Reports older than the retention period are removed entirely: the PDF
//! in object storage first, then the database row (the cascade removes the
//! processed payload). The same pass is exposed on-demand through the
//! internal cleanup endpoint.

use std::time::Duration;

use chrono::Utc;
use serde::Serialize;
use tokio::time::interval;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::db::DbPool;
use crate::error::AppResult;
use crate::services::Storage;

/// Maximum reports removed per pass.
const CLEANUP_BATCH_SIZE: u64 = 100;

/// Configuration for the cleanup service.
#[derive(Clone)]
pub struct CleanupConfig {
    /// Report retention period in days
    pub retention_days: i64,
    /// How often to run cleanup (in seconds)
    pub interval_secs: u64,
}

/// Result of one cleanup pass.
#[derive(Debug, Serialize, ToSchema)]
pub struct CleanupOutcome {
    pub deleted_count: usize,
    pub total_expired: usize,
    pub errors: Vec<String>,
}

/// Start the cleanup background task.
///
/// Spawns a tokio task that periodically deletes reports that have
/// exceeded the retention period.
pub fn start_cleanup_task(pool: DbPool, storage: Storage, config: CleanupConfig) {
    tokio::spawn(async move {
        info!(
            "Starting cleanup service (retention: {} days, interval: {} seconds)",
            config.retention_days, config.interval_secs
        );

        let mut ticker = interval(Duration::from_secs(config.interval_secs));

        loop {
            ticker.tick().await;

            match run_cleanup_pass(&pool, &storage, config.retention_days).await {
                Ok(outcome) if outcome.total_expired > 0 => {
                    info!(
                        "Cleanup pass removed {}/{} expired reports",
                        outcome.deleted_count, outcome.total_expired
                    );
                }
                Ok(_) => {}
                Err(e) => error!("Cleanup task error: {}", e),
            }
        }
    });
}

/// Run a single cleanup pass.
///
/// Storage is deleted before the row so a failed pass leaves the report
/// discoverable for the next one. Per-report failures are collected
/// rather than aborting the pass.
pub async fn run_cleanup_pass(
    pool: &DbPool,
    storage: &Storage,
    retention_days: i64,
) -> AppResult<CleanupOutcome> {
    let cutoff = Utc::now() - chrono::Duration::days(retention_days);
    let expired = pool.list_expired_reports(cutoff, CLEANUP_BATCH_SIZE).await?;

    let total_expired = expired.len();
    let mut deleted_count = 0;
    let mut errors = Vec::new();

    for report in expired {
        let report_id = report.id;

        if let Err(e) = storage.delete(&report.pdf_key).await {
            warn!("Failed to delete PDF for report {}: {}", report_id, e);
            errors.push(format!("report {}: {}", report_id, e));
            continue;
        }

        match pool.delete_report(report).await {
            Ok(()) => {
                info!("Deleted expired report {}", report_id);
                deleted_count += 1;
            }
            Err(e) => {
                warn!("Failed to delete row for report {}: {}", report_id, e);
                errors.push(format!("report {}: {}", report_id, e));
            }
        }
    }

    Ok(CleanupOutcome {
        deleted_count,
        total_expired,
        errors,
    })
}
