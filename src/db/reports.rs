//! Database queries for reports.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, QuerySelect,
    Set,
};
use uuid::Uuid;

use crate::entity::report::{self, ActiveModel, Entity as Report};
use crate::error::{AppError, AppResult};
use crate::models::ReportStatus;

use super::DbPool;

impl DbPool {
    /// Insert a new report row in the `uploaded` state.
    pub async fn insert_report(
        &self,
        id: Uuid,
        user_id: &str,
        pdf_key: &str,
    ) -> AppResult<report::Model> {
        let now = Utc::now();

        let model = ActiveModel {
            id: Set(id),
            user_id: Set(user_id.to_string()),
            pdf_key: Set(pdf_key.to_string()),
            status: Set(ReportStatus::Uploaded.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert report: {}", e)))?;

        Ok(result)
    }

    /// Get a report by ID, scoped to its owner.
    ///
    /// A report owned by another user is indistinguishable from a missing one.
    pub async fn get_report_for_user(
        &self,
        id: Uuid,
        user_id: &str,
    ) -> AppResult<Option<report::Model>> {
        let result = Report::find_by_id(id)
            .filter(report::Column::UserId.eq(user_id))
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get report: {}", e)))?;

        Ok(result)
    }

    /// Update report status.
    pub async fn update_report_status(
        &self,
        id: Uuid,
        status: ReportStatus,
    ) -> AppResult<report::Model> {
        let report = Report::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get report: {}", e)))?
            .ok_or_else(|| AppError::NotFound(format!("Report {}", id)))?;

        let mut active: ActiveModel = report.into();
        active.status = Set(status.as_str().to_string());
        active.updated_at = Set(Utc::now());

        let result = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update report status: {}", e)))?;

        Ok(result)
    }

    /// List reports created before the cutoff, oldest first.
    pub async fn list_expired_reports(
        &self,
        cutoff: DateTime<Utc>,
        limit: u64,
    ) -> AppResult<Vec<report::Model>> {
        let result = Report::find()
            .filter(report::Column::CreatedAt.lt(cutoff))
            .order_by_asc(report::Column::CreatedAt)
            .limit(limit)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list expired reports: {}", e)))?;

        Ok(result)
    }

    /// Delete a report row; report_data is removed by the cascade.
    pub async fn delete_report(&self, report: report::Model) -> AppResult<()> {
        report
            .delete(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete report: {}", e)))?;

        Ok(())
    }
}
