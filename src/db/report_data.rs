//! Database queries for processed report data.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::entity::report_data::{self, ActiveModel, Entity as ReportData};
use crate::error::{AppError, AppResult};

use super::DbPool;

impl DbPool {
    /// Insert the processed payload for a report.
    ///
    /// The primary key enforces at most one row per report; a second insert
    /// fails rather than overwriting.
    pub async fn insert_report_data(
        &self,
        report_id: Uuid,
        processed_json: JsonValue,
    ) -> AppResult<report_data::Model> {
        let model = ActiveModel {
            report_id: Set(report_id),
            processed_json: Set(processed_json),
            processed_at: Set(Utc::now()),
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert report data: {}", e)))?;

        Ok(result)
    }

    /// Get the processed payload for a report, if processing has finished.
    pub async fn get_report_data(&self, report_id: Uuid) -> AppResult<Option<report_data::Model>> {
        let result = ReportData::find_by_id(report_id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get report data: {}", e)))?;

        Ok(result)
    }
}
