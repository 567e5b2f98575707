//! Migration: Create report_data table.
//!
//! Holds the sanitized analysis payload, at most one row per report.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                -- Sanitized analysis output, keyed 1:1 to the report
                CREATE TABLE report_data (
                    report_id UUID PRIMARY KEY
                        REFERENCES reports(id) ON DELETE CASCADE,
                    processed_json JSONB NOT NULL,
                    processed_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                -- GIN index for JSONB queries over detected issues
                CREATE INDEX idx_report_data_processed_json ON report_data USING GIN (processed_json);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS report_data CASCADE;")
            .await?;

        Ok(())
    }
}
