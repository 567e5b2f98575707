//! Migration: Create reports table and shared trigger function.
//!
//! Each row tracks one uploaded PDF and its processing lifecycle.

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
                -- Shared trigger function for updated_at
                CREATE OR REPLACE FUNCTION update_updated_at_column()
                RETURNS TRIGGER AS $$
                BEGIN
                    NEW.updated_at = NOW();
                    RETURN NEW;
                END;
                $$ LANGUAGE plpgsql;

                -- Uploaded report PDFs and their processing lifecycle
                CREATE TABLE reports (
                    id UUID PRIMARY KEY,
                    user_id TEXT NOT NULL,
                    pdf_key TEXT NOT NULL,
                    status VARCHAR(20) NOT NULL DEFAULT 'uploaded'
                        CHECK (status IN ('uploaded', 'processing', 'processed', 'error')),

                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                -- All report reads are scoped by owner
                CREATE INDEX idx_reports_user_id ON reports(user_id);

                -- Index for retention sweeps by age
                CREATE INDEX idx_reports_created_at ON reports(created_at);

                -- Index for filtering by lifecycle status
                CREATE INDEX idx_reports_status ON reports(status);

                -- Trigger to update updated_at
                CREATE TRIGGER update_reports_updated_at
                    BEFORE UPDATE ON reports
                    FOR EACH ROW
                    EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_reports_updated_at ON reports;
                DROP TABLE IF EXISTS reports CASCADE;
                DROP FUNCTION IF EXISTS update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }
}
