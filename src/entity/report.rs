//! Report entity for uploaded credit/background report PDFs.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reports")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: String,
    pub pdf_key: String,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::report_data::Entity")]
    ReportData,
}

impl Related<super::report_data::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReportData.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
