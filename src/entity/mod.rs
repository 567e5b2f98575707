//! SeaORM entities.

pub mod report;
pub mod report_data;
