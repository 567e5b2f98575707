//! Static reference data: reporting agencies, billing catalog, mock analysis.

pub mod agencies;
pub mod mock_report;
pub mod products;

pub use agencies::{agencies_by_type, agency_by_id, all_agencies, AgencyType, ReportingAgency};
pub use mock_report::mock_processed_report;
pub use products::{product_by_id, product_by_price_id, BillingProduct};
