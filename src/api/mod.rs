//! API endpoint modules.

pub mod agencies;
pub mod cleanup;
pub mod dispute;
pub mod health;
pub mod openapi;
pub mod process;
pub mod report;
pub mod upload;

pub use agencies::configure_routes as configure_agency_routes;
pub use cleanup::configure_routes as configure_cleanup_routes;
pub use dispute::configure_routes as configure_dispute_routes;
pub use health::configure_health_routes;
pub use openapi::ApiDoc;
pub use process::configure_routes as configure_process_routes;
pub use report::configure_routes as configure_report_routes;
pub use upload::configure_routes as configure_upload_routes;
