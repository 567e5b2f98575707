//! Business services: storage, analysis, dispute generation, cleanup.

pub mod analysis;
pub mod cleanup;
pub mod dispute;
pub mod storage;

pub use analysis::Analyzer;
pub use storage::Storage;
