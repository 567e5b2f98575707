//! ScoreSweep API server library.
//!
//! Upload a credit or background report PDF, analyze it for likely
//! reporting errors, and generate dispute letters and phone scripts.

pub mod api;
pub mod auth;
pub mod config;
pub mod data;
pub mod db;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod migration;
pub mod models;
pub mod services;
