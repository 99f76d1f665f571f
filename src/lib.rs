//! Rackline Inventory Server
//!
//! A Rust REST API server for managing datacenter and network equipment
//! inventories: datacenters, categories, user-defined equipment types and
//! equipment instances, plus user accounts with role-based access.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
