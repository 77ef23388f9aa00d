//! Server-side page handlers and the layers beneath them.
//!
//! The backend uses Axum as the web framework, SeaORM for database access, and Tera for
//! rendering HTML pages.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP page handlers and DTO conversion
//! - **Service Layer** (`service/`) - Orchestration, including the per-aircraft fan-out
//! - **Data Layer** (`data/`) - Parameterized queries and per-row scanning
//! - **Model Layer** (`model/`) - Domain models produced by the data layer
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, templates)
//! - **Startup** (`startup`) - Logging, database connection and template loading
//! - **Router** (`router`) - Axum route configuration
//! - **Template** (`template`) - Template loading and rendering
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** validates parameters and calls a service
//! 3. **Service** calls repositories, fanning out per aircraft for calculations
//! 4. **Data** queries the database and scans rows into domain models
//! 5. **Controller** converts domain models to a page DTO and renders its template

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod template;
pub mod util;
