//! # Patch Window Backend
//!
//! Maintenance-window recommender for network patching.
//!
//! Given how many crew members are on hand at each hour of a day and how much
//! load the network carries at each hour, this crate picks the start hour that
//! best balances the two for a patch of a given duration. On top of that
//! single-window search it plans a whole patch catalog into a day without
//! double-booking anyone, scores patches hour by hour, and summarises the
//! weekly load profile.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Hourly series, patches, crew rosters and load samples
//! - [`algorithms`]: Window search and multi-factor priority scoring
//! - [`services`]: Request validation, day planning, statistics and forecasting
//! - [`db`]: Repository pattern, in-memory storage and the service layer over it
//! - [`config`]: TOML configuration file support
//! - [`api`]: Data Transfer Objects (DTOs) for API requests and responses
//! - [`routes`]: Route-specific data types
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Quick Start
//!
//! ```
//! use patch_window::api::OptimalScheduleRequest;
//! use patch_window::services::optimal_schedule;
//!
//! let mut load = vec![80.0; 24];
//! load[3] = 10.0;
//! load[4] = 10.0;
//! let request = OptimalScheduleRequest {
//!     crew_availability: vec![5.0; 24],
//!     network_load: load,
//!     patch_duration_hours: 2.0,
//!     weights: Default::default(),
//!     crew_required: None,
//!     normalize: true,
//! };
//!
//! let response = optimal_schedule(&request).unwrap();
//! assert_eq!(response.best_start_hour, 3);
//! ```

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod algorithms;
pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
