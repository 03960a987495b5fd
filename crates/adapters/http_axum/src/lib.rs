//! # devicehub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API under `/api` (`/api/devices`, `/api/employees`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Project domain results into transfer objects with camelCase keys
//! - Map [`DeviceHubError`](devicehub_domain::error::DeviceHubError) into
//!   status codes
//!
//! ## Dependency rule
//! Depends on `devicehub-app` (for port traits and services) and `devicehub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;
