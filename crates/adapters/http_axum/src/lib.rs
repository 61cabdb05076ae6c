//! # ecocampus-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** consumed by the campus web client
//!   (`/api/home/*`, `/api/missions`, `/api/points/*`, `/api/rooms`, …)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//! - Act as the configured user: the identity is fixed here, at the edge,
//!   and passed explicitly to every user-scoped service call
//!
//! ## Dependency rule
//! Depends on `ecocampus-app` (for port traits and services) and `ecocampus-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
