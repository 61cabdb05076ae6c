//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod device_service;
pub mod mission_service;
pub mod points_service;
pub mod ranking_service;
pub mod room_service;
pub mod seed_service;
pub mod stats_service;
pub mod user_service;
