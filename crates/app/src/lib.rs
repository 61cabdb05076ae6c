//! # ecocampus-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DeviceRepository` — device reads and the toggle unit of work
//!   - `RoomRepository` — rooms, exclusive selection, current location
//!   - `MissionRepository` — mission reads and lifecycle transitions
//!   - `PointsRepository` — balance, catalogs, exchange and donation
//!   - `UserRepository` — user-scoped rows and the leaderboard
//!   - `StatsRepository` — summary singletons
//!   - `SeedRepository` — one-shot demo load
//! - Define **driving/inbound ports** as use-case structs, one per screen area
//! - Hold the canned demo rows used to seed an empty store
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `ecocampus-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod demo;
pub mod ports;
pub mod services;
