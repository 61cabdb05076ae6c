//! # ecocampus-domain
//!
//! Pure domain model for the `EcoCampus` gamification backend.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, labels, error conventions
//! - Define **Devices** and the on/off power bookkeeping
//! - Define **Missions** and their `available → in-progress → completed` lifecycle
//! - Define **Points**: balance, exchange catalog, donations, history
//! - Define **Rooms** and the summary **Stats** rows shown on each screen
//! - Define **Users** and the **Ranking** leaderboard
//! - Contain all arithmetic of the aggregate mutations
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

#[macro_use]
pub mod label;

pub mod error;
pub mod id;

pub mod device;
pub mod mission;
pub mod points;
pub mod ranking;
pub mod room;
pub mod stats;
pub mod user;
