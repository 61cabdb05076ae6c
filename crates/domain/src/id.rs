//! Typed identifier newtypes backed by the store's integer row ids.
//!
//! Row ids are emitted to clients as JSON strings, except [`UserId`] which the
//! client expects as a plain number.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident, $entity:literal) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(i64);

        impl $name {
            /// Wrap an existing row id.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Access the inner row id.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }

            /// Parse a raw path or body parameter, mapping failures to
            /// [`ValidationError::InvalidId`].
            ///
            /// # Errors
            ///
            /// Returns [`ValidationError::InvalidId`] when `raw` is not an integer.
            pub fn parse(raw: &str) -> Result<Self, ValidationError> {
                raw.trim()
                    .parse()
                    .map_err(|_| ValidationError::InvalidId {
                        entity: $entity,
                        value: raw.to_string(),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Device`](crate::device::Device).
    DeviceId,
    "device"
);

define_id!(
    /// Unique identifier for a [`Mission`](crate::mission::Mission).
    MissionId,
    "mission"
);

define_id!(
    /// Unique identifier for a [`Room`](crate::room::Room).
    RoomId,
    "room"
);

define_id!(
    /// Unique identifier for an [`ExchangeItem`](crate::points::ExchangeItem).
    ExchangeItemId,
    "item"
);

define_id!(
    /// Unique identifier for a [`DonateCategory`](crate::points::DonateCategory).
    DonateCategoryId,
    "category"
);

define_id!(
    /// Unique identifier for an activity or leaderboard row.
    RecordId,
    "record"
);

/// Unique identifier for a [`User`](crate::user::User). Serialized as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap an existing row id.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Access the inner row id.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
