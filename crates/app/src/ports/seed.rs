//! Seed port — one-shot bulk load of the demo rows.

use std::future::Future;

use ecocampus_domain::error::CampusError;

use crate::demo::DemoData;

/// Store that can be filled with [`DemoData`].
pub trait SeedRepository {
    /// Load `data` in one unit of work unless any user row exists.
    ///
    /// Returns `true` when the rows were written, `false` when skipped.
    fn load_if_empty(
        &self,
        data: &DemoData,
    ) -> impl Future<Output = Result<bool, CampusError>> + Send;
}
