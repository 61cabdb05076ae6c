//! Seed service — fills an empty store with the demo rows.

use ecocampus_domain::error::CampusError;

use crate::demo::DemoData;
use crate::ports::SeedRepository;

/// Application service for the one-shot demo seed.
pub struct SeedService<R> {
    repo: R,
}

impl<R: SeedRepository> SeedService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Load `data` unless the store already holds a user.
    ///
    /// Returns whether anything was written.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip_all)]
    pub async fn seed(&self, data: &DemoData) -> Result<bool, CampusError> {
        let loaded = self.repo.load_if_empty(data).await?;
        if loaded {
            tracing::info!(
                devices = data.devices.len(),
                missions = data.missions.len(),
                rooms = data.rooms.len(),
                "demo data loaded"
            );
        } else {
            tracing::info!("store already populated, skipping seed");
        }
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSeedRepo {
        loads: Mutex<usize>,
    }

    impl SeedRepository for RecordingSeedRepo {
        async fn load_if_empty(&self, _data: &DemoData) -> Result<bool, CampusError> {
            let mut loads = self.loads.lock().unwrap();
            *loads += 1;
            Ok(*loads == 1)
        }
    }

    #[tokio::test]
    async fn should_load_once_then_skip() {
        let svc = SeedService::new(RecordingSeedRepo::default());
        let data = DemoData::campus();
        assert!(svc.seed(&data).await.unwrap());
        assert!(!svc.seed(&data).await.unwrap());
    }
}
