use arc_swap::ArcSwapOption;
use ntopng_exporter_domain::HostSnapshot;
use std::sync::Arc;
use tracing::debug;

/// Holds the most recently published host snapshot.
///
/// Publishing swaps one `Arc`, so readers always see a whole snapshot
/// from a single cycle and never block the writer.
pub struct SnapshotStore {
    current: ArcSwapOption<HostSnapshot>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self {
            current: ArcSwapOption::empty(),
        }
    }

    pub fn publish(&self, snapshot: HostSnapshot) -> Arc<HostSnapshot> {
        let snapshot = Arc::new(snapshot);
        debug!(hosts = snapshot.len(), "Publishing host snapshot");
        self.current.store(Some(Arc::clone(&snapshot)));
        snapshot
    }

    /// `None` until the first scrape cycle has completed.
    pub fn read(&self) -> Option<Arc<HostSnapshot>> {
        self.current.load_full()
    }

    pub fn is_populated(&self) -> bool {
        self.current.load().is_some()
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}
