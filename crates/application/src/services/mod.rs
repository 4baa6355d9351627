mod interface_cache;
mod snapshot_store;

pub use interface_cache::InterfaceCache;
pub use snapshot_store::SnapshotStore;
