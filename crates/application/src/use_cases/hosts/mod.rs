pub mod build_snapshot;
pub mod scrape_interface;

pub use build_snapshot::BuildSnapshotUseCase;
pub use scrape_interface::ScrapeInterfaceUseCase;
