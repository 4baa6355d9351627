pub mod hosts;
pub mod interfaces;

pub use hosts::{BuildSnapshotUseCase, ScrapeInterfaceUseCase};
pub use interfaces::ResolveInterfacesUseCase;
