pub mod resolve_interfaces;

pub use resolve_interfaces::ResolveInterfacesUseCase;
