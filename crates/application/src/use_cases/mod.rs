pub mod resolve_registry_query;

pub use resolve_registry_query::ResolveRegistryQueryUseCase;
