#![allow(dead_code)]

mod mock_registry;

pub use mock_registry::MockRegistryStore;
