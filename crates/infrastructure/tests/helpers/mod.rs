#![allow(dead_code)]

mod registry_fixture;

pub use registry_fixture::RegistryFixture;
