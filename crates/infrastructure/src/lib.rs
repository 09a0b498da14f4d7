//! Registry DNS Infrastructure Layer
pub mod dns;
pub mod registry;
