//! Depot layer
//! - types.rs: Wire types for the paged package listing (PackagePage, PackageRecord)
//! - error.rs: DepotError
//! - registry.rs: Depot trait definition
//! - client.rs: HTTP client walking the paged listing

pub mod client;
pub mod error;
pub mod registry;
pub mod types;

pub use client::DepotClient;
pub use error::DepotError;
pub use registry::Depot;
pub use types::{PackagePage, PackageRecord};
