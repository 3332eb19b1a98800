pub mod cli;
pub mod config;
pub mod depot;
pub mod log;

pub use depot::{Depot, DepotClient, DepotError, PackagePage, PackageRecord};
