pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::FileStore;
pub use crate::app::session::Session;
pub use crate::config::toml_config::MarinaConfig;
pub use crate::core::billing::{BillingEngine, RateTable};
pub use crate::core::repository::{LoadReport, Repository, MAX_BOATS};
pub use crate::domain::model::{Boat, Location, LocationDetail};
pub use crate::domain::ports::BoatStore;
pub use crate::utils::error::{MarinaError, Result};
