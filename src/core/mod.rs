pub mod billing;
pub mod codec;
pub mod repository;

pub use crate::domain::model::{Boat, Location, LocationDetail};
pub use crate::domain::ports::BoatStore;
pub use crate::utils::error::Result;
