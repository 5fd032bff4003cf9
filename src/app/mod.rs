pub mod inventory;
pub mod session;
