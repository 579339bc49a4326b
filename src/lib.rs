pub mod error;
pub mod inventory;
pub mod menu;
pub mod net;
pub mod store;

pub use error::InventoryError;
pub use inventory::{Inventory, LoadSummary, Persist};

#[cfg(test)]
mod test;
