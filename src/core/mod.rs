pub mod engine;
pub mod render;
pub mod report;

pub use crate::domain::model::{Dimensions, Pallet, StorageBox};
pub use crate::domain::ports::{InventorySource, StorageItem};
pub use crate::utils::error::Result;
