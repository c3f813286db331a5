pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{inventory::TomlInventory, sample::SampleInventory};
pub use crate::core::{
    engine::ReportEngine,
    render::{OutputFormat, RenderOptions},
    report::{group_by_expiration, top_by_expiration, ExpirationGroup, PalletSummary, ReportSet},
};
pub use crate::domain::model::{Dimensions, Pallet, StorageBox};
pub use crate::domain::ports::{InventorySource, StorageItem};
pub use crate::utils::error::{Result, WarehouseError};
