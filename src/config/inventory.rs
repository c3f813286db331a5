use crate::core::{InventorySource, Pallet, StorageBox};
use crate::utils::error::{Result, WarehouseError};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inventory described in TOML:
///
/// ```toml
/// [[pallets]]
/// id = "Pallet1"
/// width = 1.2
/// height = 1.5
/// depth = 1.0
///
/// [[pallets.boxes]]
/// id = "Box1"
/// width = 0.5
/// height = 0.5
/// depth = 0.5
/// weight = 10.0
/// expiration_date = "2024-12-01"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct TomlInventory {
    #[serde(default)]
    pub pallets: Vec<PalletConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PalletConfig {
    pub id: String,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    #[serde(default)]
    pub boxes: Vec<BoxConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoxConfig {
    pub id: String,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub weight: f64,
    pub expiration_date: Option<String>,
    pub production_date: Option<String>,
}

impl TomlInventory {
    /// Reads and parses an inventory file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(WarehouseError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| WarehouseError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

fn parse_date(box_id: &str, field: &str, value: Option<&str>) -> Result<Option<NaiveDate>> {
    value
        .map(|raw| {
            NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| WarehouseError::ConfigError {
                message: format!("box '{}': invalid {} '{}': {}", box_id, field, raw, e),
            })
        })
        .transpose()
}

impl BoxConfig {
    fn to_box(&self) -> Result<StorageBox> {
        let expiration_date =
            parse_date(&self.id, "expiration_date", self.expiration_date.as_deref())?;
        let production_date =
            parse_date(&self.id, "production_date", self.production_date.as_deref())?;

        Ok(StorageBox::new(
            self.id.clone(),
            self.width,
            self.height,
            self.depth,
            self.weight,
            expiration_date,
            production_date,
        ))
    }
}

impl InventorySource for TomlInventory {
    fn load(&self) -> Result<Vec<Pallet>> {
        self.pallets
            .iter()
            .map(|config| {
                let mut pallet = Pallet::new(config.id.clone(), config.width, config.height, config.depth);
                for box_config in &config.boxes {
                    pallet.add_box(box_config.to_box()?)?;
                }
                Ok(pallet)
            })
            .collect()
    }
}
