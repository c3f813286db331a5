use crate::utils::error::{Result, WarehouseError};
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use std::fmt::Write;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// The inventory file is opened later by `TomlInventory::from_file`; this only
/// catches paths that can never be opened.
pub fn validate_inventory_path(path: &str) -> Result<()> {
    let reason = if path.trim().is_empty() {
        Some("Inventory path cannot be empty; omit --inventory to use the sample inventory")
    } else if path.contains('\0') {
        Some("Inventory path contains NUL bytes")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(WarehouseError::InvalidConfigValueError {
            field: "inventory".to_string(),
            value: path.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

pub fn validate_top_count(top: usize) -> Result<()> {
    if top == 0 {
        return Err(WarehouseError::InvalidConfigValueError {
            field: "top".to_string(),
            value: top.to_string(),
            reason: "The top report must list at least one pallet".to_string(),
        });
    }
    Ok(())
}

/// Rejects formats chrono cannot parse, and formats it parses but cannot render
/// for a bare date (time or offset specifiers such as `%H` or `%z`).
pub fn validate_date_format(format: &str) -> Result<()> {
    let invalid = |reason: &str| WarehouseError::InvalidConfigValueError {
        field: "date_format".to_string(),
        value: format.to_string(),
        reason: reason.to_string(),
    };

    if format.trim().is_empty() {
        return Err(invalid("Date format cannot be empty or whitespace-only"));
    }

    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(invalid("Invalid strftime specifier"));
    }

    let mut rendered = String::new();
    if write!(rendered, "{}", NaiveDate::MIN.format(format)).is_err() {
        return Err(invalid(
            "Format needs time or timezone fields, but reports only carry dates",
        ));
    }
    Ok(())
}
