use crate::core::{InventorySource, Pallet, StorageBox};
use crate::utils::error::Result;
use chrono::NaiveDate;

/// Built-in reference inventory: three pallets, five boxes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleInventory;

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

impl InventorySource for SampleInventory {
    fn load(&self) -> Result<Vec<Pallet>> {
        let mut pallet1 = Pallet::new("Pallet1", 1.2, 1.5, 1.0);
        pallet1.add_box(StorageBox::new("Box1", 0.5, 0.5, 0.5, 10.0, date(2024, 12, 1), None))?;
        pallet1.add_box(StorageBox::new("Box2", 0.6, 0.4, 0.5, 8.0, None, date(2024, 9, 1)))?;

        let mut pallet2 = Pallet::new("Pallet2", 1.5, 1.2, 1.0);
        pallet2.add_box(StorageBox::new("Box3", 0.7, 0.6, 0.5, 12.0, None, date(2024, 8, 15)))?;
        pallet2.add_box(StorageBox::new("Box4", 0.4, 0.3, 0.5, 5.0, date(2024, 10, 15), None))?;

        let mut pallet3 = Pallet::new("Pallet3", 1.3, 1.2, 1.1);
        pallet3.add_box(StorageBox::new("Box5", 0.6, 0.6, 0.6, 15.0, None, date(2024, 7, 1)))?;

        Ok(vec![pallet1, pallet2, pallet3])
    }
}
