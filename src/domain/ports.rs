use crate::domain::model::{Dimensions, Pallet};
use crate::utils::error::Result;

/// Anything that occupies space on the warehouse floor.
pub trait StorageItem {
    fn id(&self) -> &str;
    fn dimensions(&self) -> Dimensions;
    fn weight(&self) -> f64;

    fn volume(&self) -> f64 {
        self.dimensions().volume()
    }
}

/// Supplies the pallets a report runs over, in their original order.
pub trait InventorySource {
    fn load(&self) -> Result<Vec<Pallet>>;
}
