use crate::domain::ports::StorageItem;
use crate::utils::error::{Result, WarehouseError};
use chrono::{Days, NaiveDate};

/// Days added to a production date when a box has no explicit expiration.
pub const SHELF_LIFE_DAYS: u64 = 100;

/// Weight of an empty pallet.
pub const PALLET_TARE_WEIGHT: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    pub fn volume(&self) -> f64 {
        self.width * self.height * self.depth
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorageBox {
    id: String,
    dimensions: Dimensions,
    weight: f64,
    production_date: Option<NaiveDate>,
    expiration_date: Option<NaiveDate>,
}

impl StorageBox {
    /// An explicit expiration date always wins; otherwise it is derived from the
    /// production date. A derived date past `NaiveDate::MAX` is left absent.
    pub fn new(
        id: impl Into<String>,
        width: f64,
        height: f64,
        depth: f64,
        weight: f64,
        expiration_date: Option<NaiveDate>,
        production_date: Option<NaiveDate>,
    ) -> Self {
        let expiration_date = expiration_date.or_else(|| {
            production_date.and_then(|produced| produced.checked_add_days(Days::new(SHELF_LIFE_DAYS)))
        });

        Self {
            id: id.into(),
            dimensions: Dimensions::new(width, height, depth),
            weight,
            production_date,
            expiration_date,
        }
    }

    pub fn production_date(&self) -> Option<NaiveDate> {
        self.production_date
    }

    pub fn expiration_date(&self) -> Option<NaiveDate> {
        self.expiration_date
    }
}

impl StorageItem for StorageBox {
    fn id(&self) -> &str {
        &self.id
    }

    fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    fn weight(&self) -> f64 {
        self.weight
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pallet {
    id: String,
    dimensions: Dimensions,
    weight: f64,
    boxes: Vec<StorageBox>,
}

impl Pallet {
    pub fn new(id: impl Into<String>, width: f64, height: f64, depth: f64) -> Self {
        Self {
            id: id.into(),
            dimensions: Dimensions::new(width, height, depth),
            weight: PALLET_TARE_WEIGHT,
            boxes: Vec::new(),
        }
    }

    /// Only width and depth are checked: boxes may stack above the pallet's height.
    pub fn add_box(&mut self, storage_box: StorageBox) -> Result<()> {
        let fits = storage_box.dimensions.width <= self.dimensions.width
            && storage_box.dimensions.depth <= self.dimensions.depth;

        if !fits {
            tracing::debug!(
                pallet = %self.id,
                box_id = %storage_box.id,
                "rejected box wider or deeper than pallet"
            );
            return Err(WarehouseError::ValidationError {
                message: format!(
                    "box '{}' ({} x {}) exceeds pallet '{}' width/depth ({} x {})",
                    storage_box.id,
                    storage_box.dimensions.width,
                    storage_box.dimensions.depth,
                    self.id,
                    self.dimensions.width,
                    self.dimensions.depth
                ),
            });
        }

        tracing::debug!(pallet = %self.id, box_id = %storage_box.id, "box added");
        self.weight += storage_box.weight;
        self.boxes.push(storage_box);
        Ok(())
    }

    pub fn boxes(&self) -> &[StorageBox] {
        &self.boxes
    }

    /// Earliest expiration among the boxes; boxes without one are ignored.
    pub fn expiration_date(&self) -> Option<NaiveDate> {
        self.boxes
            .iter()
            .filter_map(StorageBox::expiration_date)
            .min()
    }

    pub fn shell_volume(&self) -> f64 {
        self.dimensions.volume()
    }
}

impl StorageItem for Pallet {
    fn id(&self) -> &str {
        &self.id
    }

    fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn volume(&self) -> f64 {
        self.shell_volume() + self.boxes.iter().map(StorageItem::volume).sum::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_box_derives_expiration_from_production_date() {
        let storage_box = StorageBox::new("B", 0.5, 0.5, 0.5, 1.0, None, Some(date(2024, 9, 1)));
        assert_eq!(storage_box.expiration_date(), Some(date(2024, 12, 10)));
        assert_eq!(storage_box.production_date(), Some(date(2024, 9, 1)));
    }

    #[test]
    fn test_box_explicit_expiration_wins() {
        let storage_box = StorageBox::new(
            "B",
            0.5,
            0.5,
            0.5,
            1.0,
            Some(date(2025, 1, 1)),
            Some(date(2024, 9, 1)),
        );
        assert_eq!(storage_box.expiration_date(), Some(date(2025, 1, 1)));
    }

    #[test]
    fn test_box_without_dates_has_no_expiration() {
        let storage_box = StorageBox::new("B", 0.5, 0.5, 0.5, 1.0, None, None);
        assert_eq!(storage_box.expiration_date(), None);
        assert_eq!(storage_box.production_date(), None);
    }

    #[test]
    fn test_box_derivation_overflow_leaves_expiration_absent() {
        let storage_box = StorageBox::new("B", 1.0, 1.0, 1.0, 1.0, None, Some(NaiveDate::MAX));
        assert_eq!(storage_box.expiration_date(), None);
    }

    #[test]
    fn test_empty_pallet() {
        let pallet = Pallet::new("P", 1.2, 1.5, 1.0);
        assert_eq!(pallet.expiration_date(), None);
        assert!(close(pallet.volume(), 1.8));
        assert!(close(pallet.volume(), pallet.shell_volume()));
        assert_eq!(pallet.weight(), PALLET_TARE_WEIGHT);
        assert!(pallet.boxes().is_empty());
    }

    #[test]
    fn test_add_box_rejects_oversized_box() {
        let mut pallet = Pallet::new("P", 1.0, 1.0, 1.0);
        let too_wide = StorageBox::new("wide", 1.1, 0.5, 0.5, 5.0, None, None);
        let too_deep = StorageBox::new("deep", 0.5, 0.5, 1.1, 5.0, None, None);

        assert!(matches!(
            pallet.add_box(too_wide),
            Err(WarehouseError::ValidationError { .. })
        ));
        assert!(matches!(
            pallet.add_box(too_deep),
            Err(WarehouseError::ValidationError { .. })
        ));
        assert_eq!(pallet.weight(), PALLET_TARE_WEIGHT);
        assert!(pallet.boxes().is_empty());
        assert!(close(pallet.volume(), 1.0));
    }

    #[test]
    fn test_add_box_ignores_height() {
        let mut pallet = Pallet::new("P", 1.0, 0.2, 1.0);
        let tall = StorageBox::new("tall", 1.0, 3.0, 1.0, 2.0, None, None);
        assert!(pallet.add_box(tall).is_ok());
        assert_eq!(pallet.boxes().len(), 1);
    }

    #[test]
    fn test_weight_and_volume_accumulate() -> Result<()> {
        let mut pallet = Pallet::new("P", 1.2, 1.5, 1.0);
        pallet.add_box(StorageBox::new("B1", 0.5, 0.5, 0.5, 10.0, None, None))?;
        pallet.add_box(StorageBox::new("B2", 0.6, 0.4, 0.5, 8.0, None, None))?;
        // duplicate ids are allowed
        pallet.add_box(StorageBox::new("B2", 0.6, 0.4, 0.5, 8.0, None, None))?;

        assert!(close(pallet.weight(), 30.0 + 10.0 + 8.0 + 8.0));
        assert!(close(pallet.volume(), 1.8 + 0.125 + 0.12 + 0.12));
        let ids: Vec<&str> = pallet.boxes().iter().map(|b| b.id()).collect();
        assert_eq!(ids, vec!["B1", "B2", "B2"]);
        Ok(())
    }

    #[test]
    fn test_pallet_expiration_is_earliest_box_expiration() -> Result<()> {
        let mut pallet = Pallet::new("P", 2.0, 2.0, 2.0);
        pallet.add_box(StorageBox::new("B1", 1.0, 1.0, 1.0, 1.0, Some(date(2024, 12, 1)), None))?;
        pallet.add_box(StorageBox::new("B2", 1.0, 1.0, 1.0, 1.0, None, Some(date(2024, 8, 1))))?;
        pallet.add_box(StorageBox::new("B3", 1.0, 1.0, 1.0, 1.0, None, None))?;

        assert_eq!(pallet.expiration_date(), Some(date(2024, 11, 9)));
        Ok(())
    }

    #[test]
    fn test_pallet_with_only_undated_boxes_has_no_expiration() -> Result<()> {
        let mut pallet = Pallet::new("P", 2.0, 2.0, 2.0);
        pallet.add_box(StorageBox::new("B1", 1.0, 1.0, 1.0, 1.0, None, None))?;
        assert_eq!(pallet.expiration_date(), None);
        Ok(())
    }

    #[test]
    fn test_volume_dispatches_through_storage_item() -> Result<()> {
        let mut pallet = Pallet::new("P", 1.0, 1.0, 1.0);
        pallet.add_box(StorageBox::new("B", 1.0, 1.0, 1.0, 1.0, None, None))?;

        let item: &dyn StorageItem = &pallet;
        assert!(close(item.volume(), 2.0));
        assert!(close(item.dimensions().volume(), 1.0));
        Ok(())
    }
}
