use crate::domain::model::Pallet;
use crate::domain::ports::StorageItem;
use chrono::NaiveDate;
use serde::Serialize;

pub const DEFAULT_TOP_LIMIT: usize = 3;

/// Display-ready snapshot of a pallet with a known expiration date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PalletSummary {
    pub id: String,
    pub expiration_date: NaiveDate,
    pub weight: f64,
    pub volume: f64,
}

impl PalletSummary {
    fn from_pallet(pallet: &Pallet) -> Option<Self> {
        pallet.expiration_date().map(|expiration_date| Self {
            id: pallet.id().to_string(),
            expiration_date,
            weight: pallet.weight(),
            volume: pallet.volume(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpirationGroup {
    pub expiration_date: NaiveDate,
    pub pallets: Vec<PalletSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSet {
    pub grouped: Vec<ExpirationGroup>,
    pub top: Vec<PalletSummary>,
}

impl ReportSet {
    pub fn build(pallets: &[Pallet], top_limit: usize) -> Self {
        Self {
            grouped: group_by_expiration(pallets),
            top: top_by_expiration(pallets, top_limit),
        }
    }
}

fn dated_summaries(pallets: &[Pallet]) -> Vec<PalletSummary> {
    pallets.iter().filter_map(PalletSummary::from_pallet).collect()
}

/// Pallets with an expiration date, grouped by that date in ascending order.
/// Within a group pallets are ordered by weight, ascending.
pub fn group_by_expiration(pallets: &[Pallet]) -> Vec<ExpirationGroup> {
    let mut summaries = dated_summaries(pallets);
    summaries.sort_by(|a, b| {
        a.expiration_date
            .cmp(&b.expiration_date)
            .then_with(|| a.weight.total_cmp(&b.weight))
    });

    let mut groups: Vec<ExpirationGroup> = Vec::new();
    for summary in summaries {
        match groups.last_mut() {
            Some(group) if group.expiration_date == summary.expiration_date => {
                group.pallets.push(summary);
            }
            _ => groups.push(ExpirationGroup {
                expiration_date: summary.expiration_date,
                pallets: vec![summary],
            }),
        }
    }
    groups
}

/// The `limit` pallets expiring last, ordered by volume ascending.
/// Date ties at the cutoff keep the input order (all sorts here are stable).
pub fn top_by_expiration(pallets: &[Pallet], limit: usize) -> Vec<PalletSummary> {
    let mut summaries = dated_summaries(pallets);
    summaries.sort_by(|a, b| b.expiration_date.cmp(&a.expiration_date));
    summaries.truncate(limit);
    summaries.sort_by(|a, b| a.volume.total_cmp(&b.volume));
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::StorageBox;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Pallet of the given height with one box of the given weight expiring on `expires`.
    fn pallet(id: &str, height: f64, box_weight: f64, expires: Option<NaiveDate>) -> Pallet {
        let mut pallet = Pallet::new(id, 1.0, height, 1.0);
        pallet
            .add_box(StorageBox::new(
                format!("{}-box", id),
                0.5,
                0.5,
                0.5,
                box_weight,
                expires,
                None,
            ))
            .unwrap();
        pallet
    }

    fn ids(summaries: &[PalletSummary]) -> Vec<&str> {
        summaries.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_grouping_orders_dates_then_weight() {
        let pallets = vec![
            pallet("heavy", 1.0, 20.0, Some(date(2024, 5, 1))),
            pallet("late", 1.0, 1.0, Some(date(2024, 6, 1))),
            pallet("undated", 1.0, 1.0, None),
            pallet("light", 1.0, 5.0, Some(date(2024, 5, 1))),
        ];

        let groups = group_by_expiration(&pallets);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].expiration_date, date(2024, 5, 1));
        assert_eq!(ids(&groups[0].pallets), vec!["light", "heavy"]);
        assert_eq!(groups[1].expiration_date, date(2024, 6, 1));
        assert_eq!(ids(&groups[1].pallets), vec!["late"]);
    }

    #[test]
    fn test_grouping_equal_weights_keep_input_order() {
        let pallets = vec![
            pallet("first", 1.0, 5.0, Some(date(2024, 5, 1))),
            pallet("second", 1.0, 5.0, Some(date(2024, 5, 1))),
        ];

        let groups = group_by_expiration(&pallets);
        assert_eq!(ids(&groups[0].pallets), vec!["first", "second"]);
    }

    #[test]
    fn test_top_takes_latest_and_sorts_by_volume() {
        let pallets = vec![
            pallet("oldest", 1.0, 1.0, Some(date(2024, 1, 1))),
            pallet("big", 3.0, 1.0, Some(date(2024, 4, 1))),
            pallet("small", 1.0, 1.0, Some(date(2024, 3, 1))),
            pallet("medium", 2.0, 1.0, Some(date(2024, 2, 1))),
            pallet("undated", 0.5, 1.0, None),
        ];

        let top = top_by_expiration(&pallets, DEFAULT_TOP_LIMIT);
        assert_eq!(ids(&top), vec!["small", "medium", "big"]);
    }

    #[test]
    fn test_top_cutoff_ties_keep_input_order() {
        let tied = Some(date(2024, 3, 1));
        let pallets = vec![
            pallet("a", 4.0, 1.0, tied),
            pallet("b", 3.0, 1.0, tied),
            pallet("c", 2.0, 1.0, tied),
            pallet("d", 1.0, 1.0, tied),
        ];

        let top = top_by_expiration(&pallets, 3);
        assert_eq!(ids(&top), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_top_with_fewer_candidates_than_limit() {
        let pallets = vec![
            pallet("only", 1.0, 1.0, Some(date(2024, 3, 1))),
            pallet("undated", 1.0, 1.0, None),
        ];

        assert_eq!(ids(&top_by_expiration(&pallets, 3)), vec!["only"]);
        assert!(top_by_expiration(&[], 3).is_empty());
        assert!(group_by_expiration(&[]).is_empty());
    }

    #[test]
    fn test_reports_do_not_touch_input() {
        let pallets = vec![pallet("p", 1.0, 1.0, Some(date(2024, 3, 1)))];
        let before = pallets.clone();
        let _ = ReportSet::build(&pallets, 3);
        assert_eq!(pallets, before);
    }
}
