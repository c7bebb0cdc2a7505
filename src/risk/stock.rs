//! Spare-parts inventory rollups.

use crate::core::{PartStatus, SparePart};
use serde::Serialize;

/// Parts whose current stock is strictly below their minimum, in input order.
pub fn low_stock(parts: &[SparePart]) -> Vec<&SparePart> {
    parts.iter().filter(|p| p.is_below_minimum()).collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StockStatusCounts {
    pub approved: usize,
    pub pending: usize,
    pub rejected: usize,
}

impl StockStatusCounts {
    pub fn total(&self) -> usize {
        self.approved + self.pending + self.rejected
    }
}

pub fn stock_status_counts(parts: &[SparePart]) -> StockStatusCounts {
    parts
        .iter()
        .fold(StockStatusCounts::default(), |mut counts, part| {
            match part.status {
                PartStatus::Approved => counts.approved += 1,
                PartStatus::Pending => counts.pending += 1,
                PartStatus::Rejected => counts.rejected += 1,
            }
            counts
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::spare_part;

    #[test]
    fn low_stock_returns_only_parts_below_minimum() {
        let parts = vec![spare_part("SP-1", 2, 5), spare_part("SP-2", 10, 3)];
        let low = low_stock(&parts);
        assert_eq!(low.len(), 1);
        assert!(std::ptr::eq(low[0], &parts[0]));
    }

    #[test]
    fn low_stock_preserves_input_order() {
        let parts = vec![
            spare_part("SP-c", 0, 1),
            spare_part("SP-a", 9, 1),
            spare_part("SP-b", 1, 4),
            spare_part("SP-d", 4, 4),
        ];
        let ids: Vec<&str> = low_stock(&parts).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["SP-c", "SP-b"]);
    }

    #[test]
    fn status_counts_cover_all_statuses() {
        let parts = vec![
            spare_part("SP-1", 1, 1).with_status(PartStatus::Pending),
            spare_part("SP-2", 1, 1).with_status(PartStatus::Rejected),
            spare_part("SP-3", 1, 1),
            spare_part("SP-4", 1, 1).with_status(PartStatus::Pending),
        ];
        let counts = stock_status_counts(&parts);
        assert_eq!(
            counts,
            StockStatusCounts {
                approved: 1,
                pending: 2,
                rejected: 1
            }
        );
        assert_eq!(counts.total(), 4);
    }
}
