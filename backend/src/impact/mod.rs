//! Business impact breakdown
//!
//! Line items of estimated financial impact and each item's share of the
//! total.
//!
//! CRITICAL: All money values are i64 (cents)

use serde::{Deserialize, Serialize};

/// One source of financial impact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactItem {
    pub category: String,
    /// Cents
    pub amount: i64,
    pub description: String,
}

/// An item with its share of the breakdown total
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactLine<'a> {
    #[serde(flatten)]
    pub item: &'a ImpactItem,
    /// Percentage of the total, 0.0 when the total is zero
    pub share_pct: f64,
}

/// Ordered impact line items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactBreakdown {
    items: Vec<ImpactItem>,
}

impl ImpactBreakdown {
    pub fn new(items: Vec<ImpactItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ImpactItem] {
        &self.items
    }

    /// Sum of all item amounts
    pub fn total(&self) -> i64 {
        self.items.iter().map(|i| i.amount).sum()
    }

    /// Items in order with their percentage of the total
    pub fn lines(&self) -> Vec<ImpactLine<'_>> {
        let total = self.total();
        self.items
            .iter()
            .map(|item| ImpactLine {
                item,
                share_pct: if total == 0 {
                    0.0
                } else {
                    item.amount as f64 / total as f64 * 100.0
                },
            })
            .collect()
    }

    /// Item with the largest amount; the first wins ties
    pub fn largest(&self) -> Option<&ImpactItem> {
        self.items
            .iter()
            .reduce(|best, item| if item.amount > best.amount { item } else { best })
    }
}
