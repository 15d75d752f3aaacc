//! Financial impact figures for the business impact view

use crate::impact::{ImpactBreakdown, ImpactItem};

fn item(category: &str, dollars: i64, description: &str) -> ImpactItem {
    ImpactItem {
        category: category.to_string(),
        amount: dollars * 100,
        description: description.to_string(),
    }
}

pub fn demo_impact_breakdown() -> ImpactBreakdown {
    ImpactBreakdown::new(vec![
        item(
            "Direct Recovery",
            1_250_000,
            "Funds recovered from liable parties",
        ),
        item(
            "Leakage Prevention",
            875_000,
            "Claims correctly processed, avoiding overpayment",
        ),
        item(
            "Operational Savings",
            320_000,
            "Reduced manual review and processing costs",
        ),
        item(
            "Compliance Value",
            180_000,
            "Risk mitigation and regulatory compliance",
        ),
    ])
}
