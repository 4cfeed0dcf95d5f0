//! Aggregate report figures.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use adegamax_core::RecordId;
use adegamax_parties::Supplier;
use adegamax_products::Product;

use crate::views::{low_stock, near_expiry};

/// Product count per category, in order of each category's first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryReport {
    entries: Vec<(String, usize)>,
}

impl CategoryReport {
    pub fn get(&self, category: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(c, n)| (c.as_str(), *n))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Group products by category label (exact match).
pub fn category_report(products: &[Product]) -> CategoryReport {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<(String, usize)> = Vec::new();

    for product in products {
        match index.get(product.category()) {
            Some(&pos) => entries[pos].1 += 1,
            None => {
                index.insert(product.category(), entries.len());
                entries.push((product.category().to_string(), 1));
            }
        }
    }

    CategoryReport { entries }
}

/// Stock valuation at cost and at sale price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ValuationReport {
    /// Σ purchase value × stock level.
    pub total_purchase_value: Decimal,
    /// Σ sale value × stock level.
    pub total_sale_value: Decimal,
    /// Sale total minus purchase total.
    pub margin_value: Decimal,
}

pub fn valuation_report(products: &[Product]) -> ValuationReport {
    let total_purchase_value = products.iter().fold(Decimal::ZERO, |acc, p| {
        acc.saturating_add(p.purchase_value().saturating_mul(Decimal::from(p.stock_level())))
    });
    let total_sale_value = products.iter().fold(Decimal::ZERO, |acc, p| {
        acc.saturating_add(p.sale_value().saturating_mul(Decimal::from(p.stock_level())))
    });

    ValuationReport {
        total_purchase_value,
        total_sale_value,
        margin_value: total_sale_value.saturating_sub(total_purchase_value),
    }
}

/// Number of products referencing `supplier_id`.
pub fn supplier_product_count(products: &[Product], supplier_id: RecordId) -> usize {
    products
        .iter()
        .filter(|p| p.supplier_id() == supplier_id)
        .count()
}

/// Headline figures for the dashboard cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total_products: usize,
    pub low_stock: usize,
    pub near_expiry: usize,
    pub total_suppliers: usize,
}

impl DashboardSummary {
    pub fn compute(products: &[Product], suppliers: &[Supplier], today: NaiveDate) -> Self {
        Self {
            total_products: products.len(),
            low_stock: low_stock(products).len(),
            near_expiry: near_expiry(products, today).len(),
            total_suppliers: suppliers.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    #[test]
    fn category_report_counts_in_first_seen_order() {
        let products = vec![
            product(1, "Red", "W1", "Wine"),
            product(2, "Lager", "B1", "Beer"),
            product(3, "White", "W2", "Wine"),
        ];

        let report = category_report(&products);
        let entries: Vec<(&str, usize)> = report.iter().collect();
        assert_eq!(entries, vec![("Wine", 2), ("Beer", 1)]);
        assert_eq!(report.get("Wine"), Some(2));
        assert_eq!(report.get("Spirits"), None);
    }

    #[test]
    fn category_labels_are_case_sensitive() {
        let products = vec![product(1, "a", "1", "Wine"), product(2, "b", "2", "wine")];
        assert_eq!(category_report(&products).len(), 2);
    }

    #[test]
    fn empty_collection_yields_empty_reports() {
        assert!(category_report(&[]).is_empty());
        assert_eq!(valuation_report(&[]), ValuationReport::default());
    }

    #[test]
    fn valuation_sums_cost_and_sale_by_stock() {
        let products = vec![
            product_with(1, |f| {
                f.stock_level = 15;
                f.purchase_value = Decimal::new(4500, 2);
                f.profit_margin = Decimal::new(40, 0);
            }),
            product_with(2, |f| {
                f.stock_level = 5;
                f.purchase_value = Decimal::new(850, 2);
                f.profit_margin = Decimal::new(35, 0);
            }),
            product_with(3, |f| {
                f.stock_level = 3;
                f.purchase_value = Decimal::new(18000, 2);
                f.profit_margin = Decimal::new(50, 0);
            }),
        ];

        let report = valuation_report(&products);
        // 15*45 + 5*8.5 + 3*180
        assert_eq!(report.total_purchase_value, Decimal::new(12575, 1));
        // 15*63 + 5*11.475 + 3*270
        assert_eq!(report.total_sale_value, Decimal::new(1812375, 3));
        assert_eq!(report.margin_value, Decimal::new(554875, 3));
    }

    #[test]
    fn zero_stock_contributes_nothing() {
        let products = vec![product_with(1, |f| f.stock_level = 0)];
        let report = valuation_report(&products);
        assert!(report.total_purchase_value.is_zero());
        assert!(report.total_sale_value.is_zero());
    }

    #[test]
    fn supplier_product_count_counts_references() {
        let products = vec![
            product_with(1, |f| f.supplier_id = RecordId::new(1)),
            product_with(2, |f| f.supplier_id = RecordId::new(2)),
            product_with(3, |f| f.supplier_id = RecordId::new(1)),
        ];
        assert_eq!(supplier_product_count(&products, RecordId::new(1)), 2);
        assert_eq!(supplier_product_count(&products, RecordId::new(3)), 0);
    }

    #[test]
    fn dashboard_summary_counts_each_view() {
        let today = test_today();
        let products = vec![
            product_with(1, |f| {
                f.stock_level = 1;
                f.expiration_date = date(2025, 6, 10);
            }),
            product_with(2, |f| f.stock_level = 100),
        ];
        let suppliers = vec![supplier(1, "Winery")];

        let summary = DashboardSummary::compute(&products, &suppliers, today);
        assert_eq!(
            summary,
            DashboardSummary {
                total_products: 2,
                low_stock: 1,
                near_expiry: 1,
                total_suppliers: 1,
            }
        );
    }
}
