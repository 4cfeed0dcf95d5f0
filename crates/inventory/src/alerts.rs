//! Alert aggregation for the notification badge and alert panel.

use chrono::NaiveDate;

use adegamax_products::Product;

use crate::views::{low_stock, near_expiry};

/// Low-stock and near-expiry sets, each in store order.
///
/// [`count`](Self::count) is the number of alert *conditions*, not of
/// distinct products: a product that is both low on stock and near expiry
/// counts twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryAlerts<'a> {
    pub low_stock: Vec<&'a Product>,
    pub near_expiry: Vec<&'a Product>,
}

impl<'a> InventoryAlerts<'a> {
    pub fn collect(products: &'a [Product], today: NaiveDate) -> Self {
        Self {
            low_stock: low_stock(products),
            near_expiry: near_expiry(products, today),
        }
    }

    pub fn count(&self) -> usize {
        self.low_stock.len() + self.near_expiry.len()
    }

    pub fn has_alerts(&self) -> bool {
        self.count() > 0
    }
}
