//! Load the configured inventory state and log a snapshot of every derived
//! view: dashboard cards, alerts, and the report figures.

use adegamax_infra::{DynInventoryService, InfraConfig};
use adegamax_products::format_amount;

fn main() -> anyhow::Result<()> {
    adegamax_observability::init();

    let config = InfraConfig::from_env();
    tracing::info!(?config, "loading inventory");
    let service = DynInventoryService::from_config(&config)?;

    let settings = service.system_settings();
    let dashboard = service.dashboard();
    tracing::info!(
        system = %settings.system_name,
        description = %settings.system_description,
        total_products = dashboard.total_products,
        low_stock = dashboard.low_stock,
        near_expiry = dashboard.near_expiry,
        total_suppliers = dashboard.total_suppliers,
        "dashboard"
    );

    let alerts = service.alerts();
    tracing::info!(badge = alerts.count(), "alerts");
    for product in &alerts.low_stock {
        tracing::warn!(
            code = product.code(),
            stock = product.stock_level(),
            minimum = product.minimum_stock(),
            "low stock"
        );
    }
    for product in &alerts.near_expiry {
        tracing::warn!(
            code = product.code(),
            expires = %product.expiration_date(),
            "near expiry"
        );
    }

    for product in service.products() {
        tracing::info!(
            code = product.code(),
            name = product.name(),
            supplier = service.supplier_name(product.supplier_id()),
            purchase = %format_amount(product.purchase_value()),
            sale = %format_amount(product.sale_value()),
            "product"
        );
    }

    for (category, count) in service.category_report().iter() {
        tracing::info!(category, count, "category");
    }

    let valuation = service.valuation_report();
    tracing::info!(
        purchase = %format_amount(valuation.total_purchase_value),
        sale = %format_amount(valuation.total_sale_value),
        margin = %format_amount(valuation.margin_value),
        "valuation"
    );

    Ok(())
}
