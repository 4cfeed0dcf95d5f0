//! Integration tests for the full pipeline.
//!
//! Tests: Form → Record Store → Key/Value Store → Derived Views
//!
//! Verifies:
//! - Mutations are persisted and observed by the very next read
//! - Sale values are snapshots taken at save time
//! - Dangling supplier references degrade to a sentinel, never an error

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use adegamax_core::RecordId;
    use adegamax_inventory::SUPPLIER_NOT_FOUND;
    use adegamax_parties::SupplierFields;
    use adegamax_products::{ProductForm, ProductStatus, format_amount};

    use crate::persistence::{JsonFileStore, KeyValueStore, keys};
    use crate::service::InventoryService;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn setup(dir: &std::path::Path) -> InventoryService<JsonFileStore> {
        let store = Arc::new(JsonFileStore::open(dir).unwrap());
        InventoryService::open(store, false)
            .unwrap()
            .with_today(today)
    }

    fn form(name: &str, code: &str, category: &str, supplier: RecordId) -> ProductForm {
        ProductForm {
            name: name.to_string(),
            code: code.to_string(),
            category: category.to_string(),
            stock_level: "10".to_string(),
            minimum_stock: "2".to_string(),
            purchase_value: "8.50".to_string(),
            profit_margin: "35".to_string(),
            expiration_date: "2026-01-01".to_string(),
            supplier_id: supplier.to_string(),
            status: ProductStatus::Active,
        }
    }

    #[test]
    fn crud_round_trip_through_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut service = setup(dir.path());

        let supplier = service
            .create_supplier(SupplierFields {
                name: "Craft Brewery".to_string(),
                ..SupplierFields::default()
            })
            .unwrap();
        let lager = service
            .submit_new_product(&form("Lager", "CP002", "Beer", supplier.id_typed()))
            .unwrap();
        let stout = service
            .submit_new_product(&form("Stout", "CP003", "Beer", supplier.id_typed()))
            .unwrap();
        assert_ne!(lager.id_typed(), stout.id_typed());
        assert_eq!(lager.sale_value(), Decimal::new(11475, 3));
        assert_eq!(format_amount(lager.sale_value()), "11.48");

        let mut edit = ProductForm::from_product(&lager);
        edit.stock_level = "1".to_string();
        service.submit_product_edit(lager.id_typed(), &edit).unwrap();

        let low: Vec<RecordId> = service.low_stock().iter().map(|p| p.id_typed()).collect();
        assert_eq!(low, vec![lager.id_typed()]);

        // A fresh service over the same directory sees the same state.
        let reopened = setup(dir.path());
        assert_eq!(reopened.products(), service.products());
        assert_eq!(reopened.suppliers(), service.suppliers());

        let raw = JsonFileStore::open(dir.path())
            .unwrap()
            .get(keys::PRODUCTS)
            .unwrap()
            .unwrap();
        assert_eq!(raw[0]["stockLevel"], 1);
    }

    #[test]
    fn sale_value_is_a_snapshot_until_resaved() {
        let dir = tempfile::tempdir().unwrap();
        let mut service = setup(dir.path());

        let product = service
            .submit_new_product(&form("Lager", "CP002", "Beer", RecordId::new(1)))
            .unwrap();

        // A form edited but not yet submitted changes nothing stored.
        let mut edit = ProductForm::from_product(&product);
        edit.purchase_value = "10".to_string();
        assert_eq!(edit.sale_value_preview(), Some(Decimal::new(135, 1)));
        assert_eq!(
            service.product(product.id_typed()).unwrap().sale_value(),
            Decimal::new(11475, 3)
        );

        let saved = service.submit_product_edit(product.id_typed(), &edit).unwrap();
        assert_eq!(saved.sale_value(), Decimal::new(135, 1));
    }

    #[test]
    fn supplier_delete_does_not_cascade() {
        let dir = tempfile::tempdir().unwrap();
        let mut service = setup(dir.path());

        let supplier = service
            .create_supplier(SupplierFields {
                name: "Premium Winery".to_string(),
                ..SupplierFields::default()
            })
            .unwrap();
        let wine = service
            .submit_new_product(&form("Cabernet", "VT001", "Wine", supplier.id_typed()))
            .unwrap();
        assert_eq!(service.supplier_name(wine.supplier_id()), "Premium Winery");

        service.delete_supplier(supplier.id_typed()).unwrap();

        assert_eq!(service.products().len(), 1);
        assert_eq!(service.supplier_name(wine.supplier_id()), SUPPLIER_NOT_FOUND);
        assert!(service.delete_supplier(supplier.id_typed()).unwrap_err().is_not_found());
    }

    #[test]
    fn category_report_follows_first_appearance() {
        let dir = tempfile::tempdir().unwrap();
        let mut service = setup(dir.path());
        let supplier = RecordId::new(1);

        service.submit_new_product(&form("Red", "W1", "Wine", supplier)).unwrap();
        service.submit_new_product(&form("Lager", "B1", "Beer", supplier)).unwrap();
        service.submit_new_product(&form("White", "W2", "Wine", supplier)).unwrap();

        let report = service.category_report();
        let entries: Vec<(&str, usize)> = report.iter().collect();
        assert_eq!(entries, vec![("Wine", 2), ("Beer", 1)]);
    }
}
