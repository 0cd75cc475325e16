//! Purchase business logic - Handles purchase orders and their line items.
//!
//! A purchase is created together with its line items in a single database
//! transaction so an order never exists half-recorded. Line items are
//! immutable after creation: corrections are made by deleting and re-entering
//! the purchase, which keeps the purchased-total arithmetic trustworthy.

use crate::{
    entities::{Purchase, PurchaseItem, purchase, purchase_item},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};

/// Fields required to create a new purchase order.
#[derive(Debug, Clone)]
pub struct NewPurchase {
    /// Date the order was placed
    pub date_ordered: NaiveDate,
    /// Marketplace the order was placed on
    pub marketplace: Option<String>,
    /// URL of the order page
    pub order_url: Option<String>,
    /// Order subtotal before tax
    pub subtotal: f64,
    /// Tax charged on the order
    pub tax: f64,
    /// Free-form notes
    pub notes: Option<String>,
    /// Line items; at least one is required
    pub items: Vec<NewPurchaseItem>,
}

/// Fields required to create one line item within a purchase.
#[derive(Debug, Clone)]
pub struct NewPurchaseItem {
    /// Name of the filament bought on this line; must exist in the catalog
    pub filament_name: String,
    /// Seller the item shipped from
    pub seller: Option<String>,
    /// Date the item was ordered
    pub date_ordered: NaiveDate,
    /// Date the item arrived, if it has
    pub date_received: Option<NaiveDate>,
    /// Number of spools bought on this line; must be positive
    pub spools: i32,
    /// Nominal weight per spool in kilograms; must be finite and positive
    pub kg_per_spool: f64,
    /// Price per spool; must be finite and non-negative
    pub unit_price: f64,
    /// Storage location
    pub shelf: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
}

/// Creates a purchase order with its line items atomically.
///
/// Validates the order totals and every line item (positive spool count,
/// finite positive per-spool weight, non-negative unit price, filament exists
/// in the catalog) before inserting the purchase and all items inside one
/// database transaction.
pub async fn create_purchase(
    db: &DatabaseConnection,
    new_purchase: NewPurchase,
) -> Result<(purchase::Model, Vec<purchase_item::Model>)> {
    if new_purchase.items.is_empty() {
        return Err(Error::Config {
            message: "A purchase must contain at least one line item".to_string(),
        });
    }
    if !new_purchase.subtotal.is_finite() || new_purchase.subtotal < 0.0 {
        return Err(Error::InvalidPrice {
            price: new_purchase.subtotal,
        });
    }
    if !new_purchase.tax.is_finite() || new_purchase.tax < 0.0 {
        return Err(Error::InvalidPrice {
            price: new_purchase.tax,
        });
    }

    for item in &new_purchase.items {
        if item.spools <= 0 {
            return Err(Error::InvalidSpoolCount { count: item.spools });
        }
        if !item.kg_per_spool.is_finite() || item.kg_per_spool <= 0.0 {
            return Err(Error::InvalidWeight {
                kg: item.kg_per_spool,
            });
        }
        if !item.unit_price.is_finite() || item.unit_price < 0.0 {
            return Err(Error::InvalidPrice {
                price: item.unit_price,
            });
        }
        if crate::core::filament::get_filament_by_name(db, &item.filament_name)
            .await?
            .is_none()
        {
            return Err(Error::FilamentNotFound {
                name: item.filament_name.clone(),
            });
        }
    }

    // Use a transaction so the order and its items land together
    let txn = db.begin().await?;
    let now = chrono::Utc::now();

    let purchase_model = purchase::ActiveModel {
        date_ordered: Set(new_purchase.date_ordered),
        marketplace: Set(new_purchase.marketplace),
        order_url: Set(new_purchase.order_url),
        subtotal: Set(new_purchase.subtotal),
        tax: Set(new_purchase.tax),
        notes: Set(new_purchase.notes),
        created_at: Set(now),
        ..Default::default()
    };
    let inserted_purchase = purchase_model.insert(&txn).await?;

    let mut inserted_items = Vec::with_capacity(new_purchase.items.len());
    for item in new_purchase.items {
        let item_model = purchase_item::ActiveModel {
            purchase_id: Set(inserted_purchase.id),
            filament_name: Set(item.filament_name),
            seller: Set(item.seller),
            date_ordered: Set(item.date_ordered),
            date_received: Set(item.date_received),
            spools: Set(item.spools),
            kg_per_spool: Set(item.kg_per_spool),
            unit_price: Set(item.unit_price),
            shelf: Set(item.shelf),
            notes: Set(item.notes),
            created_at: Set(now),
            ..Default::default()
        };
        inserted_items.push(item_model.insert(&txn).await?);
    }

    txn.commit().await?;

    Ok((inserted_purchase, inserted_items))
}

/// Finds a purchase by its unique ID.
pub async fn get_purchase_by_id(
    db: &DatabaseConnection,
    purchase_id: i64,
) -> Result<Option<purchase::Model>> {
    Purchase::find_by_id(purchase_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all purchases, newest order date first.
pub async fn list_purchases(db: &DatabaseConnection) -> Result<Vec<purchase::Model>> {
    Purchase::find()
        .order_by_desc(purchase::Column::DateOrdered)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the line items belonging to one purchase.
pub async fn get_items_for_purchase(
    db: &DatabaseConnection,
    purchase_id: i64,
) -> Result<Vec<purchase_item::Model>> {
    PurchaseItem::find()
        .filter(purchase_item::Column::PurchaseId.eq(purchase_id))
        .order_by_asc(purchase_item::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves every line item that bought a given filament, across all purchases.
pub async fn list_purchase_items_for_filament(
    db: &DatabaseConnection,
    filament_name: &str,
) -> Result<Vec<purchase_item::Model>> {
    PurchaseItem::find()
        .filter(purchase_item::Column::FilamentName.eq(filament_name))
        .order_by_asc(purchase_item::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes a purchase and all of its line items in one transaction.
pub async fn delete_purchase(db: &DatabaseConnection, purchase_id: i64) -> Result<()> {
    let purchase = get_purchase_by_id(db, purchase_id)
        .await?
        .ok_or(Error::PurchaseNotFound { id: purchase_id })?;

    let txn = db.begin().await?;

    PurchaseItem::delete_many()
        .filter(purchase_item::Column::PurchaseId.eq(purchase_id))
        .exec(&txn)
        .await?;
    purchase.delete(&txn).await?;

    txn.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{
        create_test_filament, create_test_purchase, create_test_vendor, new_test_item,
        setup_test_db,
    };

    async fn setup_with_filament() -> Result<DatabaseConnection> {
        let db = setup_test_db().await?;
        create_test_vendor(&db, "Polymaker").await?;
        create_test_filament(&db, "Test PLA", "Polymaker").await?;
        Ok(db)
    }

    #[tokio::test]
    async fn test_create_purchase_with_multiple_items() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_vendor(&db, "Polymaker").await?;
        create_test_filament(&db, "Test PLA", "Polymaker").await?;
        create_test_filament(&db, "Test PETG", "Polymaker").await?;

        let new_purchase = NewPurchase {
            date_ordered: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            marketplace: Some("Amazon".to_string()),
            order_url: None,
            subtotal: 55.0,
            tax: 4.40,
            notes: None,
            items: vec![
                new_test_item("Test PLA", 2, 1.0),
                new_test_item("Test PETG", 1, 3.0),
            ],
        };

        let (purchase, items) = create_purchase(&db, new_purchase).await?;
        assert_eq!(purchase.subtotal, 55.0);
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.purchase_id == purchase.id));

        let stored = get_items_for_purchase(&db, purchase.id).await?;
        assert_eq!(stored, items);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_purchase_requires_items() -> Result<()> {
        let db = setup_with_filament().await?;

        let new_purchase = NewPurchase {
            date_ordered: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            marketplace: None,
            order_url: None,
            subtotal: 0.0,
            tax: 0.0,
            notes: None,
            items: vec![],
        };

        let result = create_purchase(&db, new_purchase).await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_purchase_item_validation() -> Result<()> {
        let db = setup_with_filament().await?;
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        let base = NewPurchase {
            date_ordered: date,
            marketplace: None,
            order_url: None,
            subtotal: 20.0,
            tax: 0.0,
            notes: None,
            items: vec![new_test_item("Test PLA", 2, 1.0)],
        };

        // Zero spool count
        let mut bad = base.clone();
        bad.items[0].spools = 0;
        assert!(matches!(
            create_purchase(&db, bad).await.unwrap_err(),
            Error::InvalidSpoolCount { count: 0 }
        ));

        // Non-positive weight
        let mut bad = base.clone();
        bad.items[0].kg_per_spool = 0.0;
        assert!(matches!(
            create_purchase(&db, bad).await.unwrap_err(),
            Error::InvalidWeight { kg: _ }
        ));

        // NaN weight
        let mut bad = base.clone();
        bad.items[0].kg_per_spool = f64::NAN;
        assert!(matches!(
            create_purchase(&db, bad).await.unwrap_err(),
            Error::InvalidWeight { kg: _ }
        ));

        // Negative unit price
        let mut bad = base.clone();
        bad.items[0].unit_price = -5.0;
        assert!(matches!(
            create_purchase(&db, bad).await.unwrap_err(),
            Error::InvalidPrice { price: _ }
        ));

        // Unknown filament
        let mut bad = base.clone();
        bad.items[0].filament_name = "Missing PLA".to_string();
        assert!(matches!(
            create_purchase(&db, bad).await.unwrap_err(),
            Error::FilamentNotFound { name: _ }
        ));

        // Nothing was inserted by the failed attempts
        assert!(list_purchases(&db).await?.is_empty());
        assert!(
            list_purchase_items_for_filament(&db, "Test PLA")
                .await?
                .is_empty()
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_list_purchase_items_for_filament_spans_purchases() -> Result<()> {
        let db = setup_with_filament().await?;

        create_test_purchase(&db, "Test PLA", 2, 1.0).await?;
        create_test_purchase(&db, "Test PLA", 1, 3.0).await?;

        let items = list_purchase_items_for_filament(&db, "Test PLA").await?;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].spools, 2);
        assert_eq!(items[1].kg_per_spool, 3.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_purchase_removes_items() -> Result<()> {
        let db = setup_with_filament().await?;

        let (purchase, _) = create_test_purchase(&db, "Test PLA", 2, 1.0).await?;
        delete_purchase(&db, purchase.id).await?;

        assert!(get_purchase_by_id(&db, purchase.id).await?.is_none());
        assert!(
            list_purchase_items_for_filament(&db, "Test PLA")
                .await?
                .is_empty()
        );

        let result = delete_purchase(&db, purchase.id).await;
        assert!(matches!(result.unwrap_err(), Error::PurchaseNotFound { id: _ }));

        Ok(())
    }
}
