//! Inventory summary computation - the stock derivation at the heart of the tracker.
//!
//! For every filament in the catalog this module derives purchase totals and
//! spool-state counts from the raw purchase-item and spool records, and
//! combines them into a remaining-stock estimate. The computation is a pure
//! read: it mutates nothing and tolerates inconsistent source data by
//! reporting it (a negative unopened count) instead of masking it.
//!
//! The arithmetic lives in [`PurchaseStats`], [`SpoolStats`], and
//! [`summarize_filament`], which are plain folds over in-memory records;
//! [`compute_inventory_summary`] loads the three collections once, groups the
//! records by filament name, and applies the fold per filament in catalog
//! order.

use crate::{
    entities::{Filament, PurchaseItem, Spool, filament, purchase_item, spool},
    errors::Result,
};
use sea_orm::{EntityTrait, QueryOrder};
use serde::Serialize;
use std::collections::HashMap;

/// Per-filament stock summary surfaced to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilamentSummary {
    /// Unique filament name
    pub filament_name: String,
    /// Vendor that manufactures the filament
    pub manufacturer: String,
    /// Material type
    pub material: String,
    /// Primary color, if recorded
    pub color: Option<String>,
    /// Total weight ever purchased, in kilograms
    pub total_purchased_kg: f64,
    /// Estimated weight consumed so far (activity metric, not a stock level)
    pub total_opened_kg: f64,
    /// Estimated weight still on hand: open-spool residue plus unopened spools
    /// at their average nominal weight
    pub total_remaining_kg: f64,
    /// Purchased spools not yet opened. Signed: goes negative when more spool
    /// records exist than purchases account for, which is a data-entry anomaly
    /// worth seeing rather than hiding
    pub unopened_spools: i64,
    /// Spools currently in active use (opened but not finished)
    pub opened_spools: i64,
    /// Spools fully consumed
    pub finished_spools: i64,
}

/// Purchase-side aggregates for one filament.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PurchaseStats {
    /// Sum of `spools * kg_per_spool` over all line items
    pub total_kg: f64,
    /// Sum of `spools` over all line items
    pub total_spools: i64,
    /// Unweighted mean of `kg_per_spool` across line items. Each line item
    /// counts once regardless of how many spools it bought; do not replace
    /// this with a spool-weighted mean
    pub avg_kg_per_spool: f64,
}

impl PurchaseStats {
    /// Folds purchase line items into totals. Empty input yields all zeros.
    pub fn from_items<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a purchase_item::Model>,
    {
        let mut total_kg = 0.0;
        let mut total_spools = 0i64;
        let mut weight_sum = 0.0;
        let mut item_count = 0u32;

        for item in items {
            total_kg += f64::from(item.spools) * item.kg_per_spool;
            total_spools += i64::from(item.spools);
            weight_sum += item.kg_per_spool;
            item_count += 1;
        }

        let avg_kg_per_spool = if item_count == 0 {
            0.0
        } else {
            weight_sum / f64::from(item_count)
        };

        Self {
            total_kg,
            total_spools,
            avg_kg_per_spool,
        }
    }
}

/// Spool-side aggregates for one filament.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpoolStats {
    /// Count of spool records (a record existing at all means opened)
    pub opened: i64,
    /// Count of spool records with `date_finished` set
    pub finished: i64,
    /// Sum of `remaining_kg` over unfinished spools. Finished spools carry
    /// zero remaining weight by convention and are excluded to avoid
    /// double-counting residue
    pub remaining_open_kg: f64,
}

impl SpoolStats {
    /// Folds spool records into state counts. Empty input yields all zeros.
    pub fn from_spools<'a, I>(spools: I) -> Self
    where
        I: IntoIterator<Item = &'a spool::Model>,
    {
        let mut opened = 0i64;
        let mut finished = 0i64;
        let mut remaining_open_kg = 0.0;

        for s in spools {
            opened += 1;
            if s.date_finished.is_some() {
                finished += 1;
            } else {
                remaining_open_kg += s.remaining_kg;
            }
        }

        Self {
            opened,
            finished,
            remaining_open_kg,
        }
    }
}

/// Combines purchase and spool aggregates into one filament's summary.
///
/// Unopened spools are valued at the unweighted average per-spool purchase
/// weight. The unopened count is `purchased - opened` and is deliberately not
/// clamped at zero. `total_opened_kg` falls back to the full purchased amount
/// whenever the remaining estimate is not positive; the boundary is exactly
/// `> 0.0` and must stay that way for compatibility with historical reports.
pub fn summarize_filament(
    filament: &filament::Model,
    purchases: PurchaseStats,
    spools: SpoolStats,
) -> FilamentSummary {
    let unopened_spools = purchases.total_spools - spools.opened;

    // Cast safety: spool counts are far below 2^52, so the i64 -> f64
    // conversion here is exact.
    #[allow(clippy::cast_precision_loss)]
    let unopened_kg = unopened_spools as f64 * purchases.avg_kg_per_spool;

    let total_remaining_kg = spools.remaining_open_kg + unopened_kg;
    let total_opened_kg = if total_remaining_kg > 0.0 {
        purchases.total_kg - total_remaining_kg
    } else {
        purchases.total_kg
    };

    FilamentSummary {
        filament_name: filament.name.clone(),
        manufacturer: filament.manufacturer.clone(),
        material: filament.material.clone(),
        color: filament.color.clone(),
        total_purchased_kg: purchases.total_kg,
        total_opened_kg,
        total_remaining_kg,
        unopened_spools,
        opened_spools: spools.opened - spools.finished,
        finished_spools: spools.finished,
    }
}

/// Computes the inventory summary for every filament in the catalog.
///
/// Loads the filament catalog, all purchase items, and all spools once, then
/// groups the records by filament name and folds each group. Output order
/// follows catalog enumeration order (creation order). The computation never
/// fails on odd data; only storage errors propagate.
pub async fn compute_inventory_summary<C>(db: &C) -> Result<Vec<FilamentSummary>>
where
    C: sea_orm::ConnectionTrait,
{
    let filaments = Filament::find()
        .order_by_asc(filament::Column::Id)
        .all(db)
        .await?;
    let items = PurchaseItem::find().all(db).await?;
    let spools = Spool::find().all(db).await?;

    let mut items_by_filament: HashMap<&str, Vec<&purchase_item::Model>> = HashMap::new();
    for item in &items {
        items_by_filament
            .entry(item.filament_name.as_str())
            .or_default()
            .push(item);
    }

    let mut spools_by_filament: HashMap<&str, Vec<&spool::Model>> = HashMap::new();
    for s in &spools {
        spools_by_filament
            .entry(s.filament_name.as_str())
            .or_default()
            .push(s);
    }

    let summaries = filaments
        .iter()
        .map(|f| {
            let purchase_stats = items_by_filament
                .get(f.name.as_str())
                .map(|group| PurchaseStats::from_items(group.iter().copied()))
                .unwrap_or_default();
            let spool_stats = spools_by_filament
                .get(f.name.as_str())
                .map(|group| SpoolStats::from_spools(group.iter().copied()))
                .unwrap_or_default();
            summarize_filament(f, purchase_stats, spool_stats)
        })
        .collect();

    Ok(summaries)
}
