//! Plain-text rendering of inventory summaries.
//!
//! Formats [`FilamentSummary`] records into an aligned console table. Rows
//! with a negative unopened-spool count are flagged so data-entry anomalies
//! are visible to the operator instead of disappearing into the totals.

use crate::core::inventory::FilamentSummary;
use std::fmt::Write as _;

/// Marker appended to rows whose spool records exceed their purchase records.
const ANOMALY_MARKER: &str = " (!)";

/// Formats a weight with two decimals and a unit, e.g. `"1.40 kg"`.
#[must_use]
pub fn format_kg(kg: f64) -> String {
    format!("{kg:.2} kg")
}

/// Formats one summary as a single report row.
#[must_use]
pub fn format_summary_row(summary: &FilamentSummary) -> String {
    let anomaly = if summary.unopened_spools < 0 {
        ANOMALY_MARKER
    } else {
        ""
    };

    format!(
        "{:<40} {:>10} {:>10} {:>10} {:>5} {:>5} {:>5}{}",
        summary.filament_name,
        format_kg(summary.total_purchased_kg),
        format_kg(summary.total_remaining_kg),
        format_kg(summary.total_opened_kg),
        summary.unopened_spools,
        summary.opened_spools,
        summary.finished_spools,
        anomaly,
    )
}

/// Renders the full inventory report as a text table.
#[must_use]
pub fn render_inventory_report(summaries: &[FilamentSummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<40} {:>10} {:>10} {:>10} {:>5} {:>5} {:>5}",
        "Filament", "Purchased", "Remaining", "Opened", "New", "Use", "Done"
    );

    if summaries.is_empty() {
        let _ = writeln!(out, "(no filaments in catalog)");
        return out;
    }

    for summary in summaries {
        let _ = writeln!(out, "{}", format_summary_row(summary));
    }
    out
}
