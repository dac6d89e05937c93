// SPDX-License-Identifier: MIT
//
// Core domain types for the Faktura invoicing engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single priced line on an invoice.
///
/// `total_price` is carried exactly as supplied by the caller. The renderer
/// never recomputes it from `qty * unit_price`; upstream item management may
/// deliberately override a line total (discounts, manual corrections), and
/// that override must survive into the printed document.
///
/// Field names serialize in the camelCase wire shape used by the item
/// management API (`partNo`, `unitPrice`, `totalPrice`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Part number shown in the first column. Must be non-empty.
    pub part_no: String,
    /// Quantity shown in the second column.
    pub qty: u32,
    /// Per-unit price, rendered at two decimals.
    pub unit_price: f64,
    /// Line total, rendered at two decimals and summed into the grand total.
    pub total_price: f64,
}

impl LineItem {
    /// Create a line item with `total_price` computed as `qty * unit_price`.
    ///
    /// This is the item-management default at creation time; callers may
    /// still overwrite `total_price` before rendering.
    pub fn new(part_no: impl Into<String>, qty: u32, unit_price: f64) -> Self {
        Self {
            part_no: part_no.into(),
            qty,
            unit_price,
            total_price: qty as f64 * unit_price,
        }
    }
}

/// Metadata for one rendered invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceMeta {
    /// Display number, e.g. `INV-20260830-042`. Generated per render; not
    /// guaranteed unique across documents created in the same second.
    pub number: String,
    /// Issue date printed below the invoice number.
    pub issue_date: NaiveDate,
}

impl InvoiceMeta {
    pub fn new(number: impl Into<String>, issue_date: NaiveDate) -> Self {
        Self {
            number: number.into(),
            issue_date,
        }
    }
}
