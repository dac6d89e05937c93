// SPDX-License-Identifier: MIT
//
// Document builder — orchestrates geometry, cursor, chrome, and table
// renderers into an ordered page sequence.

use tracing::{debug, info, instrument};

use faktura_core::error::{FakturaError, Result};
use faktura_core::{CompanyProfile, InvoiceMeta, LineItem};

use super::chrome;
use super::cursor::{Cursor, CursorState};
use super::document::InvoiceDocument;
use super::geometry::PageGeometry;
use super::table::{self, BAND_ADVANCE, TotalsAccumulator};

/// Builds one complete invoice document per [`InvoiceBuilder::build`] call.
///
/// Construction is synchronous and single-threaded; each call owns its
/// document and cursor exclusively and no state survives across calls.
#[derive(Debug, Clone, Default)]
pub struct InvoiceBuilder {
    geometry: PageGeometry,
    company: CompanyProfile,
}

impl InvoiceBuilder {
    pub fn new(company: CompanyProfile) -> Self {
        Self {
            geometry: PageGeometry::default(),
            company,
        }
    }

    /// Override the default A4 geometry.
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Render `items` (in input order) into an ordered page sequence.
    ///
    /// Fails fast with [`FakturaError::InvalidInput`] before any drawing
    /// when the item list is empty or malformed; otherwise the returned
    /// document is always complete, never partial.
    #[instrument(skip_all, fields(items = items.len(), invoice = %meta.number))]
    pub fn build(&self, items: &[LineItem], meta: &InvoiceMeta) -> Result<InvoiceDocument> {
        validate(items)?;

        let geometry = self.geometry;
        let mut doc = InvoiceDocument::new();
        doc.push_page(geometry.page_width, geometry.page_height);
        let mut cursor = Cursor::new(&geometry);

        chrome::draw_document_header(doc.current_mut(), &mut cursor, &geometry, &self.company, meta);
        table::draw_header_band(doc.current_mut(), cursor.y(), &geometry);
        cursor.advance(BAND_ADVANCE);

        let mut totals = TotalsAccumulator::new();
        for item in items {
            // Pagination check comes before the row is drawn, never after.
            if cursor.state(&geometry) == CursorState::PageBreakPending {
                doc.push_page(geometry.page_width, geometry.page_height);
                cursor.start_new_page(&geometry);
                table::draw_header_band(doc.current_mut(), cursor.y(), &geometry);
                cursor.advance(BAND_ADVANCE);
                debug!(page = cursor.page_index() + 1, "opened continuation page");
            }

            table::draw_row(doc.current_mut(), item, cursor.y(), &geometry);
            totals.add(item.total_price);
            cursor.advance(geometry.row_height);
        }

        // One row of clearance between the last separator and the total.
        cursor.advance(geometry.row_height);
        totals.draw(doc.current_mut(), cursor.y(), &geometry);

        // Fixed-offset footer on the last page. Can overlap the totals line
        // when the page is nearly full; known limitation.
        chrome::draw_footer(doc.current_mut(), &geometry, &self.company);

        info!(
            pages = doc.page_count(),
            total = totals.sum(),
            "invoice rendered"
        );
        Ok(doc)
    }
}

/// Reject empty or malformed input before any page is opened.
fn validate(items: &[LineItem]) -> Result<()> {
    if items.is_empty() {
        return Err(FakturaError::InvalidInput("no items provided".into()));
    }
    for (idx, item) in items.iter().enumerate() {
        if item.part_no.trim().is_empty() {
            return Err(FakturaError::InvalidInput(format!(
                "item {idx}: empty part number"
            )));
        }
        for (field, value) in [("unitPrice", item.unit_price), ("totalPrice", item.total_price)] {
            if !value.is_finite() || value < 0.0 {
                return Err(FakturaError::InvalidInput(format!(
                    "item {idx}: {field} must be a non-negative number"
                )));
            }
        }
    }
    Ok(())
}
