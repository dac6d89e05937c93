// SPDX-License-Identifier: MIT
//
// Document chrome: the first-page brand/company block and the fixed-offset
// footer on the last page.

use faktura_core::{CompanyProfile, InvoiceMeta};

use super::cursor::Cursor;
use super::document::{Color, FontWeight, Page};
use super::geometry::PageGeometry;

const BRAND_COLOR: Color = Color::new(0.0, 0.3, 0.6);
const TITLE_SIZE: f32 = 24.0;
const SUBTITLE_SIZE: f32 = 16.0;
const META_SIZE: f32 = 10.0;
const COMPANY_NAME_SIZE: f32 = 12.0;
const FOOTER_SIZE: f32 = 12.0;

/// Width of the right-aligned company block.
const COMPANY_BLOCK_WIDTH: f32 = 200.0;

/// Fixed footer offset above the bottom margin. The footer always lands
/// here on the last page regardless of where the totals line ended; on a
/// nearly full page the two can overlap. Known limitation, kept as-is.
const FOOTER_OFFSET: f32 = 50.0;

/// Draw the brand title, invoice metadata, and right-aligned company block.
/// Drawn once, on the first page only; leaves the cursor just above the
/// table header band position.
pub(crate) fn draw_document_header(
    page: &mut Page,
    cursor: &mut Cursor,
    geometry: &PageGeometry,
    company: &CompanyProfile,
    meta: &InvoiceMeta,
) {
    let x = geometry.margin;

    page.text(
        company.brand_name.clone(),
        x,
        cursor.y(),
        TITLE_SIZE,
        FontWeight::Bold,
        BRAND_COLOR,
    );
    cursor.advance(20.0);
    page.text(
        "Invoice",
        x,
        cursor.y(),
        SUBTITLE_SIZE,
        FontWeight::Bold,
        Color::BLACK,
    );
    cursor.advance(30.0);
    page.text(
        format!("Invoice Number: {}", meta.number),
        x,
        cursor.y(),
        META_SIZE,
        FontWeight::Regular,
        Color::BLACK,
    );
    cursor.advance(15.0);
    page.text(
        format!("Date: {}", meta.issue_date.format("%Y-%m-%d")),
        x,
        cursor.y(),
        META_SIZE,
        FontWeight::Regular,
        Color::BLACK,
    );

    // Company block, anchored to the top margin on the right.
    let right_x = geometry.page_width - geometry.margin - COMPANY_BLOCK_WIDTH;
    let top = geometry.content_top();
    page.text(
        company.legal_name.clone(),
        right_x,
        top,
        COMPANY_NAME_SIZE,
        FontWeight::Bold,
        Color::BLACK,
    );
    page.text(
        company.address.clone(),
        right_x,
        top - 15.0,
        META_SIZE,
        FontWeight::Regular,
        Color::BLACK,
    );
    page.text(
        company.contact.clone(),
        right_x,
        top - 30.0,
        META_SIZE,
        FontWeight::Regular,
        Color::BLACK,
    );

    // Gap between the metadata lines and the table header band.
    cursor.advance(40.0);
}

/// Draw the footer block at its fixed offset above the bottom margin.
pub(crate) fn draw_footer(page: &mut Page, geometry: &PageGeometry, company: &CompanyProfile) {
    let y = geometry.margin + FOOTER_OFFSET;
    page.text(
        company.thank_you.clone(),
        geometry.margin,
        y,
        FOOTER_SIZE,
        FontWeight::Bold,
        Color::BLACK,
    );
    page.text(
        company.payment_terms.clone(),
        geometry.margin,
        y - 15.0,
        META_SIZE,
        FontWeight::Regular,
        Color::BLACK,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::document::DrawOp;
    use chrono::NaiveDate;

    #[test]
    fn header_leaves_cursor_at_band_position() {
        let geometry = PageGeometry::default();
        let mut page = Page::new(geometry.page_width, geometry.page_height);
        let mut cursor = Cursor::new(&geometry);
        let meta = InvoiceMeta::new(
            "INV-20260830-042",
            NaiveDate::from_ymd_opt(2026, 8, 30).expect("valid date"),
        );

        draw_document_header(&mut page, &mut cursor, &geometry, &CompanyProfile::default(), &meta);

        // Title, subtitle, number, date, plus the three company lines.
        assert_eq!(page.ops.len(), 7);
        // content_top minus 20 + 30 + 15 + 40.
        assert!((cursor.y() - (geometry.content_top() - 105.0)).abs() < 0.001);
    }

    #[test]
    fn footer_sits_at_fixed_offset_from_bottom_margin() {
        let geometry = PageGeometry::default();
        let mut page = Page::new(geometry.page_width, geometry.page_height);
        draw_footer(&mut page, &geometry, &CompanyProfile::default());

        let ys: Vec<f32> = page
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { y, .. } => Some(*y),
                _ => None,
            })
            .collect();
        assert_eq!(ys, vec![100.0, 85.0]);
    }
}
