// SPDX-License-Identifier: MIT
//
// Table renderers: the shaded column-header band, one row per line item,
// and the grand-total line.

use faktura_core::LineItem;

use super::document::{Color, FontWeight, Page};
use super::geometry::PageGeometry;

const COLUMN_TITLES: [&str; 4] = ["Part No", "Quantity", "Price", "Total"];

/// Horizontal inset of cell text from its column start.
const CELL_PADDING: f32 = 5.0;
/// Height of the shaded header band.
const BAND_HEIGHT: f32 = 20.0;
/// Vertical advance from a header band down to the first row beneath it.
pub(crate) const BAND_ADVANCE: f32 = 30.0;

const BODY_SIZE: f32 = 10.0;
const TOTAL_SIZE: f32 = 12.0;

const BAND_FILL: Color = Color::new(0.9, 0.9, 0.9);
const SEPARATOR_GREY: Color = Color::new(0.8, 0.8, 0.8);

/// Fixed two-decimal money rendering.
///
/// `{:.2}` rounds half to even; the same rule applies to unit prices, line
/// totals, and the grand total.
pub(crate) fn format_money(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Draw the shaded column-title band anchored at `y`.
///
/// The one and only header-band code path: page 1 and every continuation
/// page render the band through this same call.
pub(crate) fn draw_header_band(page: &mut Page, y: f32, geometry: &PageGeometry) {
    page.rect(
        geometry.margin,
        y - 15.0,
        geometry.usable_width(),
        BAND_HEIGHT,
        BAND_FILL,
    );
    for (title, col_x) in COLUMN_TITLES.iter().zip(geometry.col_x()) {
        page.text(
            *title,
            col_x + CELL_PADDING,
            y - 10.0,
            BODY_SIZE,
            FontWeight::Bold,
            Color::BLACK,
        );
    }
    page.line(
        (geometry.margin, y - 15.0),
        (geometry.page_width - geometry.margin, y - 15.0),
        1.0,
        Color::BLACK,
    );
}

/// Draw one item row at `y`, with a light separator rule just below it.
pub(crate) fn draw_row(page: &mut Page, item: &LineItem, y: f32, geometry: &PageGeometry) {
    let col_x = geometry.col_x();
    let cells = [
        item.part_no.clone(),
        item.qty.to_string(),
        format_money(item.unit_price),
        format_money(item.total_price),
    ];
    for (cell, x) in cells.into_iter().zip(col_x) {
        page.text(
            cell,
            x + CELL_PADDING,
            y,
            BODY_SIZE,
            FontWeight::Regular,
            Color::BLACK,
        );
    }
    page.line(
        (geometry.margin, y - 10.0),
        (geometry.page_width - geometry.margin, y - 10.0),
        0.5,
        SEPARATOR_GREY,
    );
}

/// Running sum of every rendered line total.
///
/// Totals are accumulated exactly as supplied; never recomputed from
/// `qty * unit_price`, so caller-side overrides carry through.
#[derive(Debug, Default)]
pub(crate) struct TotalsAccumulator {
    sum: f64,
}

impl TotalsAccumulator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, line_total: f64) {
        self.sum += line_total;
    }

    pub(crate) fn sum(&self) -> f64 {
        self.sum
    }

    /// Draw the closing rule and the bold grand-total line around `y`,
    /// aligned to the Price and Total columns.
    pub(crate) fn draw(&self, page: &mut Page, y: f32, geometry: &PageGeometry) {
        let col_x = geometry.col_x();
        page.line(
            (geometry.margin, y + 10.0),
            (geometry.page_width - geometry.margin, y + 10.0),
            1.0,
            Color::BLACK,
        );
        page.text(
            "Total Amount:",
            col_x[2] + CELL_PADDING,
            y - 10.0,
            TOTAL_SIZE,
            FontWeight::Bold,
            Color::BLACK,
        );
        page.text(
            format_money(self.sum),
            col_x[3] + CELL_PADDING,
            y - 10.0,
            TOTAL_SIZE,
            FontWeight::Bold,
            Color::BLACK,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::document::DrawOp;

    #[test]
    fn money_always_shows_two_decimals() {
        assert_eq!(format_money(5.5), "5.50");
        assert_eq!(format_money(25.5), "25.50");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(1234.0), "1234.00");
    }

    #[test]
    fn money_rounds_half_to_even() {
        // 0.125 and 0.375 are exactly representable in binary.
        assert_eq!(format_money(0.125), "0.12");
        assert_eq!(format_money(0.375), "0.38");
    }

    #[test]
    fn header_band_is_rect_titles_and_rule() {
        let geometry = PageGeometry::default();
        let mut page = Page::new(geometry.page_width, geometry.page_height);
        draw_header_band(&mut page, 700.0, &geometry);

        // One shaded rect, four titles, one closing rule.
        assert_eq!(page.ops.len(), 6);
        match &page.ops[0] {
            DrawOp::Rect { x, y, width, height, .. } => {
                assert_eq!(*x, geometry.margin);
                assert_eq!(*y, 685.0);
                assert!((width - geometry.usable_width()).abs() < 0.001);
                assert_eq!(*height, BAND_HEIGHT);
            }
            other => panic!("expected shaded rect first, got {other:?}"),
        }
        let titles: Vec<&str> = page
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(titles, COLUMN_TITLES);
    }

    #[test]
    fn row_cells_land_on_column_starts() {
        let geometry = PageGeometry::default();
        let mut page = Page::new(geometry.page_width, geometry.page_height);
        let item = LineItem {
            part_no: "A1".into(),
            qty: 2,
            unit_price: 10.0,
            total_price: 20.0,
        };
        draw_row(&mut page, &item, 600.0, &geometry);

        let cells: Vec<(String, f32)> = page
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, x, .. } => Some((text.clone(), *x)),
                _ => None,
            })
            .collect();
        assert_eq!(
            cells,
            vec![
                ("A1".to_string(), 55.0),
                ("2".to_string(), 255.0),
                ("10.00".to_string(), 315.0),
                ("20.00".to_string(), 395.0),
            ]
        );
    }

    #[test]
    fn accumulator_sums_supplied_totals_only() {
        let mut totals = TotalsAccumulator::new();
        // Second total deliberately differs from qty * unit_price.
        totals.add(20.0);
        totals.add(99.0);
        assert_eq!(totals.sum(), 119.0);
    }
}
