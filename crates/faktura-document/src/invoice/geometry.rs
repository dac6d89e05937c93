// SPDX-License-Identifier: MIT
//
// Fixed page geometry shared by every renderer that aligns content.
// All values are PDF points measured from the bottom-left page origin.

/// ISO A4 width in points.
pub const A4_WIDTH_PT: f32 = 595.28;
/// ISO A4 height in points.
pub const A4_HEIGHT_PT: f32 = 841.89;

/// Immutable per-document layout constants.
///
/// The four table columns are Part No, Quantity, Price, and Total; their
/// x-positions are the left margin plus the cumulative widths of the
/// preceding columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    /// Inset from every page edge within which no content is drawn except
    /// as positioned relative to it.
    pub margin: f32,
    /// Fixed column widths, left to right.
    pub col_widths: [f32; 4],
    /// Vertical advance per item row.
    pub row_height: f32,
    /// Space kept free at the bottom of each page for the totals line and
    /// footer block. A row never starts inside it; crossing into it forces
    /// a page break instead.
    pub reserved_trailing_space: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            page_width: A4_WIDTH_PT,
            page_height: A4_HEIGHT_PT,
            margin: 50.0,
            col_widths: [200.0, 60.0, 80.0, 100.0],
            row_height: 20.0,
            reserved_trailing_space: 100.0,
        }
    }
}

impl PageGeometry {
    /// Column x-start positions: margin plus cumulative preceding widths.
    pub fn col_x(&self) -> [f32; 4] {
        let mut xs = [0.0; 4];
        let mut x = self.margin;
        for (slot, width) in xs.iter_mut().zip(self.col_widths) {
            *slot = x;
            x += width;
        }
        xs
    }

    /// Horizontal span available between the left and right margins.
    pub fn usable_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    /// Vertical write position at the top of a fresh page.
    pub fn content_top(&self) -> f32 {
        self.page_height - self.margin
    }

    /// Minimum y at which another row may still start; below this a new
    /// page must be opened first.
    pub fn break_threshold(&self) -> f32 {
        self.margin + self.reserved_trailing_space
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_starts_are_cumulative() {
        let geometry = PageGeometry::default();
        assert_eq!(geometry.col_x(), [50.0, 250.0, 310.0, 390.0]);
    }

    #[test]
    fn usable_width_spans_between_margins() {
        let geometry = PageGeometry::default();
        assert!((geometry.usable_width() - 495.28).abs() < 0.001);
    }

    #[test]
    fn break_threshold_is_margin_plus_reserved_space() {
        let geometry = PageGeometry::default();
        assert_eq!(geometry.break_threshold(), 150.0);
    }
}
