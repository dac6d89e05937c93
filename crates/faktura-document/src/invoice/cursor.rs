// SPDX-License-Identifier: MIT
//
// Pagination cursor — current page index plus vertical write position.

use super::geometry::PageGeometry;

/// Pagination state observed before each row is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Enough vertical space remains on the current page.
    OnPage,
    /// The next row would start inside the reserved trailing space; the
    /// builder must open a new page before drawing it.
    PageBreakPending,
}

/// Current write position for one build.
///
/// Created at build start with `y` at the content top of page 1, advanced
/// downward as rows are drawn, reset on each page break, and dropped when
/// the build returns. No cursor state survives across builds.
#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    page_index: usize,
    y: f32,
}

impl Cursor {
    pub fn new(geometry: &PageGeometry) -> Self {
        Self {
            page_index: 0,
            y: geometry.content_top(),
        }
    }

    /// Zero-based index of the page currently being written.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Current vertical write position in points from the page bottom.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Classify the current position. Checked before each row, not after.
    pub fn state(&self, geometry: &PageGeometry) -> CursorState {
        if self.y < geometry.break_threshold() {
            CursorState::PageBreakPending
        } else {
            CursorState::OnPage
        }
    }

    /// Reset to the content top of a freshly opened page.
    pub fn start_new_page(&mut self, geometry: &PageGeometry) {
        self.page_index += 1;
        self.y = geometry.content_top();
    }

    /// Move the write position down by `dy` points.
    pub fn advance(&mut self, dy: f32) {
        self.y -= dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_content_top_of_page_one() {
        let geometry = PageGeometry::default();
        let cursor = Cursor::new(&geometry);
        assert_eq!(cursor.page_index(), 0);
        assert_eq!(cursor.y(), geometry.content_top());
        assert_eq!(cursor.state(&geometry), CursorState::OnPage);
    }

    #[test]
    fn break_is_pending_strictly_below_threshold() {
        // Exactly representable values, so the boundary comparison is exact.
        let geometry = PageGeometry {
            page_height: 800.0,
            ..PageGeometry::default()
        };
        let mut cursor = Cursor::new(&geometry);

        // Exactly at the threshold a row still fits.
        cursor.advance(600.0);
        assert_eq!(cursor.y(), geometry.break_threshold());
        assert_eq!(cursor.state(&geometry), CursorState::OnPage);

        cursor.advance(0.5);
        assert_eq!(cursor.state(&geometry), CursorState::PageBreakPending);
    }

    #[test]
    fn new_page_resets_position_and_bumps_index() {
        let geometry = PageGeometry::default();
        let mut cursor = Cursor::new(&geometry);
        cursor.advance(700.0);
        cursor.start_new_page(&geometry);

        assert_eq!(cursor.page_index(), 1);
        assert_eq!(cursor.y(), geometry.content_top());
        assert_eq!(cursor.state(&geometry), CursorState::OnPage);
    }
}
