// SPDX-License-Identifier: MIT
//
// Render output model — an ordered page sequence holding plain draw
// instructions. The PDF serializer lowers these to printpdf ops; nothing in
// the renderer touches the byte format.

/// RGB color with channels in the `0.0..=1.0` range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// One drawing instruction. Coordinates are points from the bottom-left
/// page origin; text anchors at its baseline start.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        weight: FontWeight,
        color: Color,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        thickness: f32,
        color: Color,
    },
}

/// A single fixed-size page and its ordered draw instructions.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub width: f32,
    pub height: f32,
    pub ops: Vec<DrawOp>,
}

impl Page {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn text(
        &mut self,
        text: impl Into<String>,
        x: f32,
        y: f32,
        size: f32,
        weight: FontWeight,
        color: Color,
    ) {
        self.ops.push(DrawOp::Text {
            text: text.into(),
            x,
            y,
            size,
            weight,
            color,
        });
    }

    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.ops.push(DrawOp::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), thickness: f32, color: Color) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            thickness,
            color,
        });
    }
}

/// The ordered page sequence produced by one build call.
///
/// Owned exclusively by the builder while rendering; handed to the caller
/// complete, never partially drawn.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InvoiceDocument {
    pub pages: Vec<Page>,
}

impl InvoiceDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fresh page of the given fixed size.
    pub fn push_page(&mut self, width: f32, height: f32) {
        self.pages.push(Page::new(width, height));
    }

    /// The page all drawing currently targets: always the newest one.
    ///
    /// Every draw call after a page break must go through this accessor so
    /// content lands on the page that is actually part of the output, not
    /// on a reference captured before the break.
    ///
    /// # Panics
    /// If no page has been added yet. The builder opens page 1 before any
    /// drawing happens.
    pub fn current_mut(&mut self) -> &mut Page {
        self.pages.last_mut().expect("document has at least one page")
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
