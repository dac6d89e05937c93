// SPDX-License-Identifier: MIT
//
// PDF writer — serialize rendered invoice documents using `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`. This module lowers the renderer's `DrawOp` model to
// those operation lists; it never inspects or reconstructs the byte format.

use std::path::Path;

use chrono::NaiveDate;
use printpdf::color::Color as PdfColor;
use printpdf::graphics::{LinePoint, PaintMode, Point, Polygon, PolygonRing, WindingOrder};
use printpdf::{
    BuiltinFont, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Pt, Rgb, TextItem,
};
use tracing::{debug, info, instrument};

use faktura_core::error::{FakturaError, Result};

use crate::invoice::document::{Color, DrawOp, FontWeight, InvoiceDocument, Page};

/// Media type invoices are served with.
pub const INVOICE_MIME: &str = "application/pdf";

const MM_PER_PT: f32 = 25.4 / 72.0;

/// Download filename for an invoice issued on `date`.
pub fn invoice_filename(date: NaiveDate) -> String {
    format!("parts-corner-invoice-{}.pdf", date.format("%Y-%m-%d"))
}

/// Serializes rendered invoice documents to PDF bytes.
///
/// Text is set in the built-in Helvetica faces, so no font embedding or
/// subsetting happens here.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    /// Title metadata embedded in the PDF /Info dictionary.
    title: Option<String>,
}

impl PdfWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a title for the PDF metadata.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Serialize the full document, or nothing: a failure never leaves a
    /// partial byte stream behind.
    #[instrument(skip_all, fields(pages = doc.page_count()))]
    pub fn serialize(&self, doc: &InvoiceDocument) -> Result<Vec<u8>> {
        if doc.pages.is_empty() {
            return Err(FakturaError::Render("document has no pages".into()));
        }

        let title = self.title.as_deref().unwrap_or("Invoice");
        let mut pdf = PdfDocument::new(title);

        let pages: Vec<PdfPage> = doc.pages.iter().map(lower_page).collect();
        pdf.with_pages(pages);

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let bytes = pdf.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            debug!(count = warnings.len(), "printpdf reported save warnings");
        }

        info!(bytes = bytes.len(), "invoice serialized");
        Ok(bytes)
    }

    /// Serialize and write directly to a file.
    pub fn write_to_file(&self, doc: &InvoiceDocument, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.serialize(doc)?;
        std::fs::write(path.as_ref(), &bytes)?;
        info!("Wrote invoice PDF to {}", path.as_ref().display());
        Ok(())
    }
}

/// Lower one rendered page to a printpdf page of the same fixed size.
fn lower_page(page: &Page) -> PdfPage {
    let mut ops: Vec<Op> = Vec::with_capacity(page.ops.len() * 6);

    for op in &page.ops {
        match op {
            DrawOp::Text {
                text,
                x,
                y,
                size,
                weight,
                color,
            } => {
                let font = builtin_font(*weight);
                ops.push(Op::StartTextSection);
                ops.push(Op::SetFillColor {
                    col: pdf_color(*color),
                });
                ops.push(Op::SetTextCursor {
                    pos: Point {
                        x: Pt(*x),
                        y: Pt(*y),
                    },
                });
                ops.push(Op::SetFontSizeBuiltinFont {
                    size: Pt(*size),
                    font,
                });
                ops.push(Op::WriteTextBuiltinFont {
                    items: vec![TextItem::Text(text.clone())],
                    font,
                });
                ops.push(Op::EndTextSection);
            }
            DrawOp::Rect {
                x,
                y,
                width,
                height,
                color,
            } => {
                ops.push(Op::SetFillColor {
                    col: pdf_color(*color),
                });
                ops.push(Op::DrawPolygon {
                    polygon: polygon(
                        vec![
                            (*x, *y),
                            (*x + *width, *y),
                            (*x + *width, *y + *height),
                            (*x, *y + *height),
                        ],
                        PaintMode::Fill,
                    ),
                });
            }
            DrawOp::Line {
                from,
                to,
                thickness,
                color,
            } => {
                ops.push(Op::SetOutlineColor {
                    col: pdf_color(*color),
                });
                ops.push(Op::SetOutlineThickness {
                    pt: Pt(*thickness),
                });
                ops.push(Op::DrawPolygon {
                    polygon: polygon(vec![*from, *to], PaintMode::Stroke),
                });
            }
        }
    }

    PdfPage::new(
        Mm(page.width * MM_PER_PT),
        Mm(page.height * MM_PER_PT),
        ops,
    )
}

fn builtin_font(weight: FontWeight) -> BuiltinFont {
    match weight {
        FontWeight::Regular => BuiltinFont::Helvetica,
        FontWeight::Bold => BuiltinFont::HelveticaBold,
    }
}

fn pdf_color(color: Color) -> PdfColor {
    PdfColor::Rgb(Rgb::new(color.r, color.g, color.b, None))
}

fn polygon(points: Vec<(f32, f32)>, mode: PaintMode) -> Polygon {
    Polygon {
        rings: vec![PolygonRing {
            points: points
                .into_iter()
                .map(|(x, y)| LinePoint {
                    p: Point { x: Pt(x), y: Pt(y) },
                    bezier: false,
                })
                .collect(),
        }],
        mode,
        winding_order: WindingOrder::EvenOdd,
    }
}
