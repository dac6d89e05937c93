// SPDX-License-Identifier: MIT
//
// faktura-document — Paginated invoice rendering and PDF serialization.
//
// Turns an ordered list of priced line items into a multi-page document with
// a fixed A4 geometry: brand/company block on page one, a shaded column
// header band repeated at the top of every page, one row per item with
// running totals, and a footer at a fixed offset from the bottom margin.
// The finished page sequence is lowered to PDF bytes via `printpdf`.

pub mod invoice;
pub mod pdf;

// Re-export the primary types so callers can use `faktura_document::InvoiceBuilder` etc.
pub use invoice::builder::InvoiceBuilder;
pub use invoice::document::InvoiceDocument;
pub use invoice::geometry::PageGeometry;
pub use pdf::writer::PdfWriter;
