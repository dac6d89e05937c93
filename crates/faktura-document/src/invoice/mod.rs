// SPDX-License-Identifier: MIT
//
// Invoice rendering — page geometry, the pagination cursor, the table and
// chrome renderers, and the builder that orchestrates them into a document.

pub mod builder;
mod chrome;
pub mod cursor;
pub mod document;
pub mod geometry;
pub mod number;
mod table;

pub use builder::InvoiceBuilder;
pub use cursor::{Cursor, CursorState};
pub use document::{Color, DrawOp, FontWeight, InvoiceDocument, Page};
pub use geometry::PageGeometry;
pub use number::{FixedSuffix, RandomSuffix, SuffixSource, invoice_number};
