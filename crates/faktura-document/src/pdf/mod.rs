// SPDX-License-Identifier: MIT
//
// PDF module — lowering rendered invoice documents to PDF bytes.

pub mod writer;

pub use writer::PdfWriter;
