// SPDX-License-Identifier: MIT
//
// Criterion benchmarks for invoice rendering in the faktura-document crate.
// Benchmarks the builder (draw-instruction generation and pagination) and
// the full pipeline including PDF serialization.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use faktura_core::{CompanyProfile, InvoiceMeta, LineItem};
use faktura_document::{InvoiceBuilder, PdfWriter};

fn fixture(items: usize) -> (Vec<LineItem>, InvoiceMeta) {
    let items = (0..items)
        .map(|n| LineItem::new(format!("PART-{n:04}"), (n % 7 + 1) as u32, 12.75))
        .collect();
    let meta = InvoiceMeta::new(
        "INV-20260830-042",
        NaiveDate::from_ymd_opt(2026, 8, 30).expect("valid date"),
    );
    (items, meta)
}

/// Benchmark building a 200-item invoice — several page breaks, all table
/// rows, totals, and chrome, without serialization.
fn bench_build(c: &mut Criterion) {
    let builder = InvoiceBuilder::new(CompanyProfile::default());
    let (items, meta) = fixture(200);

    c.bench_function("build invoice (200 items)", |b| {
        b.iter(|| {
            let doc = builder
                .build(black_box(&items), black_box(&meta))
                .expect("build");
            black_box(doc);
        });
    });
}

/// Benchmark the full pipeline: build plus lowering to PDF bytes.
fn bench_build_and_serialize(c: &mut Criterion) {
    let builder = InvoiceBuilder::new(CompanyProfile::default());
    let writer = PdfWriter::new();
    let (items, meta) = fixture(200);

    c.bench_function("build + serialize invoice (200 items)", |b| {
        b.iter(|| {
            let doc = builder
                .build(black_box(&items), black_box(&meta))
                .expect("build");
            let bytes = writer.serialize(&doc).expect("serialize");
            black_box(bytes);
        });
    });
}

criterion_group!(benches, bench_build, bench_build_and_serialize);
criterion_main!(benches);
