// SPDX-License-Identifier: MIT
//
// Invoice number generation: `INV-YYYYMMDD-NNN`.

use chrono::NaiveDate;
use rand::Rng;

/// Source of the three-digit invoice-number suffix.
///
/// Injected into [`invoice_number`] rather than read from an ambient RNG so
/// fixtures stay reproducible. The suffix makes numbers merely unlikely to
/// collide: two invoices generated on the same date can share a number. It
/// is a display identifier, not a unique key.
pub trait SuffixSource {
    /// Next suffix in `0..1000`.
    fn next_suffix(&mut self) -> u32;
}

/// Production source: uniformly random suffix.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSuffix;

impl SuffixSource for RandomSuffix {
    fn next_suffix(&mut self) -> u32 {
        let mut rng = rand::rng();
        rng.random_range(0..1000)
    }
}

/// Deterministic source for tests and reproducible fixtures.
#[derive(Debug, Clone, Copy)]
pub struct FixedSuffix(pub u32);

impl SuffixSource for FixedSuffix {
    fn next_suffix(&mut self) -> u32 {
        self.0 % 1000
    }
}

/// Format an invoice number for the given issue date, zero-padding the
/// suffix to three digits.
pub fn invoice_number(issue_date: NaiveDate, suffix: &mut dyn SuffixSource) -> String {
    format!(
        "INV-{}-{:03}",
        issue_date.format("%Y%m%d"),
        suffix.next_suffix() % 1000
    )
}
