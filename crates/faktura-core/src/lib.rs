// SPDX-License-Identifier: MIT
//
// faktura-core — Domain types, configuration, and error definitions shared
// across the Faktura crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::CompanyProfile;
pub use error::FakturaError;
pub use types::*;
