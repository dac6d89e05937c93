// SPDX-License-Identifier: MIT
//
// Unified error types for Faktura.

use thiserror::Error;

/// Top-level error type for all Faktura operations.
#[derive(Debug, Error)]
pub enum FakturaError {
    // -- Render input --
    /// The item list was rejected before any drawing happened. No document
    /// (and no partial byte stream) exists when this is returned; callers
    /// map it to a client-error response.
    #[error("invalid invoice input: {0}")]
    InvalidInput(String),

    // -- Serialization --
    /// PDF serialization failed. Either the full document is serialized or
    /// nothing is — this error is never accompanied by partial output.
    #[error("PDF render failed: {0}")]
    Render(String),

    // -- Ambient --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, FakturaError>;
