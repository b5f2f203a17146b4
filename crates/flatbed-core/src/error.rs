// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Flatbed.

use thiserror::Error;

/// Why a single scan attempt failed.
///
/// Every variant is terminal for the call that produced it. Only
/// `NoDocumentDetected` is worth retrying, and only with a different frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("input frame is empty")]
    EmptyInput,

    #[error("no document-shaped quadrilateral found in frame")]
    NoDocumentDetected,

    #[error("expected 4 corners, found {found}")]
    InvalidCornerCount { found: usize },

    #[error("crop margin {margin}px leaves nothing of a {width}x{height} output")]
    InvalidCropRegion { width: u32, height: u32, margin: u32 },
}

impl ScanError {
    /// Whether grabbing another frame and scanning again could succeed.
    pub fn is_retriable(&self) -> bool {
        matches!(self, Self::NoDocumentDetected)
    }
}

/// Top-level error type for all Flatbed operations.
#[derive(Debug, Error)]
pub enum FlatbedError {
    #[error("scan failed: {0}")]
    Scan(#[from] ScanError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("image processing failed: {0}")]
    ImageError(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, FlatbedError>;
