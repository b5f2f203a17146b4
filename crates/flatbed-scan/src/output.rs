// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Output persistence — encode rectified pages and write them to disk with
// timestamped names.

use std::path::{Path, PathBuf};

use flatbed_core::error::{FlatbedError, Result};
use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use tracing::{debug, info, instrument};

/// JPEG quality used by [`save_scan`].
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Encode an image as JPEG bytes with the given quality (1-100).
pub fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100));
    image
        .write_with_encoder(encoder)
        .map_err(|err| FlatbedError::ImageError(format!("JPEG encoding failed: {}", err)))?;
    Ok(buffer)
}

/// Write a scanned page into `dir` as `scan_<unix-seconds>.jpg`.
///
/// The directory tree is created if missing. A second scan within the same
/// second gets a `_1`, `_2`, ... suffix instead of overwriting the first.
/// Returns the path written.
#[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
pub fn save_scan(image: &RgbImage, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let path = unused_scan_path(dir, chrono::Utc::now().timestamp());
    let bytes = encode_jpeg(image, DEFAULT_JPEG_QUALITY)?;
    debug!(bytes = bytes.len(), "Scan encoded");
    std::fs::write(&path, bytes)?;

    info!(path = %path.display(), "Scan saved");
    Ok(path)
}

fn unused_scan_path(dir: &Path, timestamp: i64) -> PathBuf {
    let mut path = dir.join(format!("scan_{timestamp}.jpg"));
    let mut n = 1;
    while path.exists() {
        path = dir.join(format!("scan_{timestamp}_{n}.jpg"));
        n += 1;
    }
    path
}
