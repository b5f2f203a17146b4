// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for people holding a camera over a sheet of paper.
//
// Every technical error is mapped to plain English with a clear suggestion.
// The severity drives how a front end presents it: retry quietly on the next
// frame, ask the user to do something, or report a setup problem.

use crate::error::{FlatbedError, ScanError};

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Nothing found in this frame; the next one may work.
    Transient,
    /// User must do something (point the camera, pick a file).
    ActionRequired,
    /// Cannot succeed until the setup changes.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Whether scanning another frame could succeed.
    pub retriable: bool,
    /// Severity level.
    pub severity: Severity,
}

/// Convert a `FlatbedError` into a `HumanError`.
pub fn humanize_error(err: &FlatbedError) -> HumanError {
    match err {
        FlatbedError::Scan(scan) => humanize_scan_error(scan),

        FlatbedError::InvalidConfig(detail) => HumanError {
            message: "The scanner settings don't work.".into(),
            suggestion: format!("Check the configuration file or command-line options. ({detail})"),
            retriable: false,
            severity: Severity::Permanent,
        },

        FlatbedError::ImageError(_) => HumanError {
            message: "There's a problem with this image.".into(),
            suggestion: "The image may be damaged or in an unusual format. Try saving it as a JPEG or PNG first.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        FlatbedError::Io(io) => HumanError {
            message: "A file couldn't be read or written.".into(),
            suggestion: format!("Check that the path exists and that you are allowed to write there. ({io})"),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        FlatbedError::Serialization(_) => HumanError {
            message: "The configuration file couldn't be understood.".into(),
            suggestion: "Make sure it is valid JSON. Run `flatbed config` to see a working example.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },
    }
}

/// Map a per-scan failure. Kept separate so capture loops can call it without
/// wrapping the error first.
pub fn humanize_scan_error(err: &ScanError) -> HumanError {
    match err {
        ScanError::EmptyInput => HumanError {
            message: "There was no picture to scan.".into(),
            suggestion: "Make sure the camera is working, or choose an image file, then try again.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        ScanError::NoDocumentDetected => HumanError {
            message: "We couldn't find the page.".into(),
            suggestion: "Place the whole page in view on a darker surface, with all four corners visible, then try again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        ScanError::InvalidCornerCount { found } => HumanError {
            message: "The scanner got confused finding the page corners.".into(),
            suggestion: format!("Please try again. If it keeps happening, report it as a bug (found {found} corners)."),
            retriable: false,
            severity: Severity::Permanent,
        },

        ScanError::InvalidCropRegion {
            width,
            height,
            margin,
        } => HumanError {
            message: "The output page size is too small.".into(),
            suggestion: format!(
                "A {width}x{height} page leaves nothing after trimming {margin} pixels from each edge. Choose a larger output size."
            ),
            retriable: false,
            severity: Severity::Permanent,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_document_is_transient() {
        let human = humanize_error(&ScanError::NoDocumentDetected.into());
        assert_eq!(human.severity, Severity::Transient);
        assert!(human.retriable);
    }

    #[test]
    fn empty_input_is_action_required() {
        let human = humanize_error(&ScanError::EmptyInput.into());
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(!human.retriable);
    }

    #[test]
    fn crop_region_is_permanent() {
        let err = ScanError::InvalidCropRegion {
            width: 15,
            height: 15,
            margin: 10,
        };
        let human = humanize_scan_error(&err);
        assert_eq!(human.severity, Severity::Permanent);
        assert!(human.suggestion.contains("15x15"));
    }

    #[test]
    fn bad_config_is_permanent() {
        let err = FlatbedError::InvalidConfig("blur kernel size must be odd, got 4".into());
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::Permanent);
        assert!(!human.retriable);
    }
}
