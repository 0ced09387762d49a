// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the command-line tools.
//
// Every technical error is mapped to plain English with a clear suggestion.

use crate::error::BildwerkError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Disk or filesystem hiccup — often fixed by retrying.
    Transient,
    /// User must adjust their input (path, bounds, selector).
    ActionRequired,
    /// Cannot be fixed by retrying or adjusting — corrupt file, bad format.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Severity level (drives presentation).
    pub severity: Severity,
}

/// Convert a `BildwerkError` into a `HumanError` anyone can act on.
pub fn humanize_error(err: &BildwerkError) -> HumanError {
    match err {
        // -- Contract errors --
        BildwerkError::UnknownSelector { what, value } => HumanError {
            message: format!("\"{value}\" is not a valid {what} option."),
            suggestion: selector_hint(what).to_string(),
            severity: Severity::ActionRequired,
        },

        BildwerkError::InvalidArgument(detail) => HumanError {
            message: "One of the supplied values doesn't make sense.".into(),
            suggestion: format!("Check the value and try again. ({detail})"),
            severity: Severity::ActionRequired,
        },

        BildwerkError::CropOutOfRange {
            region,
            width,
            height,
        } => HumanError {
            message: "The crop rectangle falls outside the picture.".into(),
            suggestion: format!(
                "The picture is {width} pixels wide and {height} tall; \
                 choose a region within that ({region} was requested)."
            ),
            severity: Severity::ActionRequired,
        },

        // -- Codec errors --
        BildwerkError::Codec(detail) => HumanError {
            message: "This picture couldn't be read or written.".into(),
            suggestion: format!(
                "Make sure the file is a valid image (PNG, JPEG, TIFF…). ({detail})"
            ),
            severity: Severity::Permanent,
        },

        // -- Storage / configuration --
        BildwerkError::Io(detail) => HumanError {
            message: "A file couldn't be accessed.".into(),
            suggestion: format!(
                "Check the path exists and you have permission, then try again. ({detail})"
            ),
            severity: Severity::Transient,
        },

        BildwerkError::Serialization(detail) => HumanError {
            message: "The configuration file couldn't be understood.".into(),
            suggestion: format!("Fix the JSON and try again. ({detail})"),
            severity: Severity::ActionRequired,
        },
    }
}

/// Valid spellings for each selector family, quoted back to the user.
fn selector_hint(what: &str) -> &'static str {
    match what {
        "morphology" => "Use \"open\" or \"close\".",
        "threshold" => "Use \"gaussian\" or \"mean\".",
        "sobel axis" => "Use \"h\"/\"horizontal\" or \"v\"/\"vertical\".",
        "resize axis" => "Use \"h\"/\"height\" or \"w\"/\"width\".",
        _ => "Check the documented options for this flag.",
    }
}
