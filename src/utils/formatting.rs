//! Formatting utilities used for CLI outputs.

use crate::models::write_off::WriteOffKind;
use crate::utils::colors::{CYAN, GREEN, YELLOW};

pub fn hours2readable(hours: i64, want_sign: bool) -> String {
    let sign = if hours > 0 && want_sign {
        "+"
    } else if hours < 0 {
        "-"
    } else {
        ""
    };
    format!("{}{}h", sign, hours.abs())
}

/// Label and ANSI color for a record classification.
pub fn describe_kind(kind: WriteOffKind) -> (&'static str, &'static str) {
    match kind {
        WriteOffKind::Pending => ("pending", YELLOW),
        WriteOffKind::UserConfirmed => ("confirmed", GREEN),
        WriteOffKind::Committed => ("committed", CYAN),
    }
}
