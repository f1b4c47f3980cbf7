//! os-release line grammar
//!
//! Each line of an os-release file is one of:
//!
//! - blank, or a comment whose first non-space character is `#`
//! - `KEY="VALUE"`
//! - `KEY='VALUE'`
//! - `KEY=VALUE`
//!
//! `KEY` is one or more of `[A-Z0-9_]` starting at the first column. The
//! quoted forms are tried before the bare form and the first match wins.
//! A quoted value is everything between the opening quote and the last
//! occurrence of the same quote character on the line; text after that
//! closing quote is dropped. No escape sequences are interpreted. A line
//! with an opening quote but no closing one falls through to the bare form
//! and keeps the quote in its value.

use crate::attrs::fold_case;
use regex::Regex;
use std::sync::OnceLock;

/// Reserved key that parsed content may never set
pub const RESERVED_KEY: &str = "config";

/// Result of classifying a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// Blank line, comment, or discarded reserved assignment
    Skip,
    /// Assignment with the key already folded
    Assignment { key: String, value: String },
    /// Line matching none of the assignment forms
    Malformed,
}

/// Assignment patterns in match priority order
fn assignment_patterns() -> &'static [Regex; 3] {
    static PATTERNS: OnceLock<[Regex; 3]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            Regex::new(r#"^([A-Z0-9_]+)="(.*)""#).expect("Invalid double-quote regex"),
            Regex::new(r"^([A-Z0-9_]+)='(.*)'").expect("Invalid single-quote regex"),
            Regex::new(r"^([A-Z0-9_]+)=(.*)$").expect("Invalid bare value regex"),
        ]
    })
}

/// Classify one line of os-release content.
///
/// The line should not carry its terminator; a trailing `\r` is not
/// stripped and ends up in a bare value.
pub fn parse_line(line: &str) -> ParsedLine {
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return ParsedLine::Skip;
    }

    for pattern in assignment_patterns() {
        if let Some(caps) = pattern.captures(line) {
            let key = fold_case(&caps[1]);
            if key == RESERVED_KEY {
                tracing::debug!("Discarding assignment to reserved key: {}", &caps[1]);
                return ParsedLine::Skip;
            }
            return ParsedLine::Assignment {
                key,
                value: caps[2].to_string(),
            };
        }
    }

    ParsedLine::Malformed
}
