//! Crate-level error types.

use std::fmt;

/// Errors produced by the lakeview crate.
///
/// Only configuration loading is fallible; motion updates never return
/// errors.
#[derive(Debug)]
pub enum LakeviewError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A single rejected line of the prop placement config.
    PropConfig {
        /// 1-based line number in the source text.
        line: usize,
        /// What was wrong with the line.
        kind: PropLineError,
    },
}

/// Reasons a prop config line is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropLineError {
    /// `[]` header with nothing inside.
    EmptySectionName,
    /// Non-header line with no `=` delimiter.
    MissingDelimiter,
    /// `key = value` before any `[section]` header.
    KeyOutsideSection,
    /// Key not recognized; the line is ignored.
    UnknownKey(String),
    /// Value could not be parsed for the named key.
    BadValue {
        /// Key whose value failed to parse.
        key: String,
        /// Raw value text.
        value: String,
    },
}

impl fmt::Display for PropLineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySectionName => write!(f, "empty section name"),
            Self::MissingDelimiter => write!(f, "expected '='"),
            Self::KeyOutsideSection => write!(f, "key outside any section"),
            Self::UnknownKey(key) => write!(f, "unknown key '{key}'"),
            Self::BadValue { key, value } => {
                write!(f, "cannot parse '{value}' for '{key}'")
            }
        }
    }
}

impl fmt::Display for LakeviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::PropConfig { line, kind } => {
                write!(f, "prop config line {line}: {kind}")
            }
        }
    }
}

impl std::error::Error for LakeviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LakeviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
