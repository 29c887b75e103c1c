//! Offences, diagnostics and their deterministic order.

use std::cmp::{Ordering, Reverse};
use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::constants::SYNTAX_COP_ID;

/// Offence severity, least severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Refactor,
    Convention,
    Warning,
    Error,
    Fatal,
}

impl Severity {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Refactor => "refactor",
            Self::Convention => "convention",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }

    /// One-letter code used in compact output.
    pub fn code(&self) -> char {
        match self {
            Self::Refactor => 'R',
            Self::Convention => 'C',
            Self::Warning => 'W',
            Self::Error => 'E',
            Self::Fatal => 'F',
        }
    }

    /// Error and fatal findings mean the tree cannot be trusted.
    pub fn is_syntax_blocking(&self) -> bool {
        *self >= Self::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "refactor" | "r" => Ok(Self::Refactor),
            "convention" | "c" => Ok(Self::Convention),
            "warning" | "w" => Ok(Self::Warning),
            "error" | "e" => Ok(Self::Error),
            "fatal" | "f" => Ok(Self::Fatal),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

/// Source position: 1-based line and character column, plus the byte range.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
    pub range: Range<usize>,
}

impl Location {
    pub fn new(line: usize, column: usize, range: Range<usize>) -> Self {
        Self { line, column, range }
    }
}

/// A parser-level finding. Converted into an [`Offence`] right after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub location: Location,
    pub message: String,
}

impl Diagnostic {
    pub fn new(severity: Severity, location: Location, message: impl Into<String>) -> Self {
        Self {
            severity,
            location,
            message: message.into(),
        }
    }
}

/// One reported finding. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offence {
    location: Location,
    severity: Severity,
    cop_id: String,
    message: String,
}

impl Offence {
    pub fn new(
        location: Location,
        severity: Severity,
        cop_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            location,
            severity,
            cop_id: cop_id.into(),
            message: message.into(),
        }
    }

    pub fn from_diagnostic(diagnostic: Diagnostic) -> Self {
        Self {
            location: diagnostic.location,
            severity: diagnostic.severity,
            cop_id: SYNTAX_COP_ID.to_string(),
            message: diagnostic.message,
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn column(&self) -> usize {
        self.location.column
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn cop_id(&self) -> &str {
        &self.cop_id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn order_key(&self) -> (usize, usize, Reverse<Severity>, &str, &str, usize, usize) {
        (
            self.location.line,
            self.location.column,
            Reverse(self.severity),
            &self.cop_id,
            &self.message,
            self.location.range.start,
            self.location.range.end,
        )
    }
}

/// Line, column, most severe first, cop id, then message and range.
impl Ord for Offence {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order_key().cmp(&other.order_key())
    }
}

impl PartialOrd for Offence {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Offence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}: [{}] {}",
            self.location.line,
            self.location.column,
            self.severity.code(),
            self.cop_id,
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_rank() {
        assert!(Severity::Refactor < Severity::Convention);
        assert!(Severity::Convention < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
        assert!(Severity::Error.is_syntax_blocking());
        assert!(!Severity::Warning.is_syntax_blocking());
        assert_eq!("W".parse::<Severity>(), Ok(Severity::Warning));
    }

    #[test]
    fn display_is_compact() {
        let offence = Offence::new(
            Location::new(3, 8, 20..28),
            Severity::Convention,
            "SymbolName",
            "Use snake_case for symbols.",
        );
        assert_eq!(offence.to_string(), "3:8: C: [SymbolName] Use snake_case for symbols.");
    }
}
