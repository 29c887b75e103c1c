//! A proposed text edit against the original buffer.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Replace `range` (half-open byte offsets into the original buffer) with
/// `replacement`. An empty range is an insertion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Correction {
    pub range: Range<usize>,
    pub replacement: String,
    pub cop_id: String,
}

impl Correction {
    pub fn new(range: Range<usize>, replacement: impl Into<String>, cop_id: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
            cop_id: cop_id.into(),
        }
    }

    pub fn insert(at: usize, text: impl Into<String>, cop_id: impl Into<String>) -> Self {
        Self::new(at..at, text, cop_id)
    }

    /// True if both edits touch a common byte. Zero-width insertions only
    /// conflict with a range that strictly contains their position.
    pub fn overlaps(&self, other: &Correction) -> bool {
        let (a, b) = (&self.range, &other.range);
        if a.is_empty() && b.is_empty() {
            return false;
        }
        if a.is_empty() {
            return b.start < a.start && a.start < b.end;
        }
        if b.is_empty() {
            return a.start < b.start && b.start < a.end;
        }
        a.start < b.end && b.start < a.end
    }

    /// Sort key used by the corrector: position first, then a total tiebreak.
    pub fn sort_key(&self) -> (usize, usize, &str, &str) {
        (self.range.start, self.range.end, self.cop_id.as_str(), self.replacement.as_str())
    }
}
