//! Merges corrections from every cop into one rewritten buffer.
//!
//! Corrections are sorted by `(start, end, cop id, replacement)` and applied
//! in a single pass that copies untouched spans of the original text, so no
//! offset is ever re-derived after an earlier substitution.
//!
//! Conflicts resolve first-wins: a correction starting before the end of the
//! last applied one is dropped. An edit repeating the range and text of one
//! already applied is applied once. Insertions at the edge of a replaced
//! range do not conflict.

use constable_core::Correction;

/// Why a correction was not applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    /// Intersects an earlier applied correction from `kept`.
    Overlap { kept: String },
    /// Same range and text as an already applied correction.
    Duplicate,
    /// Out of bounds, inverted, or splits a UTF-8 character.
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteReport {
    pub source: String,
    pub applied: Vec<Correction>,
    pub dropped: Vec<(Correction, DropReason)>,
}

impl RewriteReport {
    pub fn changed(&self, original: &str) -> bool {
        self.source != original
    }
}

pub struct Corrector;

impl Corrector {
    pub fn rewrite(original: &str, corrections: Vec<Correction>) -> String {
        Self::rewrite_with_report(original, corrections).source
    }

    pub fn rewrite_with_report(original: &str, mut corrections: Vec<Correction>) -> RewriteReport {
        if corrections.is_empty() {
            return RewriteReport {
                source: original.to_string(),
                applied: Vec::new(),
                dropped: Vec::new(),
            };
        }

        corrections.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

        let mut source = String::with_capacity(original.len());
        let mut applied: Vec<Correction> = Vec::with_capacity(corrections.len());
        let mut dropped = Vec::new();
        let mut last_end = 0;
        // Index into `applied` of the edit that last advanced `last_end`.
        let mut blocker: Option<usize> = None;

        for correction in corrections {
            if !is_valid(original, &correction) {
                tracing::debug!(cop = %correction.cop_id, range = ?correction.range, "dropping invalid correction");
                dropped.push((correction, DropReason::Invalid));
                continue;
            }
            // Same-range edits are adjacent in `applied`, so scan back while the range matches.
            if applied
                .iter()
                .rev()
                .take_while(|prev| prev.range == correction.range)
                .any(|prev| prev.replacement == correction.replacement)
            {
                dropped.push((correction, DropReason::Duplicate));
                continue;
            }
            if correction.range.start < last_end {
                let kept = blocker
                    .map(|i| applied[i].cop_id.clone())
                    .unwrap_or_default();
                tracing::debug!(
                    cop = %correction.cop_id,
                    kept = %kept,
                    range = ?correction.range,
                    "dropping overlapping correction"
                );
                dropped.push((correction, DropReason::Overlap { kept }));
                continue;
            }

            source.push_str(&original[last_end..correction.range.start]);
            source.push_str(&correction.replacement);
            if correction.range.end > last_end || blocker.is_none() {
                blocker = Some(applied.len());
            }
            last_end = correction.range.end;
            applied.push(correction);
        }
        source.push_str(&original[last_end..]);

        RewriteReport {
            source,
            applied,
            dropped,
        }
    }
}

fn is_valid(original: &str, correction: &Correction) -> bool {
    let range = &correction.range;
    range.start <= range.end
        && range.end <= original.len()
        && original.is_char_boundary(range.start)
        && original.is_char_boundary(range.end)
}
