//! Corrector tests: ordering, first-wins overlap policy, duplicates, invalid
//! ranges, and order independence.

use constable_analysis::{Corrector, DropReason};
use constable_core::Correction;
use proptest::prelude::*;

const TEXT: &str = "abcdef";

fn fix(range: std::ops::Range<usize>, text: &str, cop: &str) -> Correction {
    Correction::new(range, text, cop)
}

// ---- Application ----

#[test]
fn unsorted_corrections_apply_at_original_offsets() {
    let out = Corrector::rewrite(TEXT, vec![fix(4..6, "EF", "B"), fix(0..1, "AAA", "A")]);
    assert_eq!(out, "AAAbcdEF");
}

#[test]
fn growing_and_shrinking_edits_do_not_shift_later_ones() {
    let source = "test = :BadIdea\nother = :AlsoBad\n";
    let first = source.find(":BadIdea").unwrap() + 1;
    let second = source.find(":AlsoBad").unwrap() + 1;
    let out = Corrector::rewrite(
        source,
        vec![
            fix(second..second + 7, "also_bad", "SymbolName"),
            fix(first..first + 7, "bad_idea", "SymbolName"),
        ],
    );
    assert_eq!(out, "test = :bad_idea\nother = :also_bad\n");
}

#[test]
fn multibyte_text_is_copied_intact() {
    let source = "é = :Bad # ü\n";
    let start = source.find(":Bad").unwrap() + 1;
    let out = Corrector::rewrite(source, vec![fix(start..start + 3, "bad", "SymbolName")]);
    assert_eq!(out, "é = :bad # ü\n");
}

// ---- Conflicts ----

#[test]
fn overlap_keeps_the_first_by_position() {
    let report = Corrector::rewrite_with_report(TEXT, vec![fix(2..6, "Y", "B"), fix(0..4, "X", "A")]);
    assert_eq!(report.source, "Xef");
    assert_eq!(report.applied, vec![fix(0..4, "X", "A")]);
    assert_eq!(
        report.dropped,
        vec![(fix(2..6, "Y", "B"), DropReason::Overlap { kept: "A".into() })]
    );
}

#[test]
fn same_start_prefers_the_shorter_range() {
    let out = Corrector::rewrite(TEXT, vec![fix(0..4, "Q", "A"), fix(0..2, "P", "B")]);
    assert_eq!(out, "Pcdef");
}

#[test]
fn overlap_with_equal_ranges_is_decided_by_cop_id() {
    let out = Corrector::rewrite(TEXT, vec![fix(1..3, "zz", "Zeta"), fix(1..3, "aa", "Alpha")]);
    assert_eq!(out, "aaadef");
}

#[test]
fn exact_duplicates_apply_once() {
    let report = Corrector::rewrite_with_report(TEXT, vec![fix(0..1, "z", "A"), fix(0..1, "z", "A")]);
    assert_eq!(report.source, "zbcdef");
    assert_eq!(report.applied.len(), 1);
    assert_eq!(report.dropped[0].1, DropReason::Duplicate);
}

#[test]
fn repeated_insertions_apply_once_when_split_by_another() {
    let report = Corrector::rewrite_with_report(
        "ab",
        vec![
            Correction::insert(1, "X", "A"),
            Correction::insert(1, "Y", "A"),
            Correction::insert(1, "X", "B"),
        ],
    );
    assert_eq!(report.source, "aXYb");
    assert_eq!(report.applied.len(), 2);
    assert_eq!(report.dropped.len(), 1);
    assert_eq!(report.dropped[0].0.cop_id, "B");
    assert_eq!(report.dropped[0].1, DropReason::Duplicate);
}

#[test]
fn insertions_at_range_edges_are_not_overlaps() {
    let out = Corrector::rewrite(
        TEXT,
        vec![
            fix(0..3, "X", "A"),
            Correction::insert(3, "!", "B"),
            Correction::insert(0, "<", "C"),
        ],
    );
    assert_eq!(out, "<X!def");
}

#[test]
fn insertion_inside_a_replaced_range_is_dropped() {
    let report = Corrector::rewrite_with_report(TEXT, vec![fix(0..4, "X", "A"), Correction::insert(2, "!", "B")]);
    assert_eq!(report.source, "Xef");
    assert!(matches!(report.dropped[0].1, DropReason::Overlap { .. }));
}

#[test]
fn insertions_at_one_point_all_apply_in_cop_order() {
    let out = Corrector::rewrite(
        TEXT,
        vec![Correction::insert(3, "2", "B"), Correction::insert(3, "1", "A")],
    );
    assert_eq!(out, "abc12def");
}

#[test]
fn invalid_ranges_are_dropped() {
    #[allow(clippy::reversed_empty_ranges)]
    let inverted = fix(4..2, "X", "A");
    let report = Corrector::rewrite_with_report(
        TEXT,
        vec![inverted, fix(3..99, "Y", "B"), fix(5..6, "F", "C")],
    );
    assert_eq!(report.source, "abcdeF");
    assert_eq!(report.dropped.len(), 2);
    assert!(report.dropped.iter().all(|(_, r)| *r == DropReason::Invalid));
    assert!(report.changed(TEXT));
}

#[test]
fn removal_deletes_the_range() {
    let out = Corrector::rewrite("a = 1   \n", vec![Correction::new(5..8, "", "TrailingWhitespace")]);
    assert_eq!(out, "a = 1\n");
}

// ---- Properties ----

fn corrections() -> impl Strategy<Value = Vec<Correction>> {
    prop::collection::vec(
        (0usize..24, 0usize..5, "[a-z]{0,3}", prop::sample::select(vec!["A", "B", "C"])),
        0..10,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .map(|(start, len, text, cop)| Correction::new(start..start + len, text, cop))
            .collect()
    })
}

proptest! {
    #[test]
    fn output_does_not_depend_on_input_order(
        (original, shuffled) in corrections().prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let text = "abcdefghijklmnopqrst";
        prop_assert_eq!(
            Corrector::rewrite(text, original),
            Corrector::rewrite(text, shuffled)
        );
    }

    #[test]
    fn applied_corrections_never_overlap(input in corrections()) {
        let text = "abcdefghijklmnopqrst";
        let count = input.len();
        let report = Corrector::rewrite_with_report(text, input);

        prop_assert_eq!(report.applied.len() + report.dropped.len(), count);
        for (i, a) in report.applied.iter().enumerate() {
            prop_assert!(a.range.end <= text.len());
            for b in &report.applied[i + 1..] {
                prop_assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn no_applied_corrections_means_unchanged_text(input in corrections()) {
        let text = "abcdefghijklmnopqrst";
        let report = Corrector::rewrite_with_report(text, input);
        if report.applied.is_empty() {
            prop_assert_eq!(report.source, text);
        }
    }
}
