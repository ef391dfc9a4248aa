// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use proptest::prelude::*;
use tempfile::TempDir;

fn compare_text(expected: &str, actual: &str) -> Comparison {
    compare_lines(&normalize(expected), &normalize(actual))
}

fn report(comparison: &Comparison) -> String {
    let mut buf = Vec::new();
    comparison.write_report(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

fn assert_report(comparison: &Comparison, expected: &str) {
    similar_asserts::assert_eq!(report(comparison), expected.to_string());
}

#[test]
fn identical_files_match() {
    let comparison = compare_text("foo\nbar\n", "foo\nbar\n");

    assert_eq!(comparison.verdict(), Verdict::Match);
    assert_report(&comparison, "Tests Passed - Output PCC_TOTAL matches!\n");
    assert_eq!(comparison.verdict().exit_code(), 0);
}

#[test]
fn differing_line_is_reported_as_pair() {
    let comparison = compare_text("foo\nbar\n", "foo\nbaz\n");

    assert_eq!(comparison.verdict(), Verdict::Mismatch);
    assert_eq!(comparison.differences().len(), 1);
    assert_eq!(comparison.differences()[0].index, 1);
    assert_report(&comparison, "Files differ!\n- bar\n+ baz\n");
    assert_eq!(comparison.verdict().exit_code(), 1);
}

#[test]
fn prefix_reports_only_length_note() {
    let comparison = compare_text("foo\n", "foo\nbar\n");

    assert_eq!(comparison.verdict(), Verdict::Mismatch);
    assert!(comparison.differences().is_empty());
    assert_eq!(comparison.length_mismatch(), Some((1, 2)));
    assert_report(&comparison, "Files differ!\nFile lengths differ: 1 vs 2\n");
}

#[test]
fn pairs_come_before_length_note() {
    let comparison = compare_text("a\nb\nc\n", "a\nx\n");

    assert_report(&comparison, "Files differ!\n- b\n+ x\nFile lengths differ: 3 vs 2\n");
}

#[test]
fn multiple_pairs_follow_file_order() {
    let comparison = compare_text("1\n2\n3\n4\n", "1\nB\n3\nD\n");

    let indices: Vec<usize> = comparison.differences().iter().map(|d| d.index).collect();
    assert_eq!(indices, vec![1, 3]);
    assert_report(&comparison, "Files differ!\n- 2\n+ B\n- 4\n+ D\n");
}

#[test]
fn both_blank_files_match() {
    let comparison = compare_text("\n  \n\t\n", "");
    assert_eq!(comparison.verdict(), Verdict::Match);
    assert_eq!(comparison.length_mismatch(), None);
}

#[test]
fn line_endings_and_blank_placement_are_ignored() {
    let comparison = compare_text("foo\nbar\n", "\r\n  foo\r\n\r\n\tbar  \r\n\r\n");
    assert_eq!(comparison.verdict(), Verdict::Match);
}

#[test]
fn duplicates_are_not_collapsed() {
    let comparison = compare_text("a\na\n", "a\n");
    assert_eq!(comparison.verdict(), Verdict::Mismatch);
    assert_eq!(comparison.length_mismatch(), Some((2, 1)));
}

#[test]
fn compare_files_reads_both_paths() {
    let dir = TempDir::new().unwrap();
    let expected = dir.path().join("expected.txt");
    let actual = dir.path().join("actual.txt");
    std::fs::write(&expected, "char 'A' : 2 times\n").unwrap();
    std::fs::write(&actual, "char 'A' : 2 times\n\n").unwrap();

    let comparison = compare_files(&expected, &actual).unwrap();
    assert_eq!(comparison.verdict(), Verdict::Match);
}

#[test]
fn compare_files_fails_on_missing_second_path() {
    let dir = TempDir::new().unwrap();
    let expected = dir.path().join("expected.txt");
    let missing = dir.path().join("missing.txt");
    std::fs::write(&expected, "foo\n").unwrap();

    let err = compare_files(&expected, &missing).unwrap_err();
    assert_eq!(err.path(), missing.as_path());
}

fn line_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9':]{1,8}( [a-z0-9':]{1,8}){0,2}"
}

fn pad_strategy() -> impl Strategy<Value = String> {
    "[ \t]{0,3}"
}

proptest! {
    #[test]
    fn comparing_with_itself_matches(text in "[ -~\n\r\t]{0,200}") {
        prop_assert_eq!(compare_text(&text, &text).verdict(), Verdict::Match);
    }

    #[test]
    fn blank_lines_never_change_verdict(
        lines in prop::collection::vec(line_strategy(), 0..10),
        blanks in prop::collection::vec(pad_strategy(), 0..10),
    ) {
        let plain = lines.join("\n");
        let mut padded = String::new();
        for (i, line) in lines.iter().enumerate() {
            if let Some(blank) = blanks.get(i) {
                padded.push_str(blank);
                padded.push('\n');
            }
            padded.push_str(line);
            padded.push('\n');
        }
        prop_assert_eq!(compare_text(&plain, &padded).verdict(), Verdict::Match);
    }

    #[test]
    fn surrounding_whitespace_never_changes_verdict(
        lines in prop::collection::vec((pad_strategy(), line_strategy(), pad_strategy()), 0..10),
    ) {
        let plain: Vec<&str> = lines.iter().map(|(_, line, _)| line.as_str()).collect();
        let padded: Vec<String> = lines
            .iter()
            .map(|(before, line, after)| format!("{}{}{}", before, line, after))
            .collect();
        prop_assert_eq!(
            compare_text(&plain.join("\n"), &padded.join("\n")).verdict(),
            Verdict::Match
        );
    }

    #[test]
    fn swapping_distinct_lines_mismatches(
        lines in prop::collection::vec(line_strategy(), 2..10),
        i in any::<prop::sample::Index>(),
        j in any::<prop::sample::Index>(),
    ) {
        let i = i.index(lines.len());
        let j = j.index(lines.len());
        prop_assume!(lines[i] != lines[j]);

        let mut swapped = lines.clone();
        swapped.swap(i, j);
        prop_assert_eq!(
            compare_text(&lines.join("\n"), &swapped.join("\n")).verdict(),
            Verdict::Mismatch
        );
    }

    #[test]
    fn shared_prefix_reports_only_length_note(
        lines in prop::collection::vec(line_strategy(), 0..10),
        extra in prop::collection::vec(line_strategy(), 1..5),
    ) {
        let longer: Vec<String> = lines.iter().chain(&extra).cloned().collect();
        let comparison = compare_text(&lines.join("\n"), &longer.join("\n"));

        prop_assert!(comparison.differences().is_empty());
        prop_assert_eq!(comparison.length_mismatch(), Some((lines.len(), longer.len())));
        prop_assert_eq!(comparison.verdict(), Verdict::Mismatch);
    }
}
