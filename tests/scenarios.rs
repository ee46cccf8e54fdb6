//! End-to-end tests: text -> tree -> identifiers -> truth table -> report.

use bitgen::report::{Report, TreeStyle};
use bitgen::{build_truth_table, build_truth_table_with, collect, parse, Error, WidthPolicy};

fn lut(formula: &str) -> Result<Vec<bool>, Error> {
    let root = parse(formula)?;
    let ids = collect(&root);
    Ok(build_truth_table(&ids, &root)?.into_rows())
}

// ─── Truth tables ──────────────────────────────────────────────────────────────

#[test]
fn and_of_two() {
    assert_eq!(lut("a AND b"), Ok(vec![false, false, false, true]));
}

#[test]
fn or_of_two() {
    assert_eq!(lut("a OR b"), Ok(vec![false, true, true, true]));
}

#[test]
fn not_of_one_repeats_rows() {
    let rows = lut("NOT a").unwrap();
    assert_eq!(rows.len(), 4);
    assert!(rows[0] && rows[2]);
    assert!(!rows[1] && !rows[3]);
}

#[test]
fn five_identifiers_exceed_capacity() {
    let res = lut("a AND b AND c AND d AND e");
    assert_eq!(res, Err(Error::CapacityExceeded { found: 5, max: 4 }));
    assert_eq!(res.unwrap_err().exit_code(), 2);
}

#[test]
fn parse_failure_is_distinct_from_capacity() {
    let err = lut("a AND (b").unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn four_identifiers_fill_lut4() {
    let rows = lut("(a || b) == (c && !d)").unwrap();
    assert_eq!(rows.len(), 16);
    for (code, &row) in rows.iter().enumerate() {
        let bit = |j: usize| (code >> j) & 1 == 1;
        assert_eq!(row, (bit(0) || bit(1)) == (bit(2) && !bit(3)), "code {}", code);
    }
}

#[test]
fn bit_order_follows_first_appearance() {
    // b is seen first, so it owns bit 0
    let rows = lut("b && !a").unwrap();
    assert_eq!(rows, vec![false, true, false, false]);
}

#[test]
fn exact_width_has_no_repeats() {
    let root = parse("a != (b && c)").unwrap();
    let ids = collect(&root);
    let tt = build_truth_table_with(&ids, &root, WidthPolicy::Exact).unwrap();
    assert_eq!(tt.width().bits(), 3);
    assert_eq!(tt.to_string(), "01010110");
}

#[test]
fn repeated_runs_are_identical() {
    let formula = "(x == y) || !(z != x)";
    assert_eq!(lut(formula), lut(formula));
}

// ─── Report ────────────────────────────────────────────────────────────────────

#[test]
fn report_for_or() {
    let root = parse("a || !b").unwrap();
    let ids = collect(&root);
    let tt = build_truth_table(&ids, &root).unwrap();
    let report = Report {
        root: &root,
        identifiers: &ids,
        table: &tt,
        style: TreeStyle::Legacy,
    };
    let expected = "\
(a op op b)
Found 2 unique identifiers
a: 1 occurrences
b: 1 occurrences
Generating a lut2.
01101
";
    assert_eq!(report.to_string(), expected);
}

#[test]
fn report_with_symbols() {
    let root = parse("x == x").unwrap();
    let ids = collect(&root);
    let tt = build_truth_table(&ids, &root).unwrap();
    let report = Report {
        root: &root,
        identifiers: &ids,
        table: &tt,
        style: TreeStyle::Symbols,
    };
    let text = report.to_string();
    assert!(text.starts_with("(x == x)\n"));
    assert!(text.contains("x: 2 occurrences\n"));
    assert!(text.ends_with("01111\n"));
}
