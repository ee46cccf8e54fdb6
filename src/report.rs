//! Text rendering of a bitgen run.
//!
//! ```text
//! (a op b)
//! Found 2 unique identifiers
//! a: 1 occurrences
//! b: 1 occurrences
//! Generating a lut2.
//! 00001
//! ```
//!
//! The last line is the literal marker `0` followed by one digit per row.

use std::fmt::{self, Write};

use crate::ast::Expression;
use crate::collect::IdentifierTable;
use crate::table::TruthTable;

/// Leading marker printed before the table rows.
pub const LUT_MARKER: char = '0';

/// How the expression tree is rendered on the first line.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum TreeStyle {
    /// Placeholder `op` for every operator.
    #[default]
    Legacy,
    /// Real operator symbols.
    Symbols,
}

pub fn render_tree(root: &Expression, style: TreeStyle) -> String {
    match style {
        TreeStyle::Legacy => root.pretty_print(),
        TreeStyle::Symbols => root.to_string(),
    }
}

/// Identifier summary, one line per name in discovery order.
pub fn render_identifiers(table: &IdentifierTable<'_>) -> String {
    let mut out = String::new();
    writeln!(out, "Found {} unique identifiers", table.len()).unwrap();
    for (name, count) in table.counts() {
        writeln!(out, "{}: {} occurrences", name, count).unwrap();
    }
    out
}

pub fn render_lut(tt: &TruthTable) -> String {
    format!("{}{}", LUT_MARKER, tt)
}

/// Full report for a successful run.
pub struct Report<'r, 'a> {
    pub root: &'r Expression,
    pub identifiers: &'r IdentifierTable<'a>,
    pub table: &'r TruthTable,
    pub style: TreeStyle,
}

impl fmt::Display for Report<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", render_tree(self.root, self.style))?;
        write!(f, "{}", render_identifiers(self.identifiers))?;
        writeln!(f, "Generating a lut{}.", self.table.width())?;
        writeln!(f, "{}", render_lut(self.table))
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::collect::collect;
    use crate::table::build_truth_table;

    #[test]
    fn test_report() {
        let e = Expression::and(Expression::ident("a"), Expression::not(Expression::ident("a")));
        let ids = collect(&e);
        let tt = build_truth_table(&ids, &e).unwrap();
        let report = Report {
            root: &e,
            identifiers: &ids,
            table: &tt,
            style: TreeStyle::Legacy,
        };
        let expected = "(a op op a)\nFound 1 unique identifiers\na: 2 occurrences\nGenerating a lut2.\n00000\n";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn test_render_tree_styles() {
        let e = Expression::or(Expression::ident("a"), Expression::ident("b"));
        assert_eq!(render_tree(&e, TreeStyle::Legacy), "(a op b)");
        assert_eq!(render_tree(&e, TreeStyle::Symbols), "(a || b)");
    }
}
