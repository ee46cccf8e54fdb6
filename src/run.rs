//! One bitgen run over a formula's text, independent of where the text came from.

use log::info;

use crate::collect::collect;
use crate::error::{Error, EXIT_SUCCESS};
use crate::parser::parse;
use crate::report::{render_identifiers, render_tree, Report, TreeStyle};
use crate::table::{build_truth_table_with, WidthPolicy};

/// What a run printed and how it ended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: u8,
}

/// Parse `input`, build its truth table and render the report.
///
/// A formula that does not parse ends the run before any collection or
/// evaluation. A capacity rejection still prints the tree and the identifier
/// summary, followed by the rejection message.
pub fn run(input: &str, style: TreeStyle, policy: WidthPolicy) -> Outcome {
    let root = match parse(input) {
        Ok(root) => root,
        Err(e) => {
            let e = Error::from(e);
            return Outcome {
                stdout: String::new(),
                stderr: format!("{}\n", e),
                exit_code: e.exit_code(),
            };
        }
    };
    info!("Parsed formula with {} nodes (depth {})", root.size(), root.depth());

    let identifiers = collect(&root);
    match build_truth_table_with(&identifiers, &root, policy) {
        Ok(table) => {
            let report = Report {
                root: &root,
                identifiers: &identifiers,
                table: &table,
                style,
            };
            Outcome {
                stdout: report.to_string(),
                stderr: String::new(),
                exit_code: EXIT_SUCCESS,
            }
        }
        Err(e) => Outcome {
            stdout: format!(
                "{}\n{}{}\n",
                render_tree(&root, style),
                render_identifiers(&identifiers),
                e
            ),
            stderr: String::new(),
            exit_code: e.exit_code(),
        },
    }
}
