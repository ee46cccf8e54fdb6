//! # bitgen: truth tables for small boolean formulas
//!
//! **`bitgen`** evaluates a boolean formula over up to four named variables and
//! produces its complete truth table (a LUT), one row per variable assignment.
//!
//! ## Pipeline
//!
//! 1. [`parser::parse`] turns text into an owned [`Expression`] tree.
//! 2. [`collect::collect`] walks the tree and builds the [`IdentifierTable`],
//!    naming each variable in order of first appearance.
//! 3. [`table::build_truth_table`] derives the bit-width from the number of
//!    variables and evaluates the tree once per code.
//!
//! ## Basic Usage
//!
//! ```rust
//! use bitgen::{collect, parse, build_truth_table};
//!
//! let root = parse("a && b").unwrap();
//! let ids = collect(&root);
//! let tt = build_truth_table(&ids, &root).unwrap();
//!
//! // code 3 binds a = 1 and b = 1
//! assert_eq!(tt.rows(), &[false, false, false, true]);
//! ```
//!
//! Bit `j` of a code is the value of the `j`-th variable discovered, so `a`
//! above is bit 0 and `b` is bit 1. Formulas with more than
//! [`MAX_IDENTIFIERS`] distinct names are rejected with
//! [`Error::CapacityExceeded`].

pub mod ast;
pub mod collect;
pub mod error;
pub mod eval;
pub mod parser;
pub mod report;
pub mod run;
pub mod table;

pub use ast::{BinaryOp, ExprKind, Expression, Identifier, UnaryOp};
pub use collect::{collect, IdentifierTable};
pub use error::{Error, ParseError, Result};
pub use eval::{evaluate, Bindings};
pub use parser::parse;
pub use table::{build_truth_table, build_truth_table_with, BitWidth, TruthTable, WidthPolicy, MAX_IDENTIFIERS};
