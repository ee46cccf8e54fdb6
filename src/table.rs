//! Truth-table enumeration.
//!
//! Every row of the table is indexed by an integer `code`. Bit `j` of the code
//! is the value bound to the `j`-th identifier in discovery order, so bit 0
//! (least significant) belongs to the first name seen by [`collect`][crate::collect::collect].
//!
//! The number of bits used for codes is the [`BitWidth`]. By default it is
//! snapped to the buckets `{0, 2, 4}`, matching the `lut2`/`lut4` shapes the
//! output has always had. When fewer identifiers than bits exist, the high bits
//! are don't-cares and rows repeat:
//!
//! ```text
//! !a  (n = 1, width 2)   codes 0..4  =>  1 0 1 0
//! ```
//!
//! [`WidthPolicy::Exact`] uses exactly `n` bits instead.

use std::fmt;
use std::ops::Index;

use log::{debug, trace};

use crate::ast::Expression;
use crate::collect::IdentifierTable;
use crate::error::{Error, Result};
use crate::eval::{evaluate, Bindings};

/// Largest number of distinct identifiers a table can be built for.
pub const MAX_IDENTIFIERS: usize = 4;

/// How the bit-width is derived from the number of identifiers.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum WidthPolicy {
    /// `0` for no identifiers, `2` for one or two, `4` for three or four.
    #[default]
    Snapped,
    /// Exactly one bit per identifier.
    Exact,
}

/// Number of bits in an enumeration code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct BitWidth(u32);

impl BitWidth {
    /// Derive the width for `n` distinct identifiers.
    ///
    /// Fails with [`Error::CapacityExceeded`] if `n > MAX_IDENTIFIERS`.
    pub fn for_identifiers(n: usize, policy: WidthPolicy) -> Result<Self> {
        if n > MAX_IDENTIFIERS {
            return Err(Error::capacity_exceeded(n));
        }
        let bits = match policy {
            WidthPolicy::Snapped => match n {
                0 => 0,
                1..=2 => 2,
                _ => 4,
            },
            WidthPolicy::Exact => n as u32,
        };
        Ok(BitWidth(bits))
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    /// Number of rows, `2^bits`.
    pub fn rows(self) -> usize {
        1 << self.0
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Build the assignment for `code`: the `j`-th name gets bit `j` of `code`.
pub fn bind(table: &IdentifierTable<'_>, code: u32) -> Bindings {
    let mut bindings = Bindings::with_capacity(table.len());
    for (j, name) in table.names().enumerate() {
        bindings.set(name, (code >> j) & 1 == 1);
    }
    bindings
}

/// Iterator over `(code, bindings)` for all codes of a given width, in increasing order.
pub struct Assignments<'t, 'a> {
    table: &'t IdentifierTable<'a>,
    code: u32,
    end: u32,
}

impl<'t, 'a> Assignments<'t, 'a> {
    pub fn new(table: &'t IdentifierTable<'a>, width: BitWidth) -> Self {
        Self {
            table,
            code: 0,
            end: 1 << width.bits(),
        }
    }
}

impl Iterator for Assignments<'_, '_> {
    type Item = (u32, Bindings);

    fn next(&mut self) -> Option<Self::Item> {
        if self.code >= self.end {
            return None;
        }
        let code = self.code;
        self.code += 1;
        Some((code, bind(self.table, code)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.code) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Assignments<'_, '_> {}

/// Evaluation results, one per code, in increasing code order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    width: BitWidth,
    rows: Vec<bool>,
}

impl TruthTable {
    pub fn width(&self) -> BitWidth {
        self.width
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[bool] {
        &self.rows
    }

    pub fn get(&self, code: usize) -> Option<bool> {
        self.rows.get(code).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().copied()
    }

    /// Number of rows evaluating to `true`.
    pub fn count_ones(&self) -> usize {
        self.rows.iter().filter(|&&r| r).count()
    }

    pub fn into_rows(self) -> Vec<bool> {
        self.rows
    }
}

impl Index<usize> for TruthTable {
    type Output = bool;

    fn index(&self, code: usize) -> &Self::Output {
        &self.rows[code]
    }
}

/// Rows as `0`/`1` characters, code 0 first.
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &row in &self.rows {
            write!(f, "{}", if row { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// Build the truth table of `root` using the snapped bit-width.
pub fn build_truth_table(table: &IdentifierTable<'_>, root: &Expression) -> Result<TruthTable> {
    build_truth_table_with(table, root, WidthPolicy::Snapped)
}

/// Build the truth table of `root` with an explicit [`WidthPolicy`].
pub fn build_truth_table_with(
    table: &IdentifierTable<'_>,
    root: &Expression,
    policy: WidthPolicy,
) -> Result<TruthTable> {
    let width = BitWidth::for_identifiers(table.len(), policy)?;
    debug!(
        "build_truth_table(identifiers = {}, policy = {:?}) => width {}",
        table.len(),
        policy,
        width
    );

    let rows = Assignments::new(table, width)
        .map(|(code, bindings)| {
            let value = evaluate(root, &bindings);
            trace!("code {:#06b} => {}", code, value);
            value
        })
        .collect();

    Ok(TruthTable { width, rows })
}
