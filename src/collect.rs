//! Identifier discovery.
//!
//! [`collect`] walks the tree depth-first, left operand before right, and
//! records every [`Identifier`] occurrence under its name. Names are kept in
//! order of first discovery; that order is what assigns bit positions during
//! enumeration (see [`crate::table`]), so it must not depend on hashing.

use std::collections::HashMap;

use log::debug;

use crate::ast::{Expression, Identifier};

/// Ordered mapping from variable name to its occurrence sites in one tree.
#[derive(Debug, Clone, Default)]
pub struct IdentifierTable<'a> {
    /// Entries in first-discovery order.
    entries: Vec<(&'a str, Vec<&'a Identifier>)>,
    /// Name -> position in `entries`.
    index: HashMap<&'a str, usize>,
}

impl<'a> IdentifierTable<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record one occurrence, creating the entry on first sight.
    pub fn insert(&mut self, id: &'a Identifier) {
        let name = id.name();
        match self.index.get(name) {
            Some(&i) => self.entries[i].1.push(id),
            None => {
                debug!("collect: new identifier '{}' at position {}", name, self.entries.len());
                self.index.insert(name, self.entries.len());
                self.entries.push((name, vec![id]));
            }
        }
    }

    /// Position of `name` in discovery order, which is also its bit index.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Occurrence sites of `name`, in traversal order.
    pub fn occurrences(&self, name: &str) -> Option<&[&'a Identifier]> {
        self.position(name).map(|i| self.entries[i].1.as_slice())
    }

    /// Names in discovery order.
    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// `(name, occurrence count)` pairs in discovery order.
    pub fn counts(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.entries.iter().map(|(name, sites)| (*name, sites.len()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &[&'a Identifier])> + '_ {
        self.entries.iter().map(|(name, sites)| (*name, sites.as_slice()))
    }
}

/// Build the identifier table for `root`.
pub fn collect(root: &Expression) -> IdentifierTable<'_> {
    let mut table = IdentifierTable::new();
    collect_into(root, &mut table);
    debug!("collect: found {} unique identifiers", table.len());
    table
}

fn collect_into<'a>(expr: &'a Expression, table: &mut IdentifierTable<'a>) {
    match expr {
        Expression::Identifier(id) => table.insert(id),
        Expression::Binary { lhs, rhs, .. } => {
            collect_into(lhs, table);
            collect_into(rhs, table);
        }
        Expression::Unary { operand, .. } => collect_into(operand, table),
    }
}
