use std::collections::HashMap;

use crate::ast::Expression;

/// One assignment of boolean values to variable names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    values: HashMap<String, bool>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: HashMap::with_capacity(capacity),
        }
    }

    pub fn set(&mut self, name: impl Into<String>, value: bool) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.values.get(name).copied()
    }

    /// Value of `name`, with unbound names reading as `false`.
    pub fn value(&self, name: &str) -> bool {
        self.get(name).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(name, value)| (name.into(), value)).collect(),
        }
    }
}

/// Evaluate `expr` under `bindings`.
///
/// Unbound identifiers evaluate to `false`.
pub fn evaluate(expr: &Expression, bindings: &Bindings) -> bool {
    match expr {
        Expression::Identifier(id) => bindings.value(id.name()),
        Expression::Binary { op, lhs, rhs } => op.apply(evaluate(lhs, bindings), evaluate(rhs, bindings)),
        Expression::Unary { op, operand } => op.apply(evaluate(operand, bindings)),
    }
}

impl Expression {
    pub fn eval(&self, bindings: &Bindings) -> bool {
        evaluate(self, bindings)
    }
}
