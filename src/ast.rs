//! Expression trees for boolean formulas.
//!
//! A formula is a strict tree: every node owns its children, nothing is shared
//! and nothing is mutated after construction. The set of node kinds is closed,
//! so every traversal over [`Expression`] is an exhaustive `match`.

use std::fmt;

/// A variable occurrence in the tree.
///
/// Several `Identifier` nodes may carry the same name; they are distinct
/// occurrences of the same logical variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    name: String,
}

impl Identifier {
    /// Creates a new identifier.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "Identifier name must be non-empty");
        Self { name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryOp {
    Eq,
    Ne,
    And,
    Or,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }

    /// Apply the operator to already evaluated operands.
    pub fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            BinaryOp::Eq => lhs == rhs,
            BinaryOp::Ne => lhs != rhs,
            BinaryOp::And => lhs && rhs,
            BinaryOp::Or => lhs || rhs,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum UnaryOp {
    Not,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
        }
    }

    pub fn apply(self, value: bool) -> bool {
        match self {
            UnaryOp::Not => !value,
        }
    }
}

/// Discriminant of an [`Expression`] node.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ExprKind {
    Identifier,
    Binary,
    Unary,
}

/// A boolean formula.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    Identifier(Identifier),
    Binary {
        op: BinaryOp,
        lhs: Box<Expression>,
        rhs: Box<Expression>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
    },
}

impl Expression {
    pub fn ident(name: impl Into<String>) -> Self {
        Expression::Identifier(Identifier::new(name))
    }

    pub fn binary(op: BinaryOp, lhs: Self, rhs: Self) -> Self {
        Expression::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn unary(op: UnaryOp, operand: Self) -> Self {
        Expression::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn equal(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOp::Eq, lhs, rhs)
    }

    pub fn not_equal(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOp::Ne, lhs, rhs)
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOp::And, lhs, rhs)
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOp::Or, lhs, rhs)
    }

    pub fn not(operand: Self) -> Self {
        Self::unary(UnaryOp::Not, operand)
    }

    pub fn kind(&self) -> ExprKind {
        match self {
            Expression::Identifier(_) => ExprKind::Identifier,
            Expression::Binary { .. } => ExprKind::Binary,
            Expression::Unary { .. } => ExprKind::Unary,
        }
    }

    /// Depth of the expression tree (0 for leaves).
    pub fn depth(&self) -> usize {
        match self {
            Expression::Identifier(_) => 0,
            Expression::Binary { lhs, rhs, .. } => 1 + lhs.depth().max(rhs.depth()),
            Expression::Unary { operand, .. } => 1 + operand.depth(),
        }
    }

    /// Size of the expression tree (number of nodes).
    pub fn size(&self) -> usize {
        match self {
            Expression::Identifier(_) => 1,
            Expression::Binary { lhs, rhs, .. } => 1 + lhs.size() + rhs.size(),
            Expression::Unary { operand, .. } => 1 + operand.size(),
        }
    }

    /// Render the tree in the legacy bitgen form.
    ///
    /// Operators are printed as the placeholder `op` regardless of which
    /// operator the node holds:
    ///
    /// ```text
    /// a && !b   =>   (a op op b)
    /// ```
    ///
    /// Use the [`Display`][fmt::Display] impl for the real operator symbols.
    pub fn pretty_print(&self) -> String {
        match self {
            Expression::Identifier(id) => id.name().to_string(),
            Expression::Binary { lhs, rhs, .. } => {
                format!("({} op {})", lhs.pretty_print(), rhs.pretty_print())
            }
            Expression::Unary { operand, .. } => format!("op {}", operand.pretty_print()),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(id) => write!(f, "{}", id),
            Expression::Binary { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op.symbol(), rhs),
            Expression::Unary { op, operand } => write!(f, "{}{}", op.symbol(), operand),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn a() -> Expression {
        Expression::ident("a")
    }

    fn b() -> Expression {
        Expression::ident("b")
    }

    #[test]
    fn test_kind() {
        assert_eq!(a().kind(), ExprKind::Identifier);
        assert_eq!(Expression::and(a(), b()).kind(), ExprKind::Binary);
        assert_eq!(Expression::not(a()).kind(), ExprKind::Unary);
    }

    #[test]
    fn test_pretty_print_uses_placeholder() {
        assert_eq!(a().pretty_print(), "a");
        assert_eq!(Expression::and(a(), b()).pretty_print(), "(a op b)");
        assert_eq!(Expression::equal(a(), b()).pretty_print(), "(a op b)");
        assert_eq!(Expression::not(a()).pretty_print(), "op a");
        let e = Expression::or(Expression::not(a()), Expression::not_equal(a(), b()));
        assert_eq!(e.pretty_print(), "(op a op (a op b))");
    }

    #[test]
    fn test_display_uses_symbols() {
        let e = Expression::or(Expression::not(a()), Expression::not_equal(a(), b()));
        assert_eq!(e.to_string(), "(!a || (a != b))");
        assert_eq!(Expression::equal(a(), b()).to_string(), "(a == b)");
        assert_eq!(Expression::and(a(), b()).to_string(), "(a && b)");
    }

    #[test]
    fn test_depth_and_size() {
        assert_eq!(a().depth(), 0);
        assert_eq!(a().size(), 1);
        let e = Expression::and(Expression::not(a()), b());
        assert_eq!(e.depth(), 2);
        assert_eq!(e.size(), 4);
    }

    #[test]
    fn test_apply() {
        assert!(BinaryOp::Eq.apply(false, false));
        assert!(!BinaryOp::Ne.apply(true, true));
        assert!(!BinaryOp::And.apply(true, false));
        assert!(BinaryOp::Or.apply(false, true));
        assert!(UnaryOp::Not.apply(false));
    }

    #[test]
    #[should_panic(expected = "Identifier name must be non-empty")]
    fn test_empty_identifier_panics() {
        Identifier::new("");
    }
}
