//! Formula parser.
//!
//! Operators, from loosest to tightest binding:
//!
//! ```text
//! ||  OR           left-assoc
//! &&  AND          left-assoc
//! ==  !=           left-assoc
//! !   NOT          prefix
//! ```
//!
//! Word forms `AND`, `OR`, `NOT` are accepted in any case. Identifiers match
//! `[A-Za-z_][A-Za-z0-9_]*`; parentheses group as usual.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::ast::{BinaryOp, Expression, UnaryOp};
use crate::error::ParseError;

/// Deepest nesting of `!` and `(` the parser accepts.
pub const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Eq, PartialEq)]
enum Token {
    Id(String),
    Eq,
    Ne,
    And,
    Or,
    Not,
    LParen,
    RParen,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Id(name) => format!("identifier '{}'", name),
            Token::Eq => "'=='".to_string(),
            Token::Ne => "'!='".to_string(),
            Token::And => "'&&'".to_string(),
            Token::Or => "'||'".to_string(),
            Token::Not => "'!'".to_string(),
            Token::LParen => "'('".to_string(),
            Token::RParen => "')'".to_string(),
        }
    }
}

/// Parse `input` into an expression tree.
pub fn parse(input: &str) -> Result<Expression, ParseError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        end: input.len(),
        depth: 0,
    };
    let expr = parser.or()?;
    match parser.peek() {
        None => Ok(expr),
        Some(t) => Err(ParseError::new(
            format!("unexpected {}", t.describe()),
            parser.offset(),
        )),
    }
}

fn expect_next(chars: &mut Peekable<CharIndices>, want: char, op: &str, start: usize) -> Result<(), ParseError> {
    match chars.next() {
        Some((_, c)) if c == want => Ok(()),
        _ => Err(ParseError::new(format!("expected '{}'", op), start)),
    }
}

fn tokenize(input: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        let token = match c {
            c if c.is_whitespace() => continue,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '!' => {
                if let Some(&(_, '=')) = chars.peek() {
                    chars.next();
                    Token::Ne
                } else {
                    Token::Not
                }
            }
            '=' => {
                expect_next(&mut chars, '=', "==", start)?;
                Token::Eq
            }
            '&' => {
                expect_next(&mut chars, '&', "&&", start)?;
                Token::And
            }
            '|' => {
                expect_next(&mut chars, '|', "||", start)?;
                Token::Or
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut name = String::new();
                name.push(c);
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_ascii_alphanumeric() || c == '_' {
                        name.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                match name.to_ascii_uppercase().as_str() {
                    "AND" => Token::And,
                    "OR" => Token::Or,
                    "NOT" => Token::Not,
                    _ => Token::Id(name),
                }
            }
            other => return Err(ParseError::new(format!("unexpected character '{}'", other), start)),
        };
        tokens.push((token, start));
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<(Token, usize)>,
    pos: usize,
    /// Input length, reported as the offset of errors at end of input.
    end: usize,
    /// Current `!`/`(` nesting.
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn offset(&self) -> usize {
        self.tokens.get(self.pos).map_or(self.end, |(_, o)| *o)
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).map(|(t, _)| t.clone());
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn enter(&mut self, offset: usize) -> Result<(), ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::new("expression nested too deeply", offset));
        }
        self.depth += 1;
        Ok(())
    }

    fn or(&mut self) -> Result<Expression, ParseError> {
        let mut lhs = self.and()?;
        while self.peek() == Some(&Token::Or) {
            self.bump();
            let rhs = self.and()?;
            lhs = Expression::binary(BinaryOp::Or, lhs, rhs);
        }
        Ok(lhs)
    }

    fn and(&mut self) -> Result<Expression, ParseError> {
        let mut lhs = self.cmp()?;
        while self.peek() == Some(&Token::And) {
            self.bump();
            let rhs = self.cmp()?;
            lhs = Expression::binary(BinaryOp::And, lhs, rhs);
        }
        Ok(lhs)
    }

    fn cmp(&mut self) -> Result<Expression, ParseError> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Eq) => BinaryOp::Eq,
                Some(Token::Ne) => BinaryOp::Ne,
                _ => return Ok(lhs),
            };
            self.bump();
            let rhs = self.unary()?;
            lhs = Expression::binary(op, lhs, rhs);
        }
    }

    fn unary(&mut self) -> Result<Expression, ParseError> {
        if self.peek() == Some(&Token::Not) {
            self.enter(self.offset())?;
            self.bump();
            let operand = self.unary()?;
            self.depth -= 1;
            return Ok(Expression::unary(UnaryOp::Not, operand));
        }
        self.atom()
    }

    fn atom(&mut self) -> Result<Expression, ParseError> {
        let offset = self.offset();
        match self.bump() {
            Some(Token::Id(name)) => Ok(Expression::ident(name)),
            Some(Token::LParen) => {
                self.enter(offset)?;
                let inner = self.or()?;
                let close = self.offset();
                match self.bump() {
                    Some(Token::RParen) => {
                        self.depth -= 1;
                        Ok(inner)
                    }
                    _ => Err(ParseError::new("expected ')'", close)),
                }
            }
            Some(t) => Err(ParseError::new(format!("unexpected {}", t.describe()), offset)),
            None => Err(ParseError::new("unexpected end of input", offset)),
        }
    }
}
