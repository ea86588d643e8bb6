//! Expression AST nodes
//!
//! An `Expression` is a tree structure representing code like `-123 * (45.67)`
//! as nested nodes. Every node owns its children, so the tree is dropped by
//! plain structural recursion.

use std::fmt::Display;

use super::printer::AstPrinter;
pub use crate::scanner::LiteralValue;
use crate::scanner::Token;

/// Expression AST nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Expression<'a> {
	Literal(LiteralValue<'a>),
	Unary { operator: Token<'a>, right: Box<Expression<'a>> },
	Binary { left: Box<Expression<'a>>, operator: Token<'a>, right: Box<Expression<'a>> },
	Grouping(Box<Expression<'a>>),
}

impl<'a> Expression<'a> {
	pub fn literal(value: LiteralValue<'a>) -> Box<Self> { Box::new(Expression::Literal(value)) }

	pub fn unary(operator: Token<'a>, right: Box<Self>) -> Box<Self> { Box::new(Expression::Unary { operator, right }) }

	pub fn binary(left: Box<Self>, operator: Token<'a>, right: Box<Self>) -> Box<Self> {
		Box::new(Expression::Binary { left, operator, right })
	}

	pub fn grouping(expr: Box<Self>) -> Box<Self> { Box::new(Expression::Grouping(expr)) }
}

impl Display for Expression<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", AstPrinter.print(self)) }
}
