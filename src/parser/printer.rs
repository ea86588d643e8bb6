//! Renders an [`Expression`] as a fully parenthesized, prefix-operator string,
//! e.g. `-123 * (45.67)` becomes `(* (- 123) (group 45.67))`.
//!
//! Literals print bare: numbers without a trailing `.0`, strings without their
//! quotes, and the null value as `nil`.

use super::expression::Expression;

#[derive(Debug, Default, Clone, Copy)]
pub struct AstPrinter;

impl AstPrinter {
	pub fn print(&self, expression: &Expression<'_>) -> String {
		match expression {
			Expression::Literal(value) => value.to_string(),
			Expression::Unary { operator, right } => self.parenthesize(operator.lexeme, &[right.as_ref()]),
			Expression::Binary { left, operator, right } => self.parenthesize(operator.lexeme, &[left.as_ref(), right.as_ref()]),
			Expression::Grouping(inner) => self.parenthesize("group", &[inner.as_ref()]),
		}
	}

	fn parenthesize(&self, name: &str, expressions: &[&Expression<'_>]) -> String {
		let mut builder = format!("({name}");
		for expression in expressions {
			builder.push(' ');
			builder.push_str(&self.print(expression));
		}
		builder.push(')');
		builder
	}
}
