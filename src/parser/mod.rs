//! The `Scanner` use `Lexical grammar`, implement `alphabet` as `Characters`,
//! `string` as `Lexeme` or `Token`
//! The `Parser` use `Syntactic grammar`, implement `alphabet` as `Tokens`,
//! `string` as `Expression`
//!
//! |Name|Operators|Associates
//! --|--|--
//! Equality|== !=|Left
//! Comparison|< > <= >=|Left
//! Term|+ -|Left
//! Factor|* /|Left
//! Unary|! -|Right
//!
//! Expression grammar:
//!
//! ``` BNF
//! expression     → equality ;
//! equality       → comparison ( ( "!=" | "==" ) comparison )* ;
//! comparison     → term ( ( ">" | ">=" | "<" | "<=" ) term )* ;
//! term           → factor ( ( "-" | "+" ) factor )* ;
//! factor         → unary ( ( "/" | "*" ) unary )* ;
//! unary          → ( "!" | "-" ) unary | primary ;
//! primary        → NUMBER | STRING | "true" | "false" | "nil" | "(" expression ")" ;
//! ```

pub mod expression;
pub mod printer;

use TokenType::*;
use anyhow::{Context, anyhow};

use crate::{
	LoxError,
	error::{
		parser::{ParseError, ParseErrorType, ParserError},
		report::Reporter,
	},
	parser::expression::{Expression, LiteralValue},
	scanner::{Token, TokenType},
};

/// Recursive descent parser over a borrowed token sequence ending in `Eof`.
pub struct Parser<'t, 'a> {
	tokens:  &'t [Token<'a>],
	/// Index of the next unconsumed token, never past the `Eof` token.
	current: usize,
}

impl<'t, 'a> Parser<'t, 'a> {
	pub fn new(tokens: &'t [Token<'a>]) -> Self { Self { tokens, current: 0 } }

	/// Parse a single expression.
	///
	/// A syntax error is sent to `reporter` and yields `None`, never a partial
	/// tree. Tokens after a complete expression are left unconsumed.
	pub fn parse(&mut self, reporter: &mut Reporter) -> Result<Option<Expression<'a>>, LoxError> {
		log::debug!("parsing {} tokens", self.tokens.len());
		match self.expression() {
			Ok(expr) => Ok(Some(*expr)),
			Err(ParserError::ParseError(e)) => {
				reporter.report(e);
				Ok(None)
			}
			Err(ParserError::InternalError(e)) => Err(e.into()),
		}
	}

	fn expression(&mut self) -> Result<Box<Expression<'a>>, ParserError> { self.equality() }

	/// Parse equality expressions.
	fn equality(&mut self) -> Result<Box<Expression<'a>>, ParserError> {
		let mut expression = self.comparison()?;
		while matches!(self.peek()?.r#type, BangEqual | EqualEqual) {
			let operator = self.advance()?;
			expression = Expression::binary(expression, operator, self.comparison()?)
		}
		Ok(expression)
	}

	/// Parse comparison expressions.
	fn comparison(&mut self) -> Result<Box<Expression<'a>>, ParserError> {
		let mut expression = self.term()?;
		while matches!(self.peek()?.r#type, Greater | GreaterEqual | Less | LessEqual) {
			let operator = self.advance()?;
			expression = Expression::binary(expression, operator, self.term()?)
		}
		Ok(expression)
	}

	/// Parse term expressions.
	fn term(&mut self) -> Result<Box<Expression<'a>>, ParserError> {
		let mut expression = self.factor()?;
		while matches!(self.peek()?.r#type, Minus | Plus) {
			let operator = self.advance()?;
			expression = Expression::binary(expression, operator, self.factor()?)
		}
		Ok(expression)
	}

	/// Parse factor expressions.
	fn factor(&mut self) -> Result<Box<Expression<'a>>, ParserError> {
		let mut expression = self.unary()?;
		while matches!(self.peek()?.r#type, Slash | Star) {
			let operator = self.advance()?;
			expression = Expression::binary(expression, operator, self.unary()?)
		}
		Ok(expression)
	}

	/// Parse unary expressions.
	fn unary(&mut self) -> Result<Box<Expression<'a>>, ParserError> {
		if matches!(self.peek()?.r#type, Bang | Minus) {
			let operator = self.advance()?;
			return Ok(Expression::unary(operator, self.unary()?));
		}
		self.primary()
	}

	/// Parse primary expressions.
	fn primary(&mut self) -> Result<Box<Expression<'a>>, ParserError> {
		let token = *self.peek()?;
		let value = match token.r#type {
			False => LiteralValue::Boolean(false),
			True => LiteralValue::Boolean(true),
			Nil => LiteralValue::Nil,
			Number | String => token.literal.with_context(|| format!("{:?} token without a literal", token.r#type))?,
			LeftParen => {
				self.advance()?; // consume '('
				let expr = self.expression()?;
				self.consume(RightParen, ParseErrorType::ExpectRightParen)?;
				return Ok(Expression::grouping(expr));
			}
			_ => return Err(ParseError::new(&token, ParseErrorType::ExpectExpression).into()),
		};
		self.advance()?;
		Ok(Expression::literal(value))
	}

	/// Consume a token of `r#type` or fail with `error` at the current token.
	fn consume(&mut self, r#type: TokenType, error: ParseErrorType) -> Result<Token<'a>, ParserError> {
		if self.peek()?.r#type == r#type {
			return self.advance();
		}
		Err(ParseError::new(self.peek()?, error).into())
	}

	/// Consume the current token, staying put on `Eof`.
	fn advance(&mut self) -> Result<Token<'a>, ParserError> {
		let token = *self.peek()?;
		if token.r#type != Eof {
			self.current += 1;
		}
		Ok(token)
	}

	/// Peek at the current token.
	fn peek(&self) -> Result<&Token<'a>, ParserError> {
		self.tokens.get(self.current).ok_or_else(|| anyhow!("Unexpected EOF").into())
	}

	/// Discard tokens until the start of what is likely the next statement: just
	/// past a `;`, or at a statement keyword. Only useful once statements exist,
	/// a lone expression has no boundary to recover at.
	#[allow(dead_code)]
	fn synchronize(&mut self) -> Result<(), ParserError> {
		let mut previous = self.advance()?;
		while self.peek()?.r#type != Eof {
			if previous.r#type == Semicolon || self.peek()?.r#type.starts_statement() {
				return Ok(());
			}
			previous = self.advance()?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{error::report::Diagnostic, scanner::Scanner};

	fn scan(input: &str) -> Vec<Token<'_>> { Scanner::new(input).scan_tokens(&mut Reporter::new()).unwrap() }

	fn try_parse(input: &str) -> (Option<std::string::String>, Vec<Diagnostic>) {
		let tokens = scan(input);
		let mut reporter = Reporter::new();
		let ast = Parser::new(&tokens).parse(&mut reporter).unwrap();
		(ast.map(|ast| ast.to_string()), reporter.into_diagnostics())
	}

	fn parse(input: &str, equals: &str) {
		let (ast, diagnostics) = try_parse(input);
		assert!(diagnostics.is_empty(), "{input:?} reported {diagnostics:?}");
		assert_eq!(ast.as_deref(), Some(equals), "{input:?}");
	}

	fn parse_error(input: &str, report: &str) {
		let (ast, diagnostics) = try_parse(input);
		assert_eq!(ast, None, "{input:?}");
		assert_eq!(diagnostics.iter().map(|d| d.to_string()).collect::<Vec<_>>(), vec![report]);
	}

	#[test]
	fn parse_expressions() {
		parse("1 + 2 * 3", "(+ 1 (* 2 3))");
		parse("3 + 4 * (-2 - 1)", "(+ 3 (* 4 (group (- (- 2) 1))))");
		parse("1 + 2 * 3 / 4 - 5", "(- (+ 1 (/ (* 2 3) 4)) 5)");
		parse("8 + 800.3 * 123 / 65 - (2 + 3)", "(- (+ 8 (/ (* 800.3 123) 65)) (group (+ 2 3)))");
	}

	#[test]
	fn parse_left_associative() {
		parse("1 - 2 - 3", "(- (- 1 2) 3)");
		parse("8 / 4 / 2", "(/ (/ 8 4) 2)");
		parse("1 < 2 < 3", "(< (< 1 2) 3)");
		parse("1 == 2 == 3", "(== (== 1 2) 3)");
	}

	#[test]
	fn parse_comparison() {
		parse("1 < 2", "(< 1 2)");
		parse("1 <= 2", "(<= 1 2)");
		parse("1 > 2", "(> 1 2)");
		parse("1 >= 2", "(>= 1 2)");
	}

	#[test]
	fn parse_equality() {
		parse("1 == 2", "(== 1 2)");
		parse("1 != 2", "(!= 1 2)");
		parse("1 != 2 == 3", "(== (!= 1 2) 3)");
	}

	#[test]
	fn parse_unary() {
		parse("-123", "(- 123)");
		parse("!true", "(! true)");
		parse("-(-123)", "(- (group (- 123)))");
		parse("!!true", "(! (! true))");
		parse("-1 + 2", "(+ (- 1) 2)");
	}

	#[test]
	fn parse_literals() {
		parse("42", "42");
		parse("3.14", "3.14");
		parse("\"hello\"", "hello");
		parse("true", "true");
		parse("false", "false");
		parse("nil", "nil");
	}

	#[test]
	fn parse_grouping() {
		parse("(1 + 2)", "(group (+ 1 2))");
		parse("(1 + 2) * 3", "(* (group (+ 1 2)) 3)");
		parse("1 * (2 + 3)", "(* 1 (group (+ 2 3)))");
		parse("((1))", "(group (group 1))");
	}

	#[test]
	fn parse_complex() {
		parse("1 + 2 == 3", "(== (+ 1 2) 3)");
		parse("1 + 2 != 3 - 4", "(!= (+ 1 2) (- 3 4))");
		parse("!(1 < 2)", "(! (group (< 1 2)))");
		parse("1 + 2 * 3 < 4 - 5 / 6", "(< (+ 1 (* 2 3)) (- 4 (/ 5 6)))");
	}

	#[test]
	fn trailing_tokens_are_ignored() {
		parse("1 2", "1");
		parse("1 + 2;", "(+ 1 2)");
	}

	#[test]
	fn missing_right_paren() {
		parse_error("(1 + 2", "[line 1] Error at end: Expect ')' after expression.");
		parse_error("(1 2)", "[line 1] Error at '2': Expect ')' after expression.");
	}

	#[test]
	fn missing_expression() {
		parse_error("", "[line 1] Error at end: Expect expression");
		parse_error("1 +", "[line 1] Error at end: Expect expression");
		parse_error("1 +\n)", "[line 2] Error at ')': Expect expression");
		parse_error("foo", "[line 1] Error at 'foo': Expect expression");
		parse_error("* 2", "[line 1] Error at '*': Expect expression");
	}

	#[test]
	fn only_first_syntax_error_is_reported() {
		parse_error("(1 + ) + (", "[line 1] Error at ')': Expect expression");
	}

	#[test]
	fn synchronize_stops_after_semicolon() {
		let tokens = scan("a b ; c");
		let mut parser = Parser::new(&tokens);
		parser.synchronize().unwrap();
		assert_eq!(parser.peek().unwrap().lexeme, "c");
	}

	#[test]
	fn synchronize_stops_at_statement_keyword() {
		let tokens = scan("x y var z");
		let mut parser = Parser::new(&tokens);
		parser.synchronize().unwrap();
		assert_eq!(parser.peek().unwrap().r#type, Var);

		let tokens = scan("x y");
		let mut parser = Parser::new(&tokens);
		parser.synchronize().unwrap();
		assert_eq!(parser.peek().unwrap().r#type, Eof);
	}
}
