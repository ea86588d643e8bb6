use super::report::Location;
use crate::scanner::Token;

#[derive(thiserror::Error, Debug)]
pub enum ParserError {
	#[error("{0}")]
	InternalError(#[from] anyhow::Error),
	#[error(transparent)]
	ParseError(#[from] ParseError),
}

/// A syntax error anchored at the token the parser could not use.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("line {line}{location}: {type}")]
pub struct ParseError {
	pub line:     usize,
	pub location: Location,
	pub r#type:   ParseErrorType,
}

impl ParseError {
	pub fn new(token: &Token<'_>, r#type: ParseErrorType) -> Self {
		Self { line: token.line, location: Location::of(token), r#type }
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
	/// No `primary` alternative matched.
	ExpectExpression,
	/// A grouping was opened but never closed.
	ExpectRightParen,
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			ExpectExpression => {
				write!(f, "Expect expression")
			}
			ExpectRightParen => {
				write!(f, "Expect ')' after expression.")
			}
		}
	}
}
