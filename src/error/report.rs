//! The error channel shared by the scanner and the parser for one run.
//!
//! Each run owns a fresh [`Reporter`]. Errors are collected instead of printed
//! so the caller decides how to show them, and the first one flips the run into
//! its failed state for good.

use std::fmt::Display;

use super::{parser::ParseError, scanner::ScanError};
use crate::scanner::{Token, TokenType};

/// Where on its line an error happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
	/// Only the line is known.
	Line,
	/// At the trailing `EOF` token.
	AtEnd,
	/// At the token with this lexeme.
	At(String),
}

impl Location {
	pub fn of(token: &Token<'_>) -> Self {
		match token.r#type {
			TokenType::Eof => Location::AtEnd,
			_ => Location::At(token.lexeme.to_string()),
		}
	}
}

impl Display for Location {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Location::Line => Ok(()),
			Location::AtEnd => write!(f, " at end"),
			Location::At(lexeme) => write!(f, " at '{lexeme}'"),
		}
	}
}

/// One reported error, displayed as `[line L] Error<where>: <message>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
	pub line:     usize,
	pub location: Location,
	pub message:  String,
}

impl Diagnostic {
	pub fn new(line: usize, location: Location, message: impl Into<String>) -> Self {
		Self { line, location, message: message.into() }
	}
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "[line {}] Error{}: {}", self.line, self.location, self.message)
	}
}

impl From<ScanError> for Diagnostic {
	fn from(error: ScanError) -> Self { Diagnostic::new(error.line, Location::Line, error.r#type.to_string()) }
}

impl From<ParseError> for Diagnostic {
	fn from(error: ParseError) -> Self { Diagnostic::new(error.line, error.location, error.r#type.to_string()) }
}

/// Collects diagnostics for a single run.
#[derive(Debug, Default)]
pub struct Reporter {
	diagnostics: Vec<Diagnostic>,
}

impl Reporter {
	pub fn new() -> Self { Self::default() }

	/// Report an error known only by its line.
	pub fn error(&mut self, line: usize, message: impl Into<String>) {
		self.report(Diagnostic::new(line, Location::Line, message));
	}

	/// Report an error anchored at `token`.
	pub fn error_at(&mut self, token: &Token<'_>, message: impl Into<String>) {
		self.report(Diagnostic::new(token.line, Location::of(token), message));
	}

	pub fn report(&mut self, diagnostic: impl Into<Diagnostic>) {
		let diagnostic = diagnostic.into();
		log::debug!("reported: {diagnostic}");
		self.diagnostics.push(diagnostic);
	}

	pub fn had_error(&self) -> bool { !self.diagnostics.is_empty() }

	pub fn diagnostics(&self) -> &[Diagnostic] { &self.diagnostics }

	pub fn into_diagnostics(self) -> Vec<Diagnostic> { self.diagnostics }
}

impl Display for Reporter {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", display_diagnostics(&self.diagnostics))
	}
}

pub(crate) fn display_diagnostics(diagnostics: &[Diagnostic]) -> String {
	diagnostics.iter().map(|d| d.to_string()).collect::<Vec<String>>().join("\n")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		error::{parser::ParseErrorType, scanner::ScanErrorType},
		scanner::LiteralValue,
	};

	#[test]
	fn line_only_error() {
		let mut reporter = Reporter::new();
		assert!(!reporter.had_error());
		reporter.error(3, "Unexpected character.");
		assert!(reporter.had_error());
		assert_eq!(reporter.to_string(), "[line 3] Error: Unexpected character.");
	}

	#[test]
	fn error_at_end() {
		let mut reporter = Reporter::new();
		reporter.error_at(&Token::eof(2), "Expect expression");
		assert_eq!(reporter.to_string(), "[line 2] Error at end: Expect expression");
	}

	#[test]
	fn error_at_lexeme() {
		let mut reporter = Reporter::new();
		let token = Token::new(TokenType::Number, "12", Some(LiteralValue::Number(12.0)), 1);
		reporter.error_at(&token, "Expect ')' after expression.");
		assert_eq!(reporter.to_string(), "[line 1] Error at '12': Expect ')' after expression.");
	}

	#[test]
	fn errors_join_with_newlines() {
		let mut reporter = Reporter::new();
		reporter.report(ScanError::new(1, ScanErrorType::UnexpectedCharacter('@')));
		reporter.report(ParseError::new(&Token::eof(1), ParseErrorType::ExpectExpression));
		assert_eq!(reporter.diagnostics().len(), 2);
		assert_eq!(
			reporter.to_string(),
			"[line 1] Error: Unexpected character.\n[line 1] Error at end: Expect expression"
		);
	}
}
