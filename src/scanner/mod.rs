//! Turns Lox source text into tokens.
//!
//! Keywords are part of the shape of the language’s grammar, so at the point we
//! recognize a lexeme we also remember which kind of lexeme it represents: one
//! type for each keyword, operator, bit of punctuation and literal type.
//!
//! Since the scanner has to walk each character of a literal to identify it, it
//! also converts the text into the value the parser will use later.
//!
//! We can’t easily detect a `reserved word` until we’ve reached the end of what
//! might instead be an identifier, this is `maximal munch`.
mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenType::*;
use anyhow::Context;
pub use token::*;

use crate::{
	LoxError,
	error::{
		report::Reporter,
		scanner::{ScanError, ScanErrorType, ScannerError},
	},
};

/// A scanner for Lox source code
pub struct Scanner<'a> {
	/// User input source code
	source:      &'a str,
	/// User input source code iterator
	source_iter: Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:       usize,
	/// Points just past the last consumed character
	cursor:      usize,
	/// Tracks what source line `cursor` is on so we can produce tokens that know
	/// their location.
	line:        usize,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0, line: 1 }
	}

	/// Scan all tokens from the source code.
	///
	/// Lexical errors go to `reporter` and the offending characters are skipped,
	/// so the result always ends with an `Eof` token. Only internal errors are
	/// returned.
	pub fn scan_tokens(mut self, reporter: &mut Reporter) -> Result<Vec<Token<'a>>, LoxError> {
		let mut tokens = Vec::new();
		while let Some(&(index, _)) = self.source_iter.peek() {
			// We are at the beginning of the next lexeme.
			self.start = index;
			self.cursor = self.start;
			match self.scan_token() {
				Ok(Some(token)) => tokens.push(token),
				Ok(None) => {}
				Err(ScannerError::ScanError(e)) => reporter.report(e),
				Err(ScannerError::InternalError(e)) => return Err(e.into()),
			}
		}
		tokens.push(Token::eof(self.line));
		log::debug!("scanned {} tokens over {} lines", tokens.len(), self.line);
		Ok(tokens)
	}

	/// Scan a single lexeme, `None` when it produces no token
	fn scan_token(&mut self) -> Result<Option<Token<'a>>, ScannerError> {
		let next_char = self.advance().context("Unexpected EOF")?;
		#[rustfmt::skip]
		let r#type = match next_char {
			'(' => LeftParen,
			')' => RightParen,
			'{' => LeftBrace,
			'}' => RightBrace,
			',' => Comma,
			'.' => Dot,
			'-' => Minus,
			'+' => Plus,
			';' => Semicolon,
			'*' => Star,
			'!' => if self.match_next('=') { BangEqual } else { Bang },
			'=' => if self.match_next('=') { EqualEqual } else { Equal },
			'<' => if self.match_next('=') { LessEqual } else { Less },
			'>' => if self.match_next('=') { GreaterEqual } else { Greater },
			'/' => if self.match_next('/') {
				while self.peek().is_some_and(|c| c != '\n') { self.advance(); }
				return Ok(None);
			} else { Slash },
			' ' | '\r' | '\t' => return Ok(None),
			'\n' => { self.line += 1; return Ok(None); }
			'"' => self.string()?,
			c if c.is_ascii_digit() => self.number(),
			c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),
			_ => return Err(ScanError::new(self.line, ScanErrorType::UnexpectedCharacter(next_char)).into()),
		};

		let lexeme = &self.source[self.start..self.cursor];
		let literal = match r#type {
			// Trim the surrounding quotes.
			String => Some(LiteralValue::String(&lexeme[1..lexeme.len() - 1])),
			Number => Some(LiteralValue::Number(lexeme.parse().context("Failed to parse number literal")?)),
			_ => None,
		};

		Ok(Some(Token::new(r#type, lexeme, literal, self.line)))
	}

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	/// Peek the second character ahead
	fn peek_second(&mut self) -> Option<char> {
		let mut it = self.source_iter.clone();
		it.next()?;
		it.peek().map(|&(_, c)| c)
	}

	/// Scan a string literal
	fn string(&mut self) -> Result<TokenType, ScanError> {
		while let Some(c) = self.peek() {
			if c == '"' {
				break;
			}
			if c == '\n' {
				self.line += 1
			}
			self.advance();
		}

		self.peek().ok_or_else(|| ScanError::new(self.line, ScanErrorType::UnterminatedString))?;
		self.advance(); // The closing "
		Ok(String)
	}

	/// Scan a number literal
	fn number(&mut self) -> TokenType {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}

		// A '.' without a digit after it is left for the next token.
		if self.peek() == Some('.') && self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
			self.advance(); // consume '.'
			while self.peek().is_some_and(|c| c.is_ascii_digit()) {
				self.advance();
			}
		}

		Number
	}

	/// Scan an identifier or keyword
	fn identifier(&mut self) -> TokenType {
		while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_') {
			self.advance();
		}
		let text = &self.source[self.start..self.cursor];
		TokenType::keyword_or_identifier(text)
	}
}
