use std::{fs::read_to_string, io::Write, path::Path};

use anyhow::Context;

use crate::{
	LoxError,
	error::report::Reporter,
	parser::{Parser, expression::Expression, printer::AstPrinter},
	scanner::{Scanner, Token},
};

/// Lox is the entry point of the front end: scan, parse, then print the tree.
///
/// Every call owns its own [`Reporter`], so a `Lox` keeps no state between runs
/// and can be shared freely.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lox;

impl Lox {
	/// Run `source` and return the printed tree, or the error report when
	/// scanning or parsing reported anything.
	pub fn run(&self, source: &str) -> String {
		match self.parse(source) {
			Ok(expression) => AstPrinter.print(&expression),
			Err(e) => e.to_string(),
		}
	}

	/// Scan and parse `source` into a single expression.
	pub fn parse<'a>(&self, source: &'a str) -> Result<Expression<'a>, LoxError> {
		let mut reporter = Reporter::new();
		let tokens = Scanner::new(source).scan_tokens(&mut reporter)?;
		let expression = Parser::new(&tokens).parse(&mut reporter)?;
		match expression {
			Some(expression) if !reporter.had_error() => Ok(expression),
			_ => {
				log::info!("run failed with {} errors", reporter.diagnostics().len());
				Err(LoxError::Reported(reporter.into_diagnostics()))
			}
		}
	}

	/// Scan `source` only.
	pub fn tokens<'a>(&self, source: &'a str) -> Result<Vec<Token<'a>>, LoxError> {
		let mut reporter = Reporter::new();
		let tokens = Scanner::new(source).scan_tokens(&mut reporter)?;
		if reporter.had_error() {
			return Err(LoxError::Reported(reporter.into_diagnostics()));
		}
		Ok(tokens)
	}

	/// Read the file at `path` and run it.
	pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<String, LoxError> {
		let path = path.as_ref();
		log::info!("running {}", path.display());
		let source = read_to_string(path).with_context(|| format!("Failed open source file {}", path.display()))?;
		let expression = self.parse(&source)?;
		Ok(AstPrinter.print(&expression))
	}

	/// Run the REPL prompt.
	pub fn run_prompt(&self) {
		let mut input = String::new();
		let stdin = std::io::stdin();
		loop {
			input.clear();
			print!("> ");
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("Failed flush: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => {
					println!("\nExited slox repl");
					break;
				}
				Ok(_) => {}
				Err(e) => {
					eprintln!("Failed read line: {e}");
					continue;
				}
			}
			println!("{}", self.run(input.trim()));
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn run_prints_tree() {
		let lox = Lox;
		assert_eq!(lox.run("-123 * (45.67)"), "(* (- 123) (group 45.67))");
		assert_eq!(lox.run("\"a\" == \"b\""), "(== a b)");
	}

	#[test]
	fn run_reports_instead_of_printing() {
		let lox = Lox;
		assert_eq!(lox.run("(1 + 2"), "[line 1] Error at end: Expect ')' after expression.");
		assert_eq!(lox.run("\"unterminated"), "[line 1] Error: Unterminated string.\n[line 1] Error at end: Expect expression");
	}

	#[test]
	fn scan_error_suppresses_tree() {
		// The parser succeeds on the remaining tokens, the scan error still wins.
		assert_eq!(Lox.run("1 @ + 2"), "[line 1] Error: Unexpected character.");
		let error = Lox.parse("1 @ + 2").unwrap_err();
		assert_eq!(error.diagnostics().len(), 1);
	}

	#[test]
	fn runs_are_independent() {
		let lox = Lox;
		assert!(lox.run("@").starts_with("[line 1] Error"));
		assert_eq!(lox.run("1 + 2"), "(+ 1 2)");
	}

	#[test]
	fn tokens_reports_scan_errors() {
		assert_eq!(Lox.tokens("1 +").unwrap().len(), 3);
		assert!(matches!(Lox.tokens("\"open"), Err(LoxError::Reported(_))));
	}

	#[test]
	fn missing_file_is_internal_error() {
		let result = Lox.run_file("does/not/exist.lox");
		assert!(matches!(result, Err(LoxError::InternalError(_))));
	}
}
