pub mod parser;
pub mod report;
pub mod scanner;

use report::{Diagnostic, display_diagnostics};

/// LoxError is the top-level error type for the Lox front end.
#[derive(thiserror::Error, Debug)]
pub enum LoxError {
	/// Internal compiler error, should never happen
	#[error("CompilerInternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// Scanner and parser errors reported during one run
	#[error("{}", display_diagnostics(.0))]
	Reported(Vec<Diagnostic>),
}

impl LoxError {
	/// The reported diagnostics, empty for internal errors.
	pub fn diagnostics(&self) -> &[Diagnostic] {
		match self {
			LoxError::Reported(diagnostics) => diagnostics,
			LoxError::InternalError(_) => &[],
		}
	}
}
