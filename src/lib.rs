//! # From bare text to a syntax tree
//!
//! User's source code: `(min + max) / 2`

//! ## Scanning
//!
//! Also known as `lexing` or `lexical analysis`, takes in the characters and
//! converts them into tokens. Single characters `(`, `,`, `.`, numbers `123`,
//! string literals `"hi!"`, identifiers `min` are all tokens.
//!
//! Whitespaces and comments are ignored. So the tokens are
//! `["(", "min", "+", "max", ")", "/", "2"]`.

//! ## Parsing
//!
//! A `parser` builds a tree structure of tokens -- the `abstract syntax tree` or
//! `AST`. The `parser` also reports `syntax errors`.
//!
//! ``` markdown
//! / (Expr.Binary)
//! ├── group (Expr.Grouping)
//! │   └── + (Expr.Binary)
//! │       ├── min
//! │       └── max
//! └── 2 (Expr.Literal)
//! ```
//!
//! Only expressions over literals are parsed here, which is all the printer
//! needs: `(/ (group (+ 1 2)) 2)`.

//! ## Errors
//!
//! Scanning keeps going after a bad character so one run reports as much as it
//! can. Parsing stops at its first syntax error. Both end up in the run's
//! [`Reporter`](error::report::Reporter) as lines like
//! `[line 1] Error at end: Expect expression`.

pub mod cli;
pub mod error;
mod lox;
pub mod parser;
pub mod scanner;

pub use error::{
	LoxError,
	parser::{ParseError, ParseErrorType},
	report::{Diagnostic, Location, Reporter},
	scanner::{ScanError, ScanErrorType},
};
pub use lox::Lox;
pub use parser::{Parser, expression::Expression, printer::AstPrinter};
pub use scanner::{LiteralValue, Scanner, Token, TokenType};
