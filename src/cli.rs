use std::path::PathBuf;

use palc::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "slox", after_long_help = "Scans and parses a Lox expression, then prints its syntax tree.")]
pub struct Cli {
	#[command(subcommand)]
	pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Print the syntax tree of the expression in a file
	File { path: PathBuf },
	/// Print the tokens scanned from a file
	Tokens { path: PathBuf },
	/// Input prompt
	Repl,
}
