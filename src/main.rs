use std::process::ExitCode;

use palc::Parser;
use slox::{LoxError, cli::*};

/// Input data was incorrect (sysexits `EX_DATAERR`).
const EXIT_DATA_ERROR: u8 = 65;
/// Internal software error (sysexits `EX_SOFTWARE`).
const EXIT_SOFTWARE: u8 = 70;

fn main() -> ExitCode {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	let lox = slox::Lox;

	let result = match Cli::parse().mode {
		Mode::File { path } => lox.run_file(&path).map(|output| println!("{output}")),
		Mode::Tokens { path } => std::fs::read_to_string(&path)
			.map_err(|e| LoxError::InternalError(anyhow::Error::new(e).context("Failed open source file")))
			.and_then(|source| {
				for token in lox.tokens(&source)? {
					println!("{token}");
				}
				Ok(())
			}),
		Mode::Repl => {
			lox.run_prompt();
			Ok(())
		}
	};

	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(e @ LoxError::Reported(_)) => {
			eprintln!("{e}");
			ExitCode::from(EXIT_DATA_ERROR)
		}
		Err(e) => {
			eprintln!("Failed run file: {e}");
			ExitCode::from(EXIT_SOFTWARE)
		}
	}
}
