use std::io::Write;
use std::process;
use std::process::Command;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream;
use testmd_cli::TestmdCli;
use testmd_core::AnyResult;
use testmd_core::Document;
use testmd_core::TestmdResult;
use testmd_core::generate_package;

fn main() {
	let args = TestmdCli::parse();

	match run(&args) {
		Ok(code) => process::exit(code),
		Err(e) => {
			eprintln!(
				"{} {e}",
				"error:".if_supports_color(Stream::Stderr, |text| text.red())
			);
			process::exit(1);
		}
	}
}

fn run(args: &TestmdCli) -> AnyResult<i32> {
	let documents = args
		.documents
		.iter()
		.map(Document::read)
		.collect::<TestmdResult<Vec<_>>>()?;

	let source = generate_package(&documents, &args.pkg)?;

	if let Some(output) = &args.output {
		std::fs::write(output, source)
			.map_err(|e| format!("could not write `{}`: {e}", output.display()))?;
		return Ok(0);
	}

	// No output file requested: generate into a temporary file and hand it
	// straight to the Go toolchain. The temp file is removed when it drops.
	let mut file = tempfile::Builder::new()
		.suffix(&format!("_{}.go", args.pkg))
		.tempfile()?;
	file.write_all(source.as_bytes())?;
	file.flush()?;

	let tool = if args.pkg.ends_with("test") {
		"test"
	} else {
		"run"
	};

	// The child inherits stdout/stderr; its exit status is propagated
	// unchanged.
	let status = Command::new("go")
		.arg(tool)
		.arg(file.path())
		.args(&args.args)
		.status()
		.map_err(|e| format!("could not invoke `go {tool}`: {e}"))?;

	Ok(status.code().unwrap_or(1))
}
