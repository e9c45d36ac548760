use std::path::PathBuf;

use clap::Parser;

/// Generate a runnable Go source file from fenced markdown snippets.
///
/// Without `--output` the generated file is written to a temporary
/// location and handed straight to the Go toolchain: `go test` when the
/// package name ends in `test`, `go run` otherwise. Arguments after `--`
/// are forwarded to that subcommand verbatim.
#[derive(Parser)]
#[command(author, version, about)]
pub struct TestmdCli {
	/// Markdown documents to scan, in order.
	#[arg(required = true)]
	pub documents: Vec<PathBuf>,

	/// Target package name for the generated file.
	#[arg(long, short, default_value = "test")]
	pub pkg: String,

	/// Write the generated file here instead of invoking the Go toolchain.
	#[arg(long, short)]
	pub output: Option<PathBuf>,

	/// Extra arguments forwarded to `go test` / `go run`.
	#[arg(last = true)]
	pub args: Vec<String>,
}
