use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
pub enum TestmdError {
	#[error(transparent)]
	#[diagnostic(code(testmd::io_error))]
	Io(#[from] std::io::Error),

	#[error("could not read document `{path}`: {source}")]
	#[diagnostic(code(testmd::read_document))]
	ReadDocument {
		path: PathBuf,
		source: std::io::Error,
	},
	#[error("malformed document `{path}`: fence opened at line {line} is never closed")]
	#[diagnostic(code(testmd::malformed_document))]
	MalformedDocument { path: PathBuf, line: usize },
	#[error("malformed snippet #{ordinal} in `{path}`: body contains the fence delimiter")]
	#[diagnostic(code(testmd::malformed_snippet))]
	MalformedSnippet { path: PathBuf, ordinal: usize },
	#[error("could not access golden fixture `{path}`: {source}")]
	#[diagnostic(code(testmd::golden_fixture))]
	GoldenFixture {
		path: PathBuf,
		source: std::io::Error,
	},
	#[error("golden mismatch for `{path}`:{diff}")]
	#[diagnostic(code(testmd::golden_mismatch))]
	GoldenMismatch { path: PathBuf, diff: String },
	#[error("could not serialize value for golden comparison: {0}")]
	#[diagnostic(code(testmd::golden_serialize))]
	GoldenSerialize(String),
}

pub type TestmdResult<T> = Result<T, TestmdError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
