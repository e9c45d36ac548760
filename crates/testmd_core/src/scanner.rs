use std::iter::Enumerate;
use std::path::Path;
use std::path::PathBuf;
use std::str::Lines;

use crate::TestmdError;
use crate::TestmdResult;

/// The fence delimiter recognized by the scanner. A fence opens at a line
/// whose trimmed text starts with this delimiter (the remainder of the line
/// is the info string) and closes at the next line whose trimmed text is
/// exactly this delimiter.
pub const FENCE: &str = "```";

/// A markdown document loaded into memory. Immutable once read; the path is
/// only used to attribute errors and generated functions back to their
/// source.
#[derive(Debug, Clone)]
pub struct Document {
	pub path: PathBuf,
	pub content: String,
}

impl Document {
	pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			content: content.into(),
		}
	}

	/// Read a document from disk, attaching the offending path to any I/O
	/// error.
	pub fn read(path: impl AsRef<Path>) -> TestmdResult<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|source| {
			TestmdError::ReadDocument {
				path: path.to_path_buf(),
				source,
			}
		})?;

		Ok(Self::new(path, content))
	}
}

/// One fenced code block lifted out of a document. Prose between fences is
/// discarded by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
	/// The info string following the opening fence delimiter, trimmed.
	pub info: String,
	/// The body lines between the fences, verbatim.
	pub body: Vec<String>,
	/// Path of the document this block came from.
	pub source: PathBuf,
	/// 1-indexed line of the opening fence.
	pub line: usize,
	/// Encounter index. The scanner numbers blocks within one document; the
	/// engine renumbers across all documents in caller-supplied order so the
	/// ordinal stays stable however many documents are merged.
	pub ordinal: usize,
}

/// Scan a document for fenced blocks in textual order.
pub fn scan(document: &Document) -> Blocks<'_> {
	Blocks {
		lines: document.content.lines().enumerate(),
		path: &document.path,
		next_ordinal: 0,
		done: false,
	}
}

/// Lazy, finite, non-restartable iterator over a document's fenced blocks.
/// An unterminated fence yields a [`TestmdError::MalformedDocument`] and
/// ends the iteration; the scanner does not attempt recovery past that
/// point.
pub struct Blocks<'a> {
	lines: Enumerate<Lines<'a>>,
	path: &'a Path,
	next_ordinal: usize,
	done: bool,
}

impl Iterator for Blocks<'_> {
	type Item = TestmdResult<Block>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		// Skip prose until the next opening fence.
		let (open_index, info) = loop {
			let (index, line) = self.lines.next()?;
			let trimmed = line.trim();
			if let Some(rest) = trimmed.strip_prefix(FENCE) {
				break (index, rest.trim().to_string());
			}
		};

		let mut body = Vec::new();
		for (_, line) in self.lines.by_ref() {
			if line.trim() == FENCE {
				let ordinal = self.next_ordinal;
				self.next_ordinal += 1;
				return Some(Ok(Block {
					info,
					body,
					source: self.path.to_path_buf(),
					line: open_index + 1,
					ordinal,
				}));
			}
			body.push(line.to_string());
		}

		self.done = true;
		Some(Err(TestmdError::MalformedDocument {
			path: self.path.to_path_buf(),
			line: open_index + 1,
		}))
	}
}
