use std::path::Path;
use std::path::PathBuf;

use serde::Serialize;
use similar::TextDiff;

use crate::TestmdError;
use crate::TestmdResult;

/// Whether golden helpers compare against stored fixtures or rewrite them.
///
/// The mode is an explicit argument on every call rather than a
/// process-wide flag, so comparison behavior is a pure function of its
/// inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoldenMode {
	/// Compare the actual value against the stored fixture.
	Verify,
	/// Overwrite the stored fixture with the actual value.
	Update,
}

/// Compare text output against a golden fixture, or rewrite the fixture in
/// [`GoldenMode::Update`]. Mismatches carry a unified diff.
pub fn check_text(mode: GoldenMode, path: impl AsRef<Path>, actual: &str) -> TestmdResult<()> {
	let path = path.as_ref();

	if mode == GoldenMode::Update {
		return write_fixture(path, actual.as_bytes());
	}

	let expected = read_fixture(path)?;
	let expected = String::from_utf8_lossy(&expected);

	if expected != actual {
		return Err(mismatch(path, &expected, actual));
	}

	Ok(())
}

/// Byte-for-byte comparison against a golden fixture. Non-UTF-8 content is
/// reported by length only; everything else gets a unified diff.
pub fn check_bytes(mode: GoldenMode, path: impl AsRef<Path>, actual: &[u8]) -> TestmdResult<()> {
	let path = path.as_ref();

	if mode == GoldenMode::Update {
		return write_fixture(path, actual);
	}

	let expected = read_fixture(path)?;

	if expected != actual {
		let diff = match (std::str::from_utf8(&expected), std::str::from_utf8(actual)) {
			(Ok(expected), Ok(actual)) => return Err(mismatch(path, expected, actual)),
			_ => {
				format!(
					"\nbinary fixtures differ: expected {} byte(s), got {} byte(s)",
					expected.len(),
					actual.len()
				)
			}
		};
		return Err(TestmdError::GoldenMismatch {
			path: path.to_path_buf(),
			diff,
		});
	}

	Ok(())
}

/// Compare a serializable value against a JSON golden fixture. The
/// comparison is structural — the fixture is parsed back into a
/// [`serde_json::Value`] — so formatting drift in the stored file never
/// causes a failure.
pub fn check_json<T: Serialize>(
	mode: GoldenMode,
	path: impl AsRef<Path>,
	value: &T,
) -> TestmdResult<()> {
	let path = path.as_ref();
	let actual = serde_json::to_value(value)
		.map_err(|error| TestmdError::GoldenSerialize(error.to_string()))?;
	let pretty = serde_json::to_string_pretty(&actual)
		.map_err(|error| TestmdError::GoldenSerialize(error.to_string()))?;

	if mode == GoldenMode::Update {
		return write_fixture(path, format!("{pretty}\n").as_bytes());
	}

	let stored = read_fixture(path)?;
	let expected: serde_json::Value = serde_json::from_slice(&stored)
		.map_err(|error| TestmdError::GoldenSerialize(error.to_string()))?;

	if expected != actual {
		let expected_pretty = serde_json::to_string_pretty(&expected)
			.map_err(|error| TestmdError::GoldenSerialize(error.to_string()))?;
		return Err(mismatch(path, &expected_pretty, &pretty));
	}

	Ok(())
}

fn read_fixture(path: &Path) -> TestmdResult<Vec<u8>> {
	std::fs::read(path).map_err(|source| {
		TestmdError::GoldenFixture {
			path: path.to_path_buf(),
			source,
		}
	})
}

fn write_fixture(path: &Path, bytes: &[u8]) -> TestmdResult<()> {
	std::fs::write(path, bytes).map_err(|source| {
		TestmdError::GoldenFixture {
			path: path.to_path_buf(),
			source,
		}
	})
}

fn mismatch(path: &Path, expected: &str, actual: &str) -> TestmdError {
	let diff = TextDiff::from_lines(expected, actual)
		.unified_diff()
		.header("expected", "actual")
		.to_string();

	TestmdError::GoldenMismatch {
		path: path.to_path_buf(),
		diff: format!("\n{diff}"),
	}
}
