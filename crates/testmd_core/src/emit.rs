use std::fmt::Write;

use crate::TestmdError;
use crate::TestmdResult;
use crate::aggregate::PackageBucket;
use crate::aggregate::Snippet;
use crate::scanner::FENCE;

/// Render a bucket as one Go source unit: package clause, import block,
/// globals in encounter order, then one function per snippet. Identical
/// buckets render byte-identically, so regenerated files never spuriously
/// appear changed under version control.
///
/// Every body is validated before anything is rendered, making a failed
/// generation all-or-nothing for the package.
pub fn emit(bucket: &PackageBucket) -> TestmdResult<String> {
	for snippet in bucket.globals.iter().chain(&bucket.functions) {
		ensure_embeddable(snippet)?;
	}

	let mut out = String::new();
	let _ = writeln!(out, "package {}", bucket.package);

	if !bucket.imports.is_empty() {
		out.push_str("\nimport (\n");
		for path in &bucket.imports {
			let _ = writeln!(out, "\t{path}");
		}
		out.push_str(")\n");
	}

	for global in &bucket.globals {
		out.push('\n');
		for line in &global.body {
			let _ = writeln!(out, "{line}");
		}
	}

	let mut example_count = 0usize;
	for function in &bucket.functions {
		let name = match &function.name {
			Some(name) => name.clone(),
			None => {
				example_count += 1;
				format!("Example{example_count}")
			}
		};

		let _ = writeln!(out, "\nfunc {name}() {{");
		for line in &function.body {
			let _ = writeln!(out, "{line}");
		}
		out.push_str("}\n");
	}

	Ok(out)
}

/// A body line consisting solely of the fence delimiter cannot have come
/// from the scanner (it would have closed the fence), but buckets can also
/// be built programmatically. Such a body would corrupt any later re-scan
/// of the generated file, so it fails the whole package.
fn ensure_embeddable(snippet: &Snippet) -> TestmdResult<()> {
	if snippet.body.iter().any(|line| line.trim() == FENCE) {
		return Err(TestmdError::MalformedSnippet {
			path: snippet.source.clone(),
			ordinal: snippet.ordinal,
		});
	}

	Ok(())
}
