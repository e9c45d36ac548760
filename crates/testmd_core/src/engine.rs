use crate::TestmdResult;
use crate::aggregate::aggregate;
use crate::directive::Directive;
use crate::directive::classify;
use crate::emit::emit;
use crate::scanner::Block;
use crate::scanner::Document;
use crate::scanner::scan;

/// The rendered source text for one requested package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
	pub package: String,
	pub source: String,
}

/// Run the full pipeline — scan, classify, aggregate, emit — over the given
/// documents for every requested package name.
///
/// Documents are processed in caller-supplied order and blocks within a
/// document in textual order, which entirely determines emission order.
/// Every document is scanned to completion even after one fails; the first
/// scan error is returned once all documents have been visited, since the
/// output would otherwise be incomplete.
pub fn generate(documents: &[Document], packages: &[String]) -> TestmdResult<Vec<GeneratedUnit>> {
	let classified = classify_documents(documents)?;
	let buckets = aggregate(&classified, packages);

	buckets
		.iter()
		.map(|bucket| {
			Ok(GeneratedUnit {
				package: bucket.package.clone(),
				source: emit(bucket)?,
			})
		})
		.collect()
}

/// Convenience for the driver's single-package invocation.
pub fn generate_package(documents: &[Document], package: &str) -> TestmdResult<String> {
	let mut units = generate(documents, &[package.to_string()])?;

	// aggregate always produces a bucket per requested package.
	Ok(units.pop().map(|unit| unit.source).unwrap_or_default())
}

/// Scan and classify all documents, renumbering block ordinals across the
/// whole set so emission order stays stable however many documents are
/// merged.
fn classify_documents(documents: &[Document]) -> TestmdResult<Vec<(Block, Directive)>> {
	let mut classified = Vec::new();
	let mut first_error = None;
	let mut next_ordinal = 0usize;

	for document in documents {
		for result in scan(document) {
			match result {
				Ok(mut block) => {
					block.ordinal = next_ordinal;
					next_ordinal += 1;

					if let Some(directive) = classify(&block.info) {
						classified.push((block, directive));
					}
				}
				Err(error) => {
					if first_error.is_none() {
						first_error = Some(error);
					}
				}
			}
		}
	}

	match first_error {
		Some(error) => Err(error),
		None => Ok(classified),
	}
}
