use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::directive::Directive;
use crate::directive::DirectiveKind;
use crate::imports::extract_imports;
use crate::scanner::Block;

/// A retained snippet destined for one bucket. `name: None` marks an
/// anonymous example whose function name is synthesized at emission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
	pub name: Option<String>,
	pub body: Vec<String>,
	/// Document the snippet came from, for error attribution.
	pub source: PathBuf,
	pub ordinal: usize,
}

impl Snippet {
	fn from_block(name: Option<String>, block: &Block) -> Self {
		Self {
			name,
			body: block.body.clone(),
			source: block.source.clone(),
			ordinal: block.ordinal,
		}
	}
}

/// Everything accumulated for one generated output unit: globals and
/// functions in encounter order, imports as a sorted set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageBucket {
	pub package: String,
	pub globals: Vec<Snippet>,
	pub functions: Vec<Snippet>,
	pub imports: BTreeSet<String>,
}

impl PackageBucket {
	pub fn new(package: impl Into<String>) -> Self {
		Self {
			package: package.into(),
			globals: Vec::new(),
			functions: Vec::new(),
			imports: BTreeSet::new(),
		}
	}

	fn add(&mut self, block: &Block, kind: &DirectiveKind) {
		self.imports.extend(extract_imports(&block.body));

		match kind {
			DirectiveKind::Global => {
				self.globals.push(Snippet::from_block(None, block));
			}
			DirectiveKind::Example => {
				self.functions.push(Snippet::from_block(None, block));
			}
			DirectiveKind::Test(name) | DirectiveKind::Function(name) => {
				self
					.functions
					.push(Snippet::from_block(Some(name.clone()), block));
			}
			DirectiveKind::Skip => {}
		}
	}
}

/// Merge the classified block stream for all input documents into one
/// bucket per requested package name.
///
/// Skip blocks never land anywhere. A block without a scope broadcasts to
/// every requested bucket; a scoped block lands only in the equally-named
/// bucket, and is simply never emitted when that bucket was not requested.
/// A requested package that no block survives for still yields an (empty)
/// bucket — an empty generated file is a valid result.
pub fn aggregate(classified: &[(Block, Directive)], packages: &[String]) -> Vec<PackageBucket> {
	let mut buckets: Vec<PackageBucket> = packages
		.iter()
		.map(|name| PackageBucket::new(name.clone()))
		.collect();

	for (block, directive) in classified {
		if directive.kind == DirectiveKind::Skip {
			continue;
		}

		for bucket in &mut buckets {
			let scoped_out = directive
				.scope
				.as_deref()
				.is_some_and(|scope| scope != bucket.package);
			if scoped_out {
				continue;
			}
			bucket.add(block, &directive.kind);
		}
	}

	buckets
}
