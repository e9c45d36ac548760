/// Language tags that mark a fenced block as an executable snippet. The
/// match is case-sensitive; any other tag means the block is prose-adjacent
/// code and is silently dropped.
pub const LANGUAGE_TAGS: &[&str] = &["go", "golang"];

/// Symbol names starting with this prefix are emitted as test functions with
/// that exact name.
pub const TEST_PREFIX: &str = "Test";

/// Reserved symbol name excluding a block from every bucket.
pub const SKIP_KEYWORD: &str = "skip";

/// Reserved symbol name emitting a block's body as top-level declarations.
pub const GLOBAL_KEYWORD: &str = "global";

/// A parsed info-string directive: `<tag> [<scope.>]<name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
	/// When present, the block participates only in the bucket with this
	/// exact package name.
	pub scope: Option<String>,
	pub kind: DirectiveKind,
}

/// What a classified snippet turns into in the generated unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveKind {
	/// `skip` — the block is dropped from every bucket.
	Skip,
	/// `global` — the body is emitted as top-level declarations, not wrapped
	/// in a function.
	Global,
	/// No symbol name — an anonymous example whose function name is
	/// synthesized at emission time.
	Example,
	/// A name starting with [`TEST_PREFIX`] — a test function with that
	/// exact name.
	Test(String),
	/// Any other non-empty name — a plain function with that exact name and
	/// no arguments.
	Function(String),
}

/// Classify an info string. Returns `None` when the language tag is absent
/// or not in the accepted set — the block is not a snippet, which is an
/// exclusion, never an error.
///
/// The second token is split on its last dot: the portion before the dot is
/// the package scope, the remainder the symbol name (`a.b.c` scopes to
/// `a.b` and names `c`). Tokens after the second are ignored so minor
/// formatting drift never rejects a block.
pub fn classify(info: &str) -> Option<Directive> {
	let mut tokens = info.split_whitespace();
	let tag = tokens.next()?;

	if !LANGUAGE_TAGS.contains(&tag) {
		return None;
	}

	let Some(symbol) = tokens.next() else {
		return Some(Directive {
			scope: None,
			kind: DirectiveKind::Example,
		});
	};

	let (scope, name) = match symbol.rsplit_once('.') {
		Some((scope, name)) => (Some(scope.to_string()), name),
		None => (None, symbol),
	};

	let kind = if name == SKIP_KEYWORD {
		DirectiveKind::Skip
	} else if name == GLOBAL_KEYWORD {
		DirectiveKind::Global
	} else if name.is_empty() {
		DirectiveKind::Example
	} else if name.starts_with(TEST_PREFIX) {
		DirectiveKind::Test(name.to_string())
	} else {
		DirectiveKind::Function(name.to_string())
	};

	Some(Directive { scope, kind })
}
