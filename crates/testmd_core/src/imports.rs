/// The leading-comment form that lifts an import path into the generated
/// unit's import block. Matched at a line's start after trimming leading
/// whitespace; one path per line.
pub const IMPORT_DIRECTIVE: &str = "// import ";

/// Collect the import paths declared in a block's body. The matched lines
/// stay part of the emitted body verbatim — the directive is additive
/// metadata, not a rewrite — so the generated source may carry a harmless
/// no-op comment.
pub fn extract_imports(body: &[String]) -> Vec<String> {
	body
		.iter()
		.filter_map(|line| line.trim_start().strip_prefix(IMPORT_DIRECTIVE))
		.map(|path| path.trim().to_string())
		.filter(|path| !path.is_empty())
		.collect()
}
