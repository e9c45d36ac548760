use assert_cmd::Command;
use similar_asserts::assert_eq;
use testmd_core::AnyEmptyResult;

#[test]
fn generates_output_file_from_two_documents() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let one = tmp.path().join("one.md");
	let two = tmp.path().join("two.md");
	let out = tmp.path().join("demo_test.go");

	std::fs::write(&one, "# One\n\n```go TestOne\nprintln(\"one\")\n```\n")?;
	std::fs::write(&two, "# Two\n\n```go TestTwo\nprintln(\"two\")\n```\n")?;

	let mut cmd = Command::cargo_bin("testmd")?;
	cmd.arg(&one)
		.arg(&two)
		.arg("--pkg")
		.arg("demo_test")
		.arg("--output")
		.arg(&out)
		.assert()
		.success();

	let generated = std::fs::read_to_string(&out)?;
	assert_eq!(
		generated,
		"package demo_test\n\nfunc TestOne() {\nprintln(\"one\")\n}\n\nfunc TestTwo() \
		 {\nprintln(\"two\")\n}\n"
	);

	Ok(())
}

#[test]
fn package_name_defaults_to_test() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let doc = tmp.path().join("readme.md");
	let out = tmp.path().join("out.go");

	std::fs::write(&doc, "```go TestDefault\nok()\n```\n")?;

	let mut cmd = Command::cargo_bin("testmd")?;
	cmd.arg(&doc).arg("--output").arg(&out).assert().success();

	let generated = std::fs::read_to_string(&out)?;
	assert!(generated.starts_with("package test\n"));

	Ok(())
}

#[test]
fn scoped_blocks_stay_out_of_other_packages() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let doc = tmp.path().join("scoped.md");
	let out = tmp.path().join("out.go");

	std::fs::write(
		&doc,
		"```go pkgA.helper\nsecret()\n```\n\n```go TestShared\nshared()\n```\n",
	)?;

	let mut cmd = Command::cargo_bin("testmd")?;
	cmd.arg(&doc)
		.arg("--pkg")
		.arg("pkgB")
		.arg("--output")
		.arg(&out)
		.assert()
		.success();

	let generated = std::fs::read_to_string(&out)?;
	assert!(!generated.contains("helper"));
	assert!(generated.contains("func TestShared()"));

	Ok(())
}

#[test]
fn missing_document_fails_with_path() -> AnyEmptyResult {
	let mut cmd = Command::cargo_bin("testmd")?;
	cmd.arg("does_not_exist.md")
		.arg("--output")
		.arg("unused.go")
		.assert()
		.failure()
		.stderr(predicates::str::contains("does_not_exist.md"));

	Ok(())
}

#[test]
fn unterminated_fence_fails_with_line() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let doc = tmp.path().join("broken.md");

	std::fs::write(&doc, "prose\n\n```go TestBroken\nnever closed\n")?;

	let mut cmd = Command::cargo_bin("testmd")?;
	cmd.arg(&doc)
		.arg("--output")
		.arg(tmp.path().join("out.go"))
		.assert()
		.failure()
		.stderr(predicates::str::contains("line 3"));

	Ok(())
}

#[test]
fn requires_at_least_one_document() -> AnyEmptyResult {
	let mut cmd = Command::cargo_bin("testmd")?;
	cmd.assert().failure();

	Ok(())
}
