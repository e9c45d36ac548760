use crate::Document;

pub fn doc(path: &str, content: &str) -> Document {
	Document::new(path, content)
}

/// A document exercising every directive kind: a global with an import
/// directive, a named test, a skipped block, a scoped helper, and an
/// anonymous example.
pub fn readme() -> Document {
	doc(
		"readme.md",
		r#"# Sample

Some prose that the scanner discards.

```go global
// import "fmt"
var counter = 0
```

```go TestCounter
counter++
fmt.Println(counter)
```

```go skip
this does not even compile
```

```go helpers.Reset
counter = 0
```

```go
fmt.Println("example")
```
"#,
	)
}
