//! On-disk write-back tests.

use std::fs;

use pretty_assertions::assert_eq;
use tl_frontmatter::{FrontmatterError, load, write_discuss_at};

const URL: &str = "https://github.com/octo/blog/discussions/12";

const POST: &str = "---
title: \"Hello, world\"
date: 2023-04-01T10:00:00Z
draft: false
discuss: true
tags:
  - rust
  - blogging
---

Intro paragraph with a trailing space 
and a line with --- in it.

```yaml
discussAt: not-front-matter
```
";

#[test]
fn only_discuss_at_changes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hello.md");
    fs::write(&path, POST).unwrap();

    write_discuss_at(&path, URL).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    let expected = POST.replacen(
        "  - blogging\n---\n",
        &format!("  - blogging\ndiscussAt: {URL}\n---\n"),
        1,
    );
    assert_eq!(written, expected);

    let reloaded = load(&path).unwrap();
    assert_eq!(reloaded.discuss_at().as_deref(), Some(URL));
    assert!(reloaded.discuss());
}

#[test]
fn rewriting_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hello.md");
    fs::write(&path, POST).unwrap();

    write_discuss_at(&path, URL).unwrap();
    let first = fs::read_to_string(&path).unwrap();
    write_discuss_at(&path, URL).unwrap();
    let second = fs::read_to_string(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = write_discuss_at(&dir.path().join("nope.md"), URL).unwrap_err();
    assert!(matches!(err, FrontmatterError::Io { .. }));
}

#[test]
fn malformed_file_is_left_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.md");
    let text = "---\ntitle: [unclosed\n---\nbody\n";
    fs::write(&path, text).unwrap();

    let err = write_discuss_at(&path, URL).unwrap_err();
    assert!(matches!(err, FrontmatterError::Malformed { .. }));
    assert!(err.to_string().contains("broken.md"));
    assert_eq!(fs::read_to_string(&path).unwrap(), text);
}

#[test]
fn json_post_is_linked_and_stays_valid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.md");
    let text = "{\n  \"title\": \"Data\",\n  \"discuss\": true\n}\n\nBody with { braces }.\n";
    fs::write(&path, text).unwrap();

    write_discuss_at(&path, URL).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        format!(
            "{{\n  \"discussAt\": \"{URL}\",\n  \"title\": \"Data\",\n  \"discuss\": true\n}}\n\nBody with {{ braces }}.\n"
        )
    );
    let header = written.split("\n}\n").next().unwrap();
    let value: serde_json::Value = serde_json::from_str(&format!("{header}\n}}")).unwrap();
    assert_eq!(value["discussAt"], URL);
}

#[test]
fn toml_summary_with_bracketed_line_is_linked() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rust.md");
    let text = "+++\ntitle = \"Rust\"\nsummary = \"\"\"\n[Rust](https://rust-lang.org) rocks\n\"\"\"\ndiscuss = true\n\n[params]\nmood = \"ok\"\n+++\nBody.\n";
    fs::write(&path, text).unwrap();

    write_discuss_at(&path, URL).unwrap();

    let reloaded = load(&path).unwrap();
    assert_eq!(reloaded.discuss_at().as_deref(), Some(URL));
    assert!(
        reloaded
            .header()
            .contains(&format!("discussAt = \"{URL}\"\n[params]\n"))
    );
}
