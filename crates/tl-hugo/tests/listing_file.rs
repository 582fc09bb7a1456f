//! Reading a listing captured to disk.

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tl_hugo::HugoSite;

#[test]
fn reads_captured_listing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("listing.csv");
    fs::write(
        &path,
        "path,slug,title,date,expiryDate,publishDate,draft,permalink\n\
         content/posts/a.md,,A,2023-01-01T00:00:00Z,,,false,https://x/a\n\
         content/posts/b.md,,B,2023-01-02T00:00:00Z,,,true,https://x/b\n",
    )
    .unwrap();

    let posts = HugoSite::read_listing(&path)
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].path, PathBuf::from("content/posts/a.md"));
    assert_eq!(posts[0].permalink, "https://x/a");
}
