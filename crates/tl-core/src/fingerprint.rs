//! Deterministic permalink fingerprints.
//!
//! A fingerprint is the SHA-1 hex digest of the permalink's UTF-8 bytes,
//! embedded in a discussion body as an HTML comment so it renders invisibly.
//! Threads created by earlier runs carry these markers, so neither the digest
//! algorithm nor the marker shape may ever change.

use std::fmt;

use serde::Serialize;
use sha1::{Digest, Sha1};

const MARKER_OPEN: &str = "<!-- ";
const MARKER_CLOSE: &str = " -->";

/// Fingerprint of one permalink.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Fingerprint {
    digest: String,
}

impl Fingerprint {
    /// Fingerprint a permalink.
    #[must_use]
    pub fn of(permalink: &str) -> Self {
        let digest = Sha1::digest(permalink.as_bytes());
        Self {
            digest: format!("{digest:x}"),
        }
    }

    /// Lowercase 40-character hex digest.
    #[must_use]
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// The marker embedded verbatim in discussion bodies: `<!-- {digest} -->`.
    #[must_use]
    pub fn marker(&self) -> String {
        format!("{MARKER_OPEN}{}{MARKER_CLOSE}", self.digest)
    }

    /// Whether `body` carries this fingerprint's marker verbatim.
    #[must_use]
    pub fn is_marked_in(&self, body: &str) -> bool {
        body.contains(&self.marker())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.marker())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("abc", "a9993e364706816aba3e25717850c26c9cd0d89d")]
    #[case("https://x/a", "8641f359d3f846628e2f58b7d1e6b135bf780a9f")]
    #[case(
        "https://example.com/posts/hello-world/",
        "fcf3ff37c67faf43d4eaa0e2f88fd7f2b82544f1"
    )]
    fn digest_matches_sha1_hex(#[case] permalink: &str, #[case] expected: &str) {
        assert_eq!(Fingerprint::of(permalink).digest(), expected);
    }

    #[test]
    fn marker_is_an_html_comment() {
        assert_eq!(
            Fingerprint::of("https://x/a").marker(),
            "<!-- 8641f359d3f846628e2f58b7d1e6b135bf780a9f -->"
        );
        assert_eq!(
            Fingerprint::of("https://x/a").to_string(),
            Fingerprint::of("https://x/a").marker()
        );
    }

    #[test]
    fn stable_across_calls() {
        let first = Fingerprint::of("https://x/a");
        for _ in 0..3 {
            assert_eq!(Fingerprint::of("https://x/a"), first);
        }
    }

    #[test]
    fn distinct_permalinks_differ() {
        let permalinks = [
            "https://x/a",
            "https://x/b",
            "https://x/a/",
            "http://x/a",
            "https://X/a",
        ];
        let digests: std::collections::HashSet<_> = permalinks
            .iter()
            .map(|p| Fingerprint::of(p).digest().to_string())
            .collect();
        assert_eq!(digests.len(), permalinks.len());
    }

    #[test]
    fn detects_marker_in_body() {
        let fp = Fingerprint::of("https://x/a");
        let body = format!("{}\nPost link: [A](https://x/a)", fp.marker());
        assert!(fp.is_marked_in(&body));
        assert!(!fp.is_marked_in("8641f359d3f846628e2f58b7d1e6b135bf780a9f"));
        assert!(!Fingerprint::of("https://x/b").is_marked_in(&body));
    }
}
