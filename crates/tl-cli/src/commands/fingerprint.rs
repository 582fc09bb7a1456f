use serde::Serialize;
use tl_core::Fingerprint;
use tl_sync::matcher::escape_search_term;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FingerprintArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct FingerprintOutput {
    permalink: String,
    digest: String,
    marker: String,
    /// Paste into the Discussions search box to list every carrier.
    search: String,
}

fn describe(permalink: &str) -> FingerprintOutput {
    let fingerprint = Fingerprint::of(permalink);
    FingerprintOutput {
        permalink: permalink.to_string(),
        digest: fingerprint.digest().to_string(),
        marker: fingerprint.marker(),
        search: format!("\"{}\" in:body", escape_search_term(&fingerprint.marker())),
    }
}

/// Handle `threadlink fingerprint`.
pub fn handle(args: &FingerprintArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&describe(&args.permalink), flags.format)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn describes_permalink() {
        let described = describe("https://x/a");
        assert_eq!(described.digest, "8641f359d3f846628e2f58b7d1e6b135bf780a9f");
        assert_eq!(
            described.marker,
            "<!-- 8641f359d3f846628e2f58b7d1e6b135bf780a9f -->"
        );
        assert_eq!(
            described.search,
            "\"<!-- 8641f359d3f846628e2f58b7d1e6b135bf780a9f -->\" in:body"
        );
    }
}
