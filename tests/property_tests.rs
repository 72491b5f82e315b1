//! Property tests for the script and stylesheet edits.

use std::fs;

use dashpatch::report::Step;
use dashpatch::{script, stylesheet};
use proptest::prelude::*;
use tempfile::tempdir;

const LEGACY_CLOCK: &str =
    "const now = new Date();\nconst currentMinutes = now.getHours() * 60 + now.getMinutes();";
const CAIRO_CLOCK: &str = "const currentMinutes = getEgyptTimeMinutes();";

/// Lowercase filler can never spell out any of the patterns.
fn filler() -> impl Strategy<Value = String> {
    "[a-z ;\n]{0,40}"
}

proptest! {
    /// Without the helper marker, exactly one helper is prepended.
    #[test]
    fn helper_is_prepended_exactly_once(body in filler()) {
        let (text, hits) = script::inject_clock_helper(&body);
        prop_assert_eq!(hits, 1);
        prop_assert_eq!(text.matches("function getEgyptTimeMinutes").count(), 1);
        prop_assert!(text.ends_with(&body));
    }

    /// With the helper already present, injection is a no-op.
    #[test]
    fn helper_injection_is_idempotent(body in filler()) {
        let (once, _) = script::inject_clock_helper(&body);
        let (twice, hits) = script::inject_clock_helper(&once);
        prop_assert_eq!(hits, 0);
        prop_assert_eq!(twice, once);
    }

    /// N legacy clock reads become N Cairo clock reads.
    #[test]
    fn every_legacy_clock_read_is_replaced(
        chunks in proptest::collection::vec(filler(), 1..6),
    ) {
        let body = chunks.join(LEGACY_CLOCK);
        let expected = chunks.len() - 1;

        let patched = script::patch(&body);

        prop_assert_eq!(patched.matches(Step::CurrentMinutes), Some(expected));
        prop_assert_eq!(patched.text.matches(CAIRO_CLOCK).count(), expected);
        prop_assert!(!patched.text.contains("now.getHours()"));
    }

    /// Stylesheet patching appends one block per run, whatever the input.
    #[test]
    fn stylesheet_appends_every_time(css in filler(), runs in 1usize..4) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("style.css");
        fs::write(&path, &css).unwrap();
        for _ in 0..runs {
            let report = stylesheet::patch_file(&path).unwrap();
            prop_assert_eq!(report.total_matches(), 1);
        }
        let text = fs::read_to_string(&path).unwrap();
        prop_assert!(text.starts_with(&css));
        prop_assert_eq!(text.matches("@media (max-width: 768px)").count(), runs);
        prop_assert_eq!(text, format!("{css}{}", stylesheet::MOBILE_STATS.repeat(runs)));
    }
}
