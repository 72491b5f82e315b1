use dashpatch::report::Step;
use dashpatch::{date_key, script};

static ORIGINAL: &str = include_str!("fixtures/dashboard_app.js");
static PATCHED: &str = include_str!("fixtures/dashboard_app.patched.js");
static DATED: &str = include_str!("fixtures/dashboard_app.dated.js");

#[test]
fn patched_script_matches_fixture() {
    let patched = script::patch(ORIGINAL);
    assert_eq!(
        patched.text, PATCHED,
        "Patched dashboard script diverged from recorded snapshot"
    );
}

#[test]
fn dated_script_matches_fixture() {
    let dated = date_key::patch(PATCHED);
    assert_eq!(
        dated.text, DATED,
        "Date-key patched dashboard script diverged from recorded snapshot"
    );
}

#[test]
fn second_run_only_repeats_the_filter_guard() {
    let again = script::patch(PATCHED);
    for outcome in &again.steps {
        let expected = usize::from(outcome.step == Step::FilterNotStarted);
        assert_eq!(outcome.matches, expected, "{}", outcome.step.name());
    }
    let guard = "if (!isStarted && (status === 'office' || status === 'remote')) return false;";
    assert_eq!(PATCHED.matches(guard).count(), 1);
    assert_eq!(again.text.matches(guard).count(), 2);
}
