//! Routes "today" lookups in the dashboard script through a Cairo-local
//! date key instead of the browser's local date.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::report::{PatchReport, Patched, Step};
use crate::target::{self, PatchError};

const DATE_KEY_HELPER: &str = r#"
function getCurrentEgyptDateKey() {
  const dtf = new Intl.DateTimeFormat('en-US', { timeZone: 'Africa/Cairo', year: 'numeric', month: '2-digit', day: '2-digit' });
  const parts = dtf.formatToParts(new Date());
  const m = parts.find(p => p.type === 'month').value;
  const d = parts.find(p => p.type === 'day').value;
  const y = parts.find(p => p.type === 'year').value;
  return `${y}-${m}-${d}`;
}
"#;

// Lazy: stops at the first closing brace in column zero.
static CLOCK_HELPER_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"function getEgyptTimeMinutes\(\) \{[\s\S]*?\n\}").expect("clock helper pattern")
});

const LOCAL_DATE_KEY: &str = "getDateKey(new Date())";
const CAIRO_DATE_KEY: &str = "getCurrentEgyptDateKey()";

pub fn patch(source: &str) -> Patched {
    let mut patched = Patched::new(source.to_owned());

    let (text, hits) = insert_date_key_helper(&patched.text);
    patched.text = text;
    patched.record(Step::DateKeyHelper, hits);

    let hits = patched.text.matches(LOCAL_DATE_KEY).count();
    if hits > 0 {
        patched.text = patched.text.replace(LOCAL_DATE_KEY, CAIRO_DATE_KEY);
    }
    patched.record(Step::CurrentDateKey, hits);

    patched
}

pub fn patch_file(path: &Path) -> Result<PatchReport, PatchError> {
    let source = target::read(path)?;
    let patched = patch(&source);
    target::overwrite(path, &patched.text)?;
    tracing::info!(path = %path.display(), "date keys patched");
    Ok(PatchReport::new(path, patched.steps))
}

/// Places the date-key helper right after the first clock helper body.
///
/// There is no presence check, so a second run inserts a second copy.
pub fn insert_date_key_helper(js: &str) -> (String, usize) {
    let Some(found) = CLOCK_HELPER_BLOCK.find(js) else {
        tracing::error!("could not find getEgyptTimeMinutes in script");
        return (js.to_owned(), 0);
    };
    let mut text = String::with_capacity(js.len() + DATE_KEY_HELPER.len() + 1);
    text.push_str(&js[..found.end()]);
    text.push('\n');
    text.push_str(DATE_KEY_HELPER);
    text.push_str(&js[found.end()..]);
    (text, 1)
}
