//! Edits to the dashboard client script.
//!
//! The patterns below are written against one known revision of `app.js`
//! and are whitespace-sensitive. A step whose pattern is absent leaves the
//! text untouched and still counts as success.

use std::path::Path;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::report::{PatchReport, Patched, Step};
use crate::target::{self, PatchError};

const CLOCK_HELPER_MARKER: &str = "function getEgyptTimeMinutes";

const CLOCK_HELPER: &str = r#"
function getEgyptTimeMinutes() {
  const dtf = new Intl.DateTimeFormat('en-US', { timeZone: 'Africa/Cairo', hour: '2-digit', minute: '2-digit', hour12: false });
  const parts = dtf.formatToParts(new Date());
  const hour = parseInt(parts.find(p => p.type === 'hour').value, 10);
  const minute = parseInt(parts.find(p => p.type === 'minute').value, 10);
  return hour * 60 + minute;
}
"#;

static CURRENT_MINUTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"const now = new Date\(\);\s*const currentMinutes = now\.getHours\(\) \* 60 \+ now\.getMinutes\(\);",
    )
    .expect("current minutes pattern")
});

const CURRENT_MINUTES_REPLACEMENT: &str = "const currentMinutes = getEgyptTimeMinutes();";

// Group 1 is the shift fallback expression; it is carried into the replacement.
static SHIFT_WINDOW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"      let isFinished = false;
      if \(status !== 'leave'\) \{
        const shiftText = getShiftString\(record\?\.shift \|\| (emp\.defaultShift|getDefaultShift\(emp\))\);
        const endTimeStr = shiftText\.split\('-'\)\[1\]\?\.trim\(\);
        if \(endTimeStr\) \{
          const \[hours, mins\] = endTimeStr\.split\(':'\)\.map\(Number\);
          if \(currentMinutes >= hours \* 60 \+ mins\) \{
            isFinished = true;
          \}
        \}
      \}",
    )
    .expect("shift window pattern")
});

const SHIFT_WINDOW_REPLACEMENT: &str = r"      let isFinished = false;
      let isStarted = true;
      if (status !== 'leave') {
        const shiftText = getShiftString(record?.shift || ${1});
        const parts = shiftText.split('-');
        const startTimeStr = parts[0]?.trim();
        const endTimeStr = parts[1]?.trim();
        if (endTimeStr) {
          const [hours, mins] = endTimeStr.split(':').map(Number);
          if (currentMinutes >= hours * 60 + mins) isFinished = true;
        }
        if (startTimeStr) {
          const [sHours, sMins] = startTimeStr.split(':').map(Number);
          if (currentMinutes < sHours * 60 + sMins) isStarted = false;
        }
      }";

const FILTER_ANCHOR: &str =
    "if (isFinished) return false; // If filtering by anything other than finished, hide finished people";

const FILTER_NOT_STARTED: &str =
    "\n      if (!isStarted && (status === 'office' || status === 'remote')) return false;";

static GLOBAL_STATS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"    if \(status === 'leave'\) \{
      leave\+\+;
    \} else if \(isFinished\) \{
      finished\+\+;
    \} else if \(status === 'office'\) \{
      office\+\+;
    \} else if \(status === 'remote'\) \{
      remote\+\+;
    \}",
    )
    .expect("global stats pattern")
});

const GLOBAL_STATS_REPLACEMENT: &str = r"    if (status === 'leave') {
      leave++;
    } else if (isFinished) {
      finished++;
    } else if (!isStarted && (status === 'office' || status === 'remote')) {
      // Do not count as office/remote until shift starts
    } else if (status === 'office') {
      office++;
    } else if (status === 'remote') {
      remote++;
    }";

static EXPORT_COUNTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"      if \(status === 'leave'\) leaveCount\+\+;
      else if \(isFinished\) finishedCount\+\+;
      else if \(status === 'office'\) officeCount\+\+;
      else if \(status === 'remote'\) remoteCount\+\+;",
    )
    .expect("export counts pattern")
});

const EXPORT_COUNTS_REPLACEMENT: &str = r"      if (status === 'leave') leaveCount++;
      else if (isFinished) finishedCount++;
      else if (!isStarted && (status === 'office' || status === 'remote')) { /* skip */ }
      else if (status === 'office') officeCount++;
      else if (status === 'remote') remoteCount++;";

static RAMADAN_DAY_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"    if \(currentLang === 'ja'\) dayEl\.textContent = `\$\{d\}日`;
    else if \(currentLang === 'en'\) dayEl\.textContent = `Day \$\{d\}`;
    else dayEl\.textContent = `يوم \$\{d\}`;",
    )
    .expect("ramadan day label pattern")
});

const RAMADAN_DAY_LABEL_REPLACEMENT: &str = r"    if (currentLang === 'ja') dayEl.textContent = `${d}日`;
    else dayEl.textContent = `${d}`; // EN/AR line 2 is just the number";

/// Runs every script edit in order over `source`.
pub fn patch(source: &str) -> Patched {
    let mut patched = Patched::new(source.to_owned());

    let (text, hits) = inject_clock_helper(&patched.text);
    patched.text = text;
    patched.record(Step::ClockHelper, hits);

    let (text, hits) = replace_regex(&patched.text, &CURRENT_MINUTES, CURRENT_MINUTES_REPLACEMENT);
    patched.text = text;
    patched.record(Step::CurrentMinutes, hits);

    let (text, hits) = expand_shift_window(&patched.text);
    patched.text = text;
    patched.record(Step::ShiftWindow, hits);

    let (text, hits) = insert_after(&patched.text, FILTER_ANCHOR, FILTER_NOT_STARTED);
    patched.text = text;
    patched.record(Step::FilterNotStarted, hits);

    let (text, hits) = replace_regex(&patched.text, &GLOBAL_STATS, GLOBAL_STATS_REPLACEMENT);
    patched.text = text;
    patched.record(Step::GlobalStats, hits);

    let (text, hits) = replace_regex(&patched.text, &EXPORT_COUNTS, EXPORT_COUNTS_REPLACEMENT);
    patched.text = text;
    patched.record(Step::ExportCounts, hits);

    let (text, hits) = replace_regex(
        &patched.text,
        &RAMADAN_DAY_LABEL,
        RAMADAN_DAY_LABEL_REPLACEMENT,
    );
    patched.text = text;
    patched.record(Step::RamadanDayLabel, hits);

    patched
}

/// Patches the script at `path` in place.
pub fn patch_file(path: &Path) -> Result<PatchReport, PatchError> {
    let source = target::read(path)?;
    let patched = patch(&source);
    target::overwrite(path, &patched.text)?;
    tracing::info!(path = %path.display(), "script patched");
    Ok(PatchReport::new(path, patched.steps))
}

/// Prepends the Cairo clock helper unless the script already defines it.
pub fn inject_clock_helper(js: &str) -> (String, usize) {
    if js.contains(CLOCK_HELPER_MARKER) {
        return (js.to_owned(), 0);
    }
    (format!("{CLOCK_HELPER}\n{js}"), 1)
}

/// Adds the `isStarted` shift-start check next to every `isFinished` block.
pub fn expand_shift_window(js: &str) -> (String, usize) {
    let hits = SHIFT_WINDOW.find_iter(js).count();
    if hits == 0 {
        return (js.to_owned(), 0);
    }
    let text = SHIFT_WINDOW.replace_all(js, SHIFT_WINDOW_REPLACEMENT);
    (text.into_owned(), hits)
}

/// Inserts `addition` right after every occurrence of `anchor`.
pub fn insert_after(js: &str, anchor: &str, addition: &str) -> (String, usize) {
    let hits = js.matches(anchor).count();
    if hits == 0 {
        return (js.to_owned(), 0);
    }
    (js.replace(anchor, &format!("{anchor}{addition}")), hits)
}

// Replacements are taken literally; `$` in the JS template strings must not expand.
fn replace_regex(js: &str, pattern: &Regex, replacement: &str) -> (String, usize) {
    let hits = pattern.find_iter(js).count();
    if hits == 0 {
        return (js.to_owned(), 0);
    }
    let text = pattern.replace_all(js, NoExpand(replacement));
    (text.into_owned(), hits)
}
