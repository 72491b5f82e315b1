use std::path::Path;

use crate::report::{PatchReport, Patched, Step};
use crate::target::{self, PatchError};

/// Scrollable, snapping stats row for narrow screens.
pub const MOBILE_STATS: &str = r#"
/* Phase 10: Mobile Optimization for Sticky Row */
@media (max-width: 768px) {
  .dashboard-stats {
    display: flex !important;
    flex-wrap: nowrap !important;
    overflow-x: auto !important;
    -webkit-overflow-scrolling: touch;
    scroll-snap-type: x mandatory;
    padding-bottom: 8px !important;
  }
  .dashboard-stats .status-card {
    min-width: 140px !important;
    flex-shrink: 0;
    scroll-snap-align: start;
  }
}
"#;

/// Appends the mobile block. Not guarded: every call adds another copy.
pub fn patch(source: &str) -> Patched {
    let mut patched = Patched::new(format!("{source}{MOBILE_STATS}"));
    patched.record(Step::MobileStats, 1);
    patched
}

/// Appends the mobile block to the stylesheet at `path`.
///
/// The file is read first so a missing stylesheet fails before anything is
/// written; the block itself goes through an append-mode handle.
pub fn patch_file(path: &Path) -> Result<PatchReport, PatchError> {
    let source = target::read(path)?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "stylesheet loaded");
    let patched = patch(&source);
    target::append(path, &patched.text[source.len()..])?;
    tracing::info!(path = %path.display(), "stylesheet patched");
    Ok(PatchReport::new(path, patched.steps))
}
