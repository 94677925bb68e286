//! Write-completion heuristic.
//!
//! The debounce window alone cannot tell a finished save from a slow one,
//! so before hashing the daemon polls size and mtime until they hold still
//! for a run of consecutive checks. A file that never settles within the
//! allotted checks is reported unstable and retried on its next event.

use std::io;
use std::path::Path;
use std::thread::sleep;
use std::time::Duration;

/// Poll `path` until size and mtime are unchanged for `required` consecutive
/// checks, `interval` apart. Returns `Ok(false)` if the file kept changing.
pub fn wait_for_stable(
    path: &Path,
    interval: Duration,
    required: u32,
) -> io::Result<bool> {
    let mut last = snapshot(path)?;
    let mut steady = 0;

    // Each check is one interval; give an unsettled file a few extra rounds
    // before reporting it unstable.
    let max_rounds = required.saturating_mul(4).max(1);

    for _ in 0..max_rounds {
        sleep(interval);
        let current = snapshot(path)?;
        if current == last {
            steady += 1;
            if steady >= required {
                return Ok(true);
            }
        } else {
            steady = 0;
            last = current;
        }
    }

    Ok(false)
}

fn snapshot(path: &Path) -> io::Result<(u64, Option<std::time::SystemTime>)> {
    let meta = path.metadata()?;
    Ok((meta.len(), meta.modified().ok()))
}
