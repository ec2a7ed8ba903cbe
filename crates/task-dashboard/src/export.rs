/*
[INPUT]:  Current result text, download directory, wall clock
[OUTPUT]: Clipboard contents or a plain-text result file
[POS]:    Export layer - best-effort copy and download of results
[UPDATE]: When adding export targets or changing file naming
*/

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::state::DashboardState;

const FILE_PREFIX: &str = "task-result";

/// Copy the result text to the system clipboard.
///
/// The clipboard is opened on first use and kept in `slot`, since some
/// platforms drop the contents when the owning handle goes away. Returns
/// `true` when the text reached the clipboard. Failure is intentionally not
/// surfaced to the user.
pub fn copy_result(slot: &mut Option<arboard::Clipboard>, state: &DashboardState) -> bool {
    let Some(text) = state.result_text() else {
        return false;
    };

    if slot.is_none() {
        match arboard::Clipboard::new() {
            Ok(clipboard) => *slot = Some(clipboard),
            Err(err) => {
                debug!(error = %err, "clipboard unavailable; copy skipped");
                return false;
            }
        }
    }
    let Some(clipboard) = slot.as_mut() else {
        return false;
    };

    match clipboard.set_text(text) {
        Ok(()) => {
            info!("result copied to clipboard");
            true
        }
        Err(err) => {
            debug!(error = %err, "clipboard write failed; copy skipped");
            false
        }
    }
}

/// File name for a result exported at `at`.
pub fn result_file_name(at: DateTime<Local>) -> String {
    format!("{FILE_PREFIX}-{}.txt", at.format("%Y%m%d-%H%M%S"))
}

/// Write `text` verbatim to a timestamped file inside `dir`.
pub fn write_result_file(dir: &Path, text: &str, at: DateTime<Local>) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(result_file_name(at));
    fs::write(&path, text)?;
    Ok(path)
}

/// Export the result text as a downloadable file.
///
/// Returns the written path. Failure is intentionally not surfaced to the
/// user; it is only logged.
pub fn download_result(state: &DashboardState, dir: &Path) -> Option<PathBuf> {
    let text = state.result_text()?;
    match write_result_file(dir, &text, Local::now()) {
        Ok(path) => {
            info!(path = %path.display(), "result written");
            Some(path)
        }
        Err(err) => {
            warn!(dir = %dir.display(), error = %err, "result export failed");
            None
        }
    }
}
