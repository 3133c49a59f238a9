// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Guards an export target against accidental overwrite.
///
/// A new path, or any path with `force`, passes straight through. An
/// existing report file is only replaced after an explicit `y`/`yes` on stdin.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("Report file '{}' already exists.", path.display()));
    print!("Replace it with the new export? [y/N]: ");
    io::stdout().flush().ok();

    if confirmed(io::stdin().lock())? {
        info("The previous report will be replaced.");
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "{} left untouched (use --force to overwrite)",
            path.display()
        )))
    }
}

/// Reads one answer line; anything but `y`/`yes` declines.
fn confirmed<R: BufRead>(mut input: R) -> AppResult<bool> {
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
