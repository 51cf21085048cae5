// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::ui::messages::{info, warning};
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

/// Output path for `input`: the explicit `output` if given, otherwise the
/// input path with its extension replaced by the format's one
/// (`week12.csv` → `week12.ics`).
pub fn output_path_for(input: &Path, format: ExportFormat, output: Option<&Path>) -> PathBuf {
    match output {
        Some(p) => p.to_path_buf(),
        None => input.with_extension(format.extension()),
    }
}

/// Verifica se un file può essere creato o sovrascritto.
///
/// - Se il file NON esiste → Ok
/// - Se esiste ed è abilitato `force` → Ok
/// - Se esiste, `force == false` e stdin è un terminale → chiede conferma.
/// - Altrimenti → errore `OutputExists`.
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    if !io::stdin().is_terminal() {
        return Err(AppError::OutputExists(format!(
            "{} (use --force to overwrite)",
            path.display()
        )));
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::OutputExists(path.display().to_string()))
    }
}
