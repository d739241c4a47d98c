use crate::error::{IconError, Result};
use std::path::Path;
use tempfile::NamedTempFile;

/// Directory a staging file for `target` is created in, so the final rename
/// never crosses file systems.
fn staging_dir(target: &Path) -> &Path {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Runs `write` against a uniquely named staging file next to `target`, then
/// moves it over `target`. If `write` fails the staging file is dropped and
/// `target` is left untouched.
pub fn write_atomically<F>(target: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut NamedTempFile) -> Result<()>,
{
    let dir = staging_dir(target);
    let mut staged = NamedTempFile::new_in(dir).map_err(|e| IconError::io(dir, e))?;
    write(&mut staged)?;
    staged
        .persist(target)
        .map_err(|e| IconError::io(target, e.error))?;
    Ok(())
}
