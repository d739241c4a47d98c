use crate::config::ICON_SET;
use crate::error::{IconError, Result};
use crate::models::{IconReport, IconTarget};
use crate::render::render_icon;
use log::info;
use rayon::prelude::*;
use std::fs;
use std::path::Path;

/// Renders the shipped icon set into `out_dir`.
pub fn run(out_dir: &Path) -> Result<Vec<IconReport>> {
    generate_icons(out_dir, &ICON_SET)
}

/// Renders every target into `out_dir`. Reports come back in target order.
/// Fails if any single render fails.
pub fn generate_icons(out_dir: &Path, targets: &[IconTarget]) -> Result<Vec<IconReport>> {
    fs::create_dir_all(out_dir).map_err(|e| IconError::io(out_dir, e))?;

    targets
        .par_iter()
        .map(|target| render_target(out_dir, target))
        .collect()
}

fn render_target(out_dir: &Path, target: &IconTarget) -> Result<IconReport> {
    let path = out_dir.join(target.file_name);
    render_icon(target.size, &path)?;

    let bytes = fs::metadata(&path)
        .map_err(|e| IconError::io(&path, e))?
        .len();
    info!(
        "Wrote {} ({}x{}, {} bytes)",
        path.display(),
        target.size,
        target.size,
        bytes
    );
    Ok(IconReport {
        file_name: target.file_name.to_string(),
        size: target.size,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn run_produces_exactly_the_icon_set() {
        let dir = tempfile::tempdir().unwrap();
        let reports = run(dir.path()).unwrap();

        let names: Vec<_> = reports.iter().map(|r| r.file_name.as_str()).collect();
        assert_eq!(names, ["icon16.png", "icon48.png", "icon128.png"]);
        assert_eq!(entries(dir.path()), ["icon128.png", "icon16.png", "icon48.png"]);

        for report in &reports {
            let path = dir.path().join(&report.file_name);
            let decoded = image::open(&path).unwrap();
            assert_eq!((decoded.width(), decoded.height()), (report.size, report.size));
            assert_eq!(report.bytes, fs::metadata(&path).unwrap().len());
        }
    }

    #[test]
    fn repeated_runs_are_byte_identical() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        run(first.path()).unwrap();
        run(second.path()).unwrap();

        for target in &ICON_SET {
            assert_eq!(
                fs::read(first.path().join(target.file_name)).unwrap(),
                fs::read(second.path().join(target.file_name)).unwrap()
            );
        }
    }

    #[test]
    fn creates_missing_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("assets").join("icons");
        run(&nested).unwrap();
        assert_eq!(entries(&nested).len(), 3);
    }

    #[test]
    fn invalid_target_fails_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let targets = [
            IconTarget { size: 16, file_name: "ok.png" },
            IconTarget { size: 0, file_name: "bad.png" },
        ];
        assert!(matches!(
            generate_icons(dir.path(), &targets),
            Err(IconError::InvalidSize(0))
        ));
    }

    #[test]
    fn out_dir_that_is_a_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, b"x").unwrap();
        assert!(matches!(run(&blocker), Err(IconError::Io { .. })));
    }
}
