use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::errors::AppError;

/// Writes the rendered page to `path`, or to stdout when no path is
/// configured.
pub fn write_page(document: &str, path: Option<&Path>) -> Result<(), AppError> {
    match path {
        Some(path) => {
            std::fs::write(path, document)?;
            info!(path = %path.display(), bytes = document.len(), "Page written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_page_to_file_round_trips_content() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("cv.html");

        write_page("<!DOCTYPE html><html></html>", Some(&path)).expect("write succeeds");

        let content = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(content, "<!DOCTYPE html><html></html>");
    }

    #[test]
    fn test_write_page_fails_on_missing_directory() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("no-such-dir").join("cv.html");

        let result = write_page("<html></html>", Some(&path));
        assert!(matches!(result, Err(AppError::Io(_))), "missing parent dir is an I/O error");
    }
}
