//! Template acquisition.
//!
//! The CLI path reads the template from the filesystem on every run; nothing
//! is cached between runs. A failed read is fatal and distinct from any
//! check failure: no verdicts are produced for the run.

use scraper::Html;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AcquisitionError {
    #[error("template not found: {path}")]
    Missing { path: PathBuf },
    #[error("failed to read template {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read and parse the template fresh. Parsing itself never fails; malformed
/// markup simply yields a tree the checks will fail against.
pub fn load_template(path: &Path) -> Result<Html, AcquisitionError> {
    let raw = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            AcquisitionError::Missing {
                path: path.to_path_buf(),
            }
        } else {
            AcquisitionError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    Ok(Html::parse_document(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_template_is_a_distinct_error() {
        let err = load_template(Path::new("/nonexistent/starter-template.html"))
            .err()
            .expect("missing file must fail");
        assert!(matches!(err, AcquisitionError::Missing { .. }));
        assert!(err.to_string().contains("starter-template.html"));
    }
}
