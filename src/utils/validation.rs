use crate::utils::error::{ReportError, Result};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let as_str = path.to_string_lossy();

    if as_str.is_empty() {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: as_str.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if as_str.contains('\0') {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: as_str.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Delimiters may be whitespace (a tab, a single space), they only have to be non-empty.
pub fn validate_delimiter(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Delimiter cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// Checks, in order, that the input exists, is a regular file and can be opened.
/// The handle opened for the readability check is dropped before returning.
pub fn check_input_file(path: &Path) -> Result<()> {
    let display = path.display().to_string();

    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ReportError::InputNotFoundError { path: display })
        }
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            return Err(ReportError::NotReadableError { path: display })
        }
        Err(e) => {
            return Err(ReportError::ReadError {
                path: display,
                source: e,
            })
        }
    };

    if !metadata.is_file() {
        return Err(ReportError::NotAFileError { path: display });
    }

    match File::open(path) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            Err(ReportError::NotReadableError { path: display })
        }
        Err(e) => Err(ReportError::ReadError {
            path: display,
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output", Path::new("report.txt")).is_ok());
        assert!(validate_path("output", Path::new("")).is_err());
        assert!(validate_path("output", &PathBuf::from("bad\0name")).is_err());
    }

    #[test]
    fn test_validate_delimiter() {
        assert!(validate_delimiter("delimiter", ",").is_ok());
        assert!(validate_delimiter("delimiter", "\t").is_ok());
        assert!(validate_delimiter("delimiter", "::").is_ok());
        assert!(validate_delimiter("delimiter", "").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("input", "data.csv").is_ok());
        assert!(validate_non_empty_string("input", "   ").is_err());
    }

    #[test]
    fn test_check_input_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("data.csv");
        std::fs::write(&file, "1,A,1.0").unwrap();

        assert!(check_input_file(&file).is_ok());

        let missing = check_input_file(&temp_dir.path().join("missing.csv"));
        assert!(matches!(missing, Err(ReportError::InputNotFoundError { .. })));

        let dir = check_input_file(temp_dir.path());
        assert!(matches!(dir, Err(ReportError::NotAFileError { .. })));
    }
}
