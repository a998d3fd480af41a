use std::io;

/// All error types for the csv-mesh importer.
#[derive(thiserror::Error, Debug)]
pub enum CsvMeshError {
    #[error("Input error: {0}")]
    Input(String),
    #[error("CSV stream is empty: missing header row")]
    MissingHeader,
    #[error("Malformed row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CsvMeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_strings() {
        let e = CsvMeshError::Input("bad file".into());
        assert_eq!(e.to_string(), "Input error: bad file");

        let e = CsvMeshError::MissingHeader;
        assert_eq!(e.to_string(), "CSV stream is empty: missing header row");

        let e = CsvMeshError::MalformedRow {
            row: 7,
            reason: "zero w component".into(),
        };
        assert_eq!(e.to_string(), "Malformed row 7: zero w component");
    }

    #[test]
    fn from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file missing");
        let e: CsvMeshError = io_err.into();
        assert!(matches!(e, CsvMeshError::Io(_)));
        assert!(e.to_string().contains("file missing"));
    }
}
