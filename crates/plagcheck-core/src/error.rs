use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Detector not initialized")]
    NotInitialized,

    #[error("Input text is empty")]
    EmptyInput,

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CheckResult<T> = Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn read_missing() -> CheckResult<String> {
        Ok(std::fs::read_to_string("/definitely/not/here.txt")?)
    }

    #[test]
    fn test_io_errors_convert_with_question_mark() {
        let err = read_missing().unwrap_err();
        assert!(matches!(err, CheckError::Io(ref e) if e.kind() == io::ErrorKind::NotFound));
        assert!(err.to_string().starts_with("IO Error: "));
    }

    #[test]
    fn test_messages() {
        assert_eq!(CheckError::NotInitialized.to_string(), "Detector not initialized");
        assert_eq!(CheckError::EmptyInput.to_string(), "Input text is empty");
        assert_eq!(
            CheckError::UnsupportedFileType("a.exe".to_string()).to_string(),
            "Unsupported file type: a.exe"
        );
    }
}
