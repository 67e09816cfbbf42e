/// Storage errors raised by key-value backends.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("storage.read_failed: {0}")]
    ReadFailed(String),
    #[error("storage.write_failed: {0}")]
    WriteFailed(String),
    #[error("storage.remove_failed: {0}")]
    RemoveFailed(String),
}

impl StorageError {
    pub fn read_failed(reason: impl ToString) -> Self {
        StorageError::ReadFailed(reason.to_string())
    }
    pub fn write_failed(reason: impl ToString) -> Self {
        StorageError::WriteFailed(reason.to_string())
    }
    pub fn remove_failed(reason: impl ToString) -> Self {
        StorageError::RemoveFailed(reason.to_string())
    }
}
