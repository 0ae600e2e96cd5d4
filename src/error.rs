#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::path::PathBuf;

use scene::error::{ErrorCode, SceneError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("{0}")]
    Scene(#[from] SceneError),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown model type `{0}`")]
    UnknownModel(String),
    #[error("{0} record(s) would be skipped on import")]
    SkippedRecords(usize),
}

impl ErrorCode for CliError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Read { .. } => "E_READ",
            Self::Scene(err) => err.error_code(),
            Self::Json(_) => "E_SERIALIZE",
            Self::UnknownModel(_) => "E_UNKNOWN_MODEL",
            Self::SkippedRecords(_) => "E_SKIPPED_RECORDS",
        }
    }
}

/// One-line message for stderr: `E_CODE: message`.
#[must_use]
pub fn render(err: &CliError) -> String {
    format!("{}: {err}", err.error_code())
}
