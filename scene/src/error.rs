//! Error taxonomy for the editor core.
//!
//! DESIGN
//! ======
//! Structural errors (`SceneError`) abort the whole operation and leave
//! editor state untouched. Per-record errors (`RecordError`) only cost the
//! offending record during import; decode keeps going and reports them
//! alongside the accepted records.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Serialize;

/// Maps an error to a stable, grepable code shown in notices.
pub trait ErrorCode {
    fn error_code(&self) -> &'static str;
}

/// Which room dimension failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomField {
    Width,
    Depth,
    Height,
}

impl RoomField {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Depth => "depth",
            Self::Height => "height",
        }
    }
}

impl std::fmt::Display for RoomField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("invalid room data: {field} must be a positive number")]
    InvalidRoomData { field: RoomField },
    #[error("malformed scene document: {0}")]
    MalformedDocument(String),
    #[error("scene document has no `models` array")]
    MissingModelsField,
    #[error("model not loaded: {0}")]
    ModelNotLoaded(String),
    #[error("no model type selected for placement")]
    NoModelSelected,
    #[error("the floor and walls cannot be deleted")]
    StructuralTarget,
    #[error("failed to load model `{key}`: {reason}")]
    AssetFailed { key: String, reason: String },
    #[error("clipboard access failed: {0}")]
    Clipboard(String),
    #[error("a clipboard transfer is already in progress")]
    TransferInProgress,
    #[error("transfer ticket {0} is not the active transfer")]
    UnknownTransfer(u64),
    #[error("invalid editor config: {0}")]
    InvalidConfig(String),
    #[error("failed to serialize scene: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ErrorCode for SceneError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRoomData { .. } => "E_INVALID_ROOM_DATA",
            Self::MalformedDocument(_) => "E_MALFORMED_DOCUMENT",
            Self::MissingModelsField => "E_MISSING_MODELS_FIELD",
            Self::ModelNotLoaded(_) => "E_MODEL_NOT_LOADED",
            Self::NoModelSelected => "E_NO_MODEL_SELECTED",
            Self::StructuralTarget => "E_STRUCTURAL_TARGET",
            Self::AssetFailed { .. } => "E_ASSET_FAILED",
            Self::Clipboard(_) => "E_CLIPBOARD",
            Self::TransferInProgress => "E_TRANSFER_IN_PROGRESS",
            Self::UnknownTransfer(_) => "E_UNKNOWN_TRANSFER",
            Self::InvalidConfig(_) => "E_INVALID_CONFIG",
            Self::Serialize(_) => "E_SERIALIZE",
        }
    }
}

/// Why a single imported model record was skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("unknown or unloaded model `{0}`")]
    UnknownModel(String),
    #[error("record field `{0}` is missing or not numeric")]
    InvalidRecordShape(&'static str),
}

impl ErrorCode for RecordError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownModel(_) => "E_UNKNOWN_MODEL",
            Self::InvalidRecordShape(_) => "E_INVALID_RECORD_SHAPE",
        }
    }
}

// =============================================================================
// NOTICES
// =============================================================================

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A message the host shows to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub code: &'static str,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn info(code: &'static str, message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, code, message: message.into() }
    }

    /// Notice carrying an error's code and display message.
    #[must_use]
    pub fn from_error<E: ErrorCode + std::fmt::Display>(level: NoticeLevel, err: &E) -> Self {
        Self { level, code: err.error_code(), message: err.to_string() }
    }
}
