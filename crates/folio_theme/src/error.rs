use thiserror::Error;

use crate::presets::UnknownPreset;
use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error(transparent)]
    UnknownPreset(#[from] UnknownPreset),

    #[error("malformed stored theme: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
