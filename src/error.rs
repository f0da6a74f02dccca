//! Error types
//!
//! Only initialization can fail. The simulation itself has no error paths.

use std::path::PathBuf;

/// Fatal errors raised while bringing the game up (or tearing the terminal down).
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// An asset file could not be read.
    #[error("can not load {name} from {path}: {source}")]
    AssetLoad {
        name: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An asset file exists but holds no data.
    #[error("asset {name} at {path} is empty")]
    EmptyAsset { name: &'static str, path: PathBuf },

    /// Terminal setup, input polling or drawing failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Tuning values that cannot produce a playable field.
    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    /// Tuning JSON could not be parsed.
    #[error("failed to parse tuning: {0}")]
    TuningParse(#[from] serde_json::Error),
}
