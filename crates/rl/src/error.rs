use std::path::PathBuf;

use physics::ParamError;
use thiserror::Error;

/// Runtime failure of an environment call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvError {
    #[error("environment not started: call start() or set_state() before step()")]
    NotStarted,
}

/// Failure to load or validate a [`crate::PokeConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid physics parameters: {0}")]
    Physics(#[from] ParamError),
    #[error("invalid config: {0}")]
    Invalid(String),
}
