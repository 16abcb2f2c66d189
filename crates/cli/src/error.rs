// crates/cli/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] loc_report_engine::EngineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<loc_report_core::ExtensionMapError> for AppError {
    fn from(err: loc_report_core::ExtensionMapError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<loc_report_engine::ScanConfigBuilderError> for AppError {
    fn from(err: loc_report_engine::ScanConfigBuilderError) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
