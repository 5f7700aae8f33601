//! Planner error types

use thiserror::Error;

use model_tokenomics::ValidationError;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Failed to read project file {path}: {source}")]
    ProjectRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse project file {path}: {source}")]
    ProjectParse {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Unknown template '{0}' (available: dao, defi)")]
    UnknownTemplate(String),

    #[error("Invalid project: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Failed to write {path}: {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Evaluation task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization failed: {0}")]
    Toml(#[from] toml::ser::Error),
}

pub type PlannerResult<T> = Result<T, PlannerError>;
