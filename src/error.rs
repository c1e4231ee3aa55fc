//! Error types for the league companion

use thiserror::Error;


pub type Result<T> = std::result::Result<T, LeagueError>;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("League ID not provided and {env_var} environment variable not set")]
    LeagueNotConfigured { env_var: String },

    #[error("Record store is not configured (set {url_var} and {key_var})")]
    StoreNotConfigured { url_var: String, key_var: String },

    #[error("Record store returned {status} for {table}: {body}")]
    StoreStatus {
        table: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Invalid sort column: {column}")]
    InvalidSortColumn { column: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}
