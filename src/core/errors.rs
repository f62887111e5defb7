use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("no posts to review")]
    EmptyBatch,

    #[error("invalid post batch: {0}")]
    Parse(#[from] serde_json::Error),
}
