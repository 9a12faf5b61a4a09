use thiserror::Error;

#[derive(Debug, Error)]
pub enum LichenError {
    #[error("activation error: {0}")]
    Activation(String),

    #[error("api error: {0}")]
    Api(String),

    #[error("patch error: {0}")]
    Patch(String),

    #[error("page error: {0}")]
    Page(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LichenResult<T> = Result<T, LichenError>;
