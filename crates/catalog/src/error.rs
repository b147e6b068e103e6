#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unknown command: {0}. Type `help` for the list of commands")]
    InvalidCommand(String),
}
