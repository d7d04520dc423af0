use thiserror::Error;

#[derive(Error, Debug)]
pub enum EcodropError {
    #[error("Bin not found: {0}")]
    BinNotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(String),
}
