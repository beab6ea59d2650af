use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("failed to render template: {0}")]
    Template(#[from] askama::Error),

    #[error("smtp error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("mail task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
