use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeployError {
    /// The active network has no mailbox entry.
    #[error("No mailbox for network: {0}")]
    UnknownNetwork(String),

    #[error("Invalid mailbox address '{address}' for network: {network}")]
    InvalidAddress { network: String, address: String },

    #[error("Failed to load contract artifact {path}: {reason}")]
    Artifact { path: String, reason: String },

    /// The deploy transaction could not be built, sent or confirmed.
    #[error("{0}")]
    Deployment(String),
}
