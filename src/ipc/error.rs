//! Error types for the Wayfire IPC client.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IpcError {
    /// The command name is not in the operation registry.
    #[error("unknown operation `{method}`")]
    UnknownOperation { method: String },

    /// A required data field was removed from a template before sending.
    #[error("operation `{method}` requires data field `{field}`")]
    MissingField { method: String, field: String },

    /// The compositor socket could not be reached.
    #[error("cannot connect to compositor socket: {0}")]
    Connection(String),

    /// Read or write on an established connection failed, or the peer hung up.
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    /// The response payload could not be decoded.
    #[error("malformed response: {0}")]
    Protocol(String),

    /// No complete response arrived within the configured deadline.
    #[error("timed out waiting for a response")]
    Timeout,

    /// An operation was invoked on a client that is not connected.
    #[error("invalid client state: {0}")]
    InvalidState(&'static str),
}
