//! Transport abstraction for the compositor connection.

use async_trait::async_trait;

use crate::ipc::error::IpcError;

/// Minimal async trait for the IPC byte transport.
/// - `send` takes a JSON body (not including the length prefix), frames it and writes it.
/// - `read` returns the next JSON body (prefix stripped).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&mut self, json_body: &str) -> Result<(), IpcError>;
    async fn read(&mut self) -> Result<String, IpcError>;
}
