pub mod error;
pub mod framed;
pub mod socket;
pub mod template;
pub mod transport;
pub mod types;

use std::time::Duration;

use crate::ipc::error::IpcError;
use crate::ipc::socket::SocketTransport;
use crate::ipc::transport::Transport;
use crate::ipc::types::{CommandMessage, Response};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Synchronous request/response client for the compositor control socket.
///
/// One request is in flight at a time; `send_request` takes `&mut self`, so
/// sharing a client across tasks needs external synchronization (or one
/// client per task). Replies carry no ids and arrive in request order.
pub struct WayfireClient {
    transport: Option<Box<dyn Transport>>,
    timeout: Duration,
}

impl WayfireClient {
    /// Connect to the compositor socket at `path`.
    pub async fn connect(path: &str) -> Result<Self, IpcError> {
        let transport = SocketTransport::connect(path).await?;
        Ok(Self::new(Box::new(transport)))
    }

    /// Use the client over an already-established transport so higher layers
    /// and tests can provide their own.
    pub fn new(transport: Box<dyn Transport>) -> Self {
        WayfireClient {
            transport: Some(transport),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Deadline for a complete response frame to arrive.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    /// Send one command and block until its reply is read, the deadline
    /// elapses, or the connection fails.
    pub async fn send_request(&mut self, msg: &CommandMessage) -> Result<Response, IpcError> {
        let transport = self
            .transport
            .as_mut()
            .ok_or(IpcError::InvalidState("client is closed"))?;

        template::validate(msg)?;

        let body = serde_json::to_string(msg).map_err(|e| IpcError::Protocol(e.to_string()))?;
        transport.send(&body).await?;

        let reply = match tokio::time::timeout(self.timeout, transport.read()).await {
            Ok(read_result) => read_result?,
            Err(_) => return Err(IpcError::Timeout),
        };

        let value: serde_json::Value =
            serde_json::from_str(&reply).map_err(|e| IpcError::Protocol(e.to_string()))?;
        Ok(Response::new(value))
    }

    /// Drop the connection. Terminal: every later `send_request` fails with
    /// `InvalidState`. Closing twice is a no-op.
    pub fn close(&mut self) {
        self.transport = None;
    }

    pub fn is_closed(&self) -> bool {
        self.transport.is_none()
    }
}
