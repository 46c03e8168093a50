// Unix-socket transport: connection setup and raw framed read/write.

use tokio::io::BufReader;
use tokio::net::unix::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::UnixStream;

use crate::ipc::error::IpcError;
use crate::ipc::framed::{read_message_from, write_message_to};
use crate::ipc::transport::Transport;

#[derive(Debug)]
pub struct SocketTransport {
    writer: OwnedWriteHalf,
    reader: BufReader<OwnedReadHalf>,
}

impl SocketTransport {
    /// Connect to the compositor socket at `path`. Fails before any I/O if
    /// the path is empty.
    pub async fn connect(path: &str) -> Result<Self, IpcError> {
        if path.is_empty() {
            return Err(IpcError::Connection(
                "socket path is empty (is WAYFIRE_SOCKET set?)".to_string(),
            ));
        }

        let stream = UnixStream::connect(path)
            .await
            .map_err(|e| IpcError::Connection(format!("{}: {}", path, e)))?;

        let (reader, writer) = stream.into_split();
        Ok(SocketTransport {
            writer,
            reader: BufReader::new(reader),
        })
    }
}

#[async_trait::async_trait]
impl Transport for SocketTransport {
    async fn send(&mut self, json_body: &str) -> Result<(), IpcError> {
        write_message_to(&mut self.writer, json_body).await
    }

    async fn read(&mut self) -> Result<String, IpcError> {
        read_message_from(&mut self.reader).await
    }
}
