//! Wire framing: a 4-byte little-endian length prefix followed by that many
//! bytes of UTF-8 JSON, in both directions.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::ipc::error::IpcError;

/// Upper bound on a single frame; anything larger is treated as a corrupt stream.
pub const MAX_FRAME_LEN: usize = 1024 * 1024;

/// Write a single message to an async writer with its length prefix.
pub async fn write_message_to<W>(writer: &mut W, json_body: &str) -> Result<(), IpcError>
where
    W: AsyncWrite + Unpin + Send,
{
    let length = json_body.len();
    if length > MAX_FRAME_LEN {
        return Err(IpcError::Protocol(format!(
            "outgoing frame of {} bytes exceeds the {} byte limit",
            length, MAX_FRAME_LEN
        )));
    }

    writer.write_all(&(length as u32).to_le_bytes()).await?;
    writer.write_all(json_body.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

/// Read a single length-prefixed message from an async reader, reassembling
/// partial reads until the full payload is available.
pub async fn read_message_from<R>(reader: &mut R) -> Result<String, IpcError>
where
    R: AsyncRead + Unpin + Send,
{
    let mut length_buffer = [0u8; 4];
    reader.read_exact(&mut length_buffer).await?;

    let length = u32::from_le_bytes(length_buffer) as usize;
    if length > MAX_FRAME_LEN {
        return Err(IpcError::Protocol(format!(
            "frame length {} exceeds the {} byte limit",
            length, MAX_FRAME_LEN
        )));
    }

    let mut payload_buffer = vec![0u8; length];
    reader.read_exact(&mut payload_buffer).await?;

    String::from_utf8(payload_buffer).map_err(|e| IpcError::Protocol(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{read_message_from, write_message_to, MAX_FRAME_LEN};
    use crate::ipc::error::IpcError;
    use tokio::io::{duplex, AsyncWriteExt};

    #[tokio::test]
    async fn test_write_message_to_and_read() {
        let (mut a, mut b) = duplex(1024);

        let writer = tokio::spawn(async move {
            write_message_to(&mut a, r#"{"method":"stipc/ping","data":{}}"#)
                .await
                .expect("write failed");
        });

        let body = read_message_from(&mut b).await.expect("read failed");
        assert!(body.contains("\"method\":\"stipc/ping\""));

        writer.await.unwrap();
    }

    #[tokio::test]
    async fn test_read_message_from_reassembles_split_frame() {
        let (mut a, mut b) = duplex(1024);

        let body = r#"{"result":"ok"}"#;
        let writer = tokio::spawn(async move {
            // Deliver the prefix and the payload in separate writes.
            a.write_all(&(body.len() as u32).to_le_bytes()).await.unwrap();
            a.flush().await.unwrap();
            a.write_all(&body.as_bytes()[..5]).await.unwrap();
            a.flush().await.unwrap();
            a.write_all(&body.as_bytes()[5..]).await.unwrap();
            a.flush().await.unwrap();
        });

        let received = read_message_from(&mut b).await.expect("read failed");
        assert_eq!(received, body);

        writer.await.unwrap();
    }

    #[tokio::test]
    async fn test_read_message_from_peer_close_mid_frame() {
        let (mut a, mut b) = duplex(64);

        let writer = tokio::spawn(async move {
            // Claim 100 bytes, deliver 5, then hang up.
            a.write_all(&100u32.to_le_bytes()).await.unwrap();
            a.write_all(b"hello").await.unwrap();
            a.flush().await.unwrap();
            drop(a);
        });

        let err = read_message_from(&mut b).await.unwrap_err();
        assert!(matches!(err, IpcError::Transport(_)));

        writer.await.unwrap();
    }

    #[tokio::test]
    async fn test_read_message_from_oversized_length() {
        let (mut a, mut b) = duplex(64);

        let writer = tokio::spawn(async move {
            let length = (MAX_FRAME_LEN + 1) as u32;
            a.write_all(&length.to_le_bytes()).await.unwrap();
            a.flush().await.unwrap();
        });

        let err = read_message_from(&mut b).await.unwrap_err();
        assert!(matches!(err, IpcError::Protocol(_)));

        writer.await.unwrap();
    }

    #[tokio::test]
    async fn test_read_message_from_invalid_utf8() {
        let (mut a, mut b) = duplex(64);

        let writer = tokio::spawn(async move {
            a.write_all(&2u32.to_le_bytes()).await.unwrap();
            a.write_all(&[0xff, 0xfe]).await.unwrap();
            a.flush().await.unwrap();
        });

        let err = read_message_from(&mut b).await.unwrap_err();
        assert!(matches!(err, IpcError::Protocol(_)));

        writer.await.unwrap();
    }
}
