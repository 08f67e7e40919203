// ABOUTME: Writes rendered content to an async output stream.
// ABOUTME: Single awaited write path: write_all followed by flush, with failures mapped to Io errors.

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::ExtractError;

/// Write `content` verbatim to `writer` and flush it.
///
/// No newline or other framing is appended. `url` is only used to label errors.
pub async fn write_output<W>(writer: &mut W, content: &str, url: &str) -> Result<(), ExtractError>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(content.as_bytes()).await.map_err(|e| {
        ExtractError::io(url, "Write", Some(anyhow::anyhow!("failed to write output: {}", e)))
    })?;
    writer.flush().await.map_err(|e| {
        ExtractError::io(url, "Write", Some(anyhow::anyhow!("failed to flush output: {}", e)))
    })
}
