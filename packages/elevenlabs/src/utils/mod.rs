use crate::error::Result;
use std::path::Path;
use tracing::debug;

/// Save audio to a file, replacing it if it exists.
pub async fn save(path: impl AsRef<Path>, data: &[u8]) -> Result<()> {
    let path = path.as_ref();
    tokio::fs::write(path, data).await?;
    debug!(path = %path.display(), bytes = data.len(), "audio saved");
    Ok(())
}
