//! Status dispatch and body handling for synthesis responses.

use crate::error::{Error, Result, ValidationError};
use reqwest::{Response, StatusCode};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::debug;

/// Pass a `200` response through; turn anything else into an [`Error`].
///
/// Every rejected response is dropped before returning, so the connection
/// is released whichever branch is taken.
pub(crate) async fn check_status(resp: Response) -> Result<Response> {
    let status = resp.status();
    match status {
        StatusCode::OK => Ok(resp),
        StatusCode::UNAUTHORIZED => {
            drop(resp);
            debug!("text-to-speech request rejected: unauthorized");
            Err(Error::Unauthorized)
        }
        _ => {
            let error = decode_rejection(status, resp).await;
            debug!(%status, error = %error, "text-to-speech request rejected");
            Err(error)
        }
    }
}

/// Drain a rejected response and decode it as a [`ValidationError`].
///
/// A failed body read is the only cause reported; nothing is decoded then.
async fn decode_rejection(status: StatusCode, resp: Response) -> Error {
    let body = match resp.bytes().await {
        Ok(body) => body,
        Err(e) => return Error::Transport(e),
    };

    match ValidationError::from_slice(status, &body) {
        Ok(validation) => Error::Validation(validation),
        Err(source) => Error::Decode { status, source },
    }
}

/// Copy the audio body into `writer` chunk by chunk, then flush.
///
/// Returns the number of bytes written. A failed read or write ends the
/// copy with [`Error::TransferInterrupted`].
pub(crate) async fn copy_audio<W>(mut resp: Response, writer: &mut W) -> Result<u64>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let mut written: u64 = 0;
    loop {
        let chunk = match resp.chunk().await {
            Ok(Some(chunk)) => chunk,
            Ok(None) => break,
            Err(e) => return Err(Error::interrupted(written, e)),
        };
        writer
            .write_all(&chunk)
            .await
            .map_err(|e| Error::interrupted(written, e))?;
        written += chunk.len() as u64;
    }
    writer
        .flush()
        .await
        .map_err(|e| Error::interrupted(written, e))?;

    debug!(bytes = written, "audio body drained");
    Ok(written)
}
