use crate::{Error, Result, llm::ImageInput};
use tracing::debug;

/// Checks that `bytes` is a decodable image and tags it with its MIME type.
///
/// The bytes are forwarded untouched; decoding only guards against sending
/// garbage to the vision model.
pub fn decode_image(bytes: Vec<u8>) -> Result<ImageInput> {
    let format = image::guess_format(&bytes)?;
    let decoded = image::load_from_memory_with_format(&bytes, format)?;

    debug!(
        "Decoded {:?} image ({}x{})",
        format,
        decoded.width(),
        decoded.height()
    );

    Ok(ImageInput::new(format.to_mime_type(), bytes))
}

/// [`decode_image`] on the blocking pool, keeping full decodes off the
/// runtime's worker threads.
pub async fn decode_image_blocking(bytes: Vec<u8>) -> Result<ImageInput> {
    tokio::task::spawn_blocking(move || decode_image(bytes))
        .await
        .map_err(|e| Error::internal(format!("Image decode task failed: {}", e)))?
}
