/// Content reference to raster image decoding
///
/// Two strategies produce the same `RasterImage`:
/// - `Legacy` decodes the whole resource in one call, trusting the file
///   extension to pick the codec
/// - `Structured` opens a reader, sniffs the format from the leading bytes,
///   applies decoder limits and only then decodes
///
/// Which one runs is decided once from `PlatformCapabilities`.

use std::io;
use std::sync::Arc;

use image::{ImageError, ImageReader, Limits};
use tokio::task;
use tracing::{debug, info};

use super::{ContentRef, DecodeError};
use crate::state::RasterImage;

/// Largest width or height the structured decoder accepts
const MAX_DIMENSION: u32 = 16_384;

/// What the running platform offers for decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformCapabilities {
    /// Format sniffing and decoder limits are available
    pub structured_decoder: bool,
}

impl Default for PlatformCapabilities {
    fn default() -> Self {
        Self {
            structured_decoder: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStrategy {
    Legacy,
    Structured,
}

impl DecodeStrategy {
    pub fn for_capabilities(capabilities: PlatformCapabilities) -> Self {
        if capabilities.structured_decoder {
            DecodeStrategy::Structured
        } else {
            DecodeStrategy::Legacy
        }
    }
}

/// The decode capability handed to the application
pub trait Decoder: Send + Sync {
    fn decode(&self, content: &ContentRef) -> Result<RasterImage, DecodeError>;
}

/// Decoder backed by the `image` crate
#[derive(Debug, Clone, Copy)]
pub struct PlatformDecoder {
    strategy: DecodeStrategy,
}

impl PlatformDecoder {
    pub fn new(capabilities: PlatformCapabilities) -> Self {
        Self {
            strategy: DecodeStrategy::for_capabilities(capabilities),
        }
    }

    pub fn strategy(&self) -> DecodeStrategy {
        self.strategy
    }
}

impl Decoder for PlatformDecoder {
    fn decode(&self, content: &ContentRef) -> Result<RasterImage, DecodeError> {
        debug!("Decoding {} ({:?})", content, self.strategy);

        let decoded = match self.strategy {
            DecodeStrategy::Legacy => decode_legacy(content)?,
            DecodeStrategy::Structured => decode_structured(content)?,
        };

        let raster = RasterImage::from_dynamic(decoded);
        info!("📷 Decoded {}: {}x{}", content, raster.width(), raster.height());
        Ok(raster)
    }
}

fn decode_legacy(content: &ContentRef) -> Result<image::DynamicImage, DecodeError> {
    image::open(content.path()).map_err(|e| image_error(content, e))
}

fn decode_structured(content: &ContentRef) -> Result<image::DynamicImage, DecodeError> {
    let mut reader = ImageReader::open(content.path())
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| io_error(content, e))?;

    if reader.format().is_none() {
        return Err(DecodeError::UnsupportedFormat(content.to_string()));
    }

    let mut limits = Limits::default();
    limits.max_image_width = Some(MAX_DIMENSION);
    limits.max_image_height = Some(MAX_DIMENSION);
    reader.limits(limits);

    reader.decode().map_err(|e| image_error(content, e))
}

fn io_error(content: &ContentRef, err: io::Error) -> DecodeError {
    if err.kind() == io::ErrorKind::NotFound {
        DecodeError::Unresolvable {
            reference: content.to_string(),
            reason: "no such file".into(),
        }
    } else {
        DecodeError::Io {
            path: content.path().to_path_buf(),
            message: err.to_string(),
        }
    }
}

fn image_error(content: &ContentRef, err: ImageError) -> DecodeError {
    match err {
        ImageError::IoError(e) => io_error(content, e),
        ImageError::Unsupported(_) => DecodeError::UnsupportedFormat(content.to_string()),
        other => DecodeError::Decode {
            content: content.to_string(),
            message: other.to_string(),
        },
    }
}

/// Run a decode on the blocking pool so the UI thread stays free
pub async fn decode_in_background(
    decoder: Arc<dyn Decoder>,
    content: ContentRef,
) -> Result<RasterImage, DecodeError> {
    task::spawn_blocking(move || decoder.decode(&content))
        .await
        .map_err(|e| DecodeError::Background(e.to_string()))?
}
