/// Image acquisition module
///
/// This module handles:
/// - Launching the gallery picker (picker.rs)
/// - Resolving what the picker returned (content.rs)
/// - Decoding it into an in-memory raster image (decoder.rs)

pub mod content;
pub mod decoder;
pub mod picker;

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::state::RasterImage;

pub use content::ContentRef;
pub use decoder::{
    decode_in_background, DecodeStrategy, Decoder, PlatformCapabilities, PlatformDecoder,
};
pub use picker::{GalleryPicker, ImagePicker, PickerOutcome};

/// Extensions offered by the picker's image filter
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tiff", "tif"];

/// Why a content reference could not become a raster image
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("cannot resolve '{reference}': {reason}")]
    Unresolvable { reference: String, reason: String },

    #[error("cannot read {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    #[error("unrecognized image format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to decode {content}: {message}")]
    Decode { content: String, message: String },

    #[error("background decode failed: {0}")]
    Background(String),
}

/// Run one picker flow: ask for an image, then decode it
///
/// Returns `Ok(None)` when the user cancelled the picker.
pub async fn acquire(
    picker: Arc<dyn ImagePicker>,
    decoder: Arc<dyn Decoder>,
) -> Result<Option<RasterImage>, DecodeError> {
    match picker.pick().await {
        PickerOutcome::Picked(content) => decode_in_background(decoder, content).await.map(Some),
        PickerOutcome::Cancelled => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedPicker(PickerOutcome);

    #[async_trait]
    impl ImagePicker for FixedPicker {
        async fn pick(&self) -> PickerOutcome {
            self.0.clone()
        }
    }

    /// Hands out a solid image whose shade is the call count
    #[derive(Default)]
    struct CountingDecoder {
        calls: AtomicUsize,
    }

    impl Decoder for CountingDecoder {
        fn decode(&self, content: &ContentRef) -> Result<RasterImage, DecodeError> {
            let calls = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if content.extension().as_deref() == Some("bad") {
                return Err(DecodeError::Decode {
                    content: content.to_string(),
                    message: "corrupt".into(),
                });
            }
            Ok(RasterImage::from_rgba(1, 1, vec![calls as u8; 4]))
        }
    }

    #[tokio::test]
    async fn test_cancelled_picker_skips_decode() {
        let decoder = Arc::new(CountingDecoder::default());
        let picker = Arc::new(FixedPicker(PickerOutcome::Cancelled));

        let result = acquire(picker, decoder.clone()).await;

        assert_eq!(result, Ok(None));
        assert_eq!(decoder.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_picked_image_is_decoded() {
        let decoder = Arc::new(CountingDecoder::default());
        let picker = Arc::new(FixedPicker(PickerOutcome::Picked(ContentRef::from_path(
            "gallery/a.png",
        ))));

        let image = acquire(picker, decoder.clone()).await.unwrap().unwrap();

        assert_eq!(image.pixels(), &[1, 1, 1, 1]);
        assert_eq!(decoder.calls.load(Ordering::SeqCst), 1);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_file_uri_reference_is_decoded() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("beach day.png");
        image::RgbaImage::from_pixel(5, 2, image::Rgba([1, 2, 3, 255]))
            .save(&path)
            .unwrap();

        let uri = url::Url::from_file_path(&path).unwrap();
        let content = ContentRef::parse(uri.as_str()).unwrap();
        let picker = Arc::new(FixedPicker(PickerOutcome::Picked(content)));
        let decoder = Arc::new(PlatformDecoder::new(PlatformCapabilities::default()));

        let image = acquire(picker, decoder).await.unwrap().unwrap();
        assert_eq!((image.width(), image.height()), (5, 2));
    }

    #[tokio::test]
    async fn test_decode_failure_propagates() {
        let decoder = Arc::new(CountingDecoder::default());
        let picker = Arc::new(FixedPicker(PickerOutcome::Picked(ContentRef::from_path(
            "gallery/a.bad",
        ))));

        let err = acquire(picker, decoder).await.unwrap_err();
        assert!(err.to_string().contains("corrupt"));
    }
}
