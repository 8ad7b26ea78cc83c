/// Shared data structures for the screen state
///
/// These structs represent the data model that flows between
/// the acquisition layer and the UI layer.

use bytes::Bytes;
use iced::widget::image::Handle;
use image::DynamicImage;

/// A decoded raster image (RGBA8), held in memory
///
/// Immutable once built. Cloning shares the pixel buffer and the
/// renderer handle, so the view can show it without re-uploading.
#[derive(Debug, Clone)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Bytes,
    /// Built once so the renderer keeps a stable texture id
    handle: Handle,
}

impl RasterImage {
    /// Wrap an RGBA8 buffer of `width * height * 4` bytes
    pub fn from_rgba(width: u32, height: u32, pixels: impl Into<Bytes>) -> Self {
        let pixels = pixels.into();
        debug_assert_eq!(pixels.len(), width as usize * height as usize * 4);

        let handle = Handle::from_rgba(width, height, pixels.clone());

        Self {
            width,
            height,
            pixels,
            handle,
        }
    }

    /// Convert whatever the codec produced into RGBA8
    pub fn from_dynamic(image: DynamicImage) -> Self {
        let rgba = image.into_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba(width, height, rgba.into_raw())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, row-major
    ///
    /// For code that inspects pixel values directly; the view only needs
    /// `handle`.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Renderer handle for `iced::widget::Image`
    pub fn handle(&self) -> &Handle {
        &self.handle
    }
}

impl PartialEq for RasterImage {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.pixels == other.pixels
    }
}

/// Identifies one picker flow
///
/// Every launch of the picker gets a new ticket; a result carrying an older
/// ticket belongs to a flow that has been superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PickTicket(pub(crate) u64);
