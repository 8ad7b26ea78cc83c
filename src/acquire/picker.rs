use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rfd::AsyncFileDialog;
use tracing::{debug, info, warn};
use url::Url;

use super::{ContentRef, IMAGE_EXTENSIONS};

/// What came back from the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    Picked(ContentRef),
    /// The user backed out; nothing was chosen
    Cancelled,
}

/// The picker-launch capability handed to the application
#[async_trait]
pub trait ImagePicker: Send + Sync {
    async fn pick(&self) -> PickerOutcome;
}

/// Native file dialog restricted to images, opened on the gallery folder
#[derive(Debug, Clone)]
pub struct GalleryPicker {
    title: String,
    start_dir: Option<PathBuf>,
}

impl GalleryPicker {
    pub fn new(title: impl Into<String>, start_dir: Option<PathBuf>) -> Self {
        Self {
            title: title.into(),
            start_dir,
        }
    }
}

#[async_trait]
impl ImagePicker for GalleryPicker {
    async fn pick(&self) -> PickerOutcome {
        let mut dialog = AsyncFileDialog::new()
            .set_title(self.title.as_str())
            .add_filter("Images", IMAGE_EXTENSIONS);

        if let Some(dir) = &self.start_dir {
            dialog = dialog.set_directory(dir);
        }

        match dialog.pick_file().await {
            Some(handle) => {
                let content = content_for(handle.path());
                info!("🖼️  Picked {}", content);
                PickerOutcome::Picked(content)
            }
            None => {
                debug!("Picker dismissed without a selection");
                PickerOutcome::Cancelled
            }
        }
    }
}

/// Hand the dialog's choice over as a `file://` reference
///
/// Relative paths have no URI form and are kept as plain paths.
fn content_for(path: &Path) -> ContentRef {
    let Ok(uri) = Url::from_file_path(path) else {
        return ContentRef::from_path(path);
    };

    match ContentRef::parse(uri.as_str()) {
        Ok(content) => content,
        Err(e) => {
            warn!("Keeping {} as a plain path: {}", path.display(), e);
            ContentRef::from_path(path)
        }
    }
}
