/// Application settings
///
/// Everything is decided in code: there are no config files and no
/// environment variables. Platform folders come from `dirs`.

use std::path::PathBuf;

use iced::{Size, Theme};

use crate::acquire::PlatformCapabilities;
use crate::state::ScreenVariant;

#[derive(Debug, Clone)]
pub struct Settings {
    pub window_title: String,
    pub window_size: Size,
    pub theme: Theme,
    pub variant: ScreenVariant,
    pub capabilities: PlatformCapabilities,
    /// Title of the picker dialog
    pub picker_title: String,
    /// Where the picker opens; `None` means the platform Pictures folder
    pub gallery_dir: Option<PathBuf>,
    /// `tracing` filter directive
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Photo Filter".into(),
            window_size: Size::new(480.0, 720.0),
            theme: Theme::Dark,
            variant: ScreenVariant::WithApply,
            capabilities: PlatformCapabilities::default(),
            picker_title: "Select Image".into(),
            gallery_dir: None,
            log_filter: "photo_filter=debug,info".into(),
        }
    }
}

impl Settings {
    /// Get the folder the picker should open on
    ///
    /// - Linux: ~/Pictures (XDG_PICTURES_DIR)
    /// - macOS: ~/Pictures
    /// - Windows: {FOLDERID_Pictures}
    ///
    /// Falls back to the home directory when there is no Pictures folder.
    pub fn gallery_dir(&self) -> Option<PathBuf> {
        self.gallery_dir
            .clone()
            .or_else(dirs::picture_dir)
            .or_else(dirs::home_dir)
    }
}
