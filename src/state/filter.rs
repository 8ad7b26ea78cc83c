/// Filter names offered on the screen
///
/// A filter is only a label: no intensity or other parameters are modeled,
/// and nothing in the crate transforms pixels with it.

use std::fmt;

/// Label shown on the filter control while no filter is chosen
pub const NO_FILTER_LABEL: &str = "Select Filter";

/// One of the fixed filter names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    Grayscale,
    Brightness,
    Contrast,
}

impl Filter {
    /// Every filter, in menu order
    pub const ALL: [Filter; 3] = [Filter::Grayscale, Filter::Brightness, Filter::Contrast];

    /// Display name used in the menu and in logs
    pub fn name(self) -> &'static str {
        match self {
            Filter::Grayscale => "Grayscale",
            Filter::Brightness => "Brightness",
            Filter::Contrast => "Contrast",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
