/// User interface module
///
/// - `screen.rs` renders the single screen from `ScreenState`

pub mod screen;

pub use screen::render;
