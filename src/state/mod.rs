/// State management module
///
/// This module holds everything the screen knows about:
/// - Shared data structures (data.rs)
/// - The fixed list of filter names (filter.rs)
/// - The screen state machine and its transitions (screen.rs)

pub mod data;
pub mod filter;
pub mod screen;

pub use data::{PickTicket, RasterImage};
pub use filter::Filter;
pub use screen::{Action, Effect, Phase, ScreenState, ScreenVariant};
