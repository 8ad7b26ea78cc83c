//! Pick a photo from the gallery and choose a filter for it.
//!
//! - `acquire` opens the picker and decodes the chosen image
//! - `state` holds the screen state machine
//! - `ui` renders it
//! - `app` ties them together as an iced application

pub mod acquire;
pub mod app;
pub mod config;
pub mod state;
pub mod ui;
