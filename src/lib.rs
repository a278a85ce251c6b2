//! Companion display for Sheng Ji (Tractor): shows the trump card and the
//! calls to players seated around the table.
//!
//! The [`display::DisplayScheduler`] decides what each half of the screen
//! shows; the rest of the crate models cards, settings and persisted state.
//! Drawing lives in [`render`] behind the `window` feature.

pub mod card;
pub mod clock;
pub mod constants;
pub mod controls;
pub mod display;
pub mod error;
pub mod settings;
pub mod state;

#[cfg(feature = "window")]
pub mod render;

pub use error::{Error, Result};
