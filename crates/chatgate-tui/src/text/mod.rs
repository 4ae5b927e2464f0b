//! Text measurement and wrapping utilities.
//!
//! - [`visual_width`], [`truncate_to_width`], [`window_to_width`] - cell-aware sizing
//! - [`wrap_text`] - word wrapping for panel descriptions

mod width;
mod wrap;

pub use width::{truncate_to_width, visual_width, window_to_width};
pub use wrap::wrap_text;
