//! Icon asset tooling for the BrowseBack browser extension.
//!
//! Two independent pipelines produce `icon16.png`, `icon48.png` and
//! `icon128.png`:
//!
//! - [`icon_gen::generate_icons`] renders the gradient "brain with magnifier"
//!   icon from scratch.
//! - [`resize::resize_icon`] resamples an existing bitmap.

pub mod config;
pub mod draw;
pub mod error;
pub mod gradient;
pub mod icon_gen;
pub mod logging;
pub mod mask;
pub mod motif;
pub mod output;
pub mod resize;

pub use config::{RenderConfig, ResizeConfig, DEFAULT_SIZES};
pub use error::IconError;
pub use output::GeneratedIcon;
