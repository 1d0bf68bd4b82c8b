pub mod color;
pub mod config;

pub use color::{BackgroundColor, ParseColorError};
pub use config::{DownsizeFactors, RenderConfig};
