//! artscii - text renderings of RGBA images
//!
//! Wraps the [`artscii_core`] pipeline with YAML configuration, a reusable
//! renderer and a line-broken text output. Image decoding and terminal I/O
//! are left to the embedding application.
//!
//! ```
//! use artscii::{ArtsciiRenderer, RenderConfig};
//!
//! let config = RenderConfig::from_yaml_str("downsize: { height: 1, width: 1 }").unwrap();
//! let renderer = ArtsciiRenderer::new(config);
//!
//! // 1x2 image: opaque white, then fully transparent
//! let art = renderer
//!     .render_rgba(1, 2, vec![255, 255, 255, 255, 0, 0, 0, 0])
//!     .unwrap();
//! assert_eq!(art.to_string(), "@ ");
//! ```

pub mod error;
pub mod models;
pub mod rendering;

pub use artscii_core::{ArtsciiError, LuminanceField, PixelBuffer};
pub use error::{ConfigError, RenderError};
pub use models::{BackgroundColor, DownsizeFactors, RenderConfig};
pub use rendering::{Artscii, ArtsciiRenderer};
