//! Rendering pipeline and its text output.

mod output;
mod renderer;

pub use output::Artscii;
pub use renderer::ArtsciiRenderer;
