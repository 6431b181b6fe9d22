//! Server-side markup rendering.

mod markup;

pub use markup::{MarkupWriter, RenderError, RenderOptions};
