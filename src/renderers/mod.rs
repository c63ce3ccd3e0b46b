//! Renderer trait and the DOT source assembler.

pub mod source;

pub use source::SourceRenderer;

use crate::error::Result;
use crate::model::{Arena, GraphId};

/// Trait for document renderers.
pub trait Renderer {
    /// Render the document `id` (with everything it embeds) to a string.
    fn render(&self, arena: &Arena, id: GraphId) -> Result<String>;
}
