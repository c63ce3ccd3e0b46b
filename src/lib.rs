//! dotgraph — build DOT graph-description documents and serialize them to
//! deterministic, reproducibly ordered source text.
//!
//! Documents live in an [`Arena`] and are addressed by [`GraphId`]. Node,
//! edge and attribute statements are rendered when added; subgraphs are
//! embedded by reference. [`Arena::source`] assembles the final text.
//!
//! ```
//! use dotgraph::{Arena, Document, attrs};
//!
//! let mut arena = Arena::new();
//! let g = arena.insert(Document::graph());
//! let mut doc = arena.get_mut(g).unwrap();
//! doc.node("A", None, attrs::NONE);
//! doc.node("B", None, attrs::NONE);
//! doc.edge(["A", "B"], None, &[("constraint", "false")]).unwrap();
//!
//! assert_eq!(
//!     dotgraph::render_source(&arena, g).unwrap(),
//!     "graph {\n\tA\n\tB\n\tA -- B [constraint=false]\n}"
//! );
//! ```
//!
//! Running the layout engine and writing files are left to the caller;
//! [`RenderConfig`] carries the settings they need.

pub mod config;
pub mod error;
pub mod model;
pub mod renderers;
pub mod syntax;

pub use config::RenderConfig;
pub use error::{Error, Result};
pub use model::{Arena, Document, DocumentMut, GraphId, Item, Source, Subgraph};
pub use renderers::{Renderer, SourceRenderer};
pub use syntax::attrs;
pub use syntax::{
    AttrTarget, Attributes, Compass, Endpoint, Kind, OrderedAttributes, UnorderedAttributes,
};

/// Render the DOT source of document `id` in `arena`.
///
/// Same as [`Arena::source`]; each call renders afresh.
pub fn render_source(arena: &Arena, id: GraphId) -> Result<String> {
    SourceRenderer.render(arena, id)
}
