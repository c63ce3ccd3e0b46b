//! Document model: documents, their bodies, and the arena that owns them.

pub mod arena;
pub mod document;

pub use arena::{Arena, DocumentMut, GraphId, Source, Subgraph};
pub use document::{Document, Item};
