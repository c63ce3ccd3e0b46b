//! Arena owning every document, addressed by [`GraphId`].
//!
//! Subgraph embedding stores a handle plus the child's body length at embed
//! time, never a copy and never an owning pointer. A document may therefore
//! embed itself (or form any other cycle) and rendering still terminates:
//! each reference only reaches statements older than itself.

use std::fmt;
use std::io;
use std::ops::Deref;

use tracing::debug;

use super::document::Document;
use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::renderers::{Renderer, SourceRenderer};
use crate::syntax::attrs::{Attributes, OrderedAttributes};
use crate::syntax::types::AttrTarget;

// ─── GraphId ─────────────────────────────────────────────────────────────────

/// Handle to a document stored in an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GraphId(usize);

impl GraphId {
    pub fn index(self) -> usize {
        self.0
    }
}

// ─── Subgraph arguments ──────────────────────────────────────────────────────

/// Arguments of [`Arena::subgraph`].
///
/// Either an existing document (`graph`) as the sole argument, or any mix of
/// the remaining fields describing a new anonymous-content child.
#[derive(Debug, Clone, Default)]
pub struct Subgraph {
    graph: Option<GraphId>,
    name: Option<String>,
    comment: Option<String>,
    graph_attr: Option<OrderedAttributes>,
    node_attr: Option<OrderedAttributes>,
    edge_attr: Option<OrderedAttributes>,
    body: Option<Vec<String>>,
}

impl Subgraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Embed an existing document.
    pub fn graph(mut self, id: GraphId) -> Self {
        self.graph = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn graph_attr<A: Attributes + ?Sized>(mut self, attrs: &A) -> Self {
        self.graph_attr = Some(attrs.entries().into_iter().collect());
        self
    }

    pub fn node_attr<A: Attributes + ?Sized>(mut self, attrs: &A) -> Self {
        self.node_attr = Some(attrs.entries().into_iter().collect());
        self
    }

    pub fn edge_attr<A: Attributes + ?Sized>(mut self, attrs: &A) -> Self {
        self.edge_attr = Some(attrs.entries().into_iter().collect());
        self
    }

    pub fn body<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    fn has_child_args(&self) -> bool {
        self.name.is_some()
            || self.comment.is_some()
            || self.graph_attr.is_some()
            || self.node_attr.is_some()
            || self.edge_attr.is_some()
            || self.body.is_some()
    }

    fn into_document(self, parent: &Document) -> Document {
        let mut doc = Document::new(parent.kind());
        if let Some(name) = self.name {
            doc = doc.with_name(name);
        }
        if let Some(comment) = self.comment {
            doc = doc.with_comment(comment);
        }
        if let Some(attrs) = self.graph_attr {
            doc = doc.with_graph_attr(&attrs);
        }
        if let Some(attrs) = self.node_attr {
            doc = doc.with_node_attr(&attrs);
        }
        if let Some(attrs) = self.edge_attr {
            doc = doc.with_edge_attr(&attrs);
        }
        if let Some(body) = self.body {
            doc = doc.with_body(body);
        }
        doc
    }
}

// ─── Arena ───────────────────────────────────────────────────────────────────

/// Owner of all documents of one build.
#[derive(Debug, Clone, Default)]
pub struct Arena {
    docs: Vec<Document>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `doc` and return its handle.
    pub fn insert(&mut self, doc: Document) -> GraphId {
        let id = GraphId(self.docs.len());
        debug!(
            id = id.index(),
            kind = %doc.kind(),
            name = doc.name(),
            strict = doc.is_strict(),
            "inserted document"
        );
        self.docs.push(doc);
        id
    }

    pub fn get(&self, id: GraphId) -> Result<&Document> {
        self.docs
            .get(id.0)
            .ok_or_else(|| Error::Argument(format!("unknown graph id {}", id.0)))
    }

    /// Statement-level access to a stored document.
    ///
    /// Bodies stay append-only: the handle cannot replace the document, so
    /// every recorded subgraph extent keeps pointing at the same statements.
    pub fn get_mut(&mut self, id: GraphId) -> Result<DocumentMut<'_>> {
        self.docs
            .get_mut(id.0)
            .map(|doc| DocumentMut { doc })
            .ok_or_else(|| Error::Argument(format!("unknown graph id {}", id.0)))
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    // ── Composition ──

    /// Embed a subgraph into `parent` and return the embedded document's id.
    ///
    /// With [`Subgraph::graph`] the given document is embedded; it must be the
    /// sole argument, must not be strict, and must have the parent's kind.
    /// Embedding `parent` into itself is always accepted. Without it, a new
    /// child of the parent's kind is built from the remaining arguments.
    ///
    /// On error nothing is modified.
    pub fn subgraph(&mut self, parent: GraphId, args: Subgraph) -> Result<GraphId> {
        self.get(parent)?;
        match args.graph {
            Some(child) => {
                if args.has_child_args() {
                    return Err(Error::Validation(
                        "sole argument required: graph must be the sole argument of subgraph()"
                            .to_string(),
                    ));
                }
                self.embed(parent, child)?;
                Ok(child)
            }
            None => {
                let child = self.spawn(parent, args)?;
                self.embed(parent, child)?;
                Ok(child)
            }
        }
    }

    /// Build a new subgraph of `parent`, fill it with `build`, then embed it.
    ///
    /// `args` must not name an existing document. If `build` fails the child
    /// stays in the arena unembedded and the error is returned.
    pub fn subgraph_with<F>(&mut self, parent: GraphId, args: Subgraph, build: F) -> Result<GraphId>
    where
        F: FnOnce(&mut Arena, GraphId) -> Result<()>,
    {
        if args.graph.is_some() {
            return Err(Error::Validation(
                "sole argument required: an existing graph cannot be combined with a build closure"
                    .to_string(),
            ));
        }
        let child = self.spawn(parent, args)?;
        build(self, child)?;
        self.embed(parent, child)?;
        Ok(child)
    }

    fn spawn(&mut self, parent: GraphId, args: Subgraph) -> Result<GraphId> {
        let doc = args.into_document(self.get(parent)?);
        Ok(self.insert(doc))
    }

    fn embed(&mut self, parent: GraphId, child: GraphId) -> Result<()> {
        let parent_kind = self.get(parent)?.kind();
        let sub = self.get(child)?;
        let extent = sub.body().len();
        if parent != child {
            if sub.is_strict() {
                return Err(Error::Validation(
                    "strict only allowed on the root document".to_string(),
                ));
            }
            if sub.kind() != parent_kind {
                return Err(Error::Validation(format!(
                    "subgraph kind mismatch: cannot add {} subgraph to {}",
                    sub.kind(),
                    parent_kind
                )));
            }
        }
        debug!(
            parent = parent.index(),
            child = child.index(),
            extent,
            "embedded subgraph"
        );
        self.docs[parent.0].push_subgraph(child, extent);
        Ok(())
    }

    /// Snapshot `id` into a new, independent document.
    ///
    /// Body statements are copied; embedded subgraph handles are shared.
    pub fn copy(&mut self, id: GraphId) -> Result<GraphId> {
        let doc = self.get(id)?.clone();
        let copy = self.insert(doc);
        debug!(from = id.index(), to = copy.index(), "copied document");
        Ok(copy)
    }

    // ── Output ──

    /// Render the DOT source of `id`. Computed on every call.
    pub fn source(&self, id: GraphId) -> Result<String> {
        SourceRenderer.render(self, id)
    }

    /// `Display` adapter for the source of `id`.
    pub fn display(&self, id: GraphId) -> Result<Source<'_>> {
        self.get(id)?;
        Ok(Source { arena: self, id })
    }

    /// Write the source of `id` to `sink`.
    pub fn write_to<W: io::Write>(&self, id: GraphId, mut sink: W) -> Result<()> {
        let source = self.source(id)?;
        sink.write_all(source.as_bytes())?;
        sink.flush()?;
        Ok(())
    }
}

// ─── DocumentMut ─────────────────────────────────────────────────────────────

/// Mutable handle to a document owned by an [`Arena`].
///
/// Offers the statement operations and the render config; reads go through
/// `Deref<Target = Document>`.
#[derive(Debug)]
pub struct DocumentMut<'a> {
    doc: &'a mut Document,
}

impl DocumentMut<'_> {
    pub fn node<A: Attributes + ?Sized>(&mut self, name: &str, label: Option<&str>, attrs: &A) {
        self.doc.node(name, label, attrs);
    }

    pub fn edge<I, S, A>(&mut self, endpoints: I, label: Option<&str>, attrs: &A) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        A: Attributes + ?Sized,
    {
        self.doc.edge(endpoints, label, attrs)
    }

    pub fn edges<I, T, H>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (T, H)>,
        T: AsRef<str>,
        H: AsRef<str>,
    {
        self.doc.edges(pairs);
    }

    pub fn attr<A: Attributes + ?Sized>(&mut self, target: Option<&str>, attrs: &A) -> Result<()> {
        self.doc.attr(target, attrs)
    }

    pub fn set_defaults<A: Attributes + ?Sized>(&mut self, target: AttrTarget, attrs: &A) {
        self.doc.set_defaults(target, attrs);
    }

    pub fn config_mut(&mut self) -> &mut RenderConfig {
        self.doc.config_mut()
    }
}

impl Deref for DocumentMut<'_> {
    type Target = Document;

    fn deref(&self) -> &Document {
        self.doc
    }
}

// ─── Source ──────────────────────────────────────────────────────────────────

/// Rendered DOT source of one document, produced lazily by `Display`.
#[derive(Debug, Clone, Copy)]
pub struct Source<'a> {
    arena: &'a Arena,
    id: GraphId,
}

impl fmt::Display for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = self.arena.source(self.id).map_err(|_| fmt::Error)?;
        f.write_str(&source)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_model_arena.rs"]
mod tests;
