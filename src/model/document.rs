//! A single DOT document: header data plus an ordered body.
//!
//! Node, edge and attribute statements are rendered to text the moment they
//! are added and stored in call order. Subgraph references are interleaved
//! with them; those are created through [`Arena`](super::Arena), which owns
//! every document.

use std::path::PathBuf;

use tracing::debug;

use super::arena::GraphId;
use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::syntax::attrs::{Attributes, OrderedAttributes};
use crate::syntax::quote::quote_edge;
use crate::syntax::statements;
use crate::syntax::types::{AttrTarget, Kind};

// ─── Item ────────────────────────────────────────────────────────────────────

/// One entry of a document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// An already-rendered, unindented statement line.
    Statement(String),
    /// A reference to an embedded document covering the first `extent`
    /// items of its body, i.e. the items it had when it was embedded.
    Subgraph { id: GraphId, extent: usize },
}

// ─── Document ────────────────────────────────────────────────────────────────

/// A `graph`/`digraph` document or subgraph.
///
/// Kind and strictness are fixed at construction.
#[derive(Debug, Clone)]
pub struct Document {
    name: Option<String>,
    comment: Option<String>,
    kind: Kind,
    strict: bool,
    graph_attr: OrderedAttributes,
    node_attr: OrderedAttributes,
    edge_attr: OrderedAttributes,
    body: Vec<Item>,
    config: RenderConfig,
}

impl Document {
    pub fn new(kind: Kind) -> Self {
        Self {
            name: None,
            comment: None,
            kind,
            strict: false,
            graph_attr: OrderedAttributes::new(),
            node_attr: OrderedAttributes::new(),
            edge_attr: OrderedAttributes::new(),
            body: Vec::new(),
            config: RenderConfig::default(),
        }
    }

    /// An empty undirected document.
    pub fn graph() -> Self {
        Self::new(Kind::Undirected)
    }

    /// An empty directed document.
    pub fn digraph() -> Self {
        Self::new(Kind::Directed)
    }

    // ── Construction ──

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Comment rendered as `// ...` line(s) before the header.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Mark the document `strict`. Only valid for root documents.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_graph_attr<A: Attributes + ?Sized>(mut self, attrs: &A) -> Self {
        self.graph_attr = attrs.entries().into_iter().collect();
        self
    }

    pub fn with_node_attr<A: Attributes + ?Sized>(mut self, attrs: &A) -> Self {
        self.node_attr = attrs.entries().into_iter().collect();
        self
    }

    pub fn with_edge_attr<A: Attributes + ?Sized>(mut self, attrs: &A) -> Self {
        self.edge_attr = attrs.entries().into_iter().collect();
        self
    }

    /// Raw statement lines, appended verbatim to the body.
    pub fn with_body<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body
            .extend(lines.into_iter().map(|l| Item::Statement(l.into())));
        self
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    // ── Accessors ──

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind.is_directed()
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn graph_attr(&self) -> &OrderedAttributes {
        &self.graph_attr
    }

    pub fn node_attr(&self) -> &OrderedAttributes {
        &self.node_attr
    }

    pub fn edge_attr(&self) -> &OrderedAttributes {
        &self.edge_attr
    }

    pub fn body(&self) -> &[Item] {
        &self.body
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut RenderConfig {
        &mut self.config
    }

    /// Where the persistence layer should write this document's source.
    ///
    /// Falls back to `<name>.gv`, or `Graph.gv` / `Digraph.gv` when unnamed.
    pub fn filepath(&self) -> PathBuf {
        let stem = match (&self.name, self.kind) {
            (Some(name), _) => name.as_str(),
            (None, Kind::Undirected) => "Graph",
            (None, Kind::Directed) => "Digraph",
        };
        self.config.filepath(stem)
    }

    // ── Statements ──

    /// Add a node statement. Repeated names are not merged.
    pub fn node<A: Attributes + ?Sized>(&mut self, name: &str, label: Option<&str>, attrs: &A) {
        self.push(statements::node(name, label, attrs));
    }

    /// Add an edge chain through two or more endpoints.
    ///
    /// Identical edges are appended again; DOT allows multi-edges.
    pub fn edge<I, S, A>(&mut self, endpoints: I, label: Option<&str>, attrs: &A) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        A: Attributes + ?Sized,
    {
        let line = statements::edge(self.kind, endpoints, label, attrs)?;
        self.push(line);
        Ok(())
    }

    /// Add one attribute-less edge per `(tail, head)` pair.
    pub fn edges<I, T, H>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (T, H)>,
        T: AsRef<str>,
        H: AsRef<str>,
    {
        let op = self.kind.edge_op();
        for (tail, head) in pairs {
            let tail = quote_edge(tail.as_ref());
            let head = quote_edge(head.as_ref());
            self.push(format!("{tail} {op} {head}"));
        }
    }

    /// Add an attribute statement.
    ///
    /// `None` renders the bare `k=v` graph-attribute form; `"graph"`,
    /// `"node"` or `"edge"` render that default block. Any other target is an
    /// [`Error::Argument`]. Empty mappings add nothing.
    pub fn attr<A: Attributes + ?Sized>(&mut self, target: Option<&str>, attrs: &A) -> Result<()> {
        let target = target
            .map(|kw| {
                kw.parse::<AttrTarget>().map_err(|_| {
                    Error::Argument(format!(
                        "invalid attr call: statement must target graph, node, or edge, got {kw:?}"
                    ))
                })
            })
            .transpose()?;
        self.push_attr(target, attrs);
        Ok(())
    }

    /// Typed form of [`attr`](Self::attr) for a default block.
    pub fn set_defaults<A: Attributes + ?Sized>(&mut self, target: AttrTarget, attrs: &A) {
        self.push_attr(Some(target), attrs);
    }

    fn push_attr<A: Attributes + ?Sized>(&mut self, target: Option<AttrTarget>, attrs: &A) {
        match statements::attr(target, attrs) {
            Some(line) => self.push(line),
            None => debug!(block = ?target, "skipping attribute statement without attributes"),
        }
    }

    fn push(&mut self, line: String) {
        self.body.push(Item::Statement(line));
    }

    pub(crate) fn push_subgraph(&mut self, id: GraphId, extent: usize) {
        self.body.push(Item::Subgraph { id, extent });
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_model_document.rs"]
mod tests;
