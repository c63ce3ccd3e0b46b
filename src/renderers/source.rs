//! DOT source assembler.
//!
//! Walks a document depth-first in body order and emits one line per
//! statement, indented with one tab per nesting level. Lines are joined with
//! `\n`; there is no trailing newline after the closing brace.

use tracing::trace;

use super::Renderer;
use crate::error::Result;
use crate::model::{Arena, Document, GraphId, Item};
use crate::syntax::quote::quote;
use crate::syntax::statements;
use crate::syntax::types::AttrTarget;

/// Renders documents to DOT source text.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceRenderer;

impl Renderer for SourceRenderer {
    fn render(&self, arena: &Arena, id: GraphId) -> Result<String> {
        let doc = arena.get(id)?;
        let mut lines = Vec::new();
        write_document(arena, doc, doc.body().len(), 0, false, &mut lines)?;
        Ok(lines.join("\n"))
    }
}

// ─── Assembly ────────────────────────────────────────────────────────────────

fn indented(depth: usize, text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!("{}{}", "\t".repeat(depth), text)
    }
}

/// Header line without indentation.
fn header(doc: &Document, subgraph: bool) -> String {
    let name = doc.name().map(quote);
    if subgraph {
        return match name {
            Some(name) => format!("subgraph {name} {{"),
            None => "{".to_string(),
        };
    }
    let mut head = String::new();
    if doc.is_strict() {
        head.push_str("strict ");
    }
    head.push_str(doc.kind().keyword());
    if let Some(name) = name {
        head.push(' ');
        head.push_str(&name);
    }
    head.push_str(" {");
    head
}

/// Append the lines of `doc` at `depth`, covering the first `extent` body
/// items. Embedded subgraphs recurse with their own recorded extent.
fn write_document(
    arena: &Arena,
    doc: &Document,
    extent: usize,
    depth: usize,
    subgraph: bool,
    lines: &mut Vec<String>,
) -> Result<()> {
    trace!(depth, name = doc.name(), extent, "rendering document");

    if let Some(comment) = doc.comment() {
        for line in statements::comment(comment) {
            lines.push(indented(depth, &line));
        }
    }
    lines.push(indented(depth, &header(doc, subgraph)));

    let defaults = [
        (AttrTarget::Graph, doc.graph_attr()),
        (AttrTarget::Node, doc.node_attr()),
        (AttrTarget::Edge, doc.edge_attr()),
    ];
    for (target, attrs) in defaults {
        if let Some(line) = statements::attr(Some(target), attrs) {
            lines.push(indented(depth + 1, &line));
        }
    }

    let body = &doc.body()[..extent.min(doc.body().len())];
    for item in body {
        match item {
            Item::Statement(text) => lines.push(indented(depth + 1, text)),
            Item::Subgraph { id, extent } => {
                let sub = arena.get(*id)?;
                write_document(arena, sub, *extent, depth + 1, true, lines)?;
            }
        }
    }

    lines.push(indented(depth, "}"));
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_source.rs"]
mod tests;
