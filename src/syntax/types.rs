//! Core types of the DOT language: graph kind, attribute statement
//! targets, compass points and edge endpoints.

use std::fmt;

use strum::{Display, EnumString, IntoStaticStr};

// ─── Kind ────────────────────────────────────────────────────────────────────

/// Whether a document is a `graph` (undirected) or a `digraph` (directed).
///
/// Fixed when a document is created; subgraphs must share their parent's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, IntoStaticStr)]
pub enum Kind {
    #[default]
    #[strum(serialize = "graph")]
    Undirected,
    #[strum(serialize = "digraph")]
    Directed,
}

impl Kind {
    /// Keyword opening the root document (`graph` / `digraph`).
    pub fn keyword(self) -> &'static str {
        self.into()
    }

    /// Connector placed between edge endpoints.
    pub fn edge_op(self) -> &'static str {
        match self {
            Kind::Undirected => "--",
            Kind::Directed => "->",
        }
    }

    /// True for `digraph`.
    pub fn is_directed(self) -> bool {
        self == Kind::Directed
    }
}

// ─── AttrTarget ──────────────────────────────────────────────────────────────

/// Which default-attribute block an attribute statement targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum AttrTarget {
    Graph,
    Node,
    Edge,
}

// ─── Compass ─────────────────────────────────────────────────────────────────

/// Compass point qualifying an edge endpoint (`node:port:ne`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Compass {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
    C,
    #[strum(serialize = "_")]
    Any,
}

// ─── Endpoint ────────────────────────────────────────────────────────────────

/// Edge endpoint: a node id optionally qualified by port and compass point.
///
/// Displays as the `node:port:compass` locator accepted by the edge
/// builders, which quote each part separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub node: String,
    pub port: Option<String>,
    pub compass: Option<Compass>,
}

impl Endpoint {
    pub fn new(node: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            port: None,
            compass: None,
        }
    }

    pub fn port(mut self, port: impl Into<String>) -> Self {
        self.port = Some(port.into());
        self
    }

    pub fn compass(mut self, compass: Compass) -> Self {
        self.compass = Some(compass);
        self
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.node)?;
        if let Some(port) = &self.port {
            write!(f, ":{port}")?;
        }
        if let Some(compass) = self.compass {
            write!(f, ":{compass}")?;
        }
        Ok(())
    }
}

impl From<Endpoint> for String {
    fn from(endpoint: Endpoint) -> Self {
        endpoint.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_types.rs"]
mod tests;
