//! Statement builders: node, edge, attribute and comment lines.
//!
//! Every builder returns unindented text; indentation is the renderer's job.

use super::attrs::{Attributes, a_list, attr_list};
use super::quote::{quote, quote_edge};
use super::types::{AttrTarget, Kind};
use crate::error::{Error, Result};

/// `name [label=... k=v]`, the bracket omitted when there are no attributes.
pub fn node<A: Attributes + ?Sized>(name: &str, label: Option<&str>, attrs: &A) -> String {
    format!("{}{}", quote(name), attr_list(label, attrs))
}

/// An edge chain `a -- b -- c [k=v]` (`->` for directed documents).
///
/// Endpoints may carry a port and compass point (`node:port:ne`). Fails with
/// [`Error::Argument`] for fewer than two endpoints.
pub fn edge<I, S, A>(kind: Kind, endpoints: I, label: Option<&str>, attrs: &A) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    A: Attributes + ?Sized,
{
    let quoted: Vec<String> = endpoints
        .into_iter()
        .map(|e| quote_edge(e.as_ref()))
        .collect();
    if quoted.len() < 2 {
        return Err(Error::Argument(format!(
            "edge requires at least 2 endpoints, got {}",
            quoted.len()
        )));
    }
    let op = format!(" {} ", kind.edge_op());
    Ok(format!("{}{}", quoted.join(op.as_str()), attr_list(label, attrs)))
}

/// Attribute statement.
///
/// With a target: `node [k=v]`. Without: the bare `k=v k=v` form, which sets
/// graph attributes of the enclosing document. `None` when `attrs` is empty.
pub fn attr<A: Attributes + ?Sized>(target: Option<AttrTarget>, attrs: &A) -> Option<String> {
    match target {
        Some(target) => {
            let list = attr_list(None, attrs);
            (!list.is_empty()).then(|| format!("{target}{list}"))
        }
        None => {
            let list = a_list(None, attrs);
            (!list.is_empty()).then_some(list)
        }
    }
}

/// `// text` lines, one per line of `text`.
///
/// Blank lines become a bare `//`; an empty comment still yields one `//`
/// line.
pub fn comment(text: &str) -> Vec<String> {
    let lines: Vec<String> = text
        .lines()
        .map(|line| {
            if line.is_empty() {
                "//".to_string()
            } else {
                format!("// {line}")
            }
        })
        .collect();
    if lines.is_empty() {
        vec!["//".to_string()]
    } else {
        lines
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_statements.rs"]
mod tests;
