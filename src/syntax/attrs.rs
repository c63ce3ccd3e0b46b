//! Attribute mappings and the `key=value` formatter.
//!
//! Two containers make the rendering order explicit at the type level:
//! [`OrderedAttributes`] keeps insertion order, [`UnorderedAttributes`]
//! renders sorted by key. Plain `HashMap`/`BTreeMap` values behave as
//! unordered, slices and arrays of pairs as ordered.

use std::collections::{BTreeMap, HashMap};

use super::quote::quote;

// ─── Attributes trait ────────────────────────────────────────────────────────

/// A mapping of attribute names to values with a deterministic render order.
pub trait Attributes {
    /// Name/value pairs in render order.
    fn entries(&self) -> Vec<(&str, &str)>;

    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

/// No attributes.
pub const NONE: &[(&str, &str)] = &[];

// ─── OrderedAttributes ───────────────────────────────────────────────────────

/// Attributes rendered in insertion order. Names are unique: setting an
/// existing name replaces its value in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderedAttributes {
    items: Vec<(String, String)>,
}

impl OrderedAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, keeping the original position of `name`.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.items.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.items.push((name, value)),
        }
        self
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OrderedAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (k, v) in iter {
            attrs.set(k, v);
        }
        attrs
    }
}

impl Attributes for OrderedAttributes {
    fn entries(&self) -> Vec<(&str, &str)> {
        self.items
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }
}

// ─── UnorderedAttributes ─────────────────────────────────────────────────────

/// Attributes whose insertion order is irrelevant; rendered sorted by name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UnorderedAttributes {
    items: BTreeMap<String, String>,
}

impl UnorderedAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.items.insert(name.into(), value.into());
        self
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.items.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for UnorderedAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (k, v) in iter {
            attrs.set(k, v);
        }
        attrs
    }
}

impl Attributes for UnorderedAttributes {
    fn entries(&self) -> Vec<(&str, &str)> {
        self.items
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }
}

// ─── Std containers ──────────────────────────────────────────────────────────

impl<K: AsRef<str>, V: AsRef<str>> Attributes for [(K, V)] {
    fn entries(&self) -> Vec<(&str, &str)> {
        self.iter().map(|(k, v)| (k.as_ref(), v.as_ref())).collect()
    }
}

impl<K: AsRef<str>, V: AsRef<str>, const N: usize> Attributes for [(K, V); N] {
    fn entries(&self) -> Vec<(&str, &str)> {
        self.as_slice().entries()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> Attributes for Vec<(K, V)> {
    fn entries(&self) -> Vec<(&str, &str)> {
        self.as_slice().entries()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> Attributes for BTreeMap<K, V> {
    fn entries(&self) -> Vec<(&str, &str)> {
        let mut items: Vec<(&str, &str)> =
            self.iter().map(|(k, v)| (k.as_ref(), v.as_ref())).collect();
        // `K: Ord` need not agree with string order
        items.sort();
        items
    }
}

impl<K: AsRef<str>, V: AsRef<str>, S> Attributes for HashMap<K, V, S> {
    fn entries(&self) -> Vec<(&str, &str)> {
        let mut items: Vec<(&str, &str)> =
            self.iter().map(|(k, v)| (k.as_ref(), v.as_ref())).collect();
        items.sort();
        items
    }
}

impl<A: Attributes + ?Sized> Attributes for &A {
    fn entries(&self) -> Vec<(&str, &str)> {
        (**self).entries()
    }
}

// ─── Formatting ──────────────────────────────────────────────────────────────

/// Space-joined `key=value` pairs, `label` first when given.
///
/// Keys and values are quoted individually.
pub fn a_list<A: Attributes + ?Sized>(label: Option<&str>, attrs: &A) -> String {
    let mut result = Vec::new();
    if let Some(label) = label {
        result.push(format!("label={}", quote(label)));
    }
    for (k, v) in attrs.entries() {
        result.push(format!("{}={}", quote(k), quote(v)));
    }
    result.join(" ")
}

/// Bracketed attribute clause with a leading space (` [k=v k=v]`), or the
/// empty string when there is nothing to render.
pub fn attr_list<A: Attributes + ?Sized>(label: Option<&str>, attrs: &A) -> String {
    let content = a_list(label, attrs);
    if content.is_empty() {
        String::new()
    } else {
        format!(" [{content}]")
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_attrs.rs"]
mod tests;
