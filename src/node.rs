//! Node adapter and query result types
//!
//! [`StrictNode`] wraps a borrowed `scraper::ElementRef` together with the
//! active attribute policy. The wrapper never copies or mutates the
//! underlying node; it only augments its operation set. Every operation
//! that returns nodes re-wraps them in the same adapter, so anything
//! reached through a query supports the strict operations too.

use std::fmt;
use std::ops::Index;

use once_cell::sync::Lazy;
use scraper::ElementRef;

use crate::config::AttributePolicy;

static DEFAULT_POLICY: Lazy<AttributePolicy> = Lazy::new(AttributePolicy::default);

/// A parsed element augmented with the strict operation set.
#[derive(Debug, Clone, Copy)]
pub struct StrictNode<'a> {
    element: ElementRef<'a>,
    policy: &'a AttributePolicy,
}

/// A single attribute value, shaped by the active [`AttributePolicy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue<'a> {
    /// A plain string attribute.
    Value(&'a str),
    /// A whitespace-separated token-list attribute (`class`, `rel`, ...).
    TokenList(Vec<&'a str>),
}

impl<'a> AttrValue<'a> {
    /// The plain string value, if this is not a token list.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Self::Value(value) => Some(value),
            Self::TokenList(_) => None,
        }
    }

    /// The tokens, if this is a token list.
    pub fn tokens(&self) -> Option<&[&'a str]> {
        match self {
            Self::Value(_) => None,
            Self::TokenList(tokens) => Some(tokens),
        }
    }
}

impl<'a> StrictNode<'a> {
    /// Wrap a native element, shaping attribute reads with `policy`.
    pub fn with_policy(element: ElementRef<'a>, policy: &'a AttributePolicy) -> Self {
        Self { element, policy }
    }

    /// Wrap a native element with the default attribute policy.
    pub fn wrap(element: ElementRef<'a>) -> Self {
        Self::with_policy(element, &DEFAULT_POLICY)
    }

    /// The underlying native element.
    pub fn element(&self) -> ElementRef<'a> {
        self.element
    }

    pub(crate) fn policy(&self) -> &'a AttributePolicy {
        self.policy
    }

    /// Tag name of this element.
    pub fn name(&self) -> &'a str {
        self.element.value().name()
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Outer HTML of this element.
    pub fn html(&self) -> String {
        self.element.html()
    }

    /// Inner HTML of this element.
    pub fn inner_html(&self) -> String {
        self.element.inner_html()
    }

    /// Loose attribute read, shaped by the attribute policy.
    ///
    /// Returns `None` when the attribute is absent. Token-list attributes
    /// are split on ASCII whitespace.
    pub fn attr_value(&self, key: &str) -> Option<AttrValue<'a>> {
        let raw = self.element.value().attr(key)?;
        if self.policy.is_token_list(self.name(), key) {
            Some(AttrValue::TokenList(raw.split_ascii_whitespace().collect()))
        } else {
            Some(AttrValue::Value(raw))
        }
    }
}

impl PartialEq for StrictNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element
    }
}

impl Eq for StrictNode<'_> {}

impl fmt::Display for StrictNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.element.html())
    }
}

/// Ordered result of one selector query, in document order. May be empty
/// only in the loose (non-strict) operations.
#[derive(Debug, Clone, Default)]
pub struct MatchSet<'a> {
    nodes: Vec<StrictNode<'a>>,
}

impl<'a> MatchSet<'a> {
    pub(crate) fn new(nodes: Vec<StrictNode<'a>>) -> Self {
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn first(&self) -> Option<&StrictNode<'a>> {
        self.nodes.first()
    }

    pub fn get(&self, index: usize) -> Option<&StrictNode<'a>> {
        self.nodes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StrictNode<'a>> {
        self.nodes.iter()
    }

    pub fn as_slice(&self) -> &[StrictNode<'a>] {
        &self.nodes
    }
}

impl<'a> IntoIterator for MatchSet<'a> {
    type Item = StrictNode<'a>;
    type IntoIter = std::vec::IntoIter<StrictNode<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a, 'b> IntoIterator for &'b MatchSet<'a> {
    type Item = &'b StrictNode<'a>;
    type IntoIter = std::slice::Iter<'b, StrictNode<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl<'a> Index<usize> for MatchSet<'a> {
    type Output = StrictNode<'a>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.nodes[index]
    }
}
