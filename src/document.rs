//! Owning document wrapper
//!
//! [`StrictHtml`] owns a parsed `scraper::Html` tree plus the attribute
//! policy, and exposes the same query surface as [`StrictNode`] so a
//! document root and a tag behave uniformly for selection.

use std::borrow::Cow;

use scraper::Html;
use tracing::debug;

use crate::config::AttributePolicy;
use crate::error::UnsupportedOperation;
use crate::node::StrictNode;

/// A parsed HTML document augmented with the strict operation set.
#[derive(Debug, Clone)]
pub struct StrictHtml {
    doc: Html,
    policy: AttributePolicy,
}

impl StrictHtml {
    /// Parse a full HTML document with the default attribute policy.
    pub fn parse_document(markup: &str) -> Self {
        Self::parse_document_with_policy(markup, AttributePolicy::default())
    }

    /// Parse a full HTML document with a custom attribute policy.
    pub fn parse_document_with_policy(markup: &str, policy: AttributePolicy) -> Self {
        let doc = Html::parse_document(markup);
        debug!(
            "Parsed document: {} bytes, {} parse errors",
            markup.len(),
            doc.errors.len()
        );
        Self { doc, policy }
    }

    /// Parse an HTML fragment with the default attribute policy.
    pub fn parse_fragment(markup: &str) -> Self {
        Self::parse_fragment_with_policy(markup, AttributePolicy::default())
    }

    /// Parse an HTML fragment with a custom attribute policy.
    pub fn parse_fragment_with_policy(markup: &str, policy: AttributePolicy) -> Self {
        let doc = Html::parse_fragment(markup);
        debug!(
            "Parsed fragment: {} bytes, {} parse errors",
            markup.len(),
            doc.errors.len()
        );
        Self { doc, policy }
    }

    /// Augment an already-parsed document with a custom attribute policy.
    pub fn from_html_with_policy(doc: Html, policy: AttributePolicy) -> Self {
        Self { doc, policy }
    }

    /// The document root element, as a strict node.
    pub fn root(&self) -> StrictNode<'_> {
        StrictNode::with_policy(self.doc.root_element(), &self.policy)
    }

    /// The underlying native document.
    pub fn document(&self) -> &Html {
        &self.doc
    }

    /// The active attribute policy.
    pub fn policy(&self) -> &AttributePolicy {
        &self.policy
    }

    /// Parse errors recorded by the underlying parser.
    pub fn parse_errors(&self) -> &[Cow<'static, str>] {
        &self.doc.errors
    }

    /// Inserting markup before a whole document is rejected unconditionally.
    pub fn insert_before(&mut self, _markup: &str) -> Result<(), UnsupportedOperation> {
        Err(UnsupportedOperation::new("insert_before"))
    }

    /// Inserting markup after a whole document is rejected unconditionally.
    pub fn insert_after(&mut self, _markup: &str) -> Result<(), UnsupportedOperation> {
        Err(UnsupportedOperation::new("insert_after"))
    }
}

impl From<Html> for StrictHtml {
    fn from(doc: Html) -> Self {
        Self::from_html_with_policy(doc, AttributePolicy::default())
    }
}
