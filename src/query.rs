//! The strict query capability
//!
//! [`StrictQueryable`] layers the strict postcondition checks over the
//! native query operations. Implementors only supply the native selection
//! and attribute read; the strict variants are provided on top so the
//! guard logic lives in one place.

use scraper::Selector;
use tracing::{debug, warn};

use crate::document::StrictHtml;
use crate::error::{StrictResult, StrictSelectError};
use crate::node::{AttrValue, MatchSet, StrictNode};

/// Per-call query options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectOptions {
    /// Stop after this many matches.
    pub limit: Option<usize>,
}

impl SelectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

fn compile_selector(selector: &str) -> StrictResult<Selector> {
    Selector::parse(selector).map_err(|e| {
        warn!("Failed to compile selector '{}': {}", selector, e);
        StrictSelectError::invalid_selector(selector, &e.to_string())
    })
}

fn collect_matches<'a, I>(selector: &str, matches: I, options: &SelectOptions) -> MatchSet<'a>
where
    I: Iterator<Item = StrictNode<'a>>,
{
    let nodes: Vec<_> = match options.limit {
        Some(limit) => matches.take(limit).collect(),
        None => matches.collect(),
    };
    debug!("select('{}') matched {} nodes", selector, nodes.len());
    MatchSet::new(nodes)
}

/// The strict operation set shared by documents and nodes.
pub trait StrictQueryable {
    /// Native CSS selection over descendants, with every match re-wrapped
    /// as a [`StrictNode`]. Empty results are not an error here.
    fn select_with(&self, selector: &str, options: &SelectOptions) -> StrictResult<MatchSet<'_>>;

    /// Native attribute read, shaped by the attribute policy.
    fn get(&self, key: &str) -> Option<AttrValue<'_>>;

    /// [`Self::select_with`] with default options.
    fn select(&self, selector: &str) -> StrictResult<MatchSet<'_>> {
        self.select_with(selector, &SelectOptions::default())
    }

    /// First match in document order, or `None` when nothing matches.
    fn select_one(&self, selector: &str) -> StrictResult<Option<StrictNode<'_>>> {
        let matches = self.select_with(selector, &SelectOptions::new().limit(1))?;
        Ok(matches.into_iter().next())
    }

    /// Selection that fails when nothing matches.
    fn strict_select(&self, selector: &str) -> StrictResult<MatchSet<'_>> {
        self.strict_select_with(selector, &SelectOptions::default())
    }

    /// [`Self::strict_select`] with per-call options. A caller `limit`
    /// bounds the result size; the emptiness check is unaffected.
    fn strict_select_with(
        &self,
        selector: &str,
        options: &SelectOptions,
    ) -> StrictResult<MatchSet<'_>> {
        let matches = self.select_with(selector, options)?;
        if matches.is_empty() {
            return Err(StrictSelectError::no_matches(selector));
        }
        Ok(matches)
    }

    /// Selection that fails unless exactly one node matches.
    ///
    /// Takes no result limit: the full match count is always observed, so
    /// an ambiguous selector cannot be masked by a small limit.
    fn strict_select_one(&self, selector: &str) -> StrictResult<StrictNode<'_>> {
        let matches = self.strict_select_with(selector, &SelectOptions::default())?;
        let count = matches.len();
        let mut nodes = matches.into_iter();
        match (nodes.next(), nodes.next()) {
            (Some(node), None) => Ok(node),
            _ => Err(StrictSelectError::ambiguous_match(selector, count)),
        }
    }

    /// Attribute read that fails when the attribute is absent or is not a
    /// plain string.
    fn strict_get(&self, key: &str) -> StrictResult<&str> {
        match self.get(key) {
            Some(AttrValue::Value(value)) => Ok(value),
            Some(AttrValue::TokenList(tokens)) => {
                Err(StrictSelectError::attribute_not_string(key, tokens.len()))
            }
            None => Err(StrictSelectError::attribute_missing(key)),
        }
    }
}

impl StrictQueryable for StrictHtml {
    fn select_with(&self, selector: &str, options: &SelectOptions) -> StrictResult<MatchSet<'_>> {
        let compiled = compile_selector(selector)?;
        let matches = self
            .document()
            .select(&compiled)
            .map(|element| StrictNode::with_policy(element, self.policy()));
        Ok(collect_matches(selector, matches, options))
    }

    fn get(&self, key: &str) -> Option<AttrValue<'_>> {
        self.root().attr_value(key)
    }
}

impl<'a> StrictQueryable for StrictNode<'a> {
    fn select_with(&self, selector: &str, options: &SelectOptions) -> StrictResult<MatchSet<'_>> {
        let compiled = compile_selector(selector)?;
        let matches = self
            .element()
            .select(&compiled)
            .map(|element| StrictNode::with_policy(element, self.policy()));
        Ok(collect_matches(selector, matches, options))
    }

    fn get(&self, key: &str) -> Option<AttrValue<'_>> {
        self.attr_value(key)
    }
}
