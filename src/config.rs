//! Attribute representation policy
//!
//! Centralized configuration for which HTML attributes are read as
//! whitespace-separated token lists rather than plain strings. The default
//! table covers the attributes the HTML specification defines as token
//! lists (`class` anywhere, `rel` on anchors and links, and so on).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Policy deciding the shape of attribute reads.
///
/// An attribute named here is surfaced as [`crate::AttrValue::TokenList`]
/// and rejected by `strict_get`; every other attribute is a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributePolicy {
    /// Attribute names treated as token lists on every tag.
    pub global_token_lists: Vec<String>,

    /// Attribute names treated as token lists only on the named tag.
    pub tag_token_lists: HashMap<String, Vec<String>>,
}

impl AttributePolicy {
    /// A policy with no token-list attributes at all; every attribute
    /// reads as a plain string.
    pub fn empty() -> Self {
        Self {
            global_token_lists: Vec::new(),
            tag_token_lists: HashMap::new(),
        }
    }

    /// Whether `attr` on a `tag` element is a token-list attribute.
    ///
    /// Tag and attribute names are compared case-insensitively; the HTML
    /// tree builder lowercases both, but wrapped nodes may come from
    /// foreign-content subtrees that preserve case.
    pub fn is_token_list(&self, tag: &str, attr: &str) -> bool {
        let global = self
            .global_token_lists
            .iter()
            .any(|name| name.eq_ignore_ascii_case(attr));
        if global {
            return true;
        }

        self.tag_token_lists
            .iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case(tag))
            .any(|(_, attrs)| attrs.iter().any(|name| name.eq_ignore_ascii_case(attr)))
    }
}

impl Default for AttributePolicy {
    fn default() -> Self {
        let owned = |names: &[&str]| names.iter().map(|name| (*name).to_string()).collect();

        let mut tag_token_lists = HashMap::new();
        tag_token_lists.insert("a".to_string(), owned(&["rel", "rev"]));
        tag_token_lists.insert("link".to_string(), owned(&["rel", "rev"]));
        tag_token_lists.insert("td".to_string(), owned(&["headers"]));
        tag_token_lists.insert("th".to_string(), owned(&["headers"]));
        tag_token_lists.insert("form".to_string(), owned(&["accept-charset"]));
        tag_token_lists.insert("object".to_string(), owned(&["archive"]));
        tag_token_lists.insert("area".to_string(), owned(&["rel"]));
        tag_token_lists.insert("icon".to_string(), owned(&["sizes"]));
        tag_token_lists.insert("iframe".to_string(), owned(&["sandbox"]));
        tag_token_lists.insert("output".to_string(), owned(&["for"]));

        Self {
            global_token_lists: owned(&["class", "accesskey", "dropzone"]),
            tag_token_lists,
        }
    }
}
