//! Strict selection and attribute access over parsed HTML
//!
//! A thin extension layer over the `scraper` crate: the usual CSS
//! selection operations plus `strict_*` variants that fail loudly when a
//! document does not have the expected shape, instead of handing empty
//! result sets or `None` deep into caller logic.
//!
//! ```
//! use strict_scraper::{StrictHtml, StrictQueryable};
//!
//! let doc = StrictHtml::parse_document(r#"<h1 value="123">H1 Test</h1>"#);
//! let heading = doc.strict_select_one("h1")?;
//! assert_eq!(heading.strict_get("value")?, "123");
//! # Ok::<(), strict_scraper::StrictSelectError>(())
//! ```
//!
//! Parsing, DOM construction, and selector matching stay entirely with
//! `scraper`; this crate only observes the shape of results and converts
//! unexpected shapes into [`StrictSelectError`].

// Module declarations
pub mod config;
pub mod document;
pub mod error;
pub mod node;
pub mod query;

// Re-export the public surface for easier access
pub use config::AttributePolicy;
pub use document::StrictHtml;
pub use error::{StrictResult, StrictSelectError, UnsupportedOperation};
pub use node::{AttrValue, MatchSet, StrictNode};
pub use query::{SelectOptions, StrictQueryable};
