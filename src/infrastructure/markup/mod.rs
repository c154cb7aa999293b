//! HTML markup parsing for registry pages.
//!
//! - [`MarkupTree`] - Parsed document implementing [`crate::domain::extractor::DocumentTree`]
//! - [`extract_fields`] - HTML string → [`OrganizationRecord`]

mod tree;

pub use tree::MarkupTree;

use crate::domain::entities::OrganizationRecord;
use crate::domain::extractor::extract_record;

/// Parses a registry page and extracts its organization fields.
///
/// Parsing is lenient: malformed markup still yields a tree, and fields that
/// cannot be located are simply absent.
pub fn extract_fields(html: &str) -> OrganizationRecord {
    let tree = MarkupTree::parse(html);
    extract_record(&tree)
}
