use std::collections::BTreeSet;

use crate::analysis::taxonomy::{Section, Taxonomy};

/// Canonical sections with at least one header synonym anywhere in `text_lower`.
/// Plain substring search; position and order in the document are not considered.
pub fn detect_sections(text_lower: &str, taxonomy: &Taxonomy) -> BTreeSet<Section> {
    taxonomy
        .section_headers
        .iter()
        .filter(|h| h.synonyms.iter().any(|s| text_lower.contains(s.as_str())))
        .map(|h| h.section)
        .collect()
}
