//! Display metadata for listing pages.
//!
//! Metadata is supplied externally by the page that lists documents: it is
//! never derived from document content. A listing manifest is a JSON mapping
//! from identifier to [`DocMeta`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::DocId;

/// Optional display metadata for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocMeta {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Publication date as written in the manifest (e.g. "2024-03-18").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Parse a listing manifest.
///
/// `BTreeMap` keeps listing order stable without a separate sort.
pub fn parse_listing(json: &str) -> serde_json::Result<BTreeMap<DocId, DocMeta>> {
    serde_json::from_str(json)
}

// =============================================================================
// Tests
// =============================================================================
