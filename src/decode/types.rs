//! Decoder types
//!
//! Shapes of a Solr `select` response and the supported response writers.

use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::value::RawValue;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Response writer requested via `wt`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    /// JSON response writer (the only one supported)
    #[default]
    Json,
}

impl ResponseFormat {
    /// Value sent as the `wt` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
        }
    }
}

impl FromStr for ResponseFormat {
    type Err = Error;

    /// Only the exact literal `json` is accepted.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(Self::Json),
            other => Err(Error::unsupported_format(other)),
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One page of a cursor query
#[derive(Debug, Deserialize)]
pub struct PageResponse {
    /// Echo of the request and timing information
    #[serde(rename = "responseHeader", default)]
    pub header: ResponseHeader,
    /// Matching documents for this page
    #[serde(default)]
    pub response: DocumentList,
    /// Cursor to send for the following page
    #[serde(rename = "nextCursorMark", default)]
    pub next_cursor_mark: Option<String>,
}

impl PageResponse {
    /// Number of documents on this page
    pub fn doc_count(&self) -> usize {
        self.response.docs.len()
    }

    /// Cursor mark the server echoed back in the request parameters
    pub fn echoed_cursor_mark(&self) -> Option<&str> {
        self.header.params.get("cursorMark").and_then(Value::as_str)
    }
}

/// `responseHeader` section
#[derive(Debug, Default, Deserialize)]
pub struct ResponseHeader {
    #[serde(default)]
    pub status: i64,
    #[serde(rename = "QTime", default)]
    pub qtime: i64,
    /// Request parameters as echoed by Solr (values may be strings or arrays)
    #[serde(default)]
    pub params: HashMap<String, Value>,
}

/// `response` section
#[derive(Debug, Default, Deserialize)]
pub struct DocumentList {
    #[serde(rename = "numFound", default)]
    pub num_found: u64,
    #[serde(default)]
    pub start: u64,
    /// Raw documents, shape depends on the collection schema
    #[serde(default)]
    pub docs: Vec<Box<RawValue>>,
}
