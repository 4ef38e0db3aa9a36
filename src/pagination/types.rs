//! Pagination types
//!
//! Cursor token, query parameters and loop state.

use std::fmt;
use url::form_urlencoded;

/// Opaque Solr cursor token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CursorMark(String);

impl CursorMark {
    /// Sentinel sent with the first request
    pub const START: &'static str = "*";

    /// Wrap a token returned by the server
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The initial `*` cursor
    pub fn start() -> Self {
        Self(Self::START.to_string())
    }

    /// Token text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the initial `*` cursor
    pub fn is_start(&self) -> bool {
        self.0 == Self::START
    }
}

impl Default for CursorMark {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for CursorMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// More pages available from this cursor
    Continue(CursorMark),
    /// Server echoed the cursor back, no more pages
    Done,
}

impl NextPage {
    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }
}

/// Query string of a cursor request.
///
/// Keeps insertion order so links are stable in logs and tests. Only the
/// `cursorMark` entry changes between requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parameter carrying the cursor token
    pub const CURSOR_MARK: &'static str = "cursorMark";

    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters of a cursor query, positioned at the first page
    pub fn cursor_query(query: &str, sort: &str, rows: u32, fields: &str, wt: &str) -> Self {
        let mut params = Self::new();
        params.set("q", query);
        params.set("sort", sort);
        params.set("rows", rows.to_string());
        params.set("fl", fields);
        params.set("wt", wt);
        params.set(Self::CURSOR_MARK, CursorMark::START);
        params
    }

    /// Set a parameter, replacing any previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Get a parameter value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Point the query at a new cursor
    pub fn set_cursor(&mut self, cursor: &CursorMark) {
        self.set(Self::CURSOR_MARK, cursor.as_str());
    }

    /// Iterate over the parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// URL-encoded query string
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

/// Tracks pagination state during the export.
///
/// The only place pages and documents are counted.
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Cursor sent with the next request
    pub cursor: CursorMark,
    /// Pages fetched so far
    pub pages: u64,
    /// Documents fetched so far
    pub total_fetched: u64,
}

impl PaginationState {
    /// Create a new pagination state at the start cursor
    pub fn new() -> Self {
        Self::default()
    }

    /// Set cursor
    pub fn set_cursor(&mut self, cursor: CursorMark) {
        self.cursor = cursor;
    }

    /// Count a fetched page
    pub fn add_page(&mut self, documents: u64) {
        self.pages += 1;
        self.total_fetched += documents;
    }
}
