//! Cursor mark paging
//!
//! The sort must order documents uniquely (usually by including the unique
//! key); Solr rejects or misbehaves otherwise. That is left to the server.

use super::types::{CursorMark, NextPage, PaginationState};
use crate::decode::PageResponse;
use crate::error::{Error, Result};

/// Cursor-based pagination over Solr `cursorMark`
#[derive(Debug, Clone, Copy, Default)]
pub struct CursorMarkPaginator;

impl CursorMarkPaginator {
    /// Create a new cursor paginator
    pub fn new() -> Self {
        Self
    }

    /// Process a decoded page and decide whether another request follows.
    ///
    /// Stops exactly when `nextCursorMark` equals the cursor that was sent.
    pub fn process_response(
        &self,
        page: &PageResponse,
        state: &mut PaginationState,
    ) -> Result<NextPage> {
        state.add_page(page.doc_count() as u64);

        let next = page
            .next_cursor_mark
            .as_deref()
            .ok_or_else(|| Error::MissingCursorMark {
                sent: state.cursor.to_string(),
            })?;

        if next == state.cursor.as_str() {
            return Ok(NextPage::Done);
        }

        let next = CursorMark::new(next);
        state.set_cursor(next.clone());
        Ok(NextPage::Continue(next))
    }
}
