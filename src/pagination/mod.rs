//! Pagination module
//!
//! Solr cursor paging (`cursorMark`).
//!
//! # Overview
//!
//! The first request carries `cursorMark=*`. Every response carries a
//! `nextCursorMark`; sending it back yields the next page. The server signals
//! the end of the result set by returning the same mark it was given, so the
//! loop never counts documents to decide when to stop.

mod cursor;
mod types;

pub use cursor::CursorMarkPaginator;
pub use types::{CursorMark, NextPage, PaginationState, QueryParams};
