//! Response decoder module
//!
//! Supports: JSON (`wt=json`)
//!
//! # Overview
//!
//! Solr answers a cursor query with a header, a document list and the next
//! cursor mark. Documents are kept as raw JSON text so they can be written
//! out exactly as the server sent them.

mod decoders;
mod types;

pub use decoders::decode_page;
pub use types::{DocumentList, PageResponse, ResponseFormat, ResponseHeader};

#[cfg(test)]
mod tests;
