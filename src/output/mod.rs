//! Output module
//!
//! Writes documents as JSON lines, byte for byte as Solr returned them.

mod writer;

pub use writer::DocumentWriter;
