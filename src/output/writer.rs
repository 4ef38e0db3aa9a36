//! JSON lines writer

use crate::error::{Error, Result};
use serde_json::value::RawValue;
use std::io::Write;

/// Writes raw documents, one per line
pub struct DocumentWriter<W: Write> {
    /// Underlying sink
    inner: W,
}

impl<W: Write> DocumentWriter<W> {
    /// Create a new writer
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Write a single document followed by a newline
    pub fn write_document(&mut self, doc: &RawValue) -> Result<()> {
        self.inner
            .write_all(doc.get().as_bytes())
            .and_then(|()| self.inner.write_all(b"\n"))
            .map_err(Error::Io)
    }

    /// Write a page of documents and flush
    pub fn write_page(&mut self, docs: &[Box<RawValue>]) -> Result<()> {
        for doc in docs {
            self.write_document(doc)?;
        }
        self.flush()
    }

    /// Flush the underlying sink
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush().map_err(Error::Io)
    }
}
