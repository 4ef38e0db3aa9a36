//! Execution engine module
//!
//! The export loop.
//!
//! # Overview
//!
//! One request at a time: fetch a page, decode it, write its documents,
//! then either follow `nextCursorMark` or stop when the server hands back
//! the cursor it was given. Any error ends the loop; documents already
//! written stay written.

mod types;

pub use types::ExportStats;

use crate::decode::{decode_page, ResponseFormat};
use crate::error::Result;
use crate::http::{ensure_success, Transport};
use crate::output::DocumentWriter;
use crate::pagination::{CursorMarkPaginator, NextPage, PaginationState, QueryParams};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Body, Method, Request};
use std::io::Write;
use std::time::Instant;
use tracing::info;
use url::Url;

/// Body sent with every request; Solr ignores it for `select`.
pub const PLACEHOLDER_BODY: &str = r#"{"method":""}"#;

/// Runs a cursor export against one collection
pub struct Exporter<T: Transport> {
    /// Transport used for every request
    transport: T,
    /// `<server>/select`
    select_url: Url,
    /// Query parameters, cursor included
    params: QueryParams,
    /// Response writer
    format: ResponseFormat,
    /// Log link and counts per page
    verbose: bool,
}

impl<T: Transport> Exporter<T> {
    /// Create a new exporter
    pub fn new(transport: T, select_url: Url, params: QueryParams, format: ResponseFormat) -> Self {
        Self {
            transport,
            select_url,
            params,
            format,
            verbose: false,
        }
    }

    /// Enable progress logging
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Full link for the current cursor
    pub fn link(&self) -> Url {
        let mut url = self.select_url.clone();
        url.set_query(Some(&self.params.encode()));
        url
    }

    fn build_request(&self, link: Url) -> Request {
        let mut request = Request::new(Method::GET, link);
        request
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        *request.body_mut() = Some(Body::from(PLACEHOLDER_BODY));
        request
    }

    /// Export every page to `out`
    pub async fn run<W: Write>(&mut self, out: W) -> Result<ExportStats> {
        let start = Instant::now();
        let paginator = CursorMarkPaginator::new();
        let mut state = PaginationState::new();
        let mut writer = DocumentWriter::new(out);

        let num_found = loop {
            let link = self.link();
            if self.verbose {
                info!("{}", link);
            }

            let response = self.transport.execute(self.build_request(link)).await?;
            let response = ensure_success(response).await?;
            let body = response.bytes().await?;
            let page = decode_page(&body, self.format)?;

            writer.write_page(&page.response.docs)?;

            let next = paginator.process_response(&page, &mut state)?;
            if self.verbose {
                info!(
                    "fetched {} docs ({} total, {} found)",
                    page.doc_count(),
                    state.total_fetched,
                    page.response.num_found
                );
            }

            match next {
                NextPage::Continue(cursor) => self.params.set_cursor(&cursor),
                NextPage::Done => break page.response.num_found,
            }
        };

        let stats = ExportStats::from_state(&state, num_found, start.elapsed());
        if self.verbose {
            info!(
                "fetched {} docs in {} pages ({:?})",
                stats.documents, stats.pages, stats.elapsed
            );
        }
        Ok(stats)
    }
}
