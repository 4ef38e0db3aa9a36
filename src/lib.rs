//! # solrdump
//!
//! Export every document matching a query from a Solr collection, one JSON
//! document per line, using cursor-based deep paging.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use solrdump::config::ExportConfig;
//! use solrdump::engine::Exporter;
//! use solrdump::http::HttpClient;
//!
//! #[tokio::main]
//! async fn main() -> solrdump::Result<()> {
//!     let config = ExportConfig::new("localhost:8983/solr/books").with_rows(500);
//!     config.validate()?;
//!
//!     let client = HttpClient::with_auth(config.http_config(), config.auth_config())?;
//!     let mut exporter = Exporter::new(
//!         client,
//!         config.select_url()?,
//!         config.query_params(),
//!         config.format()?,
//!     );
//!     let stats = exporter.run(std::io::stdout().lock()).await?;
//!     eprintln!("{} documents", stats.documents);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 CLI  (flags → ExportConfig)              │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────────────────────────────────────────────────────┐
//! │     Exporter: request → decode → write → next cursor     │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//! ┌───────────┬──────────────┬──────────────┬────────────────┐
//! │   Auth    │    HTTP      │   Paginate   │    Output      │
//! ├───────────┼──────────────┼──────────────┼────────────────┤
//! │ SPNEGO    │ Transport    │ cursorMark   │ JSON lines     │
//! │ Kerberos  │ TLS toggle   │ echo = stop  │ raw passthrough│
//! └───────────┴──────────────┴──────────────┴────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Kerberos/SPNEGO authentication
pub mod auth;

/// HTTP transport
pub mod http;

/// Cursor mark pagination
pub mod pagination;

/// Solr response decoding
pub mod decode;

/// JSON lines output
pub mod output;

/// Export loop
pub mod engine;

/// Run configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
