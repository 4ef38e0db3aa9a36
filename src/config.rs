//! Export configuration
//!
//! Everything one run needs: where Solr lives, what to ask it, and how to
//! talk to it. Built from the command line by the CLI runner, validated once
//! before the first request.

use crate::auth::{AuthConfig, KerberosConfig};
use crate::decode::ResponseFormat;
use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use crate::pagination::QueryParams;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

// ============================================================================
// Defaults
// ============================================================================

/// Default Solr collection
pub const DEFAULT_SERVER: &str = "http://localhost:8983/solr/example";
/// Default query
pub const DEFAULT_QUERY: &str = "*:*";
/// Default page size
pub const DEFAULT_ROWS: u32 = 1000;
/// Default sort, must order documents uniquely
pub const DEFAULT_SORT: &str = "id asc";
/// Default response writer
pub const DEFAULT_WT: &str = "json";

/// Configuration for one export run
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Solr base URL including the collection, e.g. `http://host:8983/solr/books`
    pub server: String,
    /// Field list (`fl`), empty means the server default
    pub fields: String,
    /// Query (`q`)
    pub query: String,
    /// Page size (`rows`)
    pub rows: u32,
    /// Sort specification
    pub sort: String,
    /// Response writer (`wt`), only `json` is supported
    pub wt: String,
    /// Log progress
    pub verbose: bool,
    /// Skip TLS certificate verification
    pub accept_invalid_certs: bool,
    /// Optional request timeout
    pub timeout: Option<Duration>,
    /// Kerberos credentials, when the server requires SPNEGO
    pub kerberos: Option<KerberosConfig>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            fields: String::new(),
            query: DEFAULT_QUERY.to_string(),
            rows: DEFAULT_ROWS,
            sort: DEFAULT_SORT.to_string(),
            wt: DEFAULT_WT.to_string(),
            verbose: false,
            accept_invalid_certs: false,
            timeout: None,
            kerberos: None,
        }
    }
}

impl ExportConfig {
    /// Create a config for a server with default query settings
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            ..Self::default()
        }
    }

    /// Set the query
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Set the field list
    #[must_use]
    pub fn with_fields(mut self, fields: impl Into<String>) -> Self {
        self.fields = fields.into();
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_rows(mut self, rows: u32) -> Self {
        self.rows = rows;
        self
    }

    /// Set the sort specification
    #[must_use]
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = sort.into();
        self
    }

    /// Set the response writer
    #[must_use]
    pub fn with_wt(mut self, wt: impl Into<String>) -> Self {
        self.wt = wt.into();
        self
    }

    /// Enable progress logging
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Skip TLS certificate verification
    #[must_use]
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Set a request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Authenticate with Kerberos
    #[must_use]
    pub fn with_kerberos(mut self, kerberos: KerberosConfig) -> Self {
        self.kerberos = Some(kerberos);
        self
    }

    /// Check the config before any request is made
    pub fn validate(&self) -> Result<()> {
        self.format()?;

        if self.rows == 0 {
            return Err(Error::invalid_value("rows", "must be greater than zero"));
        }
        if self.sort.trim().is_empty() {
            return Err(Error::invalid_value("sort", "cursor paging requires a sort"));
        }

        self.select_url()?;

        if let Some(krb) = &self.kerberos {
            if krb.principal.trim().is_empty() {
                return Err(Error::invalid_value("principal", "must not be empty"));
            }
            if let Some(keytab) = &krb.keytab {
                if !keytab.is_file() {
                    return Err(Error::invalid_value(
                        "keytab",
                        format!("{} is not a readable file", keytab.display()),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Parsed response writer
    pub fn format(&self) -> Result<ResponseFormat> {
        self.wt.parse()
    }

    /// Server URL with a scheme
    pub fn normalized_server(&self) -> String {
        normalize_server(&self.server)
    }

    /// `<server>/select`
    pub fn select_url(&self) -> Result<Url> {
        let base = self.normalized_server();
        Ok(Url::parse(&format!("{base}/select"))?)
    }

    /// Query parameters for the first page
    pub fn query_params(&self) -> QueryParams {
        QueryParams::cursor_query(&self.query, &self.sort, self.rows, &self.fields, &self.wt)
    }

    /// HTTP client settings
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder =
            HttpClientConfig::builder().accept_invalid_certs(self.accept_invalid_certs);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }

    /// Authentication settings
    pub fn auth_config(&self) -> AuthConfig {
        match &self.kerberos {
            Some(krb) => AuthConfig::Negotiate(krb.clone()),
            None => AuthConfig::None,
        }
    }
}

/// Build Kerberos settings from optional CLI values.
///
/// A keytab without a principal cannot be used, so it is rejected.
pub fn kerberos_from_parts(
    keytab: Option<PathBuf>,
    principal: Option<String>,
) -> Result<Option<KerberosConfig>> {
    match (keytab, principal) {
        (None, None) => Ok(None),
        (keytab, Some(principal)) => {
            let mut krb = KerberosConfig::new(principal);
            krb.keytab = keytab;
            Ok(Some(krb))
        }
        (Some(_), None) => Err(Error::config("-keytab requires -principal")),
    }
}

/// Prefix `http://` when the server string has no `http`-family scheme.
pub fn normalize_server(server: &str) -> String {
    let server = server.trim().trim_end_matches('/');
    if server.starts_with("http") {
        server.to_string()
    } else {
        format!("http://{server}")
    }
}
