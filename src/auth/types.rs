//! Auth configuration types

use std::path::PathBuf;

/// Authentication configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// Kerberos credentials presented through SPNEGO
    Negotiate(KerberosConfig),
}

impl AuthConfig {
    /// Whether requests need a Negotiate header
    pub fn is_negotiate(&self) -> bool {
        matches!(self, Self::Negotiate(_))
    }
}

/// Kerberos credential material
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KerberosConfig {
    /// Keytab holding the client key (falls back to the credential cache when unset)
    pub keytab: Option<PathBuf>,
    /// Client principal, e.g. `solr@EXAMPLE.COM`
    pub principal: String,
    /// Service name used to build the target principal (`<service>/<host>`)
    pub service: String,
}

impl KerberosConfig {
    /// Create a config for a principal, targeting the `HTTP` service
    pub fn new(principal: impl Into<String>) -> Self {
        Self {
            keytab: None,
            principal: principal.into(),
            service: "HTTP".to_string(),
        }
    }

    /// Set the keytab path
    #[must_use]
    pub fn with_keytab(mut self, keytab: impl Into<PathBuf>) -> Self {
        self.keytab = Some(keytab.into());
        self
    }

    /// Set the service name
    #[must_use]
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }

    /// Target principal for a server host
    pub fn target_principal(&self, host: &str) -> String {
        format!("{}/{}", self.service, host)
    }
}
