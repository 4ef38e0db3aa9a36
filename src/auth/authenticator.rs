//! Authenticator implementation
//!
//! Handles applying authentication to requests.

use super::types::{AuthConfig, KerberosConfig};
use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Request;
use tracing::debug;

/// Produces SPNEGO initial context tokens
pub trait TokenSource: Send + Sync {
    /// Token for the given target principal
    fn initial_token(&self, target_principal: &str) -> Result<Vec<u8>>;
}

/// Authenticator handles applying authentication to HTTP requests
pub struct Authenticator {
    /// Auth configuration
    config: AuthConfig,
    /// Token provider for Negotiate auth
    tokens: Option<Box<dyn TokenSource>>,
}

impl Authenticator {
    /// Create an authenticator for the given config.
    ///
    /// Negotiate auth needs the `kerberos` feature for its GSSAPI token source.
    pub fn new(config: AuthConfig) -> Result<Self> {
        let tokens: Option<Box<dyn TokenSource>> = match &config {
            AuthConfig::None => None,
            AuthConfig::Negotiate(krb) => Some(default_token_source(krb)?),
        };
        Ok(Self { config, tokens })
    }

    /// Create an authenticator with a custom token source
    pub fn with_token_source(config: AuthConfig, tokens: Box<dyn TokenSource>) -> Self {
        Self {
            config,
            tokens: Some(tokens),
        }
    }

    /// Auth configuration
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Apply authentication to a request
    pub fn apply(&self, req: &mut Request) -> Result<()> {
        let AuthConfig::Negotiate(krb) = &self.config else {
            return Ok(());
        };
        let tokens = self
            .tokens
            .as_ref()
            .ok_or_else(|| Error::auth("no token source configured for Negotiate auth"))?;

        let host = req
            .url()
            .host_str()
            .ok_or_else(|| Error::auth(format!("request URL has no host: {}", req.url())))?;
        let target = krb.target_principal(host);
        debug!("Requesting SPNEGO token for {} as {}", target, krb.principal);

        let token = tokens.initial_token(&target)?;
        let value = HeaderValue::from_str(&format!("Negotiate {}", STANDARD.encode(token)))
            .map_err(|e| Error::auth(format!("invalid Negotiate header: {e}")))?;
        req.headers_mut().insert(AUTHORIZATION, value);
        Ok(())
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("config", &self.config)
            .field("has_token_source", &self.tokens.is_some())
            .finish()
    }
}

#[cfg(feature = "kerberos")]
fn default_token_source(krb: &KerberosConfig) -> Result<Box<dyn TokenSource>> {
    Ok(Box::new(GssapiTokenSource::new(krb)?))
}

#[cfg(not(feature = "kerberos"))]
fn default_token_source(krb: &KerberosConfig) -> Result<Box<dyn TokenSource>> {
    Err(Error::config(format!(
        "principal {} requires Kerberos support; rebuild with --features kerberos",
        krb.principal
    )))
}

// ============================================================================
// GSSAPI token source
// ============================================================================

/// Token source backed by the system GSSAPI library
#[cfg(feature = "kerberos")]
#[derive(Debug, Clone)]
pub struct GssapiTokenSource {
    principal: String,
}

#[cfg(feature = "kerberos")]
impl GssapiTokenSource {
    /// Prepare GSSAPI to acquire credentials for `krb.principal`.
    ///
    /// GSSAPI reads the client keytab location from `KRB5_CLIENT_KTNAME`.
    pub fn new(krb: &KerberosConfig) -> Result<Self> {
        if let Some(keytab) = &krb.keytab {
            std::env::set_var("KRB5_CLIENT_KTNAME", keytab);
        }
        Ok(Self {
            principal: krb.principal.clone(),
        })
    }
}

#[cfg(feature = "kerberos")]
impl TokenSource for GssapiTokenSource {
    fn initial_token(&self, target_principal: &str) -> Result<Vec<u8>> {
        use cross_krb5::{ClientCtx, InitiateFlags};

        let (_pending, token) = ClientCtx::new(
            InitiateFlags::empty(),
            Some(&self.principal),
            target_principal,
            None,
        )
        .map_err(|e| Error::auth(format!("kerberos: {e}")))?;
        Ok(token.to_vec())
    }
}
