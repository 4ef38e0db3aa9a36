//! Authentication module
//!
//! Supports: none, Kerberos via SPNEGO (`Authorization: Negotiate`)
//!
//! The `Authenticator` asks a [`TokenSource`] for a GSSAPI initial context
//! token per request. The Kerberos exchange itself lives in the token source;
//! the GSSAPI-backed one is compiled with the `kerberos` feature.

mod authenticator;
mod types;

pub use authenticator::{Authenticator, TokenSource};
#[cfg(feature = "kerberos")]
pub use authenticator::GssapiTokenSource;
pub use types::{AuthConfig, KerberosConfig};
