//! Tests for the HTTP transport module

use super::*;
use crate::auth::{AuthConfig, Authenticator, KerberosConfig, TokenSource};
use crate::error::{Error, Result};
use rcgen::{generate_simple_self_signed, CertifiedKey};
use reqwest::{Method, Request};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio_rustls::rustls::crypto::ring;
use tokio_rustls::rustls::pki_types::{PrivateKeyDer, PrivatePkcs8KeyDer};
use tokio_rustls::rustls::ServerConfig;
use tokio_rustls::TlsAcceptor;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct StaticToken;

impl TokenSource for StaticToken {
    fn initial_token(&self, _target_principal: &str) -> Result<Vec<u8>> {
        Ok(b"abc".to_vec())
    }
}

fn get(url: &str) -> Request {
    Request::new(Method::GET, url.parse().unwrap())
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert!(config.timeout.is_none());
    assert!(!config.accept_invalid_certs);
    assert!(config.user_agent.starts_with("solrdump/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .timeout(Duration::from_secs(60))
        .accept_invalid_certs(true)
        .build();

    assert_eq!(config.timeout, Some(Duration::from_secs(60)));
    assert!(config.accept_invalid_certs);
}

// ============================================================================
// TLS Tests
// ============================================================================

/// Serve `{}` over TLS with a freshly generated self-signed certificate.
async fn self_signed_server() -> SocketAddr {
    let CertifiedKey { cert, key_pair } =
        generate_simple_self_signed(vec!["localhost".to_string(), "127.0.0.1".to_string()])
            .unwrap();
    let key = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(key_pair.serialize_der()));
    let config = ServerConfig::builder_with_provider(Arc::new(ring::default_provider()))
        .with_safe_default_protocol_versions()
        .unwrap()
        .with_no_client_auth()
        .with_single_cert(vec![cert.der().clone()], key)
        .unwrap();
    let acceptor = TlsAcceptor::from(Arc::new(config));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            let acceptor = acceptor.clone();
            tokio::spawn(async move {
                // Clients that verify the certificate abort the handshake here.
                let Ok(mut tls) = acceptor.accept(stream).await else {
                    return;
                };
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match tls.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let _ = tls
                    .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{}")
                    .await;
                let _ = tls.shutdown().await;
            });
        }
    });
    addr
}

#[tokio::test]
async fn test_accept_invalid_certs_reaches_self_signed_server() {
    let addr = self_signed_server().await;

    let config = HttpClientConfig::builder().accept_invalid_certs(true).build();
    let client = HttpClient::with_config(config).unwrap();
    let response = client
        .execute(get(&format!("https://{addr}/solr/example/select")))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "{}");
}

#[tokio::test]
async fn test_self_signed_server_rejected_by_default() {
    let addr = self_signed_server().await;

    let client = HttpClient::new().unwrap();
    let err = client
        .execute(get(&format!("https://{addr}/solr/example/select")))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Http(_)));
}

// ============================================================================
// Request Tests
// ============================================================================

#[tokio::test]
async fn test_execute_returns_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/solr/example/select"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let response = client
        .execute(get(&format!("{}/solr/example/select", mock_server.uri())))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_execute_does_not_fail_on_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let response = client.execute(get(&mock_server.uri())).await.unwrap();
    assert_eq!(response.status(), 503);
}

#[tokio::test]
async fn test_execute_sends_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header(
            "User-Agent",
            format!("solrdump/{}", env!("CARGO_PKG_VERSION")).as_str(),
        ))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    client.execute(get(&mock_server.uri())).await.unwrap();
}

#[tokio::test]
async fn test_execute_applies_authenticator() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("Authorization", "Negotiate YWJj"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = HttpClient::new().unwrap();
    client.set_authenticator(Authenticator::with_token_source(
        AuthConfig::Negotiate(KerberosConfig::new("solr@EXAMPLE.COM")),
        Box::new(StaticToken),
    ));
    client.execute(get(&mock_server.uri())).await.unwrap();
}

#[tokio::test]
async fn test_execute_connection_refused_is_transport_error() {
    // Bind and drop a listener so the port is closed.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpClient::new().unwrap();
    let err = client
        .execute(get(&format!("http://{addr}/solr/select")))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Http(_)));
    assert!(err.to_string().starts_with("http: "));
}

#[tokio::test]
async fn test_ensure_success_passes_ok() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("fine"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let response = client.execute(get(&mock_server.uri())).await.unwrap();
    let response = ensure_success(response).await.unwrap();
    assert_eq!(response.text().await.unwrap(), "fine");
}

#[tokio::test]
async fn test_ensure_success_captures_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(r#"{"error":{"msg":"Cursor functionality requires a sort containing a uniqueKey field tie breaker"}}"#),
        )
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let response = client.execute(get(&mock_server.uri())).await.unwrap();
    let err = ensure_success(response).await.unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("uniqueKey"));
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}
