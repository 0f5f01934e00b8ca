// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! OSDF client configuration, authentication, and HTTP transport layer.
//!
//! [`OsdfClient`] is the primary entry point for all SDK operations. It owns
//! the server address, HTTP Basic credentials, and the blocking HTTP client.
//! Domain-specific methods (node CRUD, schemas, queries) are defined as
//! `impl OsdfClient` blocks in their respective modules.
//!
//! All methods use blocking I/O so they can be called directly from
//! synchronous code without an async runtime; each call completes (or
//! fails) before the next is issued.

use std::time::Duration;

use reqwest::blocking::RequestBuilder;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::canon;
use crate::error::{OsdfError, Reason, Result};
use crate::types::ServerInfo;

/// Port OSDF servers conventionally listen on.
pub const DEFAULT_PORT: u16 = 8123;

// ---------------------------------------------------------------------------
// OsdfClient
// ---------------------------------------------------------------------------

/// The main OSDF client.
///
/// Holds connection parameters and provides low-level HTTP helpers that the
/// higher-level module methods (`node`, `schema`, `query`) delegate to.
///
/// The client is an immutable value: changing the server, port, or
/// credentials goes through [`with_server`], [`with_address`], or
/// [`with_credentials`], each of which rebuilds the transport so every
/// subsequent call uses the new parameters.
///
/// [`with_server`]: OsdfClient::with_server
/// [`with_address`]: OsdfClient::with_address
/// [`with_credentials`]: OsdfClient::with_credentials
///
/// # Examples
///
/// ```rust,no_run
/// use osdf_client::client::OsdfClient;
///
/// # fn main() -> osdf_client::error::Result<()> {
/// let client = OsdfClient::new("osdf.example.org", "user", "secret")?;
/// let info = client.get_info()?;
/// println!("OSDF API version: {}", info.api_version);
/// # Ok(())
/// # }
/// ```
pub struct OsdfClient {
    /// Server hostname (no scheme, no port).
    server: String,
    /// Server port.
    port: u16,
    /// HTTP Basic username, sent on every request.
    username: String,
    /// HTTP Basic password, sent on every request.
    password: String,
    /// Parsed base URL (`http://{server}:{port}/`).
    base_url: Url,
    /// Underlying `reqwest` HTTP client (connection-pooled).
    http: reqwest::blocking::Client,
}

impl OsdfClient {
    // -- Constructors -------------------------------------------------------

    /// Create a client for `server` on the conventional OSDF port.
    ///
    /// # Errors
    ///
    /// Returns [`OsdfError::InvalidArgument`] if `server` does not form a
    /// valid URL.
    pub fn new(server: &str, username: &str, password: &str) -> Result<Self> {
        Self::with_port(server, DEFAULT_PORT, username, password)
    }

    /// Create a client for `server` on an explicit port.
    pub fn with_port(server: &str, port: u16, username: &str, password: &str) -> Result<Self> {
        let base_url = Url::parse(&format!("http://{server}:{port}/"))
            .map_err(|e| OsdfError::InvalidArgument(format!("invalid server address: {e}")))?;

        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(OsdfError::Transport)?;

        Ok(Self {
            server: server.to_owned(),
            port,
            username: username.to_owned(),
            password: password.to_owned(),
            base_url,
            http,
        })
    }

    // -- Reconstruction -----------------------------------------------------

    /// Rebuild the client against a different server, keeping port and
    /// credentials.
    pub fn with_server(&self, server: &str) -> Result<Self> {
        Self::with_port(server, self.port, &self.username, &self.password)
    }

    /// Rebuild the client against a different server and port.
    pub fn with_address(&self, server: &str, port: u16) -> Result<Self> {
        Self::with_port(server, port, &self.username, &self.password)
    }

    /// Rebuild the client with different HTTP Basic credentials.
    pub fn with_credentials(&self, username: &str, password: &str) -> Result<Self> {
        Self::with_port(&self.server, self.port, username, password)
    }

    // -- Accessors ----------------------------------------------------------

    /// The server hostname this client talks to.
    pub fn server(&self) -> &str {
        &self.server
    }

    /// The server port this client talks to.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// The HTTP Basic username sent on every request.
    pub fn username(&self) -> &str {
        &self.username
    }

    // -- Server info --------------------------------------------------------

    /// Retrieve the OSDF server's information / contact document.
    pub fn get_info(&self) -> Result<ServerInfo> {
        let response = self.get_raw("/info")?;
        response.json()
    }

    // -- Internal HTTP helpers ----------------------------------------------

    /// Build a full URL by joining `path` onto the base URL.
    fn url(&self, path: &str) -> Url {
        // Unwrap is safe: path is always a well-formed relative segment.
        self.base_url.join(path).expect("valid path join")
    }

    /// Perform a GET request.
    pub(crate) fn get_raw(&self, path: &str) -> Result<RawResponse> {
        self.dispatch("GET", path, self.http.get(self.url(path)))
    }

    /// Perform a POST request with a raw body.
    pub(crate) fn post_raw(&self, path: &str, body: String) -> Result<RawResponse> {
        let builder = self
            .http
            .post(self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        self.dispatch("POST", path, builder)
    }

    /// Perform a PUT request with a raw body.
    pub(crate) fn put_raw(&self, path: &str, body: String) -> Result<RawResponse> {
        let builder = self
            .http
            .put(self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        self.dispatch("PUT", path, builder)
    }

    /// Perform a DELETE request.
    pub(crate) fn delete_raw(&self, path: &str) -> Result<RawResponse> {
        self.dispatch("DELETE", path, self.http.delete(self.url(path)))
    }

    /// Attach authentication, send the request, and capture the response.
    ///
    /// Status-code interpretation is left to the calling operation; only
    /// transport-level failures error here.
    fn dispatch(
        &self,
        method: &'static str,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<RawResponse> {
        let response = builder
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .map_err(OsdfError::Transport)?;

        let code = response.status().as_u16();
        let headers = response.headers().clone();
        let content = response.bytes().map_err(OsdfError::Transport)?.to_vec();

        debug!(method, path, code, "OSDF request completed");

        Ok(RawResponse {
            code,
            headers,
            content,
        })
    }
}

// ---------------------------------------------------------------------------
// RawResponse
// ---------------------------------------------------------------------------

/// A captured HTTP response: status code, headers, and body bytes.
///
/// Header names are lower-cased by construction in `reqwest`.
pub(crate) struct RawResponse {
    /// HTTP status code.
    pub(crate) code: u16,
    /// Response headers.
    pub(crate) headers: HeaderMap,
    /// Raw body bytes.
    pub(crate) content: Vec<u8>,
}

impl RawResponse {
    /// Decode the body through canonicalization into a typed value.
    pub(crate) fn json<T: DeserializeOwned>(&self) -> Result<T> {
        let value = canon::decode_body(&self.content)?;
        serde_json::from_value(value).map_err(OsdfError::Decode)
    }

    /// The server-supplied failure reason, if the response carried one.
    pub(crate) fn reason(&self) -> Reason {
        Reason::from_headers(&self.headers)
    }
}
