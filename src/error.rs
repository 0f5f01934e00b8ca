// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Error types for the OSDF client SDK.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an
//! alias for `std::result::Result<T, OsdfError>`. The [`OsdfError`] enum is a
//! closed set of tagged kinds, one per failing operation, each carrying the
//! server-supplied failure reason when the server provided one.

use std::fmt;

use reqwest::header::HeaderMap;
use thiserror::Error;

/// Response header through which OSDF reports the reason for a failure.
pub(crate) const OSDF_ERROR_HEADER: &str = "x-osdf-error";

/// Comprehensive error type for OSDF client operations.
///
/// Callers can branch on the variant rather than parse messages; every
/// server-reported failure keeps the raw reason in a [`Reason`] field.
#[derive(Error, Debug)]
pub enum OsdfError {
    /// An underlying HTTP / network transport error from `reqwest`.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The requested node does not exist.
    #[error("Node {id} not found{reason}")]
    NotFound {
        /// The node identifier that was requested.
        id: String,
        /// Server-supplied failure reason, if any.
        reason: Reason,
    },

    /// The server returned an unexpected error status on a retrieval.
    #[error("Server error ({status}){reason}")]
    Server {
        /// HTTP status code (e.g. 500, 502, 503).
        status: u16,
        /// Server-supplied failure reason, if any.
        reason: Reason,
    },

    /// A query call returned a status other than 200 or 206.
    #[error("Unable to query namespace {namespace}{reason}")]
    QueryFailed {
        /// The namespace the query targeted.
        namespace: String,
        /// Server-supplied failure reason, if any.
        reason: Reason,
    },

    /// Node insertion was rejected, or the server omitted the `location`
    /// header that carries the new node's identifier.
    #[error("Unable to insert node document{reason}")]
    InsertFailed {
        /// Server-supplied failure reason, if any.
        reason: Reason,
    },

    /// Node update was rejected.
    #[error("Unable to edit node document{reason}")]
    EditFailed {
        /// Server-supplied failure reason, if any.
        reason: Reason,
    },

    /// Node deletion was rejected.
    #[error("Unable to delete node document{reason}")]
    DeleteFailed {
        /// Server-supplied failure reason, if any.
        reason: Reason,
    },

    /// A schema or auxiliary schema could not be retrieved.
    #[error("Unable to retrieve schema {schema} from namespace {namespace}{reason}")]
    SchemaFetchFailed {
        /// The namespace the schema belongs to.
        namespace: String,
        /// The schema name that was requested.
        schema: String,
        /// Server-supplied failure reason, if any.
        reason: Reason,
    },

    /// Malformed caller input (e.g. editing a node document without an id).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An all-pages aggregation was cancelled through its [`CancelToken`].
    ///
    /// [`CancelToken`]: crate::query::CancelToken
    #[error("Aggregation cancelled")]
    Cancelled,
}

/// Crate-level result alias using [`OsdfError`].
pub type Result<T> = std::result::Result<T, OsdfError>;

// ---------------------------------------------------------------------------
// Reason
// ---------------------------------------------------------------------------

/// A server-supplied failure reason, read from the `x-osdf-error` header.
///
/// Displays as `. Reason: <text>` when present and as nothing when absent,
/// so error messages degrade to a generic form when the server omits the
/// header. This is the single extraction point for the header; every
/// failure path and [`validate_node`] go through it.
///
/// [`validate_node`]: crate::client::OsdfClient::validate_node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reason(Option<String>);

impl Reason {
    /// Extract the reason from a response header map, if the server sent one.
    pub(crate) fn from_headers(headers: &HeaderMap) -> Self {
        let reason = headers
            .get(OSDF_ERROR_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        Reason(reason)
    }

    /// The raw reason text, if any.
    pub fn message(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Consume the reason, yielding the raw text if any.
    pub fn into_message(self) -> Option<String> {
        self.0
    }
}

impl From<String> for Reason {
    fn from(text: String) -> Self {
        Reason(Some(text))
    }
}

impl From<&str> for Reason {
    fn from(text: &str) -> Self {
        Reason(Some(text.to_owned()))
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(text) => write!(f, ". Reason: {text}"),
            None => Ok(()),
        }
    }
}
