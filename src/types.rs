// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Core data types for the OSDF client SDK.
//!
//! These types mirror the OSDF wire format: node documents with their
//! access-control lists and linkage, the `/info` server document, query
//! page envelopes, and the aggregated all-pages result. Every struct
//! derives `Serialize` and `Deserialize` so it can be round-tripped
//! through the REST API transparently.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// NodeAcl
// ---------------------------------------------------------------------------

/// Access-control lists attached to a node document.
///
/// Each list names the groups allowed to perform the operation. OSDF's
/// conventional open setting is a single `"all"` entry, which is what
/// [`NodeAcl::default`] produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeAcl {
    /// Groups allowed to read the node.
    pub read: Vec<String>,
    /// Groups allowed to modify the node.
    pub write: Vec<String>,
}

impl Default for NodeAcl {
    fn default() -> Self {
        NodeAcl {
            read: vec!["all".to_owned()],
            write: vec!["all".to_owned()],
        }
    }
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A structured document stored by OSDF.
///
/// Nodes belong to a namespace, carry access-control lists, linkage to
/// other nodes, and free-form domain metadata under `meta`. The `id` and
/// `ver` fields are assigned by the server and are absent from insert
/// payloads; serialization skips them when unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Opaque server-assigned identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Server-maintained version counter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ver: Option<u64>,
    /// The namespace the node belongs to.
    pub ns: String,
    /// The node type, matched against the namespace's registered schemas.
    pub node_type: String,
    /// Access-control lists.
    pub acl: NodeAcl,
    /// Linkage to other nodes: relationship name to target node ids.
    pub linkage: HashMap<String, Vec<String>>,
    /// Free-form domain metadata.
    pub meta: Value,
}

impl Node {
    /// Build a new node document ready for insertion.
    ///
    /// The access-control lists default to the open `"all"`/`"all"`
    /// setting and the linkage starts empty; adjust the public fields
    /// before inserting if the defaults do not fit.
    pub fn new(ns: &str, node_type: &str, meta: Value) -> Self {
        Node {
            id: None,
            ver: None,
            ns: ns.to_owned(),
            node_type: node_type.to_owned(),
            acl: NodeAcl::default(),
            linkage: HashMap::new(),
            meta,
        }
    }
}

// ---------------------------------------------------------------------------
// NodeValidation
// ---------------------------------------------------------------------------

/// Outcome of a server-side node validation.
///
/// Validation failure is a normal business outcome, not an error: the
/// document simply did not conform to the namespace's schemas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeValidation {
    /// Whether the document validated.
    pub valid: bool,
    /// The server's explanation when validation failed.
    pub message: Option<String>,
}

// ---------------------------------------------------------------------------
// ServerInfo
// ---------------------------------------------------------------------------

/// The OSDF server's information / contact document, served at `/info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    /// OSDF API version implemented by the server.
    pub api_version: String,
    /// Human-readable server title.
    pub title: Option<String>,
    /// Free-text description of the deployment.
    pub description: Option<String>,
    /// Primary administrative contact.
    pub admin_contact_email1: Option<String>,
    /// Secondary administrative contact.
    pub admin_contact_email2: Option<String>,
    /// Primary technical contact.
    pub technical_contact1: Option<String>,
    /// Secondary technical contact.
    pub technical_contact2: Option<String>,
    /// Any further fields the deployment includes.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// QueryPage
// ---------------------------------------------------------------------------

/// One page of query results, as returned by the single-page query calls.
///
/// Page size is server-determined and not exposed to the client; a page
/// with `result_count == 0` is the server's only end-of-results signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryPage {
    /// The node documents on this page, in server order.
    pub results: Vec<Value>,
    /// Number of records on this page (not a cumulative total).
    pub result_count: usize,
    /// 1-based index of this page, echoed by the server.
    pub page: u32,
    /// Any further envelope fields (e.g. `search_result_total`).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// QueryResults
// ---------------------------------------------------------------------------

/// The merged result of walking every page of a query.
///
/// `results` concatenates all pages' records in page order and
/// `result_count` is recomputed from the merged sequence. There is no
/// `page` field: aggregation collapses the page dimension, and the extra
/// envelope fields are carried over from the last page fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResults {
    /// All records, page 1 first.
    pub results: Vec<Value>,
    /// Total number of records across all pages.
    pub result_count: usize,
    /// Envelope fields carried over from the final page.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
