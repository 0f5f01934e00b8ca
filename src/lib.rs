// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! # OSDF Client SDK
//!
//! A Rust client library for OSDF — a REST service storing structured
//! "node" documents partitioned into namespaces, with JSON-Schema backed
//! validation and two query dialects (an ElasticSearch-style query DSL
//! and the OSDF Query Language, OQL).
//!
//! Query results are paged by the server; the `*_all_pages` methods walk
//! every page and merge them into a single result set.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use osdf_client::client::OsdfClient;
//! use osdf_client::types::Node;
//!
//! fn main() -> osdf_client::error::Result<()> {
//!     let client = OsdfClient::new("osdf.example.org", "user", "secret")?;
//!
//!     let node = Node::new("ikm", "sample", serde_json::json!({ "tag": "demo" }));
//!     let id = client.insert_node(&node)?;
//!     println!("inserted node {id}");
//!
//!     let hits = client.oql_query_all_pages("ikm", "\"sample\"[node_type]")?;
//!     println!("{} matching nodes", hits.result_count);
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`client`] — Connection configuration, authentication, and HTTP transport.
//! - [`types`] — Data types mirroring the OSDF wire format (Node, QueryPage, etc.).
//! - [`node`] — CRUD and validation operations for node documents.
//! - [`schema`] — JSON-Schema and auxiliary schema retrieval.
//! - [`query`] — DSL and OQL queries, single-page and all-pages aggregation.
//! - [`error`] — Error types and the crate-level `Result` alias.

pub mod client;
pub mod error;
pub mod node;
pub mod query;
pub mod schema;
pub mod types;

mod canon;
