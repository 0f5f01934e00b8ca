// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Node CRUD and validation operations.
//!
//! Nodes are the documents OSDF stores: namespace-scoped, typed, carrying
//! access-control lists, linkage to other nodes, and free-form metadata.
//! This module provides create, read, update, delete, and validate
//! operations as methods on [`OsdfClient`].

use reqwest::header::LOCATION;

use crate::client::OsdfClient;
use crate::error::{OsdfError, Result};
use crate::types::{Node, NodeValidation};

impl OsdfClient {
    /// Retrieve a node given its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`OsdfError::NotFound`] if no node exists with the given
    /// `node_id`, and [`OsdfError::Server`] for any other non-200 status.
    pub fn get_node(&self, node_id: &str) -> Result<Node> {
        let response = self.get_raw(&format!("/nodes/{node_id}"))?;
        match response.code {
            200 => response.json(),
            404 => Err(OsdfError::NotFound {
                id: node_id.to_owned(),
                reason: response.reason(),
            }),
            status => Err(OsdfError::Server {
                status,
                reason: response.reason(),
            }),
        }
    }

    /// Insert a node document, returning the server-assigned identifier.
    ///
    /// The identifier is parsed from the `location` header of the 201
    /// response (its last path segment).
    ///
    /// # Errors
    ///
    /// Returns [`OsdfError::InsertFailed`] if the status is not 201 or the
    /// `location` header is missing.
    pub fn insert_node(&self, node: &Node) -> Result<String> {
        let body = serde_json::to_string(node).map_err(OsdfError::Decode)?;
        let response = self.post_raw("/nodes", body)?;

        if response.code != 201 {
            return Err(OsdfError::InsertFailed {
                reason: response.reason(),
            });
        }

        let location = response
            .headers
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| OsdfError::InsertFailed {
                reason: "no location header for the newly inserted node".into(),
            })?;

        match location.rsplit('/').next() {
            Some(id) if !id.is_empty() => Ok(id.to_owned()),
            _ => Err(OsdfError::InsertFailed {
                reason: "malformed location header for the newly inserted node".into(),
            }),
        }
    }

    /// Update an existing node with the provided document.
    ///
    /// # Errors
    ///
    /// Returns [`OsdfError::InvalidArgument`] if the document carries no
    /// id (nothing is sent), and [`OsdfError::EditFailed`] if the server
    /// rejects the update.
    pub fn edit_node(&self, node: &Node) -> Result<()> {
        let node_id = node
            .id
            .as_deref()
            .ok_or_else(|| OsdfError::InvalidArgument("no node id in the provided document".to_owned()))?;

        let body = serde_json::to_string(node).map_err(OsdfError::Decode)?;
        let response = self.put_raw(&format!("/nodes/{node_id}"), body)?;

        if response.code != 200 {
            return Err(OsdfError::EditFailed {
                reason: response.reason(),
            });
        }
        Ok(())
    }

    /// Delete the specified node.
    ///
    /// # Errors
    ///
    /// Returns [`OsdfError::DeleteFailed`] if the server answers with
    /// anything but 204.
    pub fn delete_node(&self, node_id: &str) -> Result<()> {
        let response = self.delete_raw(&format!("/nodes/{node_id}"))?;
        if response.code != 204 {
            return Err(OsdfError::DeleteFailed {
                reason: response.reason(),
            });
        }
        Ok(())
    }

    /// Check a node document against the namespace's registered schemas.
    ///
    /// Validation failure is a normal outcome, reported through
    /// [`NodeValidation`] rather than an error; only transport-level
    /// failures produce an `Err`. When the server rejects the document
    /// without giving a reason, the message falls back to `"Unknown"`.
    pub fn validate_node(&self, node: &Node) -> Result<NodeValidation> {
        let body = serde_json::to_string(node).map_err(OsdfError::Decode)?;
        let response = self.post_raw("/nodes/validate", body)?;

        if response.code == 200 {
            Ok(NodeValidation {
                valid: true,
                message: None,
            })
        } else {
            let message = response
                .reason()
                .into_message()
                .unwrap_or_else(|| "Unknown".to_owned());
            Ok(NodeValidation {
                valid: false,
                message: Some(message),
            })
        }
    }
}
