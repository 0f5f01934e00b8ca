// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! JSON-Schema retrieval.
//!
//! Each namespace registers the schemas its node types must validate
//! against, plus auxiliary schemas referenced from them. Schema documents
//! are free-form JSON-Schema, so they are returned as raw values.

use serde_json::Value;

use crate::client::OsdfClient;
use crate::error::{OsdfError, Result};

impl OsdfClient {
    /// Retrieve a namespace's document schema.
    ///
    /// # Errors
    ///
    /// Returns [`OsdfError::SchemaFetchFailed`] for any non-200 status.
    pub fn get_schema(&self, namespace: &str, schema_name: &str) -> Result<Value> {
        let path = format!("/namespaces/{namespace}/schemas/{schema_name}");
        self.fetch_schema(&path, namespace, schema_name)
    }

    /// Retrieve an auxiliary schema from a namespace.
    ///
    /// # Errors
    ///
    /// Returns [`OsdfError::SchemaFetchFailed`] for any non-200 status.
    pub fn get_aux_schema(&self, namespace: &str, aux_schema_name: &str) -> Result<Value> {
        let path = format!("/namespaces/{namespace}/schemas/aux/{aux_schema_name}");
        self.fetch_schema(&path, namespace, aux_schema_name)
    }

    fn fetch_schema(&self, path: &str, namespace: &str, schema_name: &str) -> Result<Value> {
        let response = self.get_raw(path)?;
        if response.code != 200 {
            return Err(OsdfError::SchemaFetchFailed {
                namespace: namespace.to_owned(),
                schema: schema_name.to_owned(),
                reason: response.reason(),
            });
        }
        response.json()
    }
}
