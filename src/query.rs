// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Query execution in OSDF's two dialects, and all-pages aggregation.
//!
//! OSDF accepts queries as ElasticSearch-style DSL documents or as OQL
//! strings. Either way the server answers one page at a time, with a
//! server-chosen page size it does not disclose. The single-page methods
//! return one [`QueryPage`]; the `*_all_pages` methods walk every page
//! sequentially and merge them into a single [`QueryResults`].
//!
//! A zero-count page is the server's only end-of-results signal, so an
//! aggregation over N non-empty pages always issues N+1 requests. There
//! is no page bound: a server that never reports an empty page keeps the
//! walk going, which is why the `*_with_cancel` variants accept a
//! [`CancelToken`] checked before each page request.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::client::OsdfClient;
use crate::error::{OsdfError, Result};
use crate::types::{QueryPage, QueryResults};

// ---------------------------------------------------------------------------
// CancelToken
// ---------------------------------------------------------------------------

/// A cloneable flag for aborting an all-pages aggregation from outside.
///
/// Hand a clone to the thread driving the aggregation and keep one to
/// fire; once cancelled the token stays cancelled. Aggregations check the
/// token before each page request and return [`OsdfError::Cancelled`]
/// when it has fired, discarding whatever was accumulated.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    fired: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of any aggregation holding this token.
    pub fn cancel(&self) {
        self.fired.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.fired.load(Ordering::Relaxed)
    }
}

// ---------------------------------------------------------------------------
// Query operations
// ---------------------------------------------------------------------------

impl OsdfClient {
    /// Issue a DSL query against a namespace, returning one page.
    ///
    /// Queries are expressed in JSON form using the ElasticSearch query
    /// DSL, serialized into `query`. Pages are numbered from 1.
    ///
    /// # Errors
    ///
    /// Returns [`OsdfError::QueryFailed`] for any status other than 200
    /// or 206.
    pub fn query(&self, namespace: &str, query: &str, page: u32) -> Result<QueryPage> {
        let path = format!("/nodes/query/{namespace}/page/{page}");
        self.query_page(&path, namespace, query)
    }

    /// Issue an OSDF Query Language (OQL) query, returning one page.
    ///
    /// # Errors
    ///
    /// Returns [`OsdfError::QueryFailed`] for any status other than 200
    /// or 206.
    pub fn oql_query(&self, namespace: &str, query: &str, page: u32) -> Result<QueryPage> {
        let path = format!("/nodes/oql/{namespace}/page/{page}");
        self.query_page(&path, namespace, query)
    }

    /// Issue a DSL query and aggregate all pages of results.
    ///
    /// As [`query`], but walks every page and merges them. Use with
    /// caution: large result sets are held in memory in full.
    ///
    /// [`query`]: OsdfClient::query
    pub fn query_all_pages(&self, namespace: &str, query: &str) -> Result<QueryResults> {
        self.aggregate(None, |page| self.query(namespace, query, page))
    }

    /// As [`query_all_pages`], aborting early if `cancel` fires.
    ///
    /// [`query_all_pages`]: OsdfClient::query_all_pages
    pub fn query_all_pages_with_cancel(
        &self,
        namespace: &str,
        query: &str,
        cancel: &CancelToken,
    ) -> Result<QueryResults> {
        self.aggregate(Some(cancel), |page| self.query(namespace, query, page))
    }

    /// Issue an OQL query and aggregate all pages of results.
    ///
    /// As [`oql_query`], but walks every page and merges them. Use with
    /// caution: large result sets are held in memory in full.
    ///
    /// [`oql_query`]: OsdfClient::oql_query
    pub fn oql_query_all_pages(&self, namespace: &str, query: &str) -> Result<QueryResults> {
        self.aggregate(None, |page| self.oql_query(namespace, query, page))
    }

    /// As [`oql_query_all_pages`], aborting early if `cancel` fires.
    ///
    /// [`oql_query_all_pages`]: OsdfClient::oql_query_all_pages
    pub fn oql_query_all_pages_with_cancel(
        &self,
        namespace: &str,
        query: &str,
        cancel: &CancelToken,
    ) -> Result<QueryResults> {
        self.aggregate(Some(cancel), |page| self.oql_query(namespace, query, page))
    }

    // -- Internals ----------------------------------------------------------

    /// Fetch one page from either query endpoint.
    ///
    /// 200 and 206 are both success; 206 marks a non-final page and gets
    /// no special handling.
    fn query_page(&self, path: &str, namespace: &str, query: &str) -> Result<QueryPage> {
        let response = self.post_raw(path, query.to_owned())?;
        if response.code != 200 && response.code != 206 {
            return Err(OsdfError::QueryFailed {
                namespace: namespace.to_owned(),
                reason: response.reason(),
            });
        }
        response.json()
    }

    /// Walk pages 1, 2, 3, … until a page reports zero results, merging
    /// in page order.
    ///
    /// Any page failure aborts the whole walk with the error unchanged;
    /// partial accumulation is never returned. The merged result takes
    /// its envelope from the final page, with `results` replaced by the
    /// accumulation and `result_count` recomputed from it.
    fn aggregate<F>(&self, cancel: Option<&CancelToken>, fetch: F) -> Result<QueryResults>
    where
        F: Fn(u32) -> Result<QueryPage>,
    {
        let mut page = 1u32;
        let mut accumulated: Vec<Value> = Vec::new();

        loop {
            if let Some(token) = cancel {
                if token.is_cancelled() {
                    return Err(OsdfError::Cancelled);
                }
            }

            let QueryPage {
                results,
                result_count,
                extra,
                ..
            } = fetch(page)?;
            debug!(page, result_count, "fetched query page");
            accumulated.extend(results);

            if result_count > 0 {
                page += 1;
                continue;
            }

            let result_count = accumulated.len();
            debug!(pages = page, total = result_count, "query aggregation complete");
            return Ok(QueryResults {
                results: accumulated,
                result_count,
                extra,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_token_starts_clear_and_latches() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());

        let handle = token.clone();
        handle.cancel();
        assert!(token.is_cancelled());
        assert!(handle.is_cancelled());
    }
}
