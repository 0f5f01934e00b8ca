// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Node CRUD and validation behavior against a mock OSDF server.

mod common;

use common::client_for;
use osdf_client::error::OsdfError;
use osdf_client::types::Node;
use serde_json::json;

fn sample_node() -> Node {
    Node::new("ikm", "sample", json!({ "tag": "demo" }))
}

#[test]
fn insert_returns_id_from_location_header() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/nodes")
        .match_header("content-type", "application/json")
        .with_status(201)
        .with_header("location", "/nodes/abc123")
        .create();

    let client = client_for(&server);
    let id = client.insert_node(&sample_node()).unwrap();

    assert_eq!(id, "abc123");
    mock.assert();
}

#[test]
fn insert_without_location_header_errors() {
    let mut server = mockito::Server::new();
    server.mock("POST", "/nodes").with_status(201).create();

    let client = client_for(&server);
    let err = client.insert_node(&sample_node()).unwrap_err();

    match err {
        OsdfError::InsertFailed { reason } => {
            assert_eq!(
                reason.message(),
                Some("no location header for the newly inserted node")
            );
        }
        other => panic!("expected InsertFailed, got {other}"),
    }
}

#[test]
fn insert_rejection_carries_server_reason() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/nodes")
        .with_status(422)
        .with_header("x-osdf-error", "schema mismatch")
        .create();

    let client = client_for(&server);
    let err = client.insert_node(&sample_node()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unable to insert node document. Reason: schema mismatch"
    );
}

#[test]
fn get_node_parses_the_document() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/nodes/xyz")
        .with_status(200)
        .with_body(
            json!({
                "id": "xyz",
                "ver": 3,
                "ns": "ikm",
                "node_type": "sample",
                "acl": { "read": ["all"], "write": ["all"] },
                "linkage": { "derived_from": ["abc"] },
                "meta": { "tag": "demo" }
            })
            .to_string(),
        )
        .create();

    let client = client_for(&server);
    let node = client.get_node("xyz").unwrap();

    assert_eq!(node.id.as_deref(), Some("xyz"));
    assert_eq!(node.ver, Some(3));
    assert_eq!(node.ns, "ikm");
    assert_eq!(node.linkage["derived_from"], vec!["abc".to_owned()]);
    assert_eq!(node.meta["tag"], json!("demo"));
}

#[test]
fn get_node_missing_is_not_found() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/nodes/gone")
        .with_status(404)
        .with_header("x-osdf-error", "no such node")
        .create();

    let client = client_for(&server);
    let err = client.get_node("gone").unwrap_err();

    match err {
        OsdfError::NotFound { id, reason } => {
            assert_eq!(id, "gone");
            assert_eq!(reason.message(), Some("no such node"));
        }
        other => panic!("expected NotFound, got {other}"),
    }
}

#[test]
fn get_node_other_status_is_server_error() {
    let mut server = mockito::Server::new();
    server.mock("GET", "/nodes/xyz").with_status(503).create();

    let client = client_for(&server);
    let err = client.get_node("xyz").unwrap_err();
    assert!(matches!(err, OsdfError::Server { status: 503, .. }));
}

#[test]
fn edit_without_id_is_rejected_client_side() {
    let mut server = mockito::Server::new();
    let mock = server.mock("PUT", mockito::Matcher::Any).expect(0).create();

    let client = client_for(&server);
    let err = client.edit_node(&sample_node()).unwrap_err();

    assert!(matches!(err, OsdfError::InvalidArgument(_)));
    mock.assert();
}

#[test]
fn edit_updates_the_addressed_node() {
    let mut server = mockito::Server::new();
    let mock = server.mock("PUT", "/nodes/xyz").with_status(200).create();

    let mut node = sample_node();
    node.id = Some("xyz".to_owned());
    node.ver = Some(3);

    let client = client_for(&server);
    client.edit_node(&node).unwrap();
    mock.assert();
}

#[test]
fn edit_rejection_is_edit_failed() {
    let mut server = mockito::Server::new();
    server
        .mock("PUT", "/nodes/xyz")
        .with_status(409)
        .with_header("x-osdf-error", "version conflict")
        .create();

    let mut node = sample_node();
    node.id = Some("xyz".to_owned());

    let client = client_for(&server);
    let err = client.edit_node(&node).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unable to edit node document. Reason: version conflict"
    );
}

#[test]
fn delete_succeeds_on_204() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("DELETE", "/nodes/xyz")
        .with_status(204)
        .create();

    let client = client_for(&server);
    client.delete_node("xyz").unwrap();
    mock.assert();
}

#[test]
fn delete_rejection_is_delete_failed() {
    let mut server = mockito::Server::new();
    server
        .mock("DELETE", "/nodes/xyz")
        .with_status(403)
        .with_header("x-osdf-error", "not permitted")
        .create();

    let client = client_for(&server);
    let err = client.delete_node("xyz").unwrap_err();
    assert!(matches!(err, OsdfError::DeleteFailed { .. }));
}

#[test]
fn validate_accepts_a_conforming_document() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/nodes/validate")
        .with_status(200)
        .create();

    let client = client_for(&server);
    let outcome = client.validate_node(&sample_node()).unwrap();

    assert!(outcome.valid);
    assert_eq!(outcome.message, None);
}

#[test]
fn validate_failure_is_a_normal_outcome_with_reason() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/nodes/validate")
        .with_status(422)
        .with_header("x-osdf-error", "missing required field: tag")
        .create();

    let client = client_for(&server);
    let outcome = client.validate_node(&sample_node()).unwrap();

    assert!(!outcome.valid);
    assert_eq!(outcome.message.as_deref(), Some("missing required field: tag"));
}

#[test]
fn validate_failure_without_reason_reports_unknown() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/nodes/validate")
        .with_status(422)
        .create();

    let client = client_for(&server);
    let outcome = client.validate_node(&sample_node()).unwrap();

    assert!(!outcome.valid);
    assert_eq!(outcome.message.as_deref(), Some("Unknown"));
}
