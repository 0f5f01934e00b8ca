// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Schema retrieval, server info, and transport behavior.

mod common;

use common::client_for;
use osdf_client::error::OsdfError;
use serde_json::json;

#[test]
fn get_schema_returns_the_schema_document() {
    let mut server = mockito::Server::new();
    let schema = json!({
        "type": "object",
        "properties": { "tag": { "type": "string" } },
        "required": ["tag"]
    });
    server
        .mock("GET", "/namespaces/ikm/schemas/sample")
        .with_status(200)
        .with_body(schema.to_string())
        .create();

    let client = client_for(&server);
    let fetched = client.get_schema("ikm", "sample").unwrap();
    assert_eq!(fetched, schema);
}

#[test]
fn get_aux_schema_uses_the_aux_route() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/namespaces/ikm/schemas/aux/address")
        .with_status(200)
        .with_body(json!({ "type": "object" }).to_string())
        .create();

    let client = client_for(&server);
    client.get_aux_schema("ikm", "address").unwrap();
    mock.assert();
}

#[test]
fn schema_fetch_failure_names_namespace_and_schema() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/namespaces/ikm/schemas/sample")
        .with_status(404)
        .with_header("x-osdf-error", "no such schema")
        .create();

    let client = client_for(&server);
    let err = client.get_schema("ikm", "sample").unwrap_err();

    match err {
        OsdfError::SchemaFetchFailed {
            namespace,
            schema,
            reason,
        } => {
            assert_eq!(namespace, "ikm");
            assert_eq!(schema, "sample");
            assert_eq!(reason.message(), Some("no such schema"));
        }
        other => panic!("expected SchemaFetchFailed, got {other}"),
    }
}

#[test]
fn get_info_parses_the_server_document() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/info")
        // Every call carries HTTP Basic credentials ("user" / "pass").
        .match_header("authorization", "Basic dXNlcjpwYXNz")
        .with_status(200)
        .with_body(
            json!({
                "api_version": "1.0",
                "title": "Example OSDF",
                "description": "Test deployment",
                "admin_contact_email1": "admin@example.org",
                "comment1": "nightly snapshot"
            })
            .to_string(),
        )
        .create();

    let client = client_for(&server);
    let info = client.get_info().unwrap();

    assert_eq!(info.api_version, "1.0");
    assert_eq!(info.title.as_deref(), Some("Example OSDF"));
    assert_eq!(info.extra["comment1"], json!("nightly snapshot"));
}

#[test]
fn rebuilt_client_reaches_the_new_credentials() {
    let mut server = mockito::Server::new();
    // base64("other:secret")
    let mock = server
        .mock("GET", "/info")
        .match_header("authorization", "Basic b3RoZXI6c2VjcmV0")
        .with_status(200)
        .with_body(json!({ "api_version": "1.0" }).to_string())
        .create();

    let client = client_for(&server)
        .with_credentials("other", "secret")
        .unwrap();
    client.get_info().unwrap();
    mock.assert();
}

#[test]
fn unreachable_server_is_a_transport_error() {
    // Reserved port with nothing listening.
    let client = osdf_client::client::OsdfClient::with_port("127.0.0.1", 9, "user", "pass").unwrap();
    let err = client.get_info().unwrap_err();
    assert!(matches!(err, OsdfError::Transport(_)));
}
