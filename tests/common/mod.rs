// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Shared fixtures for the integration tests.

use osdf_client::client::OsdfClient;

/// Build a client pointed at a local mock OSDF server.
pub fn client_for(server: &mockito::Server) -> OsdfClient {
    let address = server.host_with_port();
    let (host, port) = address.rsplit_once(':').expect("host:port address");
    OsdfClient::with_port(host, port.parse().expect("numeric port"), "user", "pass")
        .expect("client construction")
}
