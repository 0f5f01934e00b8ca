// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Response-body decoding and text canonicalization.
//!
//! OSDF servers emit UTF-8 JSON, but intermediaries have been seen to
//! prepend byte-order marks and smuggle invalid byte sequences into
//! string fields after charset transcoding. Every response body in this
//! crate is decoded through [`decode_body`], which replaces invalid
//! sequences, drops a leading BOM, and then walks the parsed tree so all
//! map keys and string values carry the same canonical UTF-8 form.

use serde_json::Value;

/// Decode a response body into a canonicalized JSON value.
pub(crate) fn decode_body(bytes: &[u8]) -> serde_json::Result<Value> {
    let text = String::from_utf8_lossy(bytes);
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    let value: Value = serde_json::from_str(text)?;
    Ok(canonicalize(value))
}

/// Recursively rebuild a JSON tree, canonicalizing every piece of text.
///
/// Map keys are canonicalized along with string values, so no mixed text
/// representations survive in the tree handed to callers.
fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, inner)| (canonical_text(key), canonicalize(inner)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        Value::String(text) => Value::String(canonical_text(text)),
        other => other,
    }
}

/// Canonical UTF-8 form of one string: stray U+FEFF markers removed.
fn canonical_text(text: String) -> String {
    if text.contains('\u{feff}') {
        text.replace('\u{feff}', "")
    } else {
        text
    }
}
