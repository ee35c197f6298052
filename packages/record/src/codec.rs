//! # Transition payload codec
//!
//! Converts a [`UserRecord`] to and from the single path segment that travels with
//! the entry → review transition.
//!
//! ## Format
//!
//! The record is written as a JSON object with the keys `id`, `pw`, `name` and
//! `phoneNum`, then percent-escaped so that only unreserved path characters
//! (`A-Z a-z 0-9 - . _ ~`) and `%XX` escapes remain:
//!
//! Keys are written in sorted order:
//!
//! ```text
//! {"id":"alice","name":"Alice","phoneNum":"010","pw":"pw1"}
//! %7B%22id%22%3A%22alice%22%2C%22name%22%3A%22Alice%22%2C ...
//! ```
//!
//! ## Decoding
//!
//! [`decode_payload`] keeps the three possible results apart ([`DecodeOutcome`]),
//! while [`decode`] collapses anything that is not a record into
//! [`UserRecord::default`]. The review screen only ever uses the collapsed form, so
//! a malformed payload renders exactly like an absent one.
//!
//! Field reading is lenient: a missing or `null` key becomes empty text, numbers and
//! booleans become their textual form, and nested arrays or objects become their JSON
//! text. A `+` in the escaped text is read as a space so that form-urlencoded
//! payloads decode too; [`encode`] never emits a bare `+`.
//!
//! A payload that already starts with `{` is taken as unescaped JSON. Escaped payloads
//! never start with `{`, so a payload that a router has unescaped once on the way
//! decodes to the same record.

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::{keys, UserRecord};

/// Everything except the RFC 3986 unreserved characters is escaped.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Why a payload could not be turned into a record.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("escaped payload is not valid UTF-8: {0}")]
    Escape(#[from] std::str::Utf8Error),
    #[error("payload is not JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("payload is JSON but not an object")]
    NotAnObject,
}

/// Result of decoding a transition payload, before collapsing to a record.
#[derive(Debug)]
pub enum DecodeOutcome {
    /// No payload was attached, or it was empty.
    NoPayload,
    /// A payload was attached but could not be decoded.
    Malformed(DecodeError),
    Decoded(UserRecord),
}

impl DecodeOutcome {
    /// Collapse to a record, substituting the all-default record on failure.
    pub fn into_record(self) -> UserRecord {
        match self {
            DecodeOutcome::Decoded(record) => record,
            DecodeOutcome::NoPayload | DecodeOutcome::Malformed(_) => UserRecord::default(),
        }
    }

    pub fn as_record(&self) -> Option<&UserRecord> {
        match self {
            DecodeOutcome::Decoded(record) => Some(record),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&DecodeError> {
        match self {
            DecodeOutcome::Malformed(err) => Some(err),
            _ => None,
        }
    }
}

/// Encode a record into a path-safe payload.
pub fn encode(record: &UserRecord) -> String {
    let mut map = Map::new();
    map.insert(keys::ID.to_string(), Value::from(record.id.as_str()));
    map.insert(keys::DISPLAY_NAME.to_string(), Value::from(record.display_name.as_str()));
    map.insert(keys::PHONE.to_string(), Value::from(record.phone.as_str()));
    map.insert(keys::SECRET.to_string(), Value::from(record.secret.as_str()));
    utf8_percent_encode(&Value::Object(map).to_string(), PATH_SEGMENT).to_string()
}

/// Decode a payload, falling back to the default record on any failure.
pub fn decode(text: &str) -> UserRecord {
    decode_payload(Some(text)).into_record()
}

/// Decode an optional payload without collapsing failures.
pub fn decode_payload(payload: Option<&str>) -> DecodeOutcome {
    let text = match payload {
        Some(text) if !text.is_empty() => text,
        _ => {
            tracing::debug!("no review payload");
            return DecodeOutcome::NoPayload;
        }
    };

    let parsed = if text.trim_start().starts_with('{') {
        parse_record(text)
    } else {
        unescape(text).and_then(|json| parse_record(&json))
    };

    match parsed {
        Ok(record) => DecodeOutcome::Decoded(record),
        Err(err) => {
            tracing::debug!("review payload not decoded: {err}");
            DecodeOutcome::Malformed(err)
        }
    }
}

/// Reverse the percent-escaping of a payload.
pub fn unescape(text: &str) -> Result<String, DecodeError> {
    let spaced: Cow<'_, str> = if text.contains('+') {
        Cow::Owned(text.replace('+', " "))
    } else {
        Cow::Borrowed(text)
    };
    let decoded = percent_decode_str(&spaced).decode_utf8()?;
    Ok(decoded.into_owned())
}

/// Parse the JSON object form of a record.
pub fn parse_record(json: &str) -> Result<UserRecord, DecodeError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Object(map) = value else {
        return Err(DecodeError::NotAnObject);
    };

    Ok(UserRecord {
        id: field_text(&map, keys::ID),
        secret: field_text(&map, keys::SECRET),
        display_name: field_text(&map, keys::DISPLAY_NAME),
        phone: field_text(&map, keys::PHONE),
    })
}

fn field_text(map: &Map<String, Value>, key: &str) -> String {
    match map.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
