//! Cursor encoding
//!
//! A cursor is the base64url form (no padding) of the row key's string
//! representation. Decoding accepts padded input too.

use super::types::CursorValue;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use tracing::debug;

const CURSOR_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode a row key as an opaque, URL-safe cursor
///
/// Deterministic: the same key always yields the same cursor.
pub fn encode_cursor(value: impl Into<CursorValue>) -> String {
    CURSOR_ENGINE.encode(value.into().to_string())
}

/// Decode a cursor back to the key's string form
///
/// Returns `None` for malformed base64 or a non-UTF-8 payload, so callers can
/// treat a bad cursor as "start from the beginning".
pub fn decode_cursor(cursor: &str) -> Option<String> {
    let bytes = match CURSOR_ENGINE.decode(cursor) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!("Rejecting cursor '{}': {}", cursor, e);
            return None;
        }
    };
    match String::from_utf8(bytes) {
        Ok(decoded) => Some(decoded),
        Err(_) => {
            debug!("Rejecting cursor '{}': payload is not UTF-8", cursor);
            None
        }
    }
}

/// Decode a cursor that was produced from a timestamp key
pub fn decode_cursor_timestamp(cursor: &str) -> Option<DateTime<Utc>> {
    let decoded = decode_cursor(cursor)?;
    DateTime::parse_from_rfc3339(&decoded)
        .map(|ts| ts.with_timezone(&Utc))
        .ok()
}
