// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The signed inference payload.
//!
//! The payload is a CBOR map with integer keys and byte string values. Vendor
//! claims live in a private range of negative keys starting at
//! [`EAT_VENDOR_RANGE_BASE`]; the first of them carries the model output as the
//! four raw bytes of an IEEE-754 single-precision float in the producer's native
//! byte order.

use std::collections::BTreeSet;

use minicbor::data::Type;
use minicbor::{Decoder, Encoder};

use crate::error::CoseEncodeError;
use crate::header_map::is_integer_type;

/// Base of the vendor-reserved claim key range.
pub const EAT_VENDOR_RANGE_BASE: i64 = -80000;

/// Map key holding the inference value.
pub const INFERENCE_VALUE_KEY: i64 = EAT_VENDOR_RANGE_BASE;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InferencePayloadError {
    #[error("inference payload is not a well-formed CBOR map: {0}")]
    Cbor(String),

    #[error("inference payload has no entry at key {0}")]
    MissingField(i64),

    #[error("inference payload has duplicate key {0}")]
    DuplicateKey(i64),

    #[error("inference payload entry at key {key} is malformed: {reason}")]
    MalformedValue { key: i64, reason: String },
}

impl InferencePayloadError {
    fn cbor<E: std::fmt::Display>(e: E) -> Self {
        Self::Cbor(e.to_string())
    }
}

/// Extract the inference value from a decoded (and already trusted) payload.
pub fn extract_inference_value(payload: &[u8]) -> Result<f32, InferencePayloadError> {
    read_f32_claim(payload, INFERENCE_VALUE_KEY)
}

/// Read the byte string stored at integer `key` and reinterpret it as an `f32`.
pub fn read_f32_claim(payload: &[u8], key: i64) -> Result<f32, InferencePayloadError> {
    let bytes = read_bytes_claim(payload, key)?.ok_or(InferencePayloadError::MissingField(key))?;

    let raw: [u8; 4] = bytes
        .try_into()
        .map_err(|_| InferencePayloadError::MalformedValue {
            key,
            reason: format!("expected 4 bytes, found {}", bytes.len()),
        })?;

    Ok(f32::from_ne_bytes(raw))
}

/// Find the byte string stored at integer `key`.
///
/// Entries with non-integer keys are skipped. A repeated integer key is an
/// error rather than a choice between two values.
fn read_bytes_claim(payload: &[u8], key: i64) -> Result<Option<&[u8]>, InferencePayloadError> {
    let mut dec = Decoder::new(payload);

    let len = dec
        .map()
        .map_err(InferencePayloadError::cbor)?
        .ok_or_else(|| InferencePayloadError::Cbor("indefinite-length maps are not supported".to_string()))?;

    let mut found = None;
    let mut seen = BTreeSet::new();
    for _ in 0..len {
        let entry_key = if is_integer_type(dec.datatype().map_err(InferencePayloadError::cbor)?) {
            let k = dec.i64().map_err(InferencePayloadError::cbor)?;
            if !seen.insert(k) {
                return Err(InferencePayloadError::DuplicateKey(k));
            }
            Some(k)
        } else {
            dec.skip().map_err(InferencePayloadError::cbor)?;
            None
        };

        if entry_key == Some(key) {
            match dec.datatype().map_err(InferencePayloadError::cbor)? {
                Type::Bytes => found = Some(dec.bytes().map_err(InferencePayloadError::cbor)?),
                other => {
                    return Err(InferencePayloadError::MalformedValue {
                        key,
                        reason: format!("expected a byte string, found {other:?}"),
                    })
                }
            }
        } else {
            dec.skip().map_err(InferencePayloadError::cbor)?;
        }
    }

    if dec.position() != payload.len() {
        return Err(InferencePayloadError::Cbor("trailing bytes after payload map".to_string()));
    }

    Ok(found)
}

/// Encode `{ -80000: bstr(value) }`, the payload the secure inference service signs.
pub fn encode_inference_payload(value: f32) -> Result<Vec<u8>, CoseEncodeError> {
    let mut out = Vec::new();
    let mut enc = Encoder::new(&mut out);
    enc.map(1).map_err(CoseEncodeError::cbor)?;
    enc.i64(INFERENCE_VALUE_KEY).map_err(CoseEncodeError::cbor)?;
    enc.bytes(&value.to_ne_bytes()).map_err(CoseEncodeError::cbor)?;
    Ok(out)
}
