// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::collections::BTreeMap;

use minicbor::data::Type;
use minicbor::{Decoder, Encoder};

use crate::error::{CoseDecodeError, CoseEncodeError};

/// COSE header label for the signature algorithm.
pub const HEADER_LABEL_ALG: i64 = 1;

/// Deepest array/map nesting accepted inside a header map.
pub const MAX_HEADER_NESTING: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeaderKey {
    Int(i64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum HeaderValue {
    Int(i64),
    Bytes(Vec<u8>),
    Text(String),
    Array(Vec<HeaderValue>),
    Map(BTreeMap<HeaderKey, HeaderValue>),
    Bool(bool),
    Null,
}

/// A decoded COSE header map together with the exact bytes it was decoded from.
///
/// For protected headers the encoded bytes are what gets signed, so they are kept
/// verbatim rather than re-encoded from `map`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CoseHeaderMap {
    encoded_map_cbor: Vec<u8>,
    map: BTreeMap<HeaderKey, HeaderValue>,
}

impl CoseHeaderMap {
    /// Build a header map from entries and encode it.
    ///
    /// An empty map encodes to zero bytes, which is the RFC 9052 encoding of an
    /// empty protected header.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (HeaderKey, HeaderValue)>,
    ) -> Result<Self, CoseEncodeError> {
        let map: BTreeMap<_, _> = entries.into_iter().collect();
        let encoded_map_cbor = if map.is_empty() {
            Vec::new()
        } else {
            encode_header_map(&map)?
        };
        Ok(Self { encoded_map_cbor, map })
    }

    /// A protected header carrying only the `alg` parameter.
    pub fn with_alg(alg: i64) -> Result<Self, CoseEncodeError> {
        Self::from_entries([(HeaderKey::Int(HEADER_LABEL_ALG), HeaderValue::Int(alg))])
    }

    pub fn encoded_map_cbor(&self) -> &[u8] {
        &self.encoded_map_cbor
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn get_i64(&self, key: i64) -> Option<i64> {
        self.map.get(&HeaderKey::Int(key)).and_then(|v| match v {
            HeaderValue::Int(i) => Some(*i),
            _ => None,
        })
    }

    pub fn get_bytes(&self, key: i64) -> Option<&[u8]> {
        self.map.get(&HeaderKey::Int(key)).and_then(|v| match v {
            HeaderValue::Bytes(b) => Some(b.as_slice()),
            _ => None,
        })
    }

    pub fn map(&self) -> &BTreeMap<HeaderKey, HeaderValue> {
        &self.map
    }

    pub(crate) fn from_decoded(encoded_map_cbor: Vec<u8>, map: BTreeMap<HeaderKey, HeaderValue>) -> Self {
        Self { encoded_map_cbor, map }
    }
}

pub(crate) fn is_integer_type(t: Type) -> bool {
    matches!(
        t,
        Type::I8
            | Type::I16
            | Type::I32
            | Type::I64
            | Type::Int
            | Type::U8
            | Type::U16
            | Type::U32
            | Type::U64
    )
}

/// Decode a header map serialized on its own (the protected header bstr contents).
pub(crate) fn decode_header_map_from_cbor(bytes: &[u8]) -> Result<BTreeMap<HeaderKey, HeaderValue>, CoseDecodeError> {
    // Empty bstr means empty map for protected headers.
    if bytes.is_empty() {
        return Ok(BTreeMap::new());
    }

    let mut dec = Decoder::new(bytes);
    let map = decode_header_map_from_decoder(&mut dec, "protected header map")?;

    if dec.position() != bytes.len() {
        return Err(CoseDecodeError::TrailingBytes("protected header map"));
    }

    Ok(map)
}

pub(crate) fn decode_header_map_from_decoder(
    dec: &mut Decoder<'_>,
    context: &'static str,
) -> Result<BTreeMap<HeaderKey, HeaderValue>, CoseDecodeError> {
    decode_map_at_depth(dec, context, 0)
}

fn decode_map_at_depth(
    dec: &mut Decoder<'_>,
    context: &'static str,
    depth: usize,
) -> Result<BTreeMap<HeaderKey, HeaderValue>, CoseDecodeError> {
    let len = dec
        .map()
        .map_err(CoseDecodeError::cbor(context))?
        .ok_or(CoseDecodeError::IndefiniteLength("maps"))?;

    let mut map = BTreeMap::new();
    for _ in 0..len {
        let key = decode_header_key(dec)?;
        let value = decode_header_value(dec, depth)?;
        if map.contains_key(&key) {
            return Err(CoseDecodeError::DuplicateKey {
                context,
                key: format!("{key:?}"),
            });
        }
        map.insert(key, value);
    }

    Ok(map)
}

fn decode_header_key(dec: &mut Decoder<'_>) -> Result<HeaderKey, CoseDecodeError> {
    match dec.datatype().map_err(CoseDecodeError::cbor("header key"))? {
        t if is_integer_type(t) => {
            let i = dec.i64().map_err(CoseDecodeError::cbor("int header key"))?;
            Ok(HeaderKey::Int(i))
        }
        Type::String => {
            let s = dec.str().map_err(CoseDecodeError::cbor("text header key"))?;
            Ok(HeaderKey::Text(s.to_string()))
        }
        other => Err(CoseDecodeError::unexpected_type("header key", other)),
    }
}

/// Decode one value of a map at nesting level `depth`.
fn decode_header_value(dec: &mut Decoder<'_>, depth: usize) -> Result<HeaderValue, CoseDecodeError> {
    match dec.datatype().map_err(CoseDecodeError::cbor("header value"))? {
        Type::Null => {
            dec.null().map_err(CoseDecodeError::cbor("header value"))?;
            Ok(HeaderValue::Null)
        }
        Type::Bool => Ok(HeaderValue::Bool(dec.bool().map_err(CoseDecodeError::cbor("header value"))?)),
        Type::Bytes => Ok(HeaderValue::Bytes(dec.bytes().map_err(CoseDecodeError::cbor("header value"))?.to_vec())),
        Type::String => Ok(HeaderValue::Text(dec.str().map_err(CoseDecodeError::cbor("header value"))?.to_string())),
        t if is_integer_type(t) => Ok(HeaderValue::Int(dec.i64().map_err(CoseDecodeError::cbor("header value"))?)),
        Type::Array => {
            let depth = nested(depth)?;
            let len = dec
                .array()
                .map_err(CoseDecodeError::cbor("header value"))?
                .ok_or(CoseDecodeError::IndefiniteLength("arrays"))?;
            // Declared length is untrusted; no pre-allocation.
            let mut out = Vec::new();
            for _ in 0..len {
                out.push(decode_header_value(dec, depth)?);
            }
            Ok(HeaderValue::Array(out))
        }
        Type::Map => {
            let depth = nested(depth)?;
            Ok(HeaderValue::Map(decode_map_at_depth(dec, "nested header map", depth)?))
        }
        other => Err(CoseDecodeError::unexpected_type("header value", other)),
    }
}

fn nested(depth: usize) -> Result<usize, CoseDecodeError> {
    if depth >= MAX_HEADER_NESTING {
        return Err(CoseDecodeError::NestingTooDeep(MAX_HEADER_NESTING));
    }
    Ok(depth + 1)
}

pub(crate) fn encode_header_map(map: &BTreeMap<HeaderKey, HeaderValue>) -> Result<Vec<u8>, CoseEncodeError> {
    let mut out = Vec::new();
    let mut enc = Encoder::new(&mut out);
    write_header_map(&mut enc, map)?;
    Ok(out)
}

pub(crate) fn write_header_map(
    enc: &mut Encoder<&mut Vec<u8>>,
    map: &BTreeMap<HeaderKey, HeaderValue>,
) -> Result<(), CoseEncodeError> {
    enc.map(map.len() as u64).map_err(CoseEncodeError::cbor)?;
    for (k, v) in map {
        match k {
            HeaderKey::Int(i) => enc.i64(*i),
            HeaderKey::Text(s) => enc.str(s),
        }
        .map_err(CoseEncodeError::cbor)?;
        write_header_value(enc, v)?;
    }
    Ok(())
}

fn write_header_value(enc: &mut Encoder<&mut Vec<u8>>, value: &HeaderValue) -> Result<(), CoseEncodeError> {
    match value {
        HeaderValue::Int(i) => {
            enc.i64(*i).map_err(CoseEncodeError::cbor)?;
        }
        HeaderValue::Bytes(b) => {
            enc.bytes(b).map_err(CoseEncodeError::cbor)?;
        }
        HeaderValue::Text(s) => {
            enc.str(s).map_err(CoseEncodeError::cbor)?;
        }
        HeaderValue::Bool(b) => {
            enc.bool(*b).map_err(CoseEncodeError::cbor)?;
        }
        HeaderValue::Null => {
            enc.null().map_err(CoseEncodeError::cbor)?;
        }
        HeaderValue::Array(items) => {
            enc.array(items.len() as u64).map_err(CoseEncodeError::cbor)?;
            for it in items {
                write_header_value(enc, it)?;
            }
        }
        HeaderValue::Map(m) => write_header_map(enc, m)?,
    }
    Ok(())
}
