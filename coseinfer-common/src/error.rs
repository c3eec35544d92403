// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::Display;

/// Errors produced while decoding a COSE_Sign1 structure or its header maps.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoseDecodeError {
    #[error("empty input")]
    Empty,

    #[error("failed to read {context}: {message}")]
    Cbor {
        context: &'static str,
        message: String,
    },

    #[error("unexpected CBOR tag {0} (expected COSE_Sign1 tag 18 or no tag)")]
    UnexpectedTag(u64),

    #[error("COSE_Sign1 must be an array(4), got array({0})")]
    ArrayLength(u64),

    #[error("indefinite-length {0} are not supported")]
    IndefiniteLength(&'static str),

    #[error("{context} has unexpected CBOR type {found}")]
    UnexpectedType {
        context: &'static str,
        found: String,
    },

    #[error("detached payload (null) is not supported; the payload must be embedded")]
    DetachedPayload,

    #[error("trailing bytes after {0}")]
    TrailingBytes(&'static str),

    #[error("{context} has duplicate key {key}")]
    DuplicateKey { context: &'static str, key: String },

    #[error("header values nested deeper than {0} levels")]
    NestingTooDeep(usize),
}

impl CoseDecodeError {
    /// Wrap an underlying CBOR decoder error with the item that was being read.
    pub(crate) fn cbor<E: Display>(context: &'static str) -> impl FnOnce(E) -> Self {
        move |e| Self::Cbor {
            context,
            message: e.to_string(),
        }
    }

    pub(crate) fn unexpected_type<T: std::fmt::Debug>(context: &'static str, found: T) -> Self {
        Self::UnexpectedType {
            context,
            found: format!("{found:?}"),
        }
    }
}

/// Errors produced while encoding CBOR structures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoseEncodeError {
    #[error("CBOR encode failed: {0}")]
    Cbor(String),
}

impl CoseEncodeError {
    pub(crate) fn cbor<E: Display>(e: E) -> Self {
        Self::Cbor(e.to_string())
    }
}
