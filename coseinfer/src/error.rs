// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use coseinfer_common::InferencePayloadError;
use coseinfer_validation::{KeyFormatError, VerifyError};

use crate::hex_list::HexListError;

/// Every way a verify-and-extract run can fail.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to parse hex list: {0}")]
    Parse(#[from] HexListError),

    #[error("invalid public key: {0}")]
    InvalidKeyFormat(#[from] KeyFormatError),

    #[error("failed to decode COSE_Sign1: {0}")]
    Decode(String),

    #[error("signature verification failed: {0}")]
    SignatureInvalid(String),

    #[error("inference payload has no entry at key {0}")]
    MissingField(i64),

    #[error("inference payload entry at key {key} is malformed: {reason}")]
    MalformedValue { key: i64, reason: String },

    #[error("{0} is not supported")]
    UnsupportedAction(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnsupportedAction(_) => 2,
            Self::SignatureInvalid(_) => 3,
            _ => 1,
        }
    }
}

impl From<VerifyError> for Error {
    fn from(e: VerifyError) -> Self {
        match e {
            VerifyError::InvalidKey(k) => Self::InvalidKeyFormat(k),
            other => Self::Decode(other.to_string()),
        }
    }
}

impl From<InferencePayloadError> for Error {
    fn from(e: InferencePayloadError) -> Self {
        match e {
            InferencePayloadError::Cbor(message) => Self::Decode(format!("inference payload: {message}")),
            InferencePayloadError::DuplicateKey(key) => Self::Decode(format!("inference payload: duplicate key {key}")),
            InferencePayloadError::MissingField(key) => Self::MissingField(key),
            InferencePayloadError::MalformedValue { key, reason } => Self::MalformedValue { key, reason },
        }
    }
}
