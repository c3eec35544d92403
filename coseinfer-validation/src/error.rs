// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use coseinfer_common::{CoseDecodeError, CoseEncodeError};

use crate::algorithms::CoseAlgorithm;
use crate::ec2_key::{EcCurve, KeyFormatError};

/// Errors that stop verification before a signature check can be made.
///
/// A well-formed message whose signature does not match is not an error; see
/// [`crate::VerificationOutcome`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error(transparent)]
    Decode(#[from] CoseDecodeError),

    #[error("missing alg header")]
    MissingAlgorithm,

    #[error("unsupported alg: {0}")]
    UnsupportedAlgorithm(i64),

    #[error("{alg:?} requires a {expected:?} key, got a {actual:?} key")]
    CurveMismatch {
        alg: CoseAlgorithm,
        expected: EcCurve,
        actual: EcCurve,
    },

    #[error("invalid public key: {0}")]
    InvalidKey(#[from] KeyFormatError),

    #[error("failed to encode Sig_structure: {0}")]
    SigStructure(#[from] CoseEncodeError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SignError {
    #[error(transparent)]
    Encode(#[from] CoseEncodeError),

    #[error("signing failed: {0}")]
    Signature(String),
}
