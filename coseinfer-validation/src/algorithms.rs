// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use sha2::{Digest as _, Sha256};

use crate::ec2_key::EcCurve;

/// Supported COSE algorithms (IANA COSE Algorithms registry).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(i64)]
pub enum CoseAlgorithm {
    /// ECDSA w/ SHA-256 over P-256.
    ES256 = -7,
}

impl CoseAlgorithm {
    pub fn from_cose_id(id: i64) -> Option<Self> {
        match id {
            -7 => Some(Self::ES256),
            _ => None,
        }
    }

    pub fn cose_id(self) -> i64 {
        self as i64
    }

    /// The curve a key must be on to verify this algorithm.
    pub fn curve(self) -> EcCurve {
        match self {
            Self::ES256 => EcCurve::P256,
        }
    }

    pub fn hash_algorithm(self) -> CoseHashAlgorithm {
        match self {
            Self::ES256 => CoseHashAlgorithm::Sha256,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CoseHashAlgorithm {
    Sha256,
}

impl CoseHashAlgorithm {
    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha256 => Sha256::digest(data).to_vec(),
        }
    }
}
