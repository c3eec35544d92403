// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Verification result types.
//!
//! A signature mismatch is a value the caller has to branch on, not a silent
//! absence of output: the payload is only handed out through
//! [`Sign1Verification::verified_payload`] once the outcome is `Verified`.

use coseinfer_common::ParsedCoseSign1;

use crate::algorithms::CoseAlgorithm;

#[must_use = "check the outcome before trusting the payload"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    Verified,
    SignatureMismatch { reason: String },
}

impl VerificationOutcome {
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified)
    }
}

#[must_use = "check the outcome before trusting the payload"]
#[derive(Debug, Clone)]
pub struct Sign1Verification {
    /// Algorithm resolved from the `alg` header.
    pub algorithm: CoseAlgorithm,
    pub message: ParsedCoseSign1,
    pub outcome: VerificationOutcome,
}

impl Sign1Verification {
    pub fn is_verified(&self) -> bool {
        self.outcome.is_verified()
    }

    pub fn verified_payload(&self) -> Option<&[u8]> {
        self.is_verified().then_some(self.message.payload.as_slice())
    }
}
