// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! ES256 COSE_Sign1 verification over raw EC2 public keys.

pub mod algorithms;
pub mod cose_sign1_signer;
pub mod cose_sign1_verifier;
pub mod ec2_key;
pub mod error;
pub mod verification;

pub use algorithms::{CoseAlgorithm, CoseHashAlgorithm};
pub use cose_sign1_signer::{sign_cose_sign1, sign_inference_value};
pub use cose_sign1_verifier::{verify_cose_sign1, verify_parsed_cose_sign1, verify_sig_structure};
pub use ec2_key::{split_uncompressed_point, Ec2PublicKey, EcCurve, KeyFormatError, SEC1_UNCOMPRESSED_TAG};
pub use error::{SignError, VerifyError};
pub use verification::{Sign1Verification, VerificationOutcome};
