// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The verify-and-extract pipeline.
//!
//! Pipeline:
//! - Decode the hex lists for the message and the key.
//! - Build a P-256 EC2 key from the uncompressed point.
//! - Verify the COSE_Sign1 signature.
//! - Only then decode the payload map and read the inference value.

use coseinfer_common::extract_inference_value;
use coseinfer_validation::{verify_cose_sign1, Ec2PublicKey, EcCurve, VerificationOutcome};
use log::{debug, info};

use crate::error::Error;
use crate::hex_list::decode_hex_list;

/// A verified payload and the inference value read from it.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceReport {
    /// Raw CBOR payload bytes covered by the signature.
    pub payload: Vec<u8>,
    pub inference_value: f32,
}

impl InferenceReport {
    pub fn payload_hex(&self) -> String {
        hex::encode(&self.payload)
    }
}

/// Verify hex-list inputs and extract the inference value.
pub fn verify_inference(cose_sign1_hex: &str, public_key_hex: &str) -> Result<InferenceReport, Error> {
    let cose_sign1 = decode_hex_list(cose_sign1_hex)?;
    let public_key = decode_hex_list(public_key_hex)?;
    debug!(
        "decoded hex lists: message={} bytes, public key={} bytes",
        cose_sign1.len(),
        public_key.len()
    );
    verify_inference_bytes(&cose_sign1, &public_key)
}

/// Verify raw inputs and extract the inference value.
///
/// A signature mismatch is `Error::SignatureInvalid`; the payload of a message
/// that failed verification is never decoded.
pub fn verify_inference_bytes(cose_sign1: &[u8], public_key: &[u8]) -> Result<InferenceReport, Error> {
    let key = Ec2PublicKey::from_uncompressed_point(EcCurve::P256, public_key)?;

    let verification = verify_cose_sign1(cose_sign1, &key)?;
    if let VerificationOutcome::SignatureMismatch { reason } = &verification.outcome {
        return Err(Error::SignatureInvalid(reason.clone()));
    }
    info!("signature verified with {:?}", verification.algorithm);

    let payload = verification.message.payload;
    let inference_value = extract_inference_value(&payload)?;
    Ok(InferenceReport {
        payload,
        inference_value,
    })
}
