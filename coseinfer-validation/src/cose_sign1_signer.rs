// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Producer side: wrap a payload in an ES256 COSE_Sign1.
//!
//! Mirrors what the secure inference service emits: protected `{1: -7}`, an
//! empty unprotected map, the embedded payload and a 64-byte `r || s` signature.

use coseinfer_common::{encode_cose_sign1, encode_inference_payload, CoseHeaderMap, ParsedCoseSign1};
use signature::hazmat::PrehashSigner;

use crate::algorithms::CoseAlgorithm;
use crate::error::SignError;

/// Sign `payload` with `signing_key` and encode the COSE_Sign1.
pub fn sign_cose_sign1(
    payload: &[u8],
    signing_key: &p256::ecdsa::SigningKey,
    tagged: bool,
) -> Result<Vec<u8>, SignError> {
    let alg = CoseAlgorithm::ES256;

    let mut msg = ParsedCoseSign1 {
        protected_headers: CoseHeaderMap::with_alg(alg.cose_id())?,
        payload: payload.to_vec(),
        tagged,
        ..Default::default()
    };

    let sig_structure = msg.signature1_sig_structure_view().encode()?;
    let prehash = alg.hash_algorithm().digest(&sig_structure);
    let signature = PrehashSigner::<p256::ecdsa::Signature>::sign_prehash(signing_key, &prehash)
        .map_err(|e| SignError::Signature(e.to_string()))?;

    msg.signature = signature.to_bytes().to_vec();
    Ok(encode_cose_sign1(&msg)?)
}

/// Encode `value` as an inference payload and sign it.
pub fn sign_inference_value(
    value: f32,
    signing_key: &p256::ecdsa::SigningKey,
    tagged: bool,
) -> Result<Vec<u8>, SignError> {
    let payload = encode_inference_payload(value)?;
    sign_cose_sign1(&payload, signing_key, tagged)
}
