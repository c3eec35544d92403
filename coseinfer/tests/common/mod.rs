// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![allow(dead_code)]

use coseinfer::encode_hex_list;
use coseinfer_validation::sign_inference_value;
use p256::ecdsa::SigningKey;
use rand_core::OsRng;

/// The sample payload value: `h'1f85ab3f'` read in native byte order.
pub(crate) fn sample_inference_value() -> f32 {
    f32::from_ne_bytes([0x1f, 0x85, 0xab, 0x3f])
}

pub(crate) fn random_signing_key() -> SigningKey {
    SigningKey::random(&mut OsRng)
}

pub(crate) fn public_key_hex(sk: &SigningKey) -> String {
    encode_hex_list(sk.verifying_key().to_encoded_point(false).as_bytes())
}

/// A freshly signed inference attestation and its key, both as hex lists.
pub(crate) fn signed_inference_hex(value: f32) -> (String, String) {
    let sk = random_signing_key();
    let cose = sign_inference_value(value, &sk, true).unwrap();
    (encode_hex_list(&cose), public_key_hex(&sk))
}

pub(crate) fn run(action: &str, payload: &str, key: &str) -> (Result<(), coseinfer::Error>, String) {
    let mut out = Vec::new();
    let res = coseinfer::run_action(action, payload, key, &mut out);
    (res, String::from_utf8(out).unwrap())
}
