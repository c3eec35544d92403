// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Shared helpers for `coseinfer-validation` integration tests.
//!
//! COSE_Sign1 fixtures are encoded by hand with `minicbor` so the tests do not
//! depend on the encoder under test.

#![allow(dead_code)]

use coseinfer_validation::{Ec2PublicKey, EcCurve};
use p256::ecdsa::SigningKey;
use rand_core::OsRng;
use signature::Signer as _;

pub(crate) const PROTECTED_ES256: [u8; 3] = [0xa1, 0x01, 0x26]; // {1: -7}

pub(crate) fn random_signing_key() -> SigningKey {
    SigningKey::random(&mut OsRng)
}

/// The `0x04 || X || Y` export of `sk`'s public key.
pub(crate) fn uncompressed_public_key(sk: &SigningKey) -> Vec<u8> {
    sk.verifying_key().to_encoded_point(false).as_bytes().to_vec()
}

pub(crate) fn ec2_public_key(sk: &SigningKey) -> Ec2PublicKey {
    Ec2PublicKey::from_uncompressed_point(EcCurve::P256, &uncompressed_public_key(sk)).unwrap()
}

/// Encodes protected header `{ 1: alg }`.
pub(crate) fn encode_protected_map(alg: i64) -> Vec<u8> {
    let mut out = Vec::new();
    let mut enc = minicbor::Encoder::new(&mut out);
    enc.map(1).unwrap();
    enc.i64(1).unwrap();
    enc.i64(alg).unwrap();
    out
}

/// Encodes `["Signature1", protected, h'', payload]`.
pub(crate) fn encode_sig_structure(protected: &[u8], payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut enc = minicbor::Encoder::new(&mut out);
    enc.array(4).unwrap();
    enc.str("Signature1").unwrap();
    enc.bytes(protected).unwrap();
    enc.bytes(&[]).unwrap();
    enc.bytes(payload).unwrap();
    out
}

/// Encodes a COSE_Sign1 message from components.
pub(crate) fn encode_sign1(tagged: bool, protected: &[u8], payload: &[u8], signature: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut enc = minicbor::Encoder::new(&mut out);
    if tagged {
        enc.tag(minicbor::data::Tag::new(18)).unwrap();
    }
    enc.array(4).unwrap();
    enc.bytes(protected).unwrap();
    enc.map(0).unwrap();
    enc.bytes(payload).unwrap();
    enc.bytes(signature).unwrap();
    out
}

/// Signs `payload` under `protected` and returns the raw `r || s` signature.
pub(crate) fn sign_es256(sk: &SigningKey, protected: &[u8], payload: &[u8]) -> Vec<u8> {
    let sig: p256::ecdsa::Signature = sk.sign(&encode_sig_structure(protected, payload));
    sig.to_bytes().to_vec()
}

/// Builds a complete ES256 COSE_Sign1.
pub(crate) fn build_sign1_es256(sk: &SigningKey, payload: &[u8]) -> Vec<u8> {
    let signature = sign_es256(sk, &PROTECTED_ES256, payload);
    encode_sign1(true, &PROTECTED_ES256, payload, &signature)
}

/// Every single-bit flip of `bytes`.
pub(crate) fn bit_flips(bytes: &[u8]) -> impl Iterator<Item = Vec<u8>> + '_ {
    (0..bytes.len() * 8).map(move |bit| {
        let mut out = bytes.to_vec();
        out[bit / 8] ^= 1 << (bit % 8);
        out
    })
}
