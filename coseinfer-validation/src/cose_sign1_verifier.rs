// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! COSE_Sign1 signature verification.
//!
//! - Parse COSE_Sign1 bytes into structured fields.
//! - Resolve the COSE `alg` header and check it against the key's curve.
//! - Build the Sig_structure and hash it with the algorithm's digest.
//! - Verify the `r || s` signature over that digest.

use coseinfer_common::{parse_cose_sign1, ParsedCoseSign1};
use log::{debug, warn};
use signature::hazmat::PrehashVerifier as _;

use crate::algorithms::CoseAlgorithm;
use crate::ec2_key::Ec2PublicKey;
use crate::error::VerifyError;
use crate::verification::{Sign1Verification, VerificationOutcome};

/// Verify a COSE_Sign1 byte array against `key`.
pub fn verify_cose_sign1(cose_sign1: &[u8], key: &Ec2PublicKey) -> Result<Sign1Verification, VerifyError> {
    let parsed = parse_cose_sign1(cose_sign1)?;
    debug!(
        "decoded COSE_Sign1: tagged={}, protected={} bytes, payload={} bytes, signature={} bytes",
        parsed.tagged,
        parsed.protected_headers.encoded_map_cbor().len(),
        parsed.payload.len(),
        parsed.signature.len()
    );
    verify_parsed_cose_sign1(parsed, key)
}

/// Verify a previously parsed COSE_Sign1.
pub fn verify_parsed_cose_sign1(parsed: ParsedCoseSign1, key: &Ec2PublicKey) -> Result<Sign1Verification, VerifyError> {
    let alg = cose_alg(&parsed)?;

    if key.curve() != alg.curve() {
        return Err(VerifyError::CurveMismatch {
            alg,
            expected: alg.curve(),
            actual: key.curve(),
        });
    }

    let sig_structure = parsed.signature1_sig_structure_view().encode()?;
    let outcome = verify_sig_structure(alg, key, &sig_structure, &parsed.signature)?;

    match &outcome {
        VerificationOutcome::Verified => debug!("COSE_Sign1 signature verified with {alg:?}"),
        VerificationOutcome::SignatureMismatch { reason } => warn!("COSE_Sign1 signature rejected: {reason}"),
    }

    Ok(Sign1Verification {
        algorithm: alg,
        message: parsed,
        outcome,
    })
}

/// Verify `signature` over already-encoded Sig_structure bytes.
///
/// Key problems are errors; anything wrong with the signature itself, including
/// a malformed `r || s` encoding, is a `SignatureMismatch`.
pub fn verify_sig_structure(
    alg: CoseAlgorithm,
    key: &Ec2PublicKey,
    sig_structure: &[u8],
    signature: &[u8],
) -> Result<VerificationOutcome, VerifyError> {
    let prehash = alg.hash_algorithm().digest(sig_structure);
    match alg {
        CoseAlgorithm::ES256 => verify_ecdsa_p256_prehash(key, &prehash, signature),
    }
}

fn cose_alg(parsed: &ParsedCoseSign1) -> Result<CoseAlgorithm, VerifyError> {
    let id = parsed.alg().ok_or(VerifyError::MissingAlgorithm)?;
    CoseAlgorithm::from_cose_id(id).ok_or(VerifyError::UnsupportedAlgorithm(id))
}

fn verify_ecdsa_p256_prehash(
    key: &Ec2PublicKey,
    prehash: &[u8],
    sig: &[u8],
) -> Result<VerificationOutcome, VerifyError> {
    let vk = key.p256_verifying_key()?;

    // COSE carries ECDSA signatures as the raw `r || s` concatenation.
    let signature = match p256::ecdsa::Signature::from_slice(sig) {
        Ok(s) => s,
        Err(e) => {
            return Ok(VerificationOutcome::SignatureMismatch {
                reason: format!("bad ES256 signature ({} bytes): {e}", sig.len()),
            })
        }
    };

    Ok(match vk.verify_prehash(prehash, &signature) {
        Ok(()) => VerificationOutcome::Verified,
        Err(_) => VerificationOutcome::SignatureMismatch {
            reason: "ECDSA signature does not match".to_string(),
        },
    })
}
