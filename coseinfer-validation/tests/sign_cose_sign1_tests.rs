// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

mod common;

use coseinfer_common::{extract_inference_value, parse_cose_sign1};
use coseinfer_validation::{sign_cose_sign1, sign_inference_value, verify_cose_sign1};

use common::*;

#[test]
fn signed_message_has_device_layout() {
    let sk = random_signing_key();
    let cose = sign_cose_sign1(b"payload", &sk, true).unwrap();

    // tag(18), array(4), bstr(3) {1: -7}, {}
    assert_eq!(&cose[..7], &[0xd2, 0x84, 0x43, 0xa1, 0x01, 0x26, 0xa0]);

    let parsed = parse_cose_sign1(&cose).unwrap();
    assert_eq!(parsed.payload, b"payload");
    assert_eq!(parsed.signature.len(), 64);
}

#[test]
fn signed_message_verifies_with_exported_key() {
    let sk = random_signing_key();
    for tagged in [false, true] {
        let cose = sign_cose_sign1(b"payload", &sk, tagged).unwrap();
        let res = verify_cose_sign1(&cose, &ec2_public_key(&sk)).unwrap();
        assert!(res.is_verified());
        assert_eq!(res.message.tagged, tagged);
    }
}

#[test]
fn signed_inference_value_round_trips() {
    let sk = random_signing_key();
    let cose = sign_inference_value(-0.25, &sk, true).unwrap();

    let res = verify_cose_sign1(&cose, &ec2_public_key(&sk)).unwrap();
    let payload = res.verified_payload().expect("verified");
    assert_eq!(extract_inference_value(payload).unwrap(), -0.25);
}
