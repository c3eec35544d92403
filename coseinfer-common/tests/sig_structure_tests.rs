// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use coseinfer_common::{
    encode_signature1_sig_structure, parse_cose_sign1, ParsedCoseSign1, SigStructureView,
    SIG_STRUCTURE_CONTEXT_SIGNATURE1,
};

#[test]
fn signature1_sig_structure_view_exposes_expected_fields() {
    let msg = ParsedCoseSign1 {
        payload: b"payload".to_vec(),
        ..Default::default()
    };

    let view = msg.signature1_sig_structure_view();
    assert_eq!(view.context, SIG_STRUCTURE_CONTEXT_SIGNATURE1);
    assert_eq!(view.body_protected, b"");
    assert_eq!(view.external_aad, b"");
    assert_eq!(view.payload, b"payload");
}

#[test]
fn sig_structure_matches_known_encoding() {
    // Sig_structure of the device sample, checked against an independent encoder.
    let protected = [0xa1, 0x01, 0x26];
    let payload = [0xa1, 0x3a, 0x00, 0x01, 0x38, 0x7f, 0x44, 0x1f, 0x85, 0xab, 0x3f];

    let tbs = SigStructureView::signature1(&protected, &payload).encode().unwrap();

    let mut expected = vec![0x84, 0x6a];
    expected.extend_from_slice(b"Signature1");
    expected.extend_from_slice(&[0x43, 0xa1, 0x01, 0x26, 0x40, 0x4b]);
    expected.extend_from_slice(&payload);
    assert_eq!(tbs, expected);
}

#[test]
fn sig_structure_from_parsed_message_uses_verbatim_protected_bytes() {
    // Protected header encoded non-canonically: alg as a 1-byte-argument negative int.
    let protected = [0xa1, 0x01, 0x38, 0x06];

    let mut sign1 = Vec::new();
    let mut enc = minicbor::Encoder::new(&mut sign1);
    enc.array(4).unwrap();
    enc.bytes(&protected).unwrap();
    enc.map(0).unwrap();
    enc.bytes(b"p").unwrap();
    enc.bytes(&[0u8; 64]).unwrap();

    let parsed = parse_cose_sign1(&sign1).unwrap();
    assert_eq!(parsed.alg(), Some(-7));

    let tbs = encode_signature1_sig_structure(&parsed.signature1_sig_structure_view()).unwrap();
    let needle = [0x44, 0xa1, 0x01, 0x38, 0x06];
    assert!(tbs.windows(needle.len()).any(|w| w == needle));
}

#[test]
fn sig_structure_includes_external_aad_when_present() {
    let view = SigStructureView {
        external_aad: b"aad",
        ..SigStructureView::signature1(&[], b"p")
    };
    let tbs = view.encode().unwrap();
    let needle = [0x43, b'a', b'a', b'd'];
    assert!(tbs.windows(needle.len()).any(|w| w == needle));
}
