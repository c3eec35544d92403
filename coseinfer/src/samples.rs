// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Built-in sample inputs.
//!
//! A COSE_Sign1 captured from the secure inference service, signed with ES256,
//! and the uncompressed public key of the device that signed it. The payload is
//! `{ -80000: h'1f85ab3f' }`, i.e. 1.34 on a little-endian device.

/// Sample COSE_Sign1 message as a hex list.
pub const SAMPLE_COSE_SIGN1: &str = concat!(
    "0xd2,0x84,0x43,0xa1,0x1,0x26,0xa0,0x4b,",
    "0xa1,0x3a,0x0,0x1,0x38,0x7f,0x44,0x1f,",
    "0x85,0xab,0x3f,0x58,0x40,0xb7,0x61,0x7c,",
    "0x38,0x29,0x4b,0xe,0x78,0xbf,0x92,0xb5,",
    "0x93,0x74,0x9c,0x6c,0x40,0x72,0x13,0x71,",
    "0xb0,0x6a,0x8a,0x2,0x49,0x4f,0xa4,0xad,",
    "0x7b,0x15,0x8,0x10,0x4a,0x37,0xc6,0x26,",
    "0x17,0x31,0xee,0xcf,0x60,0x89,0xa7,0xfc,",
    "0x46,0x71,0xfd,0x6e,0xe1,0x63,0xe5,0x13,",
    "0x33,0xcb,0x57,0x2f,0x7e,0x75,0x75,0x1a,",
    "0x25,0xc1,0xd2,0x75,0xd6",
);

/// Public key (`0x04 || X || Y`) of the sample's signer as a hex list.
pub const SAMPLE_PUBLIC_KEY: &str = concat!(
    "0x4,0x18,0x4d,0xc2,0x5c,0xb,0x32,",
    "0x2f,0xfb,0xff,0xd,0xdf,0x9b,0x55,",
    "0x87,0x32,0xf3,0x53,0xf8,0x9a,0xf1,",
    "0x1b,0x1c,0x89,0x3a,0x8f,0xd5,0xb1,",
    "0x4d,0x9d,0x5a,0xed,0x8e,0x92,0xea,",
    "0xda,0x95,0x24,0xdf,0xd4,0xcc,0xcc,",
    "0x4b,0xe3,0x3c,0x1,0xc8,0x2c,0xb3,",
    "0xbf,0xb9,0x21,0x68,0x71,0x5a,0x5b,",
    "0xbc,0xc4,0xa,0x24,0x9d,0x74,0xad,",
    "0xc,0x68",
);
