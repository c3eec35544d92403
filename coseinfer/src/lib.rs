// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Verify a signed inference attestation and extract its inference value.
//!
//! The inputs are the textual hex lists a device prints (`0xd2,0x84,...`): one
//! for the COSE_Sign1 message, one for the signer's uncompressed P-256 point.
//! The lower layers live in `coseinfer-common` (CBOR/COSE) and
//! `coseinfer-validation` (keys and signatures); this crate glues them together
//! and owns the error taxonomy the command line reports.

mod action;
mod error;
mod hex_list;
mod samples;
mod verify;

pub use action::{run_action, Action, SUPPORTED_ACTIONS};
pub use error::Error;
pub use hex_list::{decode_hex_list, encode_hex_list, HexListError};
pub use samples::{SAMPLE_COSE_SIGN1, SAMPLE_PUBLIC_KEY};
pub use verify::{verify_inference, verify_inference_bytes, InferenceReport};

pub use coseinfer_common::{extract_inference_value, INFERENCE_VALUE_KEY};
pub use coseinfer_validation::{EcCurve, KeyFormatError, VerificationOutcome};
