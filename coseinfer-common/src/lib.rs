// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! CBOR and COSE_Sign1 data layer for signed inference values.

pub mod cose_sign1;
pub mod error;
pub mod header_map;
pub mod inference_payload;

pub use cose_sign1::{
    encode_cose_sign1, encode_signature1_sig_structure, parse_cose_sign1, ParsedCoseSign1, SigStructureView,
    COSE_SIGN1_TAG, SIG_STRUCTURE_CONTEXT_SIGNATURE1,
};
pub use error::{CoseDecodeError, CoseEncodeError};
pub use header_map::{CoseHeaderMap, HeaderKey, HeaderValue, HEADER_LABEL_ALG, MAX_HEADER_NESTING};
pub use inference_payload::{
    encode_inference_payload, extract_inference_value, read_f32_claim, InferencePayloadError,
    EAT_VENDOR_RANGE_BASE, INFERENCE_VALUE_KEY,
};
