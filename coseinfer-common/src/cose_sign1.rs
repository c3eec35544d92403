// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use minicbor::data::{Tag, Type};
use minicbor::{Decoder, Encoder};

use crate::error::{CoseDecodeError, CoseEncodeError};
use crate::header_map::{
    decode_header_map_from_cbor, decode_header_map_from_decoder, write_header_map, CoseHeaderMap, HEADER_LABEL_ALG,
};

pub const COSE_SIGN1_TAG: u64 = 18;
pub const SIG_STRUCTURE_CONTEXT_SIGNATURE1: &str = "Signature1";

/// The fields of a COSE `Sig_structure` for a COSE_Sign1 message.
#[derive(Debug, Clone)]
pub struct SigStructureView<'a> {
    pub context: &'static str,
    pub body_protected: &'a [u8],
    pub external_aad: &'a [u8],
    pub payload: &'a [u8],
}

impl<'a> SigStructureView<'a> {
    /// Sig_structure for a COSE_Sign1 with no externally supplied AAD.
    pub fn signature1(body_protected: &'a [u8], payload: &'a [u8]) -> Self {
        Self {
            context: SIG_STRUCTURE_CONTEXT_SIGNATURE1,
            body_protected,
            external_aad: &[],
            payload,
        }
    }

    /// Encode the to-be-signed bytes.
    pub fn encode(&self) -> Result<Vec<u8>, CoseEncodeError> {
        encode_signature1_sig_structure(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedCoseSign1 {
    pub protected_headers: CoseHeaderMap,
    pub unprotected_headers: CoseHeaderMap,
    pub payload: Vec<u8>,
    pub signature: Vec<u8>,
    /// Whether the message was wrapped in CBOR tag 18.
    pub tagged: bool,
}

impl ParsedCoseSign1 {
    /// The `alg` header, taken from the protected headers first, then the unprotected ones.
    pub fn alg(&self) -> Option<i64> {
        self.protected_headers
            .get_i64(HEADER_LABEL_ALG)
            .or_else(|| self.unprotected_headers.get_i64(HEADER_LABEL_ALG))
    }

    pub fn signature1_sig_structure_view(&self) -> SigStructureView<'_> {
        SigStructureView::signature1(self.protected_headers.encoded_map_cbor(), &self.payload)
    }
}

/// Parse a COSE_Sign1 structure from its CBOR encoding.
///
/// COSE_Sign1 = [ protected : bstr, unprotected : map, payload : bstr, signature : bstr ],
/// optionally wrapped in tag 18. A detached (null) payload is rejected.
pub fn parse_cose_sign1(input: &[u8]) -> Result<ParsedCoseSign1, CoseDecodeError> {
    if input.is_empty() {
        return Err(CoseDecodeError::Empty);
    }

    let mut dec = Decoder::new(input);

    let tagged = matches!(dec.datatype().map_err(CoseDecodeError::cbor("COSE_Sign1"))?, Type::Tag);
    if tagged {
        let tag = dec.tag().map_err(CoseDecodeError::cbor("CBOR tag"))?;
        if tag != Tag::new(COSE_SIGN1_TAG) {
            return Err(CoseDecodeError::UnexpectedTag(tag.as_u64()));
        }
    }

    let len = dec
        .array()
        .map_err(CoseDecodeError::cbor("COSE_Sign1 array"))?
        .ok_or(CoseDecodeError::IndefiniteLength("arrays"))?;

    if len != 4 {
        return Err(CoseDecodeError::ArrayLength(len));
    }

    let protected_bstr = dec
        .bytes()
        .map_err(CoseDecodeError::cbor("protected headers (bstr)"))?
        .to_vec();
    let protected_map = decode_header_map_from_cbor(&protected_bstr)?;

    match dec.datatype().map_err(CoseDecodeError::cbor("unprotected headers"))? {
        Type::Map => {}
        other => return Err(CoseDecodeError::unexpected_type("unprotected headers", other)),
    }
    let unprotected_map = decode_header_map_from_decoder(&mut dec, "unprotected headers map")?;

    let payload = match dec.datatype().map_err(CoseDecodeError::cbor("payload"))? {
        Type::Bytes => dec
            .bytes()
            .map_err(CoseDecodeError::cbor("payload (bstr)"))?
            .to_vec(),
        Type::Null => return Err(CoseDecodeError::DetachedPayload),
        other => return Err(CoseDecodeError::unexpected_type("payload", other)),
    };

    let signature = match dec.datatype().map_err(CoseDecodeError::cbor("signature"))? {
        Type::Bytes => dec
            .bytes()
            .map_err(CoseDecodeError::cbor("signature (bstr)"))?
            .to_vec(),
        other => return Err(CoseDecodeError::unexpected_type("signature", other)),
    };

    if dec.position() != input.len() {
        return Err(CoseDecodeError::TrailingBytes("COSE_Sign1"));
    }

    Ok(ParsedCoseSign1 {
        protected_headers: CoseHeaderMap::from_decoded(protected_bstr, protected_map),
        unprotected_headers: CoseHeaderMap::from_decoded(Vec::new(), unprotected_map),
        payload,
        signature,
        tagged,
    })
}

/// Encode `["Signature1", body_protected, external_aad, payload]` with definite lengths.
pub fn encode_signature1_sig_structure(view: &SigStructureView<'_>) -> Result<Vec<u8>, CoseEncodeError> {
    let mut out = Vec::with_capacity(32 + view.body_protected.len() + view.external_aad.len() + view.payload.len());
    {
        let mut enc = Encoder::new(&mut out);
        enc.array(4).map_err(CoseEncodeError::cbor)?;
        enc.str(view.context).map_err(CoseEncodeError::cbor)?;
        enc.bytes(view.body_protected).map_err(CoseEncodeError::cbor)?;
        enc.bytes(view.external_aad).map_err(CoseEncodeError::cbor)?;
        enc.bytes(view.payload).map_err(CoseEncodeError::cbor)?;
    }
    Ok(out)
}

/// Encode a COSE_Sign1 message. The protected header bytes are written verbatim.
pub fn encode_cose_sign1(msg: &ParsedCoseSign1) -> Result<Vec<u8>, CoseEncodeError> {
    let mut out = Vec::with_capacity(16 + msg.protected_headers.encoded_map_cbor().len() + msg.payload.len() + msg.signature.len());
    {
        let mut enc = Encoder::new(&mut out);
        if msg.tagged {
            enc.tag(Tag::new(COSE_SIGN1_TAG)).map_err(CoseEncodeError::cbor)?;
        }
        enc.array(4).map_err(CoseEncodeError::cbor)?;
        enc.bytes(msg.protected_headers.encoded_map_cbor())
            .map_err(CoseEncodeError::cbor)?;
        write_header_map(&mut enc, msg.unprotected_headers.map())?;
        enc.bytes(&msg.payload).map_err(CoseEncodeError::cbor)?;
        enc.bytes(&msg.signature).map_err(CoseEncodeError::cbor)?;
    }
    Ok(out)
}
