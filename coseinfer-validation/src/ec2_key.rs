// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! EC2 public keys built from raw SEC1 uncompressed points.
//!
//! The inference service exports its attestation key as `0x04 || X || Y`. The
//! builder drops the tag byte and splits the rest into coordinates whose width
//! comes from the curve, so adding a curve only means adding an [`EcCurve`]
//! variant.

/// SEC1 tag byte of an uncompressed point.
pub const SEC1_UNCOMPRESSED_TAG: u8 = 0x04;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EcCurve {
    P256,
}

impl EcCurve {
    /// Byte width of one affine coordinate.
    pub fn coordinate_width(self) -> usize {
        match self {
            Self::P256 => 32,
        }
    }

    /// COSE `crv` identifier (IANA COSE Elliptic Curves registry).
    pub fn cose_crv(self) -> i64 {
        match self {
            Self::P256 => 1,
        }
    }

    /// Length of `tag || X || Y`.
    pub fn uncompressed_point_len(self) -> usize {
        1 + 2 * self.coordinate_width()
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyFormatError {
    #[error("{curve:?} uncompressed point must be {expected} bytes, got {actual}")]
    PointLength {
        curve: EcCurve,
        expected: usize,
        actual: usize,
    },

    #[error("expected uncompressed point tag 0x04, got {0:#04x}")]
    PointTag(u8),

    #[error("{curve:?} coordinates must be {expected} bytes each, got x={x} y={y}")]
    CoordinateLength {
        curve: EcCurve,
        expected: usize,
        x: usize,
        y: usize,
    },

    #[error("coordinates are not a point on {0:?}")]
    NotOnCurve(EcCurve),
}

/// Split `tag || X || Y` into `(X, Y)` for `curve`.
pub fn split_uncompressed_point(curve: EcCurve, bytes: &[u8]) -> Result<(&[u8], &[u8]), KeyFormatError> {
    let expected = curve.uncompressed_point_len();
    if bytes.len() != expected {
        return Err(KeyFormatError::PointLength {
            curve,
            expected,
            actual: bytes.len(),
        });
    }

    if bytes[0] != SEC1_UNCOMPRESSED_TAG {
        return Err(KeyFormatError::PointTag(bytes[0]));
    }

    Ok(bytes[1..].split_at(curve.coordinate_width()))
}

/// An elliptic-curve public key as curve identifier plus raw X/Y coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ec2PublicKey {
    curve: EcCurve,
    x: Vec<u8>,
    y: Vec<u8>,
}

impl Ec2PublicKey {
    pub fn new(curve: EcCurve, x: Vec<u8>, y: Vec<u8>) -> Result<Self, KeyFormatError> {
        let expected = curve.coordinate_width();
        if x.len() != expected || y.len() != expected {
            return Err(KeyFormatError::CoordinateLength {
                curve,
                expected,
                x: x.len(),
                y: y.len(),
            });
        }
        Ok(Self { curve, x, y })
    }

    pub fn from_uncompressed_point(curve: EcCurve, bytes: &[u8]) -> Result<Self, KeyFormatError> {
        let (x, y) = split_uncompressed_point(curve, bytes)?;
        Self::new(curve, x.to_vec(), y.to_vec())
    }

    pub fn curve(&self) -> EcCurve {
        self.curve
    }

    pub fn x(&self) -> &[u8] {
        &self.x
    }

    pub fn y(&self) -> &[u8] {
        &self.y
    }

    pub fn to_uncompressed_point(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.curve.uncompressed_point_len());
        out.push(SEC1_UNCOMPRESSED_TAG);
        out.extend_from_slice(&self.x);
        out.extend_from_slice(&self.y);
        out
    }

    /// Export the public half of a P-256 verifying key.
    pub fn from_p256_verifying_key(vk: &p256::ecdsa::VerifyingKey) -> Result<Self, KeyFormatError> {
        let point = vk.to_encoded_point(false);
        Self::from_uncompressed_point(EcCurve::P256, point.as_bytes())
    }

    /// Decode into a P-256 ECDSA verifying key, checking the point is on the curve.
    pub(crate) fn p256_verifying_key(&self) -> Result<p256::ecdsa::VerifyingKey, KeyFormatError> {
        if self.curve != EcCurve::P256 {
            return Err(KeyFormatError::NotOnCurve(EcCurve::P256));
        }
        p256::ecdsa::VerifyingKey::from_sec1_bytes(&self.to_uncompressed_point())
            .map_err(|_| KeyFormatError::NotOnCurve(self.curve))
    }
}
