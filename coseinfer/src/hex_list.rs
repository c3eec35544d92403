// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Comma-separated byte lists, as printed by the device shell: `0x4,0x18,0x4d`.

/// A token that is not a hex byte literal.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HexListError {
    #[error("token {index} is empty")]
    EmptyToken { index: usize },

    #[error("token {index} ({token:?}) is not a hexadecimal number")]
    InvalidToken { index: usize, token: String },

    #[error("token {index} ({token:?}) does not fit in a byte")]
    OutOfRange { index: usize, token: String },
}

/// Decode `0x..` tokens into bytes, one byte per token, preserving order.
///
/// Surrounding whitespace is ignored and the `0x`/`0X` prefix is optional.
pub fn decode_hex_list(list: &str) -> Result<Vec<u8>, HexListError> {
    list.split(',')
        .enumerate()
        .map(|(index, token)| decode_token(index, token))
        .collect()
}

fn decode_token(index: usize, token: &str) -> Result<u8, HexListError> {
    let trimmed = token.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() {
        return Err(HexListError::EmptyToken { index });
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(HexListError::InvalidToken {
            index,
            token: trimmed.to_string(),
        });
    }

    // Leading zeros do not change the value; keep at least one digit pair.
    let significant = digits.trim_start_matches('0');
    let padded = match significant.len() {
        0 => "00".to_string(),
        1 => format!("0{significant}"),
        2 => significant.to_string(),
        _ => {
            return Err(HexListError::OutOfRange {
                index,
                token: trimmed.to_string(),
            })
        }
    };

    let mut byte = [0u8; 1];
    hex::decode_to_slice(padded, &mut byte).map_err(|_| HexListError::InvalidToken {
        index,
        token: trimmed.to_string(),
    })?;
    Ok(byte[0])
}

/// Encode bytes in the device shell's format, accepted back by [`decode_hex_list`].
pub fn encode_hex_list(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:#x}"))
        .collect::<Vec<_>>()
        .join(",")
}
