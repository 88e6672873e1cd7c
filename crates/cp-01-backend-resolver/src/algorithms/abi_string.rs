//! # ABI Dynamic-String Decoding
//!
//! Decodes the return payload of a contract call as an ABI-encoded dynamic
//! string: a 32-byte offset word, a 32-byte big-endian length word, then the
//! payload bytes padded to a word boundary.
//!
//! Two termination rules apply at once and whichever is reached first wins:
//! the declared length bounds the payload, and a zero byte inside the
//! payload truncates it early. Registries that zero-pad short values into a
//! fixed-width slot depend on the NUL stop.

use crate::domain::AbiDecodeError;

/// Hex characters per 32-byte word.
const WORD: usize = 64;

/// Decode a hex call result (`0x`-prefixed or bare) as an ABI dynamic
/// string.
///
/// A payload too short to carry an offset or length word decodes to the
/// empty string rather than an error; the caller treats empty as "no domain
/// published". Declared lengths beyond the actual payload truncate to the
/// bytes that are present.
pub fn decode_abi_string(payload: &str) -> Result<String, AbiDecodeError> {
    let trimmed = payload.trim();
    if !trimmed.is_ascii() {
        return Err(AbiDecodeError::InvalidHex(
            "non-ascii call result".to_string(),
        ));
    }
    let bare = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    // Skip the offset word without interpreting it.
    let after_offset = bare.get(WORD..).unwrap_or("");

    let length_hex = &after_offset[..after_offset.len().min(WORD)];
    let declared_bytes = parse_length_word(length_hex)?;

    let data_start = after_offset.len().min(WORD);
    let data_hex = &after_offset[data_start..];
    let take = declared_bytes.saturating_mul(2).min(data_hex.len());
    // Whole bytes only; a dangling half-byte of padding is dropped.
    let data_hex = &data_hex[..take - take % 2];

    let bytes =
        hex::decode(data_hex).map_err(|e| AbiDecodeError::InvalidHex(e.to_string()))?;

    let mut out = String::with_capacity(bytes.len());
    for byte in bytes {
        if byte == 0 {
            break;
        }
        out.push(byte as char);
    }
    Ok(out)
}

/// Parse the big-endian length word. An empty word (truncated payload) reads
/// as zero; a value wider than the address space saturates, since the data
/// slice caps it anyway.
fn parse_length_word(length_hex: &str) -> Result<usize, AbiDecodeError> {
    let significant = length_hex.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(0);
    }
    if significant.len() > 16 {
        return Ok(usize::MAX);
    }
    usize::from_str_radix(significant, 16)
        .map_err(|e| AbiDecodeError::InvalidHex(e.to_string()))
}
