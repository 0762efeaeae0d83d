//! Codec for the two scalar wire encodings used by JSON-RPC.
//!
//! - **Quantity**: `0x`-prefixed hex, minimal digits, zero is `"0x0"`.
//!   Decoded into [`U256`] so gas, value and difficulty never truncate.
//! - **Bytes**: `0x`-prefixed hex with an even digit count, optionally of a
//!   fixed width (address 20, hash 32, bloom 256, header nonce 8).
//!
//! Decoding takes the wire field name so errors point at the offending field.

use alloy::primitives::{hex, Address, Bloom, Bytes, FixedBytes, B256, B64, U256};

use crate::error::{ConvertError, Result};

/// Decodes a quantity.
///
/// Accepts `0x`/`0X` hex (leading zeros tolerated) or an unprefixed decimal
/// string, which some sources emit. Empty input, a bare `0x`, stray
/// characters and values wider than 256 bits are rejected.
pub fn decode_quantity(field: &'static str, raw: &str) -> Result<U256> {
    let (digits, radix) = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex_digits) => (hex_digits, 16),
        None => (raw, 10),
    };

    let valid = !digits.is_empty()
        && digits.bytes().all(|b| match radix {
            16 => b.is_ascii_hexdigit(),
            _ => b.is_ascii_digit(),
        });
    if !valid {
        return Err(ConvertError::quantity(field, raw));
    }

    U256::from_str_radix(digits, radix).map_err(|_| ConvertError::quantity(field, raw))
}

/// Decodes a quantity that may be absent. Absence stays `None`, never zero.
pub fn decode_optional_quantity(field: &'static str, raw: Option<&str>) -> Result<Option<U256>> {
    raw.map(|value| decode_quantity(field, value)).transpose()
}

/// Encodes a quantity as minimal `0x`-prefixed hex.
pub fn encode_quantity(value: U256) -> String {
    let digits = hex::encode(value.to_be_bytes::<32>());
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0x0".to_string()
    } else {
        format!("0x{trimmed}")
    }
}

/// Decodes a variable-length byte string.
pub fn decode_bytes(field: &'static str, raw: &str) -> Result<Bytes> {
    hex::decode(raw)
        .map(Bytes::from)
        .map_err(|e| ConvertError::bytes(field, e.to_string()))
}

/// Decodes a byte string that must be exactly `N` bytes long.
pub fn decode_fixed<const N: usize>(field: &'static str, raw: &str) -> Result<FixedBytes<N>> {
    let bytes = decode_bytes(field, raw)?;
    if bytes.len() != N {
        return Err(ConvertError::bytes(
            field,
            format!("expected {N} bytes, got {}", bytes.len()),
        ));
    }
    Ok(FixedBytes::<N>::from_slice(&bytes))
}

pub fn decode_address(field: &'static str, raw: &str) -> Result<Address> {
    decode_fixed::<20>(field, raw).map(Address::from)
}

pub fn decode_hash(field: &'static str, raw: &str) -> Result<B256> {
    decode_fixed::<32>(field, raw)
}

pub fn decode_optional_hash(field: &'static str, raw: Option<&str>) -> Result<Option<B256>> {
    raw.map(|value| decode_hash(field, value)).transpose()
}

pub fn decode_bloom(field: &'static str, raw: &str) -> Result<Bloom> {
    decode_fixed::<256>(field, raw).map(Bloom::from)
}

pub fn decode_nonce(field: &'static str, raw: &str) -> Result<B64> {
    decode_fixed::<8>(field, raw)
}

/// Decodes an address that a source may have shortened, left-padding it to
/// 20 bytes. Anything longer than 20 bytes is an error, never truncated.
pub fn decode_padded_address(field: &'static str, raw: &str) -> Result<Address> {
    let bytes = decode_bytes(field, raw)?;
    if bytes.len() > 20 {
        return Err(ConvertError::bytes(
            field,
            format!("address longer than 20 bytes ({})", bytes.len()),
        ));
    }
    Ok(Address::from(FixedBytes::<20>::left_padding_from(&bytes)))
}

/// Encodes bytes as lower-case `0x`-prefixed hex.
pub fn encode_bytes(bytes: impl AsRef<[u8]>) -> String {
    hex::encode_prefixed(bytes)
}
