//! Byte/text conversion primitives
//!
//! Every decoder in this crate moves data between four representations:
//! hex digit text, raw bytes, Unicode strings and single-byte-per-character
//! text (each `char` is a code point in 0..=255, Latin-1 style). The last
//! one exists because SRC-20 and inscription payloads travel through layers
//! that treat text as one byte per character, independent of UTF-8 semantics.
//!
//! All functions are pure and allocate their output; none touch global state.

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};

use crate::errors::ConversionError;

/// Decode a hex string into bytes
///
/// The string must be non-empty and contain an even number of hex digits.
/// An empty string is rejected with [`ConversionError::EmptyInput`] so that
/// "nothing was extracted" never silently becomes "zero bytes".
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, ConversionError> {
    if hex.is_empty() {
        return Err(ConversionError::EmptyInput);
    }
    Ok(hex::decode(hex)?)
}

/// Encode bytes as lowercase hex, two zero-padded digits per byte
///
/// The empty slice encodes to the empty string.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode UTF-8 bytes into a `String`
///
/// Strict decoding: invalid sequences are an error, never replaced. Handles
/// the full Unicode range, including 4-byte sequences for characters outside
/// the basic multilingual plane.
pub fn utf8_bytes_to_string(bytes: &[u8]) -> Result<String, ConversionError> {
    Ok(String::from_utf8(bytes.to_vec())?)
}

/// Encode a string as UTF-8 bytes
///
/// Inverse of [`utf8_bytes_to_string`] for all valid Unicode text.
pub fn string_to_utf8_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Map bytes to single-byte-per-character text
///
/// Each byte becomes the `char` with the same code point (0..=255). This is
/// NOT UTF-8 decoding: the byte 0xF0 becomes U+00F0 'ð', not the start of a
/// multi-byte sequence.
pub fn bytes_to_single_byte_chars(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Map single-byte-per-character text back to bytes
///
/// Inverse of [`bytes_to_single_byte_chars`]. Any character above U+00FF
/// cannot come from that mapping and is rejected.
pub fn single_byte_chars_to_bytes(text: &str) -> Result<Vec<u8>, ConversionError> {
    text.chars()
        .map(|c| {
            u8::try_from(c as u32).map_err(|_| ConversionError::NonSingleByteChar(c as u32))
        })
        .collect()
}

/// Base64-encode single-byte-per-character text (standard alphabet, padded)
pub fn single_byte_chars_to_base64(text: &str) -> Result<String, ConversionError> {
    let bytes = single_byte_chars_to_bytes(text)?;
    Ok(BASE64_STANDARD.encode(bytes))
}

/// Base64-decode into single-byte-per-character text
///
/// Inverse of [`single_byte_chars_to_base64`].
pub fn base64_to_single_byte_chars(base64: &str) -> Result<String, ConversionError> {
    let bytes = BASE64_STANDARD.decode(base64)?;
    Ok(bytes_to_single_byte_chars(&bytes))
}
