//! Error types shared across the codec and script-parsing layers
//!
//! Decoder boundaries intentionally do NOT expose these: a transaction that
//! fails to decode is a normal outcome and surfaces as "no artifact". The
//! typed errors below exist for the layers underneath, where callers other
//! than the decoders want to know what went wrong.

use thiserror::Error;

/// Errors from the byte/text conversion primitives
#[derive(Error, Debug)]
pub enum ConversionError {
    /// Empty string where a hex value was required
    #[error("Input string is empty. Hex string expected.")]
    EmptyInput,

    /// Malformed hex input (odd length or non-hex digits)
    #[error("Invalid hex string: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Bytes that are not valid UTF-8
    #[error("Invalid UTF-8 payload: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Malformed base64 input
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// A character outside U+0000..U+00FF in single-byte-per-character text
    #[error("Character U+{0:04X} cannot be represented as a single byte")]
    NonSingleByteChar(u32),
}

/// Errors from multisig script parsing
#[derive(Error, Debug)]
pub enum ScriptError {
    /// Script hex failed to decode
    #[error("Failed to decode script hex: {0}")]
    InvalidScriptHex(hex::FromHexError),

    /// A push-data element runs past the end of the script
    #[error("Push data extends past end of script at offset {offset}")]
    TruncatedPush { offset: usize },

    /// The script carries fewer embedded pubkeys than the protocol needs
    #[error("Multisig script contains {found} pubkeys, at least 2 required")]
    InsufficientPubkeys { found: usize },
}
