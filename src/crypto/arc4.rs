//! ARC4 keystream cipher, wrapped around the `rc4` crate
//!
//! ARC4 keys in the SRC-20 transport are always raw 32-byte transaction IDs,
//! so the wrapper pins the key length instead of being generic over it. The
//! cipher is symmetric: applying the keystream twice with the same key
//! recovers the input, and output length always equals input length. No
//! padding, no IV.

use rc4::{consts::U32, Key, KeyInit, Rc4, StreamCipher};
use thiserror::Error;

use crate::conversions;
use crate::errors::ConversionError;

/// Required ARC4 key length: a raw transaction ID
pub const KEY_LEN: usize = 32;

/// Errors from the ARC4 layer
#[derive(Error, Debug)]
pub enum CipherError {
    /// Key is not a raw 32-byte transaction ID
    #[error("ARC4 key must be {KEY_LEN} bytes, got {0}")]
    KeyLength(usize),

    /// Key hex string failed to decode
    #[error("ARC4 key is not valid hex: {0}")]
    KeyHex(#[from] ConversionError),
}

/// Apply the ARC4 keystream to `data` with a 32-byte key
///
/// Encryption and decryption are the same operation. Empty input yields
/// empty output.
pub fn decrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError> {
    if key.len() != KEY_LEN {
        return Err(CipherError::KeyLength(key.len()));
    }

    let mut cipher = Rc4::new(Key::<U32>::from_slice(key));
    let mut result = data.to_vec();
    cipher.apply_keystream(&mut result);
    Ok(result)
}

/// Derive the ARC4 key from an input's transaction ID
///
/// The key is the raw byte sequence of the txid hex exactly as given. It
/// must NOT be reversed into internal byte order: SRC-20 keys on the
/// display-order txid, unlike most txid handling in the Bitcoin ecosystem.
pub fn key_from_txid(txid_hex: &str) -> Result<Vec<u8>, CipherError> {
    let key = conversions::hex_to_bytes(txid_hex)?;
    if key.len() != KEY_LEN {
        return Err(CipherError::KeyLength(key.len()));
    }
    Ok(key)
}
