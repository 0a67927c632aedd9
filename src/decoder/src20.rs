//! SRC-20 steganographic token decoder
//!
//! SRC-20 transactions smuggle token metadata through the pubkey slots of
//! bare-multisig outputs. The first two 33-byte "pubkeys" of every multisig
//! output each carry 31 ciphertext bytes between a fake sign byte and a
//! trailing nonce byte. Concatenated in output order, the fragments form an
//! ARC4 ciphertext keyed by the first input's txid. The decrypted plaintext
//! is a 2-byte big-endian length prefix, the `stamp:`-prefixed UTF-8
//! payload, and zero padding.
//!
//! Every step has an exact-bytes contract. Any deviation anywhere yields
//! "no artifact", never a partial result and never an error that escapes
//! the decoder boundary.

use thiserror::Error;
use tracing::debug;

use crate::conversions;
use crate::crypto::arc4::{self, CipherError};
use crate::errors::{ConversionError, ScriptError};
use crate::script;
use crate::types::{Src20Token, Transaction};

/// Marker that every SRC-20 payload must carry
pub const STAMP_MARKER: &str = "stamp:";

/// Hex digits of a pubkey covering bytes [1, 33): sign byte and nonce byte
/// stripped, 31 ciphertext bytes left
const FRAGMENT_HEX_RANGE: std::ops::Range<usize> = 2..64;

/// Internal failure causes, for diagnostics only
///
/// None of these escape [`decode_src20_transaction`]: a failed decode is the
/// normal outcome for the vast majority of transactions.
#[derive(Error, Debug)]
enum Src20DecodeError {
    /// Caller precondition violated: every transaction has at least one input
    #[error("transaction has no inputs")]
    MissingInput,

    #[error("no multisig outputs")]
    NoMultisigOutputs,

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error("decrypted data shorter than a length prefix")]
    MissingLengthPrefix,

    #[error("length prefix claims {expected} bytes, payload is shorter")]
    TruncatedPayload { expected: usize },

    #[error("payload does not carry the {STAMP_MARKER:?} marker")]
    MissingMarker,
}

/// Decode the SRC-20 token hidden in a transaction, if there is one
///
/// Best-effort by design: structural problems (no multisig outputs, too few
/// pubkeys, malformed hex, bad length prefix, invalid UTF-8, missing
/// marker) all come back as `None`. The internal cause is logged at debug
/// level for diagnostics but never changes observable behaviour.
pub fn decode_src20_transaction(transaction: &Transaction) -> Option<Src20Token> {
    match try_decode(transaction) {
        Ok(content) => Some(Src20Token { content }),
        Err(cause) => {
            debug!(txid = %transaction.txid, %cause, "no SRC-20 artifact");
            None
        }
    }
}

fn try_decode(transaction: &Transaction) -> Result<String, Src20DecodeError> {
    // The ARC4 key is the first input's txid taken as raw bytes in the
    // order given. It must NOT be reversed into internal byte order; SRC-20
    // keys on the display-order txid, and getting this wrong decrypts to
    // garbage rather than failing loudly. Pinned by the fixture tests.
    let first_input = transaction
        .vin
        .first()
        .ok_or(Src20DecodeError::MissingInput)?;
    let key = arc4::key_from_txid(&first_input.txid)?;

    // Fragments are ordered: first two pubkeys within each output, outputs
    // in transaction order. Only multisig-classified outputs participate.
    let mut ciphertext_hex = String::new();
    for output in transaction.vout.iter().filter(|vout| vout.is_multisig()) {
        let pubkeys = script::extract_multisig_pubkeys(&output.scriptpubkey)?;
        for pubkey in pubkeys.iter().take(2) {
            ciphertext_hex.push_str(&pubkey[FRAGMENT_HEX_RANGE]);
        }
    }
    if ciphertext_hex.is_empty() {
        return Err(Src20DecodeError::NoMultisigOutputs);
    }

    let ciphertext = conversions::hex_to_bytes(&ciphertext_hex)?;
    let decrypted = arc4::decrypt(&ciphertext, &key)?;
    let decrypted_hex = conversions::bytes_to_hex(&decrypted);

    // First 2 bytes: big-endian payload length. Everything after the
    // payload is zero padding, discarded without validation.
    let length_hex = decrypted_hex
        .get(0..4)
        .ok_or(Src20DecodeError::MissingLengthPrefix)?;
    let expected_length = usize::from_str_radix(length_hex, 16)
        .map_err(|_| Src20DecodeError::MissingLengthPrefix)?;
    let payload_hex = decrypted_hex
        .get(4..4 + expected_length * 2)
        .ok_or(Src20DecodeError::TruncatedPayload {
            expected: expected_length,
        })?;

    let payload = conversions::hex_to_bytes(payload_hex)?;
    let text = conversions::utf8_bytes_to_string(&payload)?;

    if !text.contains(STAMP_MARKER) {
        return Err(Src20DecodeError::MissingMarker);
    }
    Ok(text.replacen(STAMP_MARKER, "", 1))
}
