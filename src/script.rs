//! Multisig output script parsing
//!
//! Bare multisig (P2MS) scripts have the shape
//! `OP_M <pubkey1> ... <pubkeyN> OP_N OP_CHECKMULTISIG`. Data-carrying
//! protocols abuse the pubkey slots, so extraction walks the pushed
//! elements positionally and keeps everything that is shaped like a
//! compressed pubkey, without validating curve points.

use crate::errors::ScriptError;

/// Push the next byte count of data (1-75 bytes encode their own length)
pub const OP_PUSHBYTES_MAX: u8 = 0x4b;
/// Push with 1-byte length prefix
pub const OP_PUSHDATA1: u8 = 0x4c;
/// Push with 2-byte little-endian length prefix
pub const OP_PUSHDATA2: u8 = 0x4d;
/// Push with 4-byte little-endian length prefix
pub const OP_PUSHDATA4: u8 = 0x4e;
/// Final opcode of a multisig script
pub const OP_CHECKMULTISIG: u8 = 0xae;

/// Length of a compressed secp256k1 pubkey in bytes
pub const COMPRESSED_PUBKEY_LEN: usize = 33;

/// Extract embedded compressed pubkeys from a multisig script
///
/// Walks the script's push-data elements in order and collects every pushed
/// element that is exactly 33 bytes long, as lowercase hex. Non-push opcodes
/// (OP_M, OP_N, OP_CHECKMULTISIG) carry no data and are skipped; pushed
/// elements of other lengths (e.g. uncompressed pubkeys) are ignored.
///
/// Fails when the script hex is malformed, a push runs past the end of the
/// script, or fewer than 2 pubkeys are found - the SRC-20 decoder needs the
/// first two keys of every qualifying output.
pub fn extract_multisig_pubkeys(script_hex: &str) -> Result<Vec<String>, ScriptError> {
    let script = hex::decode(script_hex).map_err(ScriptError::InvalidScriptHex)?;

    let mut pubkeys = Vec::new();
    let mut pos = 0;

    while pos < script.len() {
        let opcode = script[pos];
        pos += 1;

        let push_len = match opcode {
            len @ 0x01..=OP_PUSHBYTES_MAX => len as usize,
            OP_PUSHDATA1 => {
                let len = *script
                    .get(pos)
                    .ok_or(ScriptError::TruncatedPush { offset: pos })?;
                pos += 1;
                len as usize
            }
            OP_PUSHDATA2 => {
                let bytes = script
                    .get(pos..pos + 2)
                    .ok_or(ScriptError::TruncatedPush { offset: pos })?;
                pos += 2;
                u16::from_le_bytes([bytes[0], bytes[1]]) as usize
            }
            OP_PUSHDATA4 => {
                let bytes = script
                    .get(pos..pos + 4)
                    .ok_or(ScriptError::TruncatedPush { offset: pos })?;
                pos += 4;
                u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize
            }
            // OP_M / OP_N / OP_CHECKMULTISIG and friends push nothing
            _ => continue,
        };

        let data = script
            .get(pos..pos + push_len)
            .ok_or(ScriptError::TruncatedPush { offset: pos })?;
        if push_len == COMPRESSED_PUBKEY_LEN {
            pubkeys.push(hex::encode(data));
        }
        pos += push_len;
    }

    if pubkeys.len() < 2 {
        return Err(ScriptError::InsufficientPubkeys {
            found: pubkeys.len(),
        });
    }

    Ok(pubkeys)
}
