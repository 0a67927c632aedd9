//! Transaction model and artifact result types
//!
//! The transaction shape mirrors the esplora/mempool REST representation
//! (`txid`, `locktime`, `vin`, `vout`, `status`), so responses from those
//! data sources and JSON fixtures deserialise directly. Transactions are
//! immutable inputs to the decoders; nothing here is persisted or shared.

use serde::{Deserialize, Serialize};

/// Script type string that marks an output as bare multisig (P2MS)
pub const MULTISIG_SCRIPT_TYPE: &str = "multisig";

/// A Bitcoin transaction as delivered by the blockchain data source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID (hex, display order)
    pub txid: String,
    /// nLockTime field
    pub locktime: u32,
    /// Transaction inputs, in order
    pub vin: Vec<TxInput>,
    /// Transaction outputs, in order
    pub vout: Vec<TxOutput>,
    /// Confirmation status
    pub status: TxStatus,
}

/// A transaction input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxInput {
    /// Transaction ID of the spent output (hex)
    pub txid: String,
    /// Witness stack items (hex), absent for non-segwit inputs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub witness: Option<Vec<String>>,
}

/// A transaction output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxOutput {
    /// Output script (hex)
    pub scriptpubkey: String,
    /// Script classification as reported by the data source
    /// (e.g. "p2pkh", "multisig", "v0_p2wpkh")
    pub scriptpubkey_type: String,
}

impl TxOutput {
    /// Whether this output is bare multisig and thus eligible to carry
    /// SRC-20 ciphertext fragments
    pub fn is_multisig(&self) -> bool {
        self.scriptpubkey_type == MULTISIG_SCRIPT_TYPE
    }
}

/// Confirmation status of a transaction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TxStatus {
    /// Hash of the containing block, `None` while unconfirmed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<String>,
}

/// A decoded digital artifact
///
/// Tagged union over the three supported artifact kinds. Each variant is
/// authoritative over its own shape; the orchestrator never inspects or
/// cross-validates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DigitalArtifact {
    /// Envelope-based inscription recovered from witness data
    Inscription(Inscription),
    /// SRC-20 token data recovered from multisig pubkeys
    Src20(Src20Token),
    /// CAT-21 mint identified by its locktime marker
    Cat21(Cat21Mint),
}

/// An SRC-20 token payload
///
/// Carries only the decoded UTF-8 text that followed the `stamp:` marker.
/// Parsing the text into token JSON is a downstream concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Src20Token {
    /// Decoded token text, marker stripped
    pub content: String,
}

/// An inscription, as produced by the external inscription decoder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inscription {
    /// MIME type declared in the envelope
    pub content_type: String,
    /// Raw inscription body
    pub content: Vec<u8>,
}

/// A CAT-21 mint, as produced by the external CAT-21 decoder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cat21Mint {
    /// Transaction ID of the minting transaction (hex)
    pub txid: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_multisig_classification() {
        let p2ms = TxOutput {
            scriptpubkey: "5121...53ae".to_string(),
            scriptpubkey_type: "multisig".to_string(),
        };
        let p2pkh = TxOutput {
            scriptpubkey: "76a914...88ac".to_string(),
            scriptpubkey_type: "p2pkh".to_string(),
        };

        assert!(p2ms.is_multisig());
        assert!(!p2pkh.is_multisig());
    }

    #[test]
    fn transaction_deserialises_from_esplora_shape() {
        let json = r#"{
            "txid": "50aeb77245a9483a5b077e4e7506c331dc2f628c22046e7d2b4c6ad6c6236ae1",
            "locktime": 0,
            "vin": [{"txid": "e2e97adc62eefbbcf05b5024b0c9eff49fe27764051d2c524025873e6a6971c0"}],
            "vout": [{"scriptpubkey": "51ae", "scriptpubkey_type": "multisig"}],
            "status": {"block_hash": "00000000000000000002c0cc73626b56fb3ee1ce605b0ce125cc4fb58775a0a9"}
        }"#;

        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.vin.len(), 1);
        assert_eq!(tx.vin[0].witness, None);
        assert!(tx.vout[0].is_multisig());
        assert!(tx.status.block_hash.is_some());
    }

    #[test]
    fn unconfirmed_status_deserialises_without_block_hash() {
        let status: TxStatus = serde_json::from_str("{}").unwrap();
        assert_eq!(status.block_hash, None);
    }
}
