//! Shared helpers for integration tests

// Each integration test binary compiles its own copy of this module and
// none of them uses every helper.
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use digital_artifacts::types::Transaction;

/// Route decoder debug logs to the test output, honouring `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// SRC-20 transfer fixture: two multisig outputs carrying an ARC4-encrypted
/// `stamp:` payload, keyed by the (unreversed) first input txid
pub const SRC20_TRANSFER_TX: &str = "tests/test_data/src20_transfer_tx.json";

/// SRC-20-shaped fixture whose decrypted payload is a valid length-prefixed
/// string without the `stamp:` marker
pub const SRC20_NO_MARKER_TX: &str = "tests/test_data/src20_no_marker_tx.json";

/// Token text the transfer fixture decodes to
pub const TRANSFER_TOKEN_JSON: &str =
    r#"{"p":"src-20","op":"transfer","tick":"STEVE","amt":"100000000"}"#;

/// Load a transaction fixture from `tests/test_data/`
pub fn load_transaction(path: &str) -> Transaction {
    init_tracing();
    let raw = fs::read_to_string(Path::new(path))
        .unwrap_or_else(|err| panic!("failed to read fixture {path}: {err}"));
    serde_json::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse fixture {path}: {err}"))
}
