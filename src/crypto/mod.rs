//! Cryptographic primitives for Bitcoin data-carrying protocols
//!
//! Currently only the ARC4 keystream cipher, which SRC-20 (like the wider
//! Bitcoin Stamps and Counterparty families) uses to obfuscate payloads
//! embedded in P2MS outputs.

pub mod arc4;
