//! Bitcoin Digital Artifact Decoder
//!
//! Extracts protocol-specific digital artifacts from Bitcoin transactions:
//!
//! - `conversions`: byte/text codec primitives (hex, UTF-8, single-byte text, base64)
//! - `script`: bare-multisig (P2MS) script parsing and pubkey extraction
//! - `crypto`: ARC4 keystream cipher used by the SRC-20 transport
//! - `decoder`: the SRC-20 steganographic decoder plus the orchestrator that
//!   merges SRC-20 results with externally decoded inscriptions and CAT-21 mints
//! - `types`: the transaction model and the `DigitalArtifact` result type
//!
//! All decoding is pure and synchronous: a transaction goes in, zero or more
//! artifacts come out, and nothing is fetched, cached or persisted. Callers
//! wanting throughput decode distinct transactions from multiple threads.

pub mod conversions;
pub mod crypto;
pub mod decoder;
pub mod errors;
pub mod script;
pub mod types;
