//! Digital artifact decoding and orchestration
//!
//! Three independent decoders consume the same transaction shape: the
//! inscription decoder (witness envelopes, zero or more results), the SRC-20
//! decoder (multisig pubkeys, zero or one) and the CAT-21 decoder (locktime
//! marker, zero or one). Inscription and CAT-21 decoding live outside this
//! crate and plug in through the traits below; SRC-20 decoding is
//! implemented here in [`src20`].
//!
//! The merge rule is fixed and order-significant:
//! `[cat21?, ...inscriptions, src20?]`. Decoders are authoritative over
//! their own artifact kind - no deduplication, no cross-validation, and a
//! failing decoder simply contributes nothing.

use crate::types::{Cat21Mint, DigitalArtifact, Inscription, Transaction};

pub mod src20;

pub use src20::decode_src20_transaction;

/// External decoder for envelope-based inscriptions
///
/// Returns all inscriptions found in the transaction, preserving the
/// decoder's own ordering. An empty vec means none were found.
pub trait InscriptionDecoder {
    fn decode(&self, transaction: &Transaction) -> Vec<Inscription>;
}

/// External decoder for CAT-21 mints
pub trait Cat21Decoder {
    fn decode(&self, transaction: &Transaction) -> Option<Cat21Mint>;
}

impl<F> InscriptionDecoder for F
where
    F: Fn(&Transaction) -> Vec<Inscription>,
{
    fn decode(&self, transaction: &Transaction) -> Vec<Inscription> {
        self(transaction)
    }
}

impl<F> Cat21Decoder for F
where
    F: Fn(&Transaction) -> Option<Cat21Mint>,
{
    fn decode(&self, transaction: &Transaction) -> Option<Cat21Mint> {
        self(transaction)
    }
}

/// Unified parser over all supported digital artifact kinds
///
/// Holds the two external decoders; the SRC-20 decoder is built in.
pub struct DigitalArtifactParser<I, C> {
    inscriptions: I,
    cat21: C,
}

impl<I, C> DigitalArtifactParser<I, C>
where
    I: InscriptionDecoder,
    C: Cat21Decoder,
{
    pub fn new(inscriptions: I, cat21: C) -> Self {
        Self {
            inscriptions,
            cat21,
        }
    }

    /// Parse a transaction and merge all decoded artifacts
    ///
    /// Final order is `[cat21?, ...inscriptions, src20?]` regardless of the
    /// order the decoders run in.
    pub fn parse(&self, transaction: &Transaction) -> Vec<DigitalArtifact> {
        let mut artifacts: Vec<DigitalArtifact> = self
            .inscriptions
            .decode(transaction)
            .into_iter()
            .map(DigitalArtifact::Inscription)
            .collect();

        if let Some(token) = src20::decode_src20_transaction(transaction) {
            artifacts.push(DigitalArtifact::Src20(token));
        }

        // Cats come first
        if let Some(mint) = self.cat21.decode(transaction) {
            artifacts.insert(0, DigitalArtifact::Cat21(mint));
        }

        artifacts
    }
}
