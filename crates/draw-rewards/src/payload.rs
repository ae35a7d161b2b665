//! Relay payload carried from the randomness side to the draw-closing side.
//!
//! Wire format is bincode with the standard config:
//! `sequence_id | random_number (32 bytes) | rng_completed_at | results`.
//! Decoding rejects trailing bytes and re-checks every reward fraction
//! against the `[0, 1]` bound, since bincode does not.

use bincode::config;
use draw_core::error::CodecError;
use draw_core::types::AuctionResult;

use crate::rng_auction::RngCompletion;

#[derive(Debug, Clone, PartialEq, Eq, bincode::Encode, bincode::Decode)]
pub struct RelayPayload {
    pub sequence_id: u64,
    pub random_number: [u8; 32],
    /// Unix time the randomness request completed.
    pub rng_completed_at: u64,
    /// Results of every phase before the relay, in phase order.
    pub results: Vec<AuctionResult>,
}

impl RelayPayload {
    /// Payload for a completed randomness request and its random value.
    pub fn from_completion(completion: &RngCompletion, random_number: [u8; 32]) -> Self {
        Self {
            sequence_id: completion.sequence_id,
            random_number,
            rng_completed_at: completion.completed_at,
            results: vec![completion.result],
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        bincode::encode_to_vec(self, config::standard())
            .map_err(|e| CodecError::Encode(e.to_string()))
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        let (payload, read): (Self, usize) = bincode::decode_from_slice(bytes, config::standard())
            .map_err(|e| CodecError::Decode(e.to_string()))?;
        if read != bytes.len() {
            return Err(CodecError::TrailingBytes(bytes.len() - read));
        }
        for (index, result) in payload.results.iter().enumerate() {
            result
                .reward_fraction
                .validate()
                .map_err(|source| CodecError::InvalidResult { index, source })?;
        }
        Ok(payload)
    }
}
