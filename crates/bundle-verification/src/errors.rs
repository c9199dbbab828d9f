// Copyright 2025 Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Errors verifying a data item against the on-chain bundle summary.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// On-chain merkle root is not valid hex.
    #[error("on-chain merkle root is not valid hex: {0}")]
    MerkleRootInvalid(#[from] hex::FromHexError),

    /// Raw data item has no member with the name the proof selects.
    #[error("data item has no member named {field:?}")]
    MissingValueField {
        /// Member name taken from the proof's data item value key.
        field: String,
    },

    /// Locally computed merkle root disagrees with the on-chain root.
    ///
    /// The security-critical outcome: the gateway served bytes that are not
    /// the ones committed on-chain, or a stale proof for them.
    #[error("mismatch: local merkle root ({computed}) != chain merkle root ({on_chain})")]
    RootMismatch {
        /// Root reported by the chain, lowercase hex.
        on_chain: String,
        /// Root computed from the data item and proof, lowercase hex.
        computed: String,
    },

    /// Raw data item is not a well-formed JSON object.
    #[error("failed to parse data item: {0}")]
    Unparseable(#[from] serde_json::Error),
}
