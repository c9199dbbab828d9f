// Copyright 2025 Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

use proof_codec::{MerkleNode, Proof};
use sha2::{Digest, Sha256};

use crate::{data_item::data_item_leaf_hash, errors::VerifyError, types::BundleSummary};

/// Folds a leaf hash through its audit path, reproducing the merkle root of
/// the bundle the leaf was archived in.
///
/// One SHA-256 per path entry: `H(sibling || running)` when the sibling sits
/// on the left, `H(running || sibling)` otherwise.
pub fn compute_merkle_root(leaf_hash: &[u8; 32], audit_path: &[MerkleNode]) -> [u8; 32] {
    let mut running = *leaf_hash;
    for node in audit_path {
        let mut hasher = Sha256::new();
        if node.left {
            hasher.update(node.hash);
            hasher.update(running);
        } else {
            hasher.update(running);
            hasher.update(node.hash);
        }
        running = hasher.finalize().into();
    }
    running
}

/// Checks that a raw data item is exactly the one committed in the bundle
/// summary stored on-chain.
///
/// A [`VerifyError::RootMismatch`] is an ordinary, expected outcome of
/// verifying tampered or stale data, not a fatal condition. The comparison
/// is over raw root bytes, so the case of the on-chain hex does not matter.
pub fn verify_data_item(
    raw_item: &[u8],
    proof: &Proof,
    summary: &BundleSummary,
) -> Result<(), VerifyError> {
    let leaf_hash = data_item_leaf_hash(raw_item, proof)?;
    let computed = compute_merkle_root(&leaf_hash, &proof.audit_path);

    let on_chain = hex::decode(&summary.merkle_root)?;
    if on_chain.as_slice() != computed.as_slice() {
        return Err(VerifyError::RootMismatch {
            on_chain: summary.merkle_root.to_lowercase(),
            computed: hex::encode(computed),
        });
    }

    Ok(())
}
