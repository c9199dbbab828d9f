// Copyright 2025 Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]

//! Client for fetching data items from a KYVE trustless api without
//! trusting the gateway that serves them.
//!
//! [`get`] is the single entry point. It fetches the item, decodes the
//! inclusion proof the gateway attaches, rebuilds the bundle's merkle root
//! locally and compares it against the root recorded on-chain:
//!
//! ```no_run
//! let value = trustless_client::get("http://localhost:4242/lava/block?height=1", None)?;
//! # Ok::<(), trustless_client::TrustlessClientError>(())
//! ```

mod error;

pub use error::TrustlessClientError;

pub use bundle_verification::*;
pub use chain_client::*;
pub use proof_codec::*;

use tracing::{debug, error, info};

/// Fetches the data item behind `url` and verifies it against the merkle
/// root of its finalized bundle on-chain.
///
/// 1. fetches the data item and its proof header from the url
/// 2. decodes the proof and resolves the chain REST endpoint
/// 3. fetches the finalized bundle the proof points at
/// 4. recomputes the merkle root locally and compares the two
///
/// A `chain_rest` endpoint overrides the lookup by the proof's chain id.
/// Returns the raw body bytes once they are proven to be exactly the bytes
/// committed on-chain; the first failing stage short-circuits the rest.
pub fn get(url: &str, chain_rest: Option<&str>) -> Result<Vec<u8>, TrustlessClientError> {
    let response = chain_client::get_from_url_with_backoff(url)?;
    let encoded_proof = response
        .proof
        .ok_or(TrustlessClientError::ProofHeaderMissing)?;

    let proof = proof_codec::decode_proof(&encoded_proof)?;
    debug!(
        pool_id = proof.pool_id,
        bundle_id = proof.bundle_id,
        chain_id = %proof.chain_id,
        path_len = proof.audit_path.len(),
        "decoded inclusion proof"
    );

    let rest_endpoint = chain_client::resolve_rest_endpoint(&proof.chain_id, chain_rest)?;
    let bundle =
        chain_client::get_finalized_bundle(&rest_endpoint, proof.pool_id, proof.bundle_id)?;
    let summary = bundle.summary()?;

    match bundle_verification::verify_data_item(&response.body, &proof, &summary) {
        Ok(()) => {
            info!(url, bundle_id = proof.bundle_id, "data item verified");
            Ok(response.body)
        }
        Err(err) => {
            if let VerifyError::RootMismatch { .. } = &err {
                error!("mismatch: local merkle root != chain merkle root");
            }
            Err(err.into())
        }
    }
}
