// Copyright 2025 Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use proof_codec::Proof;
use serde::Serialize;
use serde_json::value::RawValue;
use sha2::{Digest, Sha256};

use crate::errors::VerifyError;

/// The exact preimage of a data item's merkle leaf.
///
/// Field order matters: the protocol hashed a serialization with `key`
/// first, so this struct must serialize in the same order.
#[derive(Serialize)]
struct CanonicalDataItem<'a> {
    key: &'a str,
    value: &'a RawValue,
}

/// Rebuilds the canonical leaf preimage for a raw data item and hashes it.
///
/// `proof.data_item_key` becomes the literal `key` value. The member of the
/// raw item named by `proof.data_item_value_key` becomes `value`, with its
/// bytes passed through untouched so the serialization stays byte-identical
/// to what was hashed into the on-chain leaf.
pub fn data_item_leaf_hash(raw_item: &[u8], proof: &Proof) -> Result<[u8; 32], VerifyError> {
    let members: HashMap<String, &RawValue> = serde_json::from_slice(raw_item)?;
    let value = members
        .get(proof.data_item_value_key.as_str())
        .ok_or_else(|| VerifyError::MissingValueField {
            field: proof.data_item_value_key.clone(),
        })?;

    let canonical = serde_json::to_vec(&CanonicalDataItem {
        key: &proof.data_item_key,
        value,
    })?;

    Ok(Sha256::digest(&canonical).into())
}
