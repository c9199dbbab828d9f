// Copyright 2025 Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::error::DecodeError;

/// Supported proof layout versions.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[repr(u8)]
pub enum Version {
    /// Version 1, the only layout current gateways emit.
    V1 = 1,
}

impl TryFrom<u8> for Version {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Version::V1),
            other => Err(DecodeError::VersionUnsupported(other)),
        }
    }
}

/// The size of the leading version tag in bytes
const VERSION_SIZE: usize = 1;

/// The size of the pool id in bytes
const POOL_ID_SIZE: usize = 2;

/// The size of the bundle id in bytes
const BUNDLE_ID_SIZE: usize = 8;

/// The end of the fixed-width prefix, where the terminated strings begin
const STRINGS_OFFSET: usize = VERSION_SIZE + POOL_ID_SIZE + BUNDLE_ID_SIZE;

/// One left/right flag byte followed by a SHA-256 hash
const MERKLE_NODE_SIZE: usize = 1 + 32;

/// Fixed-width prefix plus one terminator for each of the three strings
const MIN_PROOF_SIZE: usize = STRINGS_OFFSET + 3;

/// One sibling hash on the path from a data item's leaf up to the bundle's
/// merkle root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MerkleNode {
    /// Whether the sibling is concatenated before the running hash.
    pub left: bool,
    /// The SHA-256 sibling hash.
    pub hash: [u8; 32],
}

/// A decoded data item inclusion proof.
///
/// Wire layout, big-endian:
/// - 1  byte:  version (must be 1)
/// - 2  bytes: pool id (uint16)
/// - 8  bytes: bundle id (uint64)
/// - chain id, NUL-terminated
/// - data item key, NUL-terminated
/// - data item value key, NUL-terminated
/// - audit path entries, 33 bytes each:
///   - 1  byte:  left (nonzero = true)
///   - 32 bytes: hash (SHA-256)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    /// The KYVE pool that archived the data item.
    pub pool_id: u16,
    /// The finalized bundle the data item was archived in.
    pub bundle_id: u64,
    /// Chain id of the KYVE network the pool lives on, e.g. `kyve-1`.
    pub chain_id: String,
    /// Key of the data item, used verbatim as the `key` of the canonical
    /// leaf preimage.
    pub data_item_key: String,
    /// Name of the member of the raw data item selected as the `value` of
    /// the canonical leaf preimage.
    pub data_item_value_key: String,
    /// Sibling hashes in root-ward order: the first entry pairs with the
    /// leaf, folding the last entry yields the root.
    pub audit_path: Vec<MerkleNode>,
}

/// Decodes the base64 proof string carried in the `x-kyve-proof` response
/// header.
pub fn decode_proof(encoded: &str) -> Result<Proof, DecodeError> {
    let raw = BASE64.decode(encoded)?;
    Proof::try_from(raw.as_slice())
}

impl TryFrom<&[u8]> for Proof {
    type Error = DecodeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() < MIN_PROOF_SIZE {
            return Err(DecodeError::TooShort {
                length: bytes.len(),
            });
        }

        Version::try_from(bytes[0])?;

        let pool_id = u16::from_be_bytes(bytes[VERSION_SIZE..VERSION_SIZE + POOL_ID_SIZE].try_into()?);
        let bundle_id =
            u64::from_be_bytes(bytes[VERSION_SIZE + POOL_ID_SIZE..STRINGS_OFFSET].try_into()?);

        let mut rest = &bytes[STRINGS_OFFSET..];
        let chain_id = read_terminated_string(&mut rest, "chainId")?;
        let data_item_key = read_terminated_string(&mut rest, "dataItemKey")?;
        let data_item_value_key = read_terminated_string(&mut rest, "dataItemValueKey")?;

        let audit_path = read_audit_path(rest)?;

        Ok(Self {
            pool_id,
            bundle_id,
            chain_id,
            data_item_key,
            data_item_value_key,
            audit_path,
        })
    }
}

/// Splits off the bytes up to the field's own NUL terminator.
///
/// The terminator is searched fresh for every field and only the single
/// terminator byte is consumed, so NUL bytes later in the proof are left
/// untouched.
fn read_terminated_string(buf: &mut &[u8], field: &'static str) -> Result<String, DecodeError> {
    let end = buf
        .iter()
        .position(|&b| b == 0)
        .ok_or(DecodeError::Truncated { field })?;
    let value = std::str::from_utf8(&buf[..end])?.to_owned();
    *buf = &buf[end + 1..];
    Ok(value)
}

fn read_audit_path(buf: &[u8]) -> Result<Vec<MerkleNode>, DecodeError> {
    let trailing = buf.len() % MERKLE_NODE_SIZE;
    if trailing != 0 {
        return Err(DecodeError::Malformed { trailing });
    }

    let mut audit_path = Vec::with_capacity(buf.len() / MERKLE_NODE_SIZE);
    for chunk in buf.chunks_exact(MERKLE_NODE_SIZE) {
        let mut hash = [0u8; 32];
        hash.copy_from_slice(&chunk[1..]);
        audit_path.push(MerkleNode {
            left: chunk[0] != 0,
            hash,
        });
    }

    Ok(audit_path)
}
