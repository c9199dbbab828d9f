// Copyright 2025 Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;

/// Summary of a finalized bundle as recorded on the KYVE chain.
///
/// Fetched fresh for every verification. The `merkle_root` is the
/// authoritative commitment the locally computed root must reproduce.
#[derive(Debug, Clone, Deserialize)]
pub struct BundleSummary {
    /// Hex-encoded SHA-256 merkle root over the bundle's data items.
    pub merkle_root: String,
    /// First slot covered by the bundle, for pools that archive slot ranges.
    #[serde(default)]
    pub from_slot: i64,
    /// Last slot covered by the bundle.
    #[serde(default)]
    pub to_slot: i64,
}
