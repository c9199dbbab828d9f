// Copyright 2025 Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

use bundle_verification::BundleSummary;
use serde::Deserialize;
use tracing::debug;

use crate::{error::ClientError, fetch::get_from_url_with_backoff};

/// A finalized bundle as stored on the KYVE chain.
///
/// Next to the storage metadata needed to retrieve the archived data it
/// carries `bundle_summary`, a JSON-encoded string whose merkle root the
/// verifier compares the locally computed root against.
#[derive(Debug, Clone, Deserialize)]
pub struct FinalizedBundle {
    /// JSON-encoded [`BundleSummary`].
    #[serde(default)]
    pub bundle_summary: String,
    /// Compression the bundle was archived with.
    #[serde(default)]
    pub compression_id: String,
    /// Hash of the archived bundle data.
    #[serde(default)]
    pub data_hash: String,
    /// Key of the first data item in the bundle.
    #[serde(default)]
    pub from_key: String,
    /// Bundle id.
    #[serde(default)]
    pub id: String,
    /// Id of the bundle on the storage provider.
    #[serde(default)]
    pub storage_id: String,
    /// Storage provider the bundle was archived on.
    #[serde(default)]
    pub storage_provider_id: String,
    /// Key of the last data item in the bundle.
    #[serde(default)]
    pub to_key: String,
}

impl FinalizedBundle {
    /// Parses the double-encoded `bundle_summary` string.
    pub fn summary(&self) -> Result<BundleSummary, ClientError> {
        Ok(serde_json::from_str(&self.bundle_summary)?)
    }
}

/// Fetches the finalized bundle `bundle_id` of pool `pool_id` from the
/// chain REST endpoint, with backoff.
pub fn get_finalized_bundle(
    rest_endpoint: &str,
    pool_id: u16,
    bundle_id: u64,
) -> Result<FinalizedBundle, ClientError> {
    let url = format!("{rest_endpoint}/kyve/v1/bundles/{pool_id}/{bundle_id}");
    debug!(%url, "fetching finalized bundle");

    let response = get_from_url_with_backoff(&url)?;
    Ok(serde_json::from_slice(&response.body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_summary_is_double_encoded() {
        let body = r#"{
            "bundle_summary": "{\"merkle_root\":\"11bd936f06e2eff1d07b7153a034858125a9ee24d4b5407a93e96126ea7d0a93\",\"from_slot\":800000,\"to_slot\":800005}",
            "compression_id": "1",
            "data_hash": "ab12",
            "id": "42",
            "storage_id": "st-1"
        }"#;

        let bundle: FinalizedBundle =
            serde_json::from_str(body).expect("Failed to parse finalized bundle");
        assert_eq!(bundle.id, "42");

        let summary = bundle.summary().expect("Failed to parse bundle summary");
        assert_eq!(
            summary.merkle_root,
            "11bd936f06e2eff1d07b7153a034858125a9ee24d4b5407a93e96126ea7d0a93"
        );
        assert_eq!(summary.from_slot, 800000);
        assert_eq!(summary.to_slot, 800005);
    }

    #[test]
    fn test_missing_envelope_fields_default() {
        let bundle: FinalizedBundle =
            serde_json::from_str(r#"{"id":"7"}"#).expect("Failed to parse finalized bundle");
        assert_eq!(bundle.id, "7");
        assert!(bundle.bundle_summary.is_empty());

        // an empty summary string is a serialization error, not a default
        assert!(matches!(bundle.summary(), Err(ClientError::Json(_))));
    }
}
