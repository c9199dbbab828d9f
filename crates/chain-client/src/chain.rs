// Copyright 2025 Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use crate::error::ClientError;

/// KYVE networks with known public REST endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KyveChain {
    /// The `kyve-1` mainnet.
    Mainnet,
    /// The `kaon-1` testnet.
    Kaon,
    /// The `korellia-2` devnet.
    Korellia,
}

impl KyveChain {
    /// Canonical REST base url of the chain's public api.
    pub fn rest_endpoint(&self) -> &'static str {
        match self {
            Self::Mainnet => "https://api.kyve.network",
            Self::Kaon => "https://api.kaon.kyve.network",
            Self::Korellia => "https://api.korellia.kyve.network",
        }
    }

    /// The chain id, e.g. `kyve-1`.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Mainnet => "kyve-1",
            Self::Kaon => "kaon-1",
            Self::Korellia => "korellia-2",
        }
    }
}

impl fmt::Display for KyveChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for KyveChain {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kyve-1" => Ok(Self::Mainnet),
            "kaon-1" => Ok(Self::Kaon),
            "korellia-2" => Ok(Self::Korellia),
            other => Err(ClientError::UnknownChain(other.to_owned())),
        }
    }
}

/// Resolves the REST base url used to look up finalized bundles.
///
/// An explicit endpoint always wins, with any trailing slash trimmed.
/// Without one the chain id is looked up in the table of known networks; an
/// unknown id is a configuration error, since no safe default exists.
pub fn resolve_rest_endpoint(
    chain_id: &str,
    rest_endpoint: Option<&str>,
) -> Result<String, ClientError> {
    if let Some(endpoint) = rest_endpoint {
        return Ok(endpoint.trim_end_matches('/').to_owned());
    }

    let chain: KyveChain = chain_id.parse()?;
    Ok(chain.rest_endpoint().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_chain_ids_resolve() {
        assert_eq!(
            resolve_rest_endpoint("kyve-1", None).unwrap(),
            "https://api.kyve.network"
        );
        assert_eq!(
            resolve_rest_endpoint("kaon-1", None).unwrap(),
            "https://api.kaon.kyve.network"
        );
        assert_eq!(
            resolve_rest_endpoint("korellia-2", None).unwrap(),
            "https://api.korellia.kyve.network"
        );
    }

    #[test]
    fn test_override_wins_and_is_trimmed() {
        let endpoint = resolve_rest_endpoint("kyve-1", Some("http://localhost:1317/")).unwrap();
        assert_eq!(endpoint, "http://localhost:1317");
    }

    #[test]
    fn test_override_rescues_unknown_chain() {
        let endpoint = resolve_rest_endpoint("somechain-9", Some("http://localhost:1317")).unwrap();
        assert_eq!(endpoint, "http://localhost:1317");
    }

    #[test]
    fn test_unknown_chain_without_override_fails() {
        let result = resolve_rest_endpoint("somechain-9", None);
        assert!(matches!(
            result,
            Err(ClientError::UnknownChain(id)) if id == "somechain-9"
        ));
    }

    #[test]
    fn test_chain_id_round_trip() {
        for chain in [KyveChain::Mainnet, KyveChain::Kaon, KyveChain::Korellia] {
            assert_eq!(chain.id().parse::<KyveChain>().unwrap(), chain);
        }
    }
}
