// Copyright 2025 Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Errors talking to the gateway or the chain REST endpoint.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Response body is not the expected JSON envelope.
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// Non-200 response status.
    #[error("got status code {code} != 200 from {url}")]
    Status {
        /// The status code the server answered with.
        code: u16,
        /// The url that was fetched.
        url: String,
    },

    /// Request construction or transport failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Chain id with no known REST endpoint, and no override given.
    #[error("unknown chain id {0:?} and no rest endpoint given")]
    UnknownChain(String),
}
