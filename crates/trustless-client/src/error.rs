// Copyright 2025 Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

use bundle_verification::VerifyError;
use chain_client::{ClientError, PROOF_HEADER};
use proof_codec::DecodeError;
use thiserror::Error;

/// Any failure of the trustless get pipeline.
///
/// Each stage surfaces its own typed error so callers can branch on the
/// kind instead of matching message text.
#[derive(Debug, Error)]
pub enum TrustlessClientError {
    /// Gateway or chain REST request failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The inclusion proof could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Gateway response carried no inclusion proof header.
    #[error("response is missing the {} header", PROOF_HEADER)]
    ProofHeaderMissing,

    /// The data item failed verification against the on-chain root.
    #[error(transparent)]
    Verify(#[from] VerifyError),
}
